//! Projection of vendor wire records into the internal, vendor-neutral
//! vocabulary. Control-flow-only messages (acks, cancels, clear-session)
//! need no projection; everything consumers see goes through this module,
//! so raw vendor tags and enum codes never travel further up.
//!
//! Both supported device families share the first-generation wire records for
//! everything except [`Features`]; the shared projections live here and the
//! per-vendor modules carry what genuinely diverges.

use crate::error::{HwError, HwResult};
use crate::proto::messages_bitcoin as proto_bitcoin;
use crate::proto::messages_common as proto_common;

pub mod keepkey;
pub mod trezor;

use crate::Vendor;

/// Device description, normalized across vendors.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DeviceFeatures {
    /// Which family produced this record.
    pub family: Vendor,
    /// Manufacturer string as reported by the device.
    pub vendor: Option<String>,
    pub version: (u32, u32, u32),
    pub bootloader_mode: bool,
    pub device_id: Option<String>,
    pub pin_protection: bool,
    pub passphrase_protection: bool,
    pub language: Option<String>,
    pub label: Option<String>,
    /// Whether the device holds a seed, i.e. a wallet is present.
    pub initialized: bool,
    pub imported: bool,
    /// KeepKey policy switches; always empty for Trezor.
    pub policies: Vec<DevicePolicy>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DevicePolicy {
    pub name: String,
    pub enabled: bool,
}

/// BIP-32 public node returned for a `GetPublicKey` request.
#[derive(Clone, Debug, PartialEq)]
pub struct PublicKeyNode {
    pub depth: u32,
    pub fingerprint: u32,
    pub child_num: u32,
    pub chain_code: Vec<u8>,
    pub public_key: Vec<u8>,
    pub xpub: Option<String>,
}

/// Device-reported failure, with the vendor code mapped to [`FailureKind`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FailurePayload {
    pub kind: FailureKind,
    pub message: String,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    UnexpectedMessage,
    ButtonExpected,
    SyntaxError,
    ActionCancelled,
    PinExpected,
    PinCancelled,
    PinInvalid,
    InvalidSignature,
    Other,
    NotEnoughFunds,
    NotInitialized,
    FirmwareError,
    Unknown,
}

impl FailureKind {
    pub fn from_trezor(code: i32) -> FailureKind { FailureKind::from_v1_code(code) }

    pub fn from_keepkey(code: i32) -> FailureKind { FailureKind::from_v1_code(code) }

    fn from_v1_code(code: i32) -> FailureKind {
        use proto_common::failure::FailureType;

        match FailureType::from_i32(code) {
            Some(FailureType::FailureUnexpectedMessage) => FailureKind::UnexpectedMessage,
            Some(FailureType::FailureButtonExpected) => FailureKind::ButtonExpected,
            Some(FailureType::FailureSyntaxError) => FailureKind::SyntaxError,
            Some(FailureType::FailureActionCancelled) => FailureKind::ActionCancelled,
            Some(FailureType::FailurePinExpected) => FailureKind::PinExpected,
            Some(FailureType::FailurePinCancelled) => FailureKind::PinCancelled,
            Some(FailureType::FailurePinInvalid) => FailureKind::PinInvalid,
            Some(FailureType::FailureInvalidSignature) => FailureKind::InvalidSignature,
            Some(FailureType::FailureOther) => FailureKind::Other,
            Some(FailureType::FailureNotEnoughFunds) => FailureKind::NotEnoughFunds,
            Some(FailureType::FailureNotInitialized) => FailureKind::NotInitialized,
            Some(FailureType::FailureFirmwareError) => FailureKind::FirmwareError,
            None => FailureKind::Unknown,
        }
    }
}

/// Which PIN the device is asking for.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PinMatrixKind {
    Current,
    NewFirst,
    NewSecond,
    Unspecified,
}

impl PinMatrixKind {
    pub fn from_trezor(code: Option<i32>) -> PinMatrixKind { PinMatrixKind::from_v1_code(code) }

    pub fn from_keepkey(code: Option<i32>) -> PinMatrixKind { PinMatrixKind::from_v1_code(code) }

    fn from_v1_code(code: Option<i32>) -> PinMatrixKind {
        use proto_common::pin_matrix_request::PinMatrixRequestType;

        match code.and_then(PinMatrixRequestType::from_i32) {
            Some(PinMatrixRequestType::Current) => PinMatrixKind::Current,
            Some(PinMatrixRequestType::NewFirst) => PinMatrixKind::NewFirst,
            Some(PinMatrixRequestType::NewSecond) => PinMatrixKind::NewSecond,
            None => PinMatrixKind::Unspecified,
        }
    }
}

/// The screen behind a device button prompt.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonKind {
    Other,
    FeeOverThreshold,
    ConfirmOutput,
    ResetDevice,
    ConfirmWord,
    WipeDevice,
    ProtectCall,
    SignTx,
    FirmwareCheck,
    Address,
    PublicKey,
    Unknown,
}

impl ButtonKind {
    pub fn from_trezor(code: Option<i32>) -> ButtonKind { ButtonKind::from_v1_code(code) }

    pub fn from_keepkey(code: Option<i32>) -> ButtonKind { ButtonKind::from_v1_code(code) }

    fn from_v1_code(code: Option<i32>) -> ButtonKind {
        use proto_common::button_request::ButtonRequestType;

        match code.and_then(ButtonRequestType::from_i32) {
            Some(ButtonRequestType::ButtonRequestOther) => ButtonKind::Other,
            Some(ButtonRequestType::ButtonRequestFeeOverThreshold) => ButtonKind::FeeOverThreshold,
            Some(ButtonRequestType::ButtonRequestConfirmOutput) => ButtonKind::ConfirmOutput,
            Some(ButtonRequestType::ButtonRequestResetDevice) => ButtonKind::ResetDevice,
            Some(ButtonRequestType::ButtonRequestConfirmWord) => ButtonKind::ConfirmWord,
            Some(ButtonRequestType::ButtonRequestWipeDevice) => ButtonKind::WipeDevice,
            Some(ButtonRequestType::ButtonRequestProtectCall) => ButtonKind::ProtectCall,
            Some(ButtonRequestType::ButtonRequestSignTx) => ButtonKind::SignTx,
            Some(ButtonRequestType::ButtonRequestFirmwareCheck) => ButtonKind::FirmwareCheck,
            Some(ButtonRequestType::ButtonRequestAddress) => ButtonKind::Address,
            Some(ButtonRequestType::ButtonRequestPublicKey) => ButtonKind::PublicKey,
            None => ButtonKind::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ButtonPrompt {
    pub kind: ButtonKind,
    pub data: Option<String>,
}

/// A device-initiated transaction-signing probe.
#[derive(Clone, Debug, PartialEq)]
pub struct TxSignRequest {
    pub kind: TxRequestKind,
    pub request_index: Option<u32>,
    /// Present when the probe refers to an ancestor transaction.
    pub tx_hash: Option<Vec<u8>>,
    pub signature_index: Option<u32>,
    pub signature: Option<Vec<u8>>,
    pub serialized_tx: Option<Vec<u8>>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TxRequestKind {
    Input,
    Output,
    Meta,
    Finished,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MessageSignaturePayload {
    pub address: Option<String>,
    pub signature: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SignedIdentityPayload {
    pub address: Option<String>,
    pub public_key: Vec<u8>,
    pub signature: Vec<u8>,
}

pub(crate) fn failure(message: proto_common::Failure, vendor: Vendor) -> FailurePayload {
    let code = message.code.unwrap_or_default();
    let kind = match vendor {
        Vendor::Trezor => FailureKind::from_trezor(code),
        Vendor::KeepKey => FailureKind::from_keepkey(code),
    };
    FailurePayload {
        kind,
        message: message.message.unwrap_or_default(),
    }
}

pub(crate) fn pin_matrix_kind(message: &proto_common::PinMatrixRequest, vendor: Vendor) -> PinMatrixKind {
    match vendor {
        Vendor::Trezor => PinMatrixKind::from_trezor(message.r#type),
        Vendor::KeepKey => PinMatrixKind::from_keepkey(message.r#type),
    }
}

pub(crate) fn button_prompt(message: &proto_common::ButtonRequest, vendor: Vendor) -> ButtonPrompt {
    let kind = match vendor {
        Vendor::Trezor => ButtonKind::from_trezor(message.code),
        Vendor::KeepKey => ButtonKind::from_keepkey(message.code),
    };
    ButtonPrompt {
        kind,
        data: message.data.clone(),
    }
}

pub(crate) fn public_key(message: proto_bitcoin::PublicKey) -> PublicKeyNode {
    PublicKeyNode {
        depth: message.node.depth,
        fingerprint: message.node.fingerprint,
        child_num: message.node.child_num,
        chain_code: message.node.chain_code,
        public_key: message.node.public_key,
        xpub: message.xpub,
    }
}

pub(crate) fn tx_sign_request(message: proto_bitcoin::TxRequest) -> HwResult<TxSignRequest> {
    use proto_bitcoin::tx_request::RequestType;

    let kind = match message.request_type.and_then(RequestType::from_i32) {
        Some(RequestType::Txinput) => TxRequestKind::Input,
        Some(RequestType::Txoutput) => TxRequestKind::Output,
        Some(RequestType::Txmeta) => TxRequestKind::Meta,
        Some(RequestType::Txfinished) => TxRequestKind::Finished,
        None => {
            let error = format!("Received unexpected 'TxRequest::request_type': {:?}", message.request_type);
            return Err(HwError::ProtocolError(error));
        },
    };

    let (request_index, tx_hash) = match message.details {
        Some(details) => (details.request_index, details.tx_hash),
        None => (None, None),
    };
    let (signature_index, signature, serialized_tx) = match message.serialized {
        Some(serialized) => (serialized.signature_index, serialized.signature, serialized.serialized_tx),
        None => (None, None, None),
    };

    Ok(TxSignRequest {
        kind,
        request_index,
        tx_hash,
        signature_index,
        signature,
        serialized_tx,
    })
}

pub(crate) fn message_signature(message: proto_bitcoin::MessageSignature) -> MessageSignaturePayload {
    MessageSignaturePayload {
        address: message.address,
        signature: message.signature.unwrap_or_default(),
    }
}

pub(crate) fn signed_identity(message: proto_bitcoin::SignedIdentity) -> SignedIdentityPayload {
    SignedIdentityPayload {
        address: message.address,
        public_key: message.public_key.unwrap_or_default(),
        signature: message.signature.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::messages_bitcoin as proto_bitcoin;

    #[test]
    fn tx_request_projection_flattens_details_and_serialized() {
        let wire = proto_bitcoin::TxRequest {
            request_type: Some(proto_bitcoin::tx_request::RequestType::Txoutput as i32),
            details: Some(proto_bitcoin::TxRequestDetailsType {
                request_index: Some(1),
                tx_hash: Some(vec![0xcc; 32]),
            }),
            serialized: Some(proto_bitcoin::TxRequestSerializedType {
                signature_index: Some(0),
                signature: Some(vec![0x30]),
                serialized_tx: None,
            }),
        };
        let neutral = tx_sign_request(wire).unwrap();
        assert_eq!(neutral.kind, TxRequestKind::Output);
        assert_eq!(neutral.request_index, Some(1));
        assert_eq!(neutral.tx_hash.as_deref(), Some(&[0xcc; 32][..]));
        assert_eq!(neutral.signature_index, Some(0));
        assert_eq!(neutral.serialized_tx, None);
    }

    #[test]
    fn tx_request_without_type_is_a_protocol_error() {
        let wire = proto_bitcoin::TxRequest {
            request_type: None,
            details: None,
            serialized: None,
        };
        assert!(tx_sign_request(wire).is_err());
    }

    #[test]
    fn unknown_failure_codes_map_to_unknown() {
        assert_eq!(FailureKind::from_trezor(12345), FailureKind::Unknown);
        assert_eq!(FailureKind::from_keepkey(7), FailureKind::PinInvalid);
    }
}
