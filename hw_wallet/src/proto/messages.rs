//! The message-type registry shared by the framing layer and the codec.
//!
//! Both supported device families descend from the same first-generation
//! protobuf and kept its `MessageType` numbering, so a single discriminant
//! table serves either vendor; the registry is still consulted per vendor so
//! that a foreign or future tag is rejected instead of misparsed.

use crate::Vendor;

/// Wire identifier of a protobuf message, drawn from the vendor's
/// `MessageType` enum. The tag uniquely selects the payload schema.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u16)]
pub enum MessageType {
    Initialize = 0,
    Ping = 1,
    Success = 2,
    Failure = 3,
    ChangePin = 4,
    WipeDevice = 5,
    FirmwareErase = 6,
    FirmwareUpload = 7,
    GetEntropy = 9,
    Entropy = 10,
    GetPublicKey = 11,
    PublicKey = 12,
    LoadDevice = 13,
    ResetDevice = 14,
    SignTx = 15,
    SimpleSignTx = 16,
    Features = 17,
    PinMatrixRequest = 18,
    PinMatrixAck = 19,
    Cancel = 20,
    TxRequest = 21,
    TxAck = 22,
    CipherKeyValue = 23,
    ClearSession = 24,
    ApplySettings = 25,
    ButtonRequest = 26,
    ButtonAck = 27,
    GetAddress = 29,
    Address = 30,
    EntropyRequest = 35,
    EntropyAck = 36,
    SignMessage = 38,
    VerifyMessage = 39,
    MessageSignature = 40,
    PassphraseRequest = 41,
    PassphraseAck = 42,
    EstimateTxSize = 43,
    TxSize = 44,
    RecoveryDevice = 45,
    WordRequest = 46,
    WordAck = 47,
    CipheredKeyValue = 48,
    EncryptMessage = 49,
    EncryptedMessage = 50,
    DecryptMessage = 51,
    DecryptedMessage = 52,
    SignIdentity = 53,
    SignedIdentity = 54,
    GetFeatures = 55,
    DebugLinkDecision = 100,
    DebugLinkGetState = 101,
    DebugLinkState = 102,
    DebugLinkStop = 103,
    DebugLinkLog = 104,
}

/// Every registered type, in tag order. Kept for registry tests and
/// diagnostics; extend together with the enum.
pub const ALL_MESSAGE_TYPES: [MessageType; 54] = [
    MessageType::Initialize,
    MessageType::Ping,
    MessageType::Success,
    MessageType::Failure,
    MessageType::ChangePin,
    MessageType::WipeDevice,
    MessageType::FirmwareErase,
    MessageType::FirmwareUpload,
    MessageType::GetEntropy,
    MessageType::Entropy,
    MessageType::GetPublicKey,
    MessageType::PublicKey,
    MessageType::LoadDevice,
    MessageType::ResetDevice,
    MessageType::SignTx,
    MessageType::SimpleSignTx,
    MessageType::Features,
    MessageType::PinMatrixRequest,
    MessageType::PinMatrixAck,
    MessageType::Cancel,
    MessageType::TxRequest,
    MessageType::TxAck,
    MessageType::CipherKeyValue,
    MessageType::ClearSession,
    MessageType::ApplySettings,
    MessageType::ButtonRequest,
    MessageType::ButtonAck,
    MessageType::GetAddress,
    MessageType::Address,
    MessageType::EntropyRequest,
    MessageType::EntropyAck,
    MessageType::SignMessage,
    MessageType::VerifyMessage,
    MessageType::MessageSignature,
    MessageType::PassphraseRequest,
    MessageType::PassphraseAck,
    MessageType::EstimateTxSize,
    MessageType::TxSize,
    MessageType::RecoveryDevice,
    MessageType::WordRequest,
    MessageType::WordAck,
    MessageType::CipheredKeyValue,
    MessageType::EncryptMessage,
    MessageType::EncryptedMessage,
    MessageType::DecryptMessage,
    MessageType::DecryptedMessage,
    MessageType::SignIdentity,
    MessageType::SignedIdentity,
    MessageType::GetFeatures,
    MessageType::DebugLinkDecision,
    MessageType::DebugLinkGetState,
    MessageType::DebugLinkState,
    MessageType::DebugLinkStop,
    MessageType::DebugLinkLog,
];

impl MessageType {
    /// Look a wire tag up in the registry of the given vendor.
    /// Returns `None` for tags outside the registry; the session must treat
    /// those as droppable, not fatal.
    pub fn from_wire(vendor: Vendor, tag: u16) -> Option<MessageType> {
        match vendor {
            // Both device families share the first-generation numbering.
            Vendor::Trezor | Vendor::KeepKey => MessageType::from_v1_tag(tag),
        }
    }

    /// The tag this type is written with for the given vendor.
    pub fn wire_tag(self, vendor: Vendor) -> u16 {
        match vendor {
            Vendor::Trezor | Vendor::KeepKey => self as u16,
        }
    }

    fn from_v1_tag(tag: u16) -> Option<MessageType> {
        Some(match tag {
            0 => MessageType::Initialize,
            1 => MessageType::Ping,
            2 => MessageType::Success,
            3 => MessageType::Failure,
            4 => MessageType::ChangePin,
            5 => MessageType::WipeDevice,
            6 => MessageType::FirmwareErase,
            7 => MessageType::FirmwareUpload,
            9 => MessageType::GetEntropy,
            10 => MessageType::Entropy,
            11 => MessageType::GetPublicKey,
            12 => MessageType::PublicKey,
            13 => MessageType::LoadDevice,
            14 => MessageType::ResetDevice,
            15 => MessageType::SignTx,
            16 => MessageType::SimpleSignTx,
            17 => MessageType::Features,
            18 => MessageType::PinMatrixRequest,
            19 => MessageType::PinMatrixAck,
            20 => MessageType::Cancel,
            21 => MessageType::TxRequest,
            22 => MessageType::TxAck,
            23 => MessageType::CipherKeyValue,
            24 => MessageType::ClearSession,
            25 => MessageType::ApplySettings,
            26 => MessageType::ButtonRequest,
            27 => MessageType::ButtonAck,
            29 => MessageType::GetAddress,
            30 => MessageType::Address,
            35 => MessageType::EntropyRequest,
            36 => MessageType::EntropyAck,
            38 => MessageType::SignMessage,
            39 => MessageType::VerifyMessage,
            40 => MessageType::MessageSignature,
            41 => MessageType::PassphraseRequest,
            42 => MessageType::PassphraseAck,
            43 => MessageType::EstimateTxSize,
            44 => MessageType::TxSize,
            45 => MessageType::RecoveryDevice,
            46 => MessageType::WordRequest,
            47 => MessageType::WordAck,
            48 => MessageType::CipheredKeyValue,
            49 => MessageType::EncryptMessage,
            50 => MessageType::EncryptedMessage,
            51 => MessageType::DecryptMessage,
            52 => MessageType::DecryptedMessage,
            53 => MessageType::SignIdentity,
            54 => MessageType::SignedIdentity,
            55 => MessageType::GetFeatures,
            100 => MessageType::DebugLinkDecision,
            101 => MessageType::DebugLinkGetState,
            102 => MessageType::DebugLinkState,
            103 => MessageType::DebugLinkStop,
            104 => MessageType::DebugLinkLog,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_tags_round_trip_for_both_vendors() {
        for vendor in [Vendor::Trezor, Vendor::KeepKey] {
            for mt in ALL_MESSAGE_TYPES {
                let tag = mt.wire_tag(vendor);
                assert_eq!(MessageType::from_wire(vendor, tag), Some(mt));
            }
        }
    }

    #[test]
    fn unknown_tags_are_rejected() {
        assert_eq!(MessageType::from_wire(Vendor::Trezor, 8), None);
        assert_eq!(MessageType::from_wire(Vendor::Trezor, 28), None);
        assert_eq!(MessageType::from_wire(Vendor::KeepKey, 999), None);
    }
}
