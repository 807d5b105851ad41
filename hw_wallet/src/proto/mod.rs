//! Wire-level message set of the first-generation hardware wallet protocol.
//! In this module we implement the `message_type` getter for all protobuf
//! message types; together with [`messages::MessageType`] this forms the
//! codec registry mapping `(vendor, tag)` to a payload schema.

use prost::bytes::BytesMut;

pub mod messages;
pub mod messages_bitcoin;
pub mod messages_common;
pub mod messages_keepkey;
pub mod messages_management;

use messages::MessageType;
use messages_bitcoin::*;
use messages_common::*;
use messages_management::*;

/// This macro provides the WireMessage trait for a protobuf message.
macro_rules! wire_message_impl {
    ($struct:ty, $mtype:expr) => {
        impl WireMessage for $struct {
            fn message_type() -> MessageType { $mtype }
        }
    };
}

/// A protobuf message accompanied by the message type.
/// This type is used to pass messages over the transport
/// and used to contain messages received from the transport.
#[derive(Clone, Debug, PartialEq)]
pub struct ProtoMessage {
    message_type: MessageType,
    payload: Vec<u8>,
}

impl ProtoMessage {
    pub fn new(message_type: MessageType, payload: Vec<u8>) -> ProtoMessage { ProtoMessage { message_type, payload } }

    pub fn message_type(&self) -> MessageType { self.message_type }

    pub fn payload(&self) -> &[u8] { &self.payload }

    pub fn into_payload(self) -> Vec<u8> { self.payload }

    /// Take the payload from the ProtoMessage and parse it to a protobuf message.
    pub fn into_message<M: prost::Message + Default>(self) -> Result<M, prost::DecodeError> {
        let bytes = BytesMut::from(self.payload.as_slice());
        prost::Message::decode(bytes)
    }
}

/// This trait extends the protobuf Message trait to also have a static getter for the message
/// type code.
pub trait WireMessage: prost::Message + Default + 'static {
    fn message_type() -> MessageType;
}

// Management
wire_message_impl!(Initialize, MessageType::Initialize);
wire_message_impl!(GetFeatures, MessageType::GetFeatures);
wire_message_impl!(Features, MessageType::Features);
wire_message_impl!(Ping, MessageType::Ping);
wire_message_impl!(ChangePin, MessageType::ChangePin);
wire_message_impl!(WipeDevice, MessageType::WipeDevice);
wire_message_impl!(FirmwareErase, MessageType::FirmwareErase);
wire_message_impl!(FirmwareUpload, MessageType::FirmwareUpload);
wire_message_impl!(GetEntropy, MessageType::GetEntropy);
wire_message_impl!(Entropy, MessageType::Entropy);
wire_message_impl!(LoadDevice, MessageType::LoadDevice);
wire_message_impl!(ResetDevice, MessageType::ResetDevice);
wire_message_impl!(RecoveryDevice, MessageType::RecoveryDevice);
wire_message_impl!(WordRequest, MessageType::WordRequest);
wire_message_impl!(WordAck, MessageType::WordAck);
wire_message_impl!(EntropyRequest, MessageType::EntropyRequest);
wire_message_impl!(EntropyAck, MessageType::EntropyAck);
wire_message_impl!(Cancel, MessageType::Cancel);
wire_message_impl!(ClearSession, MessageType::ClearSession);
wire_message_impl!(ApplySettings, MessageType::ApplySettings);
wire_message_impl!(EstimateTxSize, MessageType::EstimateTxSize);
wire_message_impl!(TxSize, MessageType::TxSize);
wire_message_impl!(DebugLinkDecision, MessageType::DebugLinkDecision);
wire_message_impl!(DebugLinkGetState, MessageType::DebugLinkGetState);
wire_message_impl!(DebugLinkState, MessageType::DebugLinkState);
wire_message_impl!(DebugLinkStop, MessageType::DebugLinkStop);
wire_message_impl!(DebugLinkLog, MessageType::DebugLinkLog);
// Common
wire_message_impl!(Success, MessageType::Success);
wire_message_impl!(Failure, MessageType::Failure);
wire_message_impl!(PinMatrixRequest, MessageType::PinMatrixRequest);
wire_message_impl!(PinMatrixAck, MessageType::PinMatrixAck);
wire_message_impl!(ButtonRequest, MessageType::ButtonRequest);
wire_message_impl!(ButtonAck, MessageType::ButtonAck);
wire_message_impl!(PassphraseRequest, MessageType::PassphraseRequest);
wire_message_impl!(PassphraseAck, MessageType::PassphraseAck);
// Bitcoin
wire_message_impl!(GetAddress, MessageType::GetAddress);
wire_message_impl!(Address, MessageType::Address);
wire_message_impl!(GetPublicKey, MessageType::GetPublicKey);
wire_message_impl!(PublicKey, MessageType::PublicKey);
wire_message_impl!(SignMessage, MessageType::SignMessage);
wire_message_impl!(VerifyMessage, MessageType::VerifyMessage);
wire_message_impl!(MessageSignature, MessageType::MessageSignature);
wire_message_impl!(EncryptMessage, MessageType::EncryptMessage);
wire_message_impl!(EncryptedMessage, MessageType::EncryptedMessage);
wire_message_impl!(DecryptMessage, MessageType::DecryptMessage);
wire_message_impl!(DecryptedMessage, MessageType::DecryptedMessage);
wire_message_impl!(CipherKeyValue, MessageType::CipherKeyValue);
wire_message_impl!(CipheredKeyValue, MessageType::CipheredKeyValue);
wire_message_impl!(SignIdentity, MessageType::SignIdentity);
wire_message_impl!(SignedIdentity, MessageType::SignedIdentity);
wire_message_impl!(SignTx, MessageType::SignTx);
wire_message_impl!(SimpleSignTx, MessageType::SimpleSignTx);
wire_message_impl!(TxRequest, MessageType::TxRequest);
wire_message_impl!(TxAck, MessageType::TxAck);
// KeepKey divergent records
wire_message_impl!(messages_keepkey::Features, MessageType::Features);

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    fn round_trip<M>(record: M)
    where
        M: WireMessage + PartialEq + std::fmt::Debug,
    {
        let mut buf = Vec::with_capacity(record.encoded_len());
        record.encode(&mut buf).unwrap();
        let proto = ProtoMessage::new(M::message_type(), buf);
        let decoded: M = proto.into_message().unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn wire_records_survive_serialize_parse() {
        round_trip(Initialize {});
        round_trip(Ping {
            message: Some("echo".to_owned()),
            button_protection: Some(false),
            pin_protection: None,
            passphrase_protection: None,
        });
        round_trip(Failure {
            code: Some(failure::FailureType::FailureActionCancelled as i32),
            message: Some("Action cancelled by user".to_owned()),
        });
        round_trip(PinMatrixRequest {
            r#type: Some(pin_matrix_request::PinMatrixRequestType::Current as i32),
        });
        round_trip(GetPublicKey {
            address_n: vec![0x8000002c, 0x80000000, 0x80000000],
            ecdsa_curve_name: Some("secp256k1".to_owned()),
            show_display: None,
            coin_name: Some("Bitcoin".to_owned()),
        });
        round_trip(TxRequest {
            request_type: Some(tx_request::RequestType::Txinput as i32),
            details: Some(TxRequestDetailsType {
                request_index: Some(0),
                tx_hash: Some(vec![0xaa; 32]),
            }),
            serialized: Some(TxRequestSerializedType {
                signature_index: Some(0),
                signature: Some(vec![0x30, 0x45]),
                serialized_tx: Some(vec![0x01, 0x00]),
            }),
        });
        round_trip(TxAck {
            tx: Some(TransactionType {
                version: Some(1),
                inputs: vec![TxInputType {
                    address_n: vec![0x8000002c, 0x80000000, 0x80000000, 0, 0],
                    prev_hash: vec![0xbb; 32],
                    prev_index: 1,
                    script_sig: None,
                    sequence: Some(0xffffffff),
                    script_type: Some(InputScriptType::Spendaddress as i32),
                }],
                bin_outputs: Vec::new(),
                outputs: Vec::new(),
                lock_time: Some(0),
                inputs_cnt: None,
                outputs_cnt: None,
            }),
        });
        round_trip(messages_keepkey::Features {
            vendor: Some("keepkey.com".to_owned()),
            major_version: Some(1),
            minor_version: Some(0),
            patch_version: Some(0),
            bootloader_mode: None,
            device_id: Some("KK001".to_owned()),
            pin_protection: Some(true),
            passphrase_protection: Some(false),
            language: None,
            label: Some("wallet".to_owned()),
            coins: Vec::new(),
            initialized: Some(true),
            revision: None,
            bootloader_hash: None,
            imported: None,
            policies: vec![messages_keepkey::PolicyType {
                policy_name: Some("ShapeShift".to_owned()),
                enabled: Some(false),
            }],
        });
    }
}
