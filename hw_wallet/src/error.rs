use crate::adapter::FailurePayload;
use crate::proto::messages::MessageType;
use crate::user_interaction::InteractionType;
use derive_more::Display;
use hw_common::transport::HidError;
use prost::{DecodeError, EncodeError};

pub type HwResult<T> = Result<T, HwError>;

#[derive(Debug, Display)]
pub enum HwError {
    /// The device detached or the underlying endpoint reached EOF.
    #[display(fmt = "transport closed")]
    TransportClosed,
    /// HID reassembly broke an invariant; the read side resynchronises on the next sentinel.
    #[display(fmt = "malformed frame: {}", _0)]
    MalformedFrame(String),
    /// A tag outside the codec registry of the active vendor.
    #[display(fmt = "unknown message type tag '{}'", _0)]
    UnknownType(u16),
    /// A registered message failed to parse.
    #[display(fmt = "schema error for {:?}: {}", _0, _1)]
    SchemaError(MessageType, String),
    /// The device answered with a `Failure` message.
    #[display(fmt = "device failure: {:?}", _0)]
    DeviceFailure(FailurePayload),
    /// Violation of the request/response discipline.
    ProtocolError(String),
    #[display(fmt = "received unexpected message type: {:?}", _0)]
    UnexpectedMessageType(MessageType),
    #[display(fmt = "unexpected interaction request: {:?}", _0)]
    UnexpectedInteractionRequest(InteractionType),
    /// The input-path map lacks an entry the device asked for.
    #[display(fmt = "no derivation path for input '{}'", _0)]
    MissingInputPath(usize),
    /// The ancestor store lacks a previous transaction the device asked for.
    #[display(fmt = "previous transaction '{}' not found", _0)]
    MissingAncestor(String),
    /// An output script that is neither P2PKH nor P2SH.
    #[display(fmt = "output '{}' does not resolve to P2PKH or P2SH", _0)]
    IllegalOutputScript(usize),
    /// Another operation is already in flight on this session.
    Busy,
    /// The operation was cancelled by the embedder.
    Cancelled,
    Internal(String),
}

impl From<DecodeError> for HwError {
    fn from(e: DecodeError) -> Self { HwError::Internal(e.to_string()) }
}

impl From<EncodeError> for HwError {
    fn from(e: EncodeError) -> Self { HwError::Internal(e.to_string()) }
}

impl From<HidError> for HwError {
    fn from(e: HidError) -> Self {
        match e {
            // The driver cannot distinguish a vanished device from a broken descriptor,
            // treat both as a closed transport.
            HidError::ErrorReadingChunk(_) | HidError::ErrorWritingChunk(_) | HidError::WritingInterrupted { .. } => {
                HwError::TransportClosed
            },
            e => HwError::Internal(e.to_string()),
        }
    }
}
