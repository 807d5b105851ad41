use crate::error::{HwError, HwResult};
use crate::proto::messages::MessageType;
use crate::proto::{ProtoMessage, WireMessage};

/// Function to be passed to the [`HwSession::call`] method
/// to process the device response message into a general-purpose type.
pub(crate) type RawResultHandler<T> = dyn FnOnce(ProtoMessage) -> HwResult<T> + Send;

pub struct ResultHandler<T> {
    result_message_type: MessageType,
    handler: Box<RawResultHandler<T>>,
}

impl<T> ResultHandler<T> {
    pub fn new<H, R>(result_handler: H) -> ResultHandler<T>
    where
        H: FnOnce(R) -> HwResult<T> + 'static + Send,
        R: WireMessage,
    {
        let handler = move |proto: ProtoMessage| {
            if R::message_type() != proto.message_type() {
                return Err(HwError::UnexpectedMessageType(proto.message_type()));
            }
            let resp_msg = proto
                .into_message()
                .map_err(|e| HwError::SchemaError(R::message_type(), e.to_string()))?;
            result_handler(resp_msg)
        };
        ResultHandler {
            result_message_type: R::message_type(),
            handler: Box::new(handler),
        }
    }

    pub fn message_type(&self) -> MessageType { self.result_message_type }

    pub fn handle_raw(self, proto: ProtoMessage) -> HwResult<T> { (self.handler)(proto) }
}
