use crate::adapter::{self, ButtonPrompt, PinMatrixKind};
use crate::client::HwSession;
use crate::error::{HwError, HwResult};
use crate::proto::messages_common as proto_common;
use crate::response_processor::{ProcessResponse, RequestProcessor};
use crate::result_handler::ResultHandler;
use crate::user_interaction::InteractionType;
use async_trait::async_trait;
use std::fmt;

/// A response from the device.
///
/// On every message exchange, instead of the expected/desired response,
/// the device can ask for some user interaction, or can send a failure.
#[derive(Debug)]
pub enum HwResponse<'a, 'b, T> {
    Ready(T),
    ButtonRequest(ButtonRequest<'a, 'b, T>),
    PinMatrixRequest(PinMatrixRequest<'a, 'b, T>),
    PassphraseRequest(PassphraseRequest<'a, 'b, T>),
}

impl<'a, 'b, T: 'static> HwResponse<'a, 'b, T> {
    /// Get the actual `Ok` response value or an error if the device asked
    /// for an interaction instead.
    pub fn ok(self) -> HwResult<T> {
        match self {
            HwResponse::Ready(m) => Ok(m),
            HwResponse::ButtonRequest(_) => Err(HwError::UnexpectedInteractionRequest(InteractionType::Button)),
            HwResponse::PinMatrixRequest(_) => Err(HwError::UnexpectedInteractionRequest(InteractionType::PinMatrix)),
            HwResponse::PassphraseRequest(_) => {
                Err(HwError::UnexpectedInteractionRequest(InteractionType::Passphrase))
            },
        }
    }

    pub(crate) fn new_button_request(
        session: &'b mut HwSession<'a>,
        message: proto_common::ButtonRequest,
        result_handler: ResultHandler<T>,
    ) -> Self {
        HwResponse::ButtonRequest(ButtonRequest {
            session,
            message,
            result_handler,
        })
    }

    pub(crate) fn new_pin_matrix_request(
        session: &'b mut HwSession<'a>,
        message: proto_common::PinMatrixRequest,
        result_handler: ResultHandler<T>,
    ) -> Self {
        HwResponse::PinMatrixRequest(PinMatrixRequest {
            session,
            message,
            result_handler,
        })
    }

    pub(crate) fn new_passphrase_request(
        session: &'b mut HwSession<'a>,
        result_handler: ResultHandler<T>,
    ) -> Self {
        HwResponse::PassphraseRequest(PassphraseRequest {
            session,
            result_handler,
        })
    }
}

#[async_trait]
impl<'a, 'b, T> ProcessResponse<T> for HwResponse<'a, 'b, T>
where
    T: Send + Sync + 'static,
{
    async fn process<P>(self, processor: &P) -> HwResult<T>
    where
        P: RequestProcessor + Sync,
    {
        let mut response = self;
        loop {
            response = match response {
                HwResponse::Ready(result) => {
                    processor.on_ready().await;
                    return Ok(result);
                },
                HwResponse::ButtonRequest(button_req) => match processor.on_button_request(&button_req.prompt()).await
                {
                    Ok(()) => button_req.ack().await?,
                    Err(e) => {
                        button_req.cancel().await;
                        return Err(e);
                    },
                },
                HwResponse::PinMatrixRequest(pin_req) => match processor.on_pin_request(pin_req.kind()).await {
                    Ok(pin) => pin_req.ack_pin(pin).await?,
                    Err(e) => {
                        pin_req.cancel().await;
                        return Err(e);
                    },
                },
                HwResponse::PassphraseRequest(passphrase_req) => {
                    match processor.on_passphrase_request().await {
                        Ok(passphrase) => passphrase_req.ack_passphrase(passphrase).await?,
                        Err(e) => {
                            passphrase_req.cancel().await;
                            return Err(e);
                        },
                    }
                },
            };
        }
    }
}

/// A button request message sent by the device.
pub struct ButtonRequest<'a, 'b, T> {
    session: &'b mut HwSession<'a>,
    message: proto_common::ButtonRequest,
    result_handler: ResultHandler<T>,
}

impl<'a, 'b, T> fmt::Debug for ButtonRequest<'a, 'b, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{:?}", self.message) }
}

impl<'a, 'b, T: 'static> ButtonRequest<'a, 'b, T> {
    /// The screen behind this request.
    pub fn prompt(&self) -> ButtonPrompt { adapter::button_prompt(&self.message, self.session.vendor()) }

    /// Ack the request and get the next message from the device.
    pub async fn ack(self) -> HwResult<HwResponse<'a, 'b, T>> {
        let req = proto_common::ButtonAck {};
        self.session.call(req, self.result_handler).await
    }

    pub async fn cancel(self) { self.session.cancel_last_op().await }
}

/// A PIN matrix request message sent by the device.
pub struct PinMatrixRequest<'a, 'b, T> {
    session: &'b mut HwSession<'a>,
    message: proto_common::PinMatrixRequest,
    result_handler: ResultHandler<T>,
}

impl<'a, 'b, T> fmt::Debug for PinMatrixRequest<'a, 'b, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{:?}", self.message) }
}

impl<'a, 'b, T: 'static> PinMatrixRequest<'a, 'b, T> {
    /// Which PIN the device is asking for.
    pub fn kind(&self) -> PinMatrixKind { adapter::pin_matrix_kind(&self.message, self.session.vendor()) }

    /// Ack the request with a PIN and get the next message from the device.
    pub async fn ack_pin(self, pin: String) -> HwResult<HwResponse<'a, 'b, T>> {
        let req = proto_common::PinMatrixAck { pin };
        self.session.call(req, self.result_handler).await
    }

    pub async fn cancel(self) { self.session.cancel_last_op().await }
}

/// A passphrase request message sent by the device.
pub struct PassphraseRequest<'a, 'b, T> {
    session: &'b mut HwSession<'a>,
    result_handler: ResultHandler<T>,
}

impl<'a, 'b, T> fmt::Debug for PassphraseRequest<'a, 'b, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "PassphraseRequest") }
}

impl<'a, 'b, T: 'static> PassphraseRequest<'a, 'b, T> {
    /// Ack the request with the passphrase and get the next message from the device.
    pub async fn ack_passphrase(self, passphrase: String) -> HwResult<HwResponse<'a, 'b, T>> {
        let req = proto_common::PassphraseAck { passphrase };
        self.session.call(req, self.result_handler).await
    }

    pub async fn cancel(self) { self.session.cancel_last_op().await }
}
