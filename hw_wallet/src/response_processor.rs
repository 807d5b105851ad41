use crate::adapter::{ButtonPrompt, PinMatrixKind};
use crate::error::{HwError, HwResult};
use crate::events::{EventBus, HwEvent};
use crate::user_interaction::UserInput;
use async_trait::async_trait;
use futures::channel::mpsc::UnboundedReceiver;
use futures::lock::Mutex as AsyncMutex;
use futures::StreamExt;
use log::warn;
use std::sync::Arc;

/// How an in-flight operation resolves the prompts a device may interleave
/// into any exchange. The engine ships [`EventBusProcessor`]; embedders with
/// their own interaction pipeline can supply another implementation.
#[async_trait]
pub trait RequestProcessor {
    /// The device is waiting for a hardware button press.
    /// Return an error to abort instead of acking.
    async fn on_button_request(&self, prompt: &ButtonPrompt) -> HwResult<()>;

    /// The device is waiting for a PIN encoded on the scrambled keypad.
    async fn on_pin_request(&self, kind: PinMatrixKind) -> HwResult<String>;

    /// The device is waiting for the wallet passphrase.
    async fn on_passphrase_request(&self) -> HwResult<String>;

    /// The exchange finished; no prompt is pending anymore.
    async fn on_ready(&self);
}

#[async_trait]
pub trait ProcessResponse<T>
where
    T: Send + Sync + 'static,
{
    /// Drive the implicit reprompt loop until a terminal message arrives.
    async fn process<P>(self, processor: &P) -> HwResult<T>
    where
        Self: Sized,
        P: RequestProcessor + Sync;
}

/// The default processor: prompts become bus events, answers arrive through
/// the client's `provide_pin`/`provide_passphrase` input channel, and a
/// queued `Cancel` short-circuits the loop.
pub struct EventBusProcessor {
    bus: Arc<EventBus>,
    input: AsyncMutex<UnboundedReceiver<UserInput>>,
}

impl EventBusProcessor {
    pub(crate) fn new(bus: Arc<EventBus>, input: UnboundedReceiver<UserInput>) -> EventBusProcessor {
        EventBusProcessor {
            bus,
            input: AsyncMutex::new(input),
        }
    }

    /// Drop inputs left over from a previous operation so they cannot answer
    /// a prompt they were never meant for. Called on session acquisition.
    pub(crate) fn drain_stale_input(&self) {
        if let Some(mut input) = self.input.try_lock() {
            while let Ok(Some(_)) = input.try_next() {}
        }
    }

    /// A cancel queued before this point aborts the operation without
    /// waiting for the device.
    fn take_queued_cancel(&self) -> bool {
        if let Some(mut input) = self.input.try_lock() {
            while let Ok(Some(user_input)) = input.try_next() {
                if let UserInput::Cancel = user_input {
                    return true;
                }
                warn!("Dropping an unexpected user input supplied before any prompt");
            }
        }
        false
    }

    async fn next_input(&self) -> HwResult<UserInput> {
        let mut input = self.input.lock().await;
        input
            .next()
            .await
            .ok_or_else(|| HwError::Internal("User input channel is closed".to_owned()))
    }
}

#[async_trait]
impl RequestProcessor for EventBusProcessor {
    async fn on_button_request(&self, prompt: &ButtonPrompt) -> HwResult<()> {
        if self.take_queued_cancel() {
            return Err(HwError::Cancelled);
        }
        self.bus.publish(HwEvent::ShowButtonPress(prompt.clone()));
        Ok(())
    }

    async fn on_pin_request(&self, kind: PinMatrixKind) -> HwResult<String> {
        self.bus.publish(HwEvent::ShowPinEntry(kind));
        loop {
            match self.next_input().await? {
                UserInput::Pin(pin) => return Ok(pin),
                UserInput::Cancel => return Err(HwError::Cancelled),
                UserInput::Passphrase(_) => warn!("Expected a PIN, received a passphrase; waiting further"),
            }
        }
    }

    async fn on_passphrase_request(&self) -> HwResult<String> {
        self.bus.publish(HwEvent::ShowPassphraseEntry);
        loop {
            match self.next_input().await? {
                UserInput::Passphrase(passphrase) => return Ok(passphrase),
                UserInput::Cancel => return Err(HwError::Cancelled),
                UserInput::Pin(_) => warn!("Expected a passphrase, received a PIN; waiting further"),
            }
        }
    }

    async fn on_ready(&self) {}
}
