//! Publish/subscribe dispatch for session events.
//!
//! Delivery is synchronous: `publish` pushes the event into every live
//! subscriber channel before returning, so a subscriber that reacts by
//! issuing a new client call observes a context that already reflects the
//! event that triggered it. Subscribers drain their channel and hand
//! long-running work off themselves; nothing here blocks.

use crate::adapter::{ButtonPrompt, DeviceFeatures, FailurePayload, PinMatrixKind, PublicKeyNode};
use crate::context::HierarchyRoot;
use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use std::sync::Mutex;

/// Everything a session publishes over its lifetime.
#[derive(Clone, Debug)]
pub enum HwEvent {
    /// A transport has been handed to the client; the context has been reset.
    DeviceAttached,
    /// `Initialize` round-trip finished, `Features` are cached on the context.
    DeviceReady(DeviceFeatures),
    DeviceDetached,
    /// The device could not be brought up.
    DeviceFailed(String),
    ShowPinEntry(PinMatrixKind),
    ShowPassphraseEntry,
    ShowButtonPress(ButtonPrompt),
    /// The deterministic hierarchy root was retrieved and cached.
    DeterministicHierarchy(HierarchyRoot),
    AddressReceived(String),
    PublicKeyReceived(PublicKeyNode),
    OperationSucceeded(Option<String>),
    OperationFailed(FailurePayload),
}

pub type EventStream = UnboundedReceiver<HwEvent>;

/// Fan-out of [`HwEvent`]s to any number of subscriber channels.
/// Closed subscribers are pruned on the next publish.
#[derive(Default)]
pub struct EventBus {
    subscribers: Mutex<Vec<UnboundedSender<HwEvent>>>,
}

impl EventBus {
    pub fn new() -> EventBus { EventBus::default() }

    pub fn subscribe(&self) -> EventStream {
        let (tx, rx) = unbounded();
        self.subscribers.lock().expect("subscriber list poisoned").push(tx);
        rx
    }

    pub fn publish(&self, event: HwEvent) {
        let mut subscribers = self.subscribers.lock().expect("subscriber list poisoned");
        subscribers.retain(|subscriber| subscriber.unbounded_send(event.clone()).is_ok());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_reaches_every_live_subscriber() {
        let bus = EventBus::new();
        let mut first = bus.subscribe();
        let second = bus.subscribe();

        bus.publish(HwEvent::DeviceAttached);
        assert!(matches!(first.try_next().unwrap().unwrap(), HwEvent::DeviceAttached));

        // A dropped subscriber must not break the others.
        drop(second);
        bus.publish(HwEvent::DeviceDetached);
        assert!(matches!(first.try_next().unwrap().unwrap(), HwEvent::DeviceDetached));
    }
}
