//! Host-side session engine for first-generation Trezor- and KeepKey-family
//! Bitcoin hardware wallets over USB HID.
//!
//! The engine frames protobuf messages into 64-byte HID reports, normalizes
//! the two vendor schemas into one internal vocabulary, and drives the
//! stateful session: PIN/passphrase prompts, deterministic-hierarchy
//! retrieval, and the device-led multi-round transaction-signing dialog.
//! Consumers observe everything through the event bus; wallet construction,
//! key derivation and block access live in the embedder's Bitcoin library.

#[macro_use] extern crate serde_derive;

pub mod adapter;
pub mod client;
pub mod context;
pub mod derivation;
pub mod error;
pub mod events;
pub mod proto;
pub mod response;
pub mod response_processor;
mod result_handler;
pub mod transport;
pub mod user_interaction;
pub mod utxo;

pub use adapter::{ButtonKind, ButtonPrompt, DeviceFeatures, FailureKind, FailurePayload, MessageSignaturePayload,
                  PinMatrixKind, PublicKeyNode, SignedIdentityPayload};
pub use client::{HwClient, HwSession};
pub use context::{HierarchyRoot, SessionContext};
pub use derivation::KeyPurpose;
pub use error::{HwError, HwResult};
pub use events::{EventStream, HwEvent};
pub use hw_common::primitives::{DerivationPath, EcdsaCurve};
pub use response::HwResponse;
pub use response_processor::{ProcessResponse, RequestProcessor};
pub use user_interaction::{InteractionType, UserInput};

/// The device family a session speaks to. Selects the codec registry and the
/// divergent record schemas; nothing vendor-specific leaks past the adapter.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Vendor {
    Trezor,
    KeepKey,
}
