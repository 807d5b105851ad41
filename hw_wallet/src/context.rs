use crate::adapter::DeviceFeatures;
use hw_common::primitives::{DerivationPath, XPub};

/// Root of a deterministic hierarchy retrieved from the device: the
/// (chain code, public key) pair at the requested account path. Actual
/// child derivation is the embedder's Bitcoin library's job; the engine
/// only caches the triple and the serialized form.
#[derive(Clone, Debug, PartialEq)]
pub struct HierarchyRoot {
    /// The account path this root was requested for.
    pub path: DerivationPath,
    pub chain_code: Vec<u8>,
    pub public_key: Vec<u8>,
    pub xpub: Option<XPub>,
}

/// Session-scoped state shared with subscribers.
///
/// Single-writer contract: only the client mutates the context, always
/// before publishing the event announcing the mutation; subscribers read
/// snapshots. Reset on attach and detach.
#[derive(Clone, Debug, Default)]
pub struct SessionContext {
    pub features: Option<DeviceFeatures>,
    pub hierarchy: Option<HierarchyRoot>,
    /// Signatures accumulated by the last signing job, one per input.
    pub signatures: Vec<Vec<u8>>,
    /// The device's canonical serialization of the last signed transaction.
    pub serialized_tx: Vec<u8>,
}

impl SessionContext {
    pub fn reset(&mut self) { *self = SessionContext::default(); }

    pub(crate) fn reset_signing(&mut self) {
        self.signatures.clear();
        self.serialized_tx.clear();
    }

    /// True when the device reports a seed on board.
    pub fn is_wallet_present(&self) -> bool {
        self.features
            .as_ref()
            .map(|features| features.initialized)
            .unwrap_or(false)
    }
}
