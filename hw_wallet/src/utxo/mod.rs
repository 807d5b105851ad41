use derive_more::Display;
use hw_common::primitives::DerivationPath;
use std::collections::HashMap;

mod prev_tx;
mod sign_tx;
mod unsigned_tx;
mod utxo_command;

pub use prev_tx::{AncestorStore, PrevTx, PrevTxInput, PrevTxOutput};
pub use sign_tx::{SigningJob, TxSignResult};
pub use unsigned_tx::{TxOutput, UnsignedTx, UnsignedTxInput};
pub use utxo_command::IdentityDescriptor;

pub type TxHash = Vec<u8>;
pub type Signature = Vec<u8>;
pub type ScriptPubkey = Vec<u8>;

/// Derivation path of each input of the transaction being signed,
/// keyed by input index. Must be total over the inputs.
pub type InputPathMap = HashMap<usize, DerivationPath>;

/// Derivation paths of outputs known to be change, keyed by the encoded
/// address. Outputs found here are sent to the device as a path instead of
/// an address so they do not trigger a confirmation screen.
pub type ChangePathMap = HashMap<String, DerivationPath>;

/// The coin the dialog signs for. The name travels verbatim in
/// `SignTx::coin_name`.
#[derive(Clone, Copy, Debug, Deserialize, Display, Serialize)]
pub enum UtxoCoin {
    Bitcoin,
}
