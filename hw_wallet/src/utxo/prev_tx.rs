use crate::error::{HwError, HwResult};
use crate::proto::messages_bitcoin as proto_bitcoin;
use crate::utxo::{ScriptPubkey, Signature, TxHash};
use std::collections::HashMap;

/// One input of a previous transaction, replayed to the device verbatim.
pub struct PrevTxInput {
    /// Hash of the transaction output spent by this input.
    pub prev_hash: Vec<u8>,
    /// Index of the spent output.
    pub prev_index: u32,
    /// Script signature.
    pub script_sig: Signature,
    /// Sequence.
    pub sequence: u32,
}

impl PrevTxInput {
    fn to_proto(&self) -> proto_bitcoin::TxInputType {
        proto_bitcoin::TxInputType {
            // Ancestor inputs are never ours to derive; the path stays empty.
            address_n: Vec::new(),
            prev_hash: self.prev_hash.clone(),
            prev_index: self.prev_index,
            script_sig: Some(self.script_sig.clone()),
            sequence: Some(self.sequence),
            script_type: None,
        }
    }
}

/// One output of a previous transaction: the raw amount and script.
pub struct PrevTxOutput {
    /// Amount sent to this output.
    pub amount: u64,
    /// Script Pubkey of this output.
    pub script_pubkey: ScriptPubkey,
}

impl PrevTxOutput {
    fn to_proto(&self) -> proto_bitcoin::TxOutputBinType {
        proto_bitcoin::TxOutputBinType {
            amount: self.amount,
            script_pubkey: self.script_pubkey.clone(),
        }
    }
}

/// A previous transaction supplying an outpoint of the transaction being
/// signed. The device asks for its meta fields, inputs and outputs piecemeal.
pub struct PrevTx {
    /// Transaction inputs.
    pub inputs: Vec<PrevTxInput>,
    /// Transaction outputs.
    pub outputs: Vec<PrevTxOutput>,
    /// Transaction version.
    pub version: u32,
    /// Transaction lock_time.
    pub lock_time: u32,
}

impl PrevTx {
    pub(crate) fn meta_message(&self) -> proto_bitcoin::TransactionType {
        proto_bitcoin::TransactionType {
            version: Some(self.version),
            lock_time: Some(self.lock_time),
            inputs_cnt: Some(self.inputs.len() as u32),
            outputs_cnt: Some(self.outputs.len() as u32),
            ..Default::default()
        }
    }

    pub(crate) fn input_message(&self, input_index: usize) -> HwResult<proto_bitcoin::TransactionType> {
        match self.inputs.get(input_index) {
            Some(prev_input) => Ok(proto_bitcoin::TransactionType {
                inputs: vec![prev_input.to_proto()],
                ..Default::default()
            }),
            None => {
                let error = format!(
                    "Unexpected index '{}' of the prev-tx input. Actual count of inputs: {}",
                    input_index,
                    self.inputs.len()
                );
                Err(HwError::ProtocolError(error))
            },
        }
    }

    pub(crate) fn output_message(&self, output_index: usize) -> HwResult<proto_bitcoin::TransactionType> {
        match self.outputs.get(output_index) {
            Some(prev_output) => Ok(proto_bitcoin::TransactionType {
                bin_outputs: vec![prev_output.to_proto()],
                ..Default::default()
            }),
            None => {
                let error = format!(
                    "Unexpected index '{}' of the prev-tx output. Actual count of outputs: {}",
                    output_index,
                    self.outputs.len()
                );
                Err(HwError::ProtocolError(error))
            },
        }
    }
}

/// Every previous transaction referenced by an input of the transaction
/// being signed, keyed by the tx-hash bytes exactly as the device requests
/// them. Populated before the dialog starts, read-only for its duration;
/// a miss fails the job closed.
#[derive(Default)]
pub struct AncestorStore {
    txs: HashMap<TxHash, PrevTx>,
}

impl AncestorStore {
    pub fn new() -> AncestorStore { AncestorStore::default() }

    pub fn insert(&mut self, tx_hash: TxHash, tx: PrevTx) { self.txs.insert(tx_hash, tx); }

    pub fn len(&self) -> usize { self.txs.len() }

    pub fn is_empty(&self) -> bool { self.txs.is_empty() }

    pub(crate) fn get(&self, tx_hash: &[u8]) -> HwResult<&PrevTx> {
        self.txs
            .get(tx_hash)
            .ok_or_else(|| HwError::MissingAncestor(hex::encode(tx_hash)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_prev_tx() -> PrevTx {
        PrevTx {
            inputs: vec![PrevTxInput {
                prev_hash: vec![0x11; 32],
                prev_index: 0,
                script_sig: vec![0x48, 0x30],
                sequence: 0xffffffff,
            }],
            outputs: vec![PrevTxOutput {
                amount: 50_000,
                script_pubkey: vec![0x76, 0xa9],
            }],
            version: 1,
            lock_time: 0,
        }
    }

    #[test]
    fn meta_message_reports_counts() {
        let meta = sample_prev_tx().meta_message();
        assert_eq!(meta.inputs_cnt, Some(1));
        assert_eq!(meta.outputs_cnt, Some(1));
        assert_eq!(meta.version, Some(1));
        assert!(meta.inputs.is_empty());
    }

    #[test]
    fn ancestor_inputs_carry_no_derivation_path() {
        let message = sample_prev_tx().input_message(0).unwrap();
        assert!(message.inputs[0].address_n.is_empty());
        assert_eq!(message.inputs[0].script_sig.as_deref(), Some(&[0x48, 0x30][..]));
    }

    #[test]
    fn out_of_range_indices_are_protocol_errors() {
        assert!(sample_prev_tx().input_message(5).is_err());
        assert!(sample_prev_tx().output_message(1).is_err());
    }

    #[test]
    fn a_missing_ancestor_fails_closed() {
        let mut store = AncestorStore::new();
        store.insert(vec![0xaa; 32], sample_prev_tx());
        assert!(store.get(&[0xaa; 32]).is_ok());
        assert!(matches!(store.get(&[0xbb; 32]), Err(HwError::MissingAncestor(_))));
    }
}
