use crate::derivation::address_n;
use crate::error::{HwError, HwResult};
use crate::proto::messages_bitcoin as proto_bitcoin;
use crate::utxo::{ChangePathMap, InputPathMap, ScriptPubkey, UtxoCoin};

/// One input of the transaction being signed. The `script_sig` is normally
/// empty at this point; the device produces the signatures.
pub struct UnsignedTxInput {
    /// Hash of the transaction output spent by this input, in the byte
    /// order the device uses in its TxRequest probes.
    pub prev_hash: Vec<u8>,
    /// Index of the spent output.
    pub prev_index: u32,
    /// Sequence.
    pub sequence: u32,
    /// Script signature, empty for an unsigned input.
    pub script_sig: Vec<u8>,
}

/// One output of the transaction being signed, as a raw script. The dialog
/// classifies the script and decides between the address and the
/// change-path form on demand.
pub struct TxOutput {
    /// Amount in satoshis.
    pub amount: u64,
    /// Script Pubkey of this output.
    pub script_pubkey: ScriptPubkey,
}

/// The transaction handed to `sign_tx`, plus the coin it spends.
pub struct UnsignedTx {
    pub coin: UtxoCoin,
    /// Transaction inputs.
    pub inputs: Vec<UnsignedTxInput>,
    /// Transaction outputs.
    pub outputs: Vec<TxOutput>,
    /// Transaction version.
    pub version: u32,
    /// Transaction lock_time.
    pub lock_time: u32,
}

impl UnsignedTx {
    pub(crate) fn sign_tx_message(&self) -> proto_bitcoin::SignTx {
        proto_bitcoin::SignTx {
            outputs_count: self.outputs.len() as u32,
            inputs_count: self.inputs.len() as u32,
            coin_name: Some(self.coin.to_string()),
            version: Some(self.version),
            lock_time: Some(self.lock_time),
        }
    }

    pub(crate) fn meta_message(&self) -> proto_bitcoin::TransactionType {
        proto_bitcoin::TransactionType {
            version: Some(self.version),
            lock_time: Some(self.lock_time),
            inputs_cnt: Some(self.inputs.len() as u32),
            outputs_cnt: Some(self.outputs.len() as u32),
            ..Default::default()
        }
    }

    /// The `TxInputType` for input `input_index` of this transaction, with
    /// the derivation path looked up in `input_paths`.
    pub(crate) fn input_message(
        &self,
        input_index: usize,
        input_paths: &InputPathMap,
    ) -> HwResult<proto_bitcoin::TransactionType> {
        let input = self.inputs.get(input_index).ok_or_else(|| {
            let error = format!(
                "Unexpected index '{}' of the tx input. Actual count of inputs: {}",
                input_index,
                self.inputs.len()
            );
            HwError::ProtocolError(error)
        })?;
        let path = input_paths
            .get(&input_index)
            .ok_or(HwError::MissingInputPath(input_index))?;

        let script_sig = if input.script_sig.is_empty() {
            None
        } else {
            Some(input.script_sig.clone())
        };
        let wire_input = proto_bitcoin::TxInputType {
            address_n: address_n(path),
            prev_hash: input.prev_hash.clone(),
            prev_index: input.prev_index,
            script_sig,
            sequence: Some(input.sequence),
            script_type: Some(proto_bitcoin::InputScriptType::Spendaddress as i32),
        };
        Ok(proto_bitcoin::TransactionType {
            inputs: vec![wire_input],
            ..Default::default()
        })
    }

    /// The `TxOutputType` for output `output_index`: change outputs become a
    /// derivation path, everything else an encoded address.
    pub(crate) fn output_message(
        &self,
        output_index: usize,
        change_paths: &ChangePathMap,
    ) -> HwResult<proto_bitcoin::TransactionType> {
        let output = self.outputs.get(output_index).ok_or_else(|| {
            let error = format!(
                "Unexpected index '{}' of the tx output. Actual count of outputs: {}",
                output_index,
                self.outputs.len()
            );
            HwError::ProtocolError(error)
        })?;

        let (address, script_type) = classify_output(&output.script_pubkey, output_index)?;
        let encoded = address.to_string();

        let wire_output = match change_paths.get(&encoded) {
            // Known change address, won't trigger a confirmation screen.
            Some(path) => proto_bitcoin::TxOutputType {
                address: None,
                address_n: address_n(path),
                amount: output.amount,
                script_type: script_type as i32,
            },
            None => proto_bitcoin::TxOutputType {
                address: Some(encoded),
                address_n: Vec::new(),
                amount: output.amount,
                script_type: script_type as i32,
            },
        };
        Ok(proto_bitcoin::TransactionType {
            outputs: vec![wire_output],
            ..Default::default()
        })
    }
}

/// P2PKH addresses are the most common, so try that first, then P2SH.
/// Anything else fails the job.
fn classify_output(
    script_pubkey: &[u8],
    output_index: usize,
) -> HwResult<(bitcoin::Address, proto_bitcoin::OutputScriptType)> {
    let script = bitcoin::Script::from_bytes(script_pubkey);
    let script_type = if script.is_p2pkh() {
        proto_bitcoin::OutputScriptType::Paytoaddress
    } else if script.is_p2sh() {
        proto_bitcoin::OutputScriptType::Paytoscripthash
    } else {
        return Err(HwError::IllegalOutputScript(output_index));
    };
    let address = bitcoin::Address::from_script(script, bitcoin::Network::Bitcoin)
        .map_err(|_| HwError::IllegalOutputScript(output_index))?;
    Ok((address, script_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hw_common::primitives::DerivationPath;
    use std::collections::HashMap;

    fn p2pkh_script(hash_byte: u8) -> Vec<u8> {
        let mut script = vec![0x76, 0xa9, 0x14];
        script.extend(std::iter::repeat(hash_byte).take(20));
        script.extend([0x88, 0xac]);
        script
    }

    fn p2sh_script(hash_byte: u8) -> Vec<u8> {
        let mut script = vec![0xa9, 0x14];
        script.extend(std::iter::repeat(hash_byte).take(20));
        script.push(0x87);
        script
    }

    fn sample_tx() -> UnsignedTx {
        UnsignedTx {
            coin: UtxoCoin::Bitcoin,
            inputs: vec![UnsignedTxInput {
                prev_hash: vec![0xaa; 32],
                prev_index: 0,
                sequence: 0xffffffff,
                script_sig: Vec::new(),
            }],
            outputs: vec![
                TxOutput {
                    amount: 90_000,
                    script_pubkey: p2pkh_script(0xbb),
                },
                TxOutput {
                    amount: 9_000,
                    script_pubkey: p2sh_script(0xcc),
                },
            ],
            version: 1,
            lock_time: 0,
        }
    }

    fn change_path() -> DerivationPath { "m/44'/0'/0'/1/0".parse().unwrap() }

    #[test]
    fn input_message_resolves_the_path() {
        let mut paths: InputPathMap = HashMap::new();
        paths.insert(0, "m/44'/0'/0'/0/0".parse().unwrap());
        let message = sample_tx().input_message(0, &paths).unwrap();
        let input = &message.inputs[0];
        assert_eq!(input.address_n.len(), 5);
        assert_eq!(input.script_sig, None);
        assert_eq!(
            input.script_type,
            Some(proto_bitcoin::InputScriptType::Spendaddress as i32)
        );
    }

    #[test]
    fn a_missing_input_path_fails_the_job() {
        let paths: InputPathMap = HashMap::new();
        assert!(matches!(
            sample_tx().input_message(0, &paths),
            Err(HwError::MissingInputPath(0))
        ));
    }

    #[test]
    fn foreign_outputs_are_sent_as_addresses() {
        let message = sample_tx().output_message(0, &HashMap::new()).unwrap();
        let output = &message.outputs[0];
        assert!(output.address.is_some());
        assert!(output.address_n.is_empty());
        assert_eq!(
            output.script_type,
            proto_bitcoin::OutputScriptType::Paytoaddress as i32
        );
    }

    #[test]
    fn p2sh_outputs_are_classified_as_script_hash() {
        let message = sample_tx().output_message(1, &HashMap::new()).unwrap();
        assert_eq!(
            message.outputs[0].script_type,
            proto_bitcoin::OutputScriptType::Paytoscripthash as i32
        );
    }

    #[test]
    fn change_outputs_are_sent_as_paths() {
        let tx = sample_tx();
        let (address, _) = classify_output(&tx.outputs[0].script_pubkey, 0).unwrap();
        let mut change: ChangePathMap = HashMap::new();
        change.insert(address.to_string(), change_path());

        let message = tx.output_message(0, &change).unwrap();
        let output = &message.outputs[0];
        assert_eq!(output.address, None);
        assert_eq!(output.address_n, address_n(&change_path()));
    }

    #[test]
    fn op_return_scripts_are_illegal() {
        let mut tx = sample_tx();
        tx.outputs[0].script_pubkey = vec![0x6a, 0x04, 0xde, 0xad, 0xbe, 0xef];
        assert!(matches!(
            tx.output_message(0, &HashMap::new()),
            Err(HwError::IllegalOutputScript(0))
        ));
    }
}
