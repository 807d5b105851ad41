//! The device-led transaction-signing dialog.
//!
//! After `SignTx` opens the dialog, the device drives: every `TxRequest`
//! names the piece it wants next (meta fields, an input or an output, of
//! either the current transaction or an ancestor identified by `tx_hash`)
//! and may carry a slice of the signed serialization. `TXFINISHED` ends the
//! dialog.

use crate::adapter::{TxRequestKind, TxSignRequest};
use crate::client::HwSession;
use crate::error::{HwError, HwResult};
use crate::proto::messages_bitcoin as proto_bitcoin;
use crate::response_processor::{ProcessResponse, RequestProcessor};
use crate::result_handler::ResultHandler;
use crate::utxo::{AncestorStore, ChangePathMap, InputPathMap, Signature, UnsignedTx};
use log::{debug, info};

const NO_REQUEST_INDEX_ERROR: &str = "'TxRequest::request_index' is expected to be set";

/// Everything one signing dialog needs. Created when signing begins and
/// dropped on any terminal outcome; only one job exists per session.
pub struct SigningJob {
    pub tx: UnsignedTx,
    pub input_paths: InputPathMap,
    pub change_paths: ChangePathMap,
    pub ancestors: AncestorStore,
}

pub struct TxSignResult {
    /// One signature per input, in input order.
    pub signatures: Vec<Signature>,
    /// The device's canonical serialization of the signed transaction.
    pub serialized_tx: Vec<u8>,
}

impl TxSignResult {
    fn new_with_inputs_count(inputs_count: usize) -> TxSignResult {
        TxSignResult {
            signatures: vec![Signature::new(); inputs_count],
            serialized_tx: Vec::new(),
        }
    }
}

impl<'a> HwSession<'a> {
    pub(crate) async fn sign_tx_dialog<P>(&mut self, job: &SigningJob, processor: &P) -> HwResult<TxSignResult>
    where
        P: RequestProcessor + Sync,
    {
        let mut result = TxSignResult::new_with_inputs_count(job.tx.inputs.len());

        info!(
            "Start transaction signing: COIN={} INPUTS_COUNT={} OUTPUTS_COUNT={} ANCESTORS={}",
            job.tx.coin,
            job.tx.inputs.len(),
            job.tx.outputs.len(),
            job.ancestors.len()
        );

        // Please note `request` is replaced by every exchange in the loop below.
        let mut request = self.tx_exchange(job.tx.sign_tx_message(), processor).await?;

        loop {
            extract_serialized_data(&request, &mut result)?;

            let is_prev = request.tx_hash.is_some();
            debug!("TxRequest: REQUEST_TYPE={:?} PREV={}", request.kind, is_prev);

            let ack = match (request.kind, request.tx_hash.as_deref()) {
                (TxRequestKind::Finished, _) => return Ok(result),
                (TxRequestKind::Meta, None) => job.tx.meta_message(),
                (TxRequestKind::Meta, Some(prev_hash)) => job.ancestors.get(prev_hash)?.meta_message(),
                (TxRequestKind::Input, None) => {
                    job.tx.input_message(request_index(&request)?, &job.input_paths)?
                },
                (TxRequestKind::Input, Some(prev_hash)) => {
                    job.ancestors.get(prev_hash)?.input_message(request_index(&request)?)?
                },
                (TxRequestKind::Output, None) => {
                    job.tx.output_message(request_index(&request)?, &job.change_paths)?
                },
                (TxRequestKind::Output, Some(prev_hash)) => {
                    job.ancestors.get(prev_hash)?.output_message(request_index(&request)?)?
                },
            };

            request = self
                .tx_exchange(proto_bitcoin::TxAck { tx: Some(ack) }, processor)
                .await?;
        }
    }

    /// One exchange of the dialog: send, resolve any interleaved prompts,
    /// land on the next `TxRequest`.
    async fn tx_exchange<S, P>(&mut self, request: S, processor: &P) -> HwResult<TxSignRequest>
    where
        S: crate::proto::WireMessage,
        P: RequestProcessor + Sync,
    {
        let result_handler = ResultHandler::new(crate::adapter::tx_sign_request);
        self.call(request, result_handler).await?.process(processor).await
    }
}

fn request_index(request: &TxSignRequest) -> HwResult<usize> {
    request
        .request_index
        .map(|index| index as usize)
        .ok_or_else(|| HwError::ProtocolError(NO_REQUEST_INDEX_ERROR.to_owned()))
}

fn extract_serialized_data(request: &TxSignRequest, result: &mut TxSignResult) -> HwResult<()> {
    if let Some(ref signature) = request.signature {
        let input_index = request
            .signature_index
            .ok_or_else(|| HwError::ProtocolError("'TxRequest::signature_index' is expected to be set".to_owned()))?
            as usize;
        if input_index >= result.signatures.len() {
            let error = format!(
                "Received a signature of unknown transaction input: {}. Number of inputs: {}",
                input_index,
                result.signatures.len()
            );
            return Err(HwError::ProtocolError(error));
        }

        result.signatures[input_index] = signature.clone();
    }

    if let Some(ref serialized_tx) = request.serialized_tx {
        result.serialized_tx.extend_from_slice(serialized_tx);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished_with(signature_index: Option<u32>, signature: Option<Vec<u8>>, chunk: Option<Vec<u8>>) -> TxSignRequest {
        TxSignRequest {
            kind: TxRequestKind::Finished,
            request_index: None,
            tx_hash: None,
            signature_index,
            signature,
            serialized_tx: chunk,
        }
    }

    #[test]
    fn serialized_chunks_accumulate_in_order() {
        let mut result = TxSignResult::new_with_inputs_count(1);
        extract_serialized_data(&finished_with(None, None, Some(vec![0x01, 0x02])), &mut result).unwrap();
        extract_serialized_data(&finished_with(None, None, Some(vec![0x03])), &mut result).unwrap();
        assert_eq!(result.serialized_tx, vec![0x01, 0x02, 0x03]);
    }

    #[test]
    fn signatures_land_at_their_index() {
        let mut result = TxSignResult::new_with_inputs_count(2);
        extract_serialized_data(&finished_with(Some(1), Some(vec![0x30, 0x45]), None), &mut result).unwrap();
        assert!(result.signatures[0].is_empty());
        assert_eq!(result.signatures[1], vec![0x30, 0x45]);
    }

    #[test]
    fn a_signature_without_index_is_a_protocol_error() {
        let mut result = TxSignResult::new_with_inputs_count(1);
        assert!(extract_serialized_data(&finished_with(None, Some(vec![0x30]), None), &mut result).is_err());
    }

    #[test]
    fn a_signature_for_an_unknown_input_is_rejected() {
        let mut result = TxSignResult::new_with_inputs_count(1);
        assert!(extract_serialized_data(&finished_with(Some(3), Some(vec![0x30]), None), &mut result).is_err());
    }
}
