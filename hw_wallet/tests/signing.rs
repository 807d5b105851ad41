//! End-to-end session scenarios against a scripted transport: bring-up,
//! PIN-gated requests, the full TxRequest signing dialog and its failure
//! modes.

use async_trait::async_trait;
use futures::executor::block_on;
use futures::{join, StreamExt};
use hw_wallet::derivation::address_n;
use hw_wallet::proto::messages::MessageType;
use hw_wallet::proto::{messages_bitcoin as proto_bitcoin, messages_common as proto_common,
                       messages_keepkey as proto_keepkey, messages_management as proto_management, ProtoMessage,
                       WireMessage};
use hw_wallet::transport::Transport;
use hw_wallet::utxo::{AncestorStore, ChangePathMap, InputPathMap, PrevTx, PrevTxInput, PrevTxOutput, TxOutput,
                      UnsignedTx, UnsignedTxInput, UtxoCoin};
use hw_wallet::{DerivationPath, HwClient, HwError, HwEvent, HwResult, KeyPurpose, PinMatrixKind, Vendor};
use prost::Message;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

struct MockTransport {
    responses: Mutex<VecDeque<HwResult<ProtoMessage>>>,
    written: Arc<Mutex<Vec<ProtoMessage>>>,
}

impl MockTransport {
    fn scripted(responses: Vec<HwResult<ProtoMessage>>) -> (MockTransport, Arc<Mutex<Vec<ProtoMessage>>>) {
        let written = Arc::new(Mutex::new(Vec::new()));
        let transport = MockTransport {
            responses: Mutex::new(responses.into()),
            written: written.clone(),
        };
        (transport, written)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn write_message(&mut self, message: ProtoMessage) -> HwResult<()> {
        self.written.lock().unwrap().push(message);
        Ok(())
    }

    async fn read_message(&mut self) -> HwResult<ProtoMessage> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(HwError::TransportClosed))
    }
}

fn wire<M: WireMessage>(message: M) -> HwResult<ProtoMessage> {
    let mut buf = Vec::with_capacity(message.encoded_len());
    message.encode(&mut buf).unwrap();
    Ok(ProtoMessage::new(M::message_type(), buf))
}

fn decode_written<M: WireMessage>(written: &ProtoMessage) -> M {
    assert_eq!(written.message_type(), M::message_type());
    written.clone().into_message().unwrap()
}

fn trezor_features() -> proto_management::Features {
    proto_management::Features {
        vendor: Some("bitcointrezor.com".to_owned()),
        major_version: Some(1),
        minor_version: Some(3),
        patch_version: Some(3),
        bootloader_mode: None,
        device_id: Some("DEADBEEF".to_owned()),
        pin_protection: Some(true),
        passphrase_protection: Some(false),
        language: Some("english".to_owned()),
        label: Some("Aardvark".to_owned()),
        coins: Vec::new(),
        initialized: Some(true),
        revision: None,
        bootloader_hash: None,
        imported: Some(false),
    }
}

fn pin_request() -> proto_common::PinMatrixRequest {
    proto_common::PinMatrixRequest {
        r#type: Some(proto_common::pin_matrix_request::PinMatrixRequestType::Current as i32),
    }
}

fn failure(code: proto_common::failure::FailureType, message: &str) -> proto_common::Failure {
    proto_common::Failure {
        code: Some(code as i32),
        message: Some(message.to_owned()),
    }
}

fn tx_request(
    request_type: proto_bitcoin::tx_request::RequestType,
    request_index: Option<u32>,
    tx_hash: Option<Vec<u8>>,
    serialized: Option<proto_bitcoin::TxRequestSerializedType>,
) -> proto_bitcoin::TxRequest {
    proto_bitcoin::TxRequest {
        request_type: Some(request_type as i32),
        details: Some(proto_bitcoin::TxRequestDetailsType {
            request_index,
            tx_hash,
        }),
        serialized,
    }
}

fn p2pkh_script(hash_byte: u8) -> Vec<u8> {
    let mut script = vec![0x76, 0xa9, 0x14];
    script.extend(std::iter::repeat(hash_byte).take(20));
    script.extend([0x88, 0xac]);
    script
}

/// A minimal consensus-valid one-input one-output legacy transaction.
fn signed_raw_tx() -> Vec<u8> {
    let hex_tx = format!(
        "0100000001{prev_hash}00000000{script_sig}ffffffff01905f0100000000001976a914{pkh}88ac00000000",
        prev_hash = "11".repeat(32),
        script_sig = "00",
        pkh = "bb".repeat(20),
    );
    hex::decode(hex_tx).unwrap()
}

const PREV_HASH: [u8; 32] = [0x11; 32];

fn current_tx() -> UnsignedTx {
    UnsignedTx {
        coin: UtxoCoin::Bitcoin,
        inputs: vec![UnsignedTxInput {
            prev_hash: PREV_HASH.to_vec(),
            prev_index: 0,
            sequence: 0xffffffff,
            script_sig: Vec::new(),
        }],
        outputs: vec![TxOutput {
            amount: 90_000,
            script_pubkey: p2pkh_script(0xbb),
        }],
        version: 1,
        lock_time: 0,
    }
}

fn ancestor_tx() -> PrevTx {
    PrevTx {
        inputs: vec![PrevTxInput {
            prev_hash: vec![0x22; 32],
            prev_index: 1,
            script_sig: vec![0x51],
            sequence: 0xffffffff,
        }],
        outputs: vec![PrevTxOutput {
            amount: 100_000,
            script_pubkey: p2pkh_script(0xdd),
        }],
        version: 1,
        lock_time: 0,
    }
}

fn input_paths() -> InputPathMap {
    let mut paths = HashMap::new();
    paths.insert(0, "m/44'/0'/0'/0/0".parse::<DerivationPath>().unwrap());
    paths
}

fn change_paths() -> ChangePathMap {
    // The single output of `current_tx` doubles as change in scenario 4.
    let script = p2pkh_script(0xbb);
    let address = bitcoin::Address::from_script(bitcoin::Script::from_bytes(&script), bitcoin::Network::Bitcoin)
        .unwrap()
        .to_string();
    let mut paths = HashMap::new();
    paths.insert(address, "m/44'/0'/0'/1/0".parse::<DerivationPath>().unwrap());
    paths
}

fn drain(events: &mut hw_wallet::EventStream) -> Vec<HwEvent> {
    let mut drained = Vec::new();
    while let Ok(Some(event)) = events.try_next() {
        drained.push(event);
    }
    drained
}

#[test]
fn initialise_publishes_device_ready_with_features_on_context() {
    let (transport, written) = MockTransport::scripted(vec![wire(trezor_features())]);
    let client = HwClient::new(transport, Vendor::Trezor);
    let mut events = client.events();

    let features = block_on(client.start()).unwrap();
    assert_eq!(features.label.as_deref(), Some("Aardvark"));

    let context = client.context();
    assert_eq!(context.features.as_ref().unwrap().version, (1, 3, 3));
    assert!(client.is_wallet_present());

    let drained = drain(&mut events);
    assert!(matches!(drained[0], HwEvent::DeviceAttached));
    assert!(matches!(drained[1], HwEvent::DeviceReady(_)));

    // Initialize is type_tag 0 with an empty body.
    let written = written.lock().unwrap();
    assert_eq!(written[0].message_type(), MessageType::Initialize);
    assert!(written[0].payload().is_empty());
}

#[test]
fn keepkey_features_surface_their_policies() {
    let keepkey_features = proto_keepkey::Features {
        vendor: Some("keepkey.com".to_owned()),
        major_version: Some(3),
        minor_version: Some(2),
        patch_version: Some(0),
        bootloader_mode: None,
        device_id: Some("KK42".to_owned()),
        pin_protection: Some(true),
        passphrase_protection: Some(false),
        language: None,
        label: Some("Brick".to_owned()),
        coins: Vec::new(),
        initialized: Some(true),
        revision: None,
        bootloader_hash: None,
        imported: None,
        policies: vec![proto_keepkey::PolicyType {
            policy_name: Some("ShapeShift".to_owned()),
            enabled: Some(true),
        }],
    };
    let (transport, _written) = MockTransport::scripted(vec![wire(keepkey_features)]);
    let client = HwClient::new(transport, Vendor::KeepKey);

    let features = block_on(client.start()).unwrap();
    assert_eq!(features.family, Vendor::KeepKey);
    assert_eq!(features.policies.len(), 1);
    assert_eq!(features.policies[0].name, "ShapeShift");
}

#[test]
fn pin_gated_get_address() {
    let (transport, written) = MockTransport::scripted(vec![
        wire(pin_request()),
        wire(proto_bitcoin::Address {
            address: "1BitcoinEaterAddressDontSendf59kuE".to_owned(),
        }),
    ]);
    let client = HwClient::new(transport, Vendor::Trezor);
    let mut events = client.events();

    let address = block_on(async {
        let request = client.request_address(0, KeyPurpose::ReceiveFunds, 0, false);
        let answer = async {
            while let Some(event) = (&mut events).next().await {
                if let HwEvent::ShowPinEntry(kind) = event {
                    assert_eq!(kind, PinMatrixKind::Current);
                    client.provide_pin("5".to_owned());
                    break;
                }
            }
        };
        let (address, _) = join!(request, answer);
        address.unwrap()
    });
    assert_eq!(address, "1BitcoinEaterAddressDontSendf59kuE");

    let drained = drain(&mut events);
    assert!(drained
        .iter()
        .any(|event| matches!(event, HwEvent::AddressReceived(a) if a == &address)));

    let written = written.lock().unwrap();
    assert_eq!(written[0].message_type(), MessageType::GetAddress);
    let ack: proto_common::PinMatrixAck = decode_written(&written[1]);
    assert_eq!(ack.pin, "5");
}

#[test]
fn deterministic_hierarchy_is_cached_on_the_context() {
    let public_key = proto_bitcoin::PublicKey {
        node: proto_common::HdNodeType {
            depth: 3,
            fingerprint: 0x1234_5678,
            child_num: 0x8000_0000,
            chain_code: vec![0xcd; 32],
            private_key: None,
            public_key: vec![0x02; 33],
        },
        xpub: Some("xpub6612345".to_owned()),
    };
    let (transport, _written) = MockTransport::scripted(vec![wire(pin_request()), wire(public_key)]);
    let client = HwClient::new(transport, Vendor::Trezor);
    let mut events = client.events();

    let account_path: DerivationPath = "m/44'/0'/0'".parse().unwrap();
    let root = block_on(async {
        let request = client.request_deterministic_hierarchy(account_path.clone());
        let answer = async {
            while let Some(event) = (&mut events).next().await {
                if matches!(event, HwEvent::ShowPinEntry(_)) {
                    client.provide_pin("5".to_owned());
                    break;
                }
            }
        };
        let (root, _) = join!(request, answer);
        root.unwrap()
    });

    assert_eq!(root.path, account_path);
    assert_eq!(root.chain_code, vec![0xcd; 32]);

    let context = client.context();
    let cached = context.hierarchy.unwrap();
    assert_eq!(cached.path, account_path);
    assert_eq!(cached.xpub.as_deref(), Some("xpub6612345"));

    assert!(drain(&mut events)
        .iter()
        .any(|event| matches!(event, HwEvent::DeterministicHierarchy(_))));
}

#[test]
fn one_input_one_output_signing_dialog() {
    use proto_bitcoin::tx_request::RequestType;

    let raw_tx = signed_raw_tx();
    let (first_half, second_half) = raw_tx.split_at(30);
    let signature = vec![0x30, 0x45, 0x02, 0x21];

    let (transport, written) = MockTransport::scripted(vec![
        wire(tx_request(RequestType::Txmeta, None, None, None)),
        wire(tx_request(RequestType::Txinput, Some(0), None, None)),
        wire(tx_request(RequestType::Txmeta, None, Some(PREV_HASH.to_vec()), None)),
        wire(tx_request(RequestType::Txinput, Some(0), Some(PREV_HASH.to_vec()), None)),
        wire(tx_request(RequestType::Txoutput, Some(0), Some(PREV_HASH.to_vec()), None)),
        wire(tx_request(
            RequestType::Txoutput,
            Some(0),
            None,
            Some(proto_bitcoin::TxRequestSerializedType {
                signature_index: Some(0),
                signature: Some(signature.clone()),
                serialized_tx: Some(first_half.to_vec()),
            }),
        )),
        wire(tx_request(
            RequestType::Txfinished,
            None,
            None,
            Some(proto_bitcoin::TxRequestSerializedType {
                signature_index: None,
                signature: None,
                serialized_tx: Some(second_half.to_vec()),
            }),
        )),
    ]);
    let client = HwClient::new(transport, Vendor::Trezor);
    let mut events = client.events();

    let mut ancestors = AncestorStore::new();
    ancestors.insert(PREV_HASH.to_vec(), ancestor_tx());

    let result = block_on(client.sign_tx(current_tx(), input_paths(), change_paths(), ancestors)).unwrap();

    assert_eq!(result.signatures, vec![signature]);
    assert_eq!(result.serialized_tx, raw_tx);
    // The accumulated serialization is a valid consensus transaction.
    let parsed: bitcoin::Transaction = bitcoin::consensus::deserialize(&result.serialized_tx).unwrap();
    assert_eq!(parsed.input.len(), 1);
    assert_eq!(parsed.output.len(), 1);

    let context = client.context();
    assert_eq!(context.serialized_tx, raw_tx);
    assert_eq!(context.signatures, result.signatures);

    assert!(drain(&mut events)
        .iter()
        .any(|event| matches!(event, HwEvent::OperationSucceeded(_))));

    let written = written.lock().unwrap();
    assert_eq!(written.len(), 7);
    assert_eq!(written[0].message_type(), MessageType::SignTx);

    // Meta of the current transaction.
    let meta: proto_bitcoin::TxAck = decode_written(&written[1]);
    assert_eq!(meta.tx.unwrap().inputs_cnt, Some(1));

    // Input 0 of the current transaction carries its derivation path.
    let input: proto_bitcoin::TxAck = decode_written(&written[2]);
    let input = &input.tx.unwrap().inputs[0];
    assert_eq!(input.address_n, address_n(&input_paths()[&0]));
    assert_eq!(input.prev_hash, PREV_HASH.to_vec());

    // Ancestor input replays its script_sig with no path.
    let prev_input: proto_bitcoin::TxAck = decode_written(&written[4]);
    let prev_input = &prev_input.tx.unwrap().inputs[0];
    assert!(prev_input.address_n.is_empty());
    assert_eq!(prev_input.script_sig.as_deref(), Some(&[0x51][..]));

    // Ancestor output arrives as a raw bin_output.
    let bin_output: proto_bitcoin::TxAck = decode_written(&written[5]);
    assert_eq!(bin_output.tx.unwrap().bin_outputs[0].amount, 100_000);

    // The current change output travels as a path, not an address.
    let change: proto_bitcoin::TxAck = decode_written(&written[6]);
    let change = &change.tx.unwrap().outputs[0];
    assert_eq!(change.address, None);
    assert_eq!(
        change.address_n,
        address_n(&"m/44'/0'/0'/1/0".parse::<DerivationPath>().unwrap())
    );
}

#[test]
fn missing_ancestor_cancels_and_fails_the_job() {
    use proto_bitcoin::tx_request::RequestType;

    let (transport, written) = MockTransport::scripted(vec![
        wire(tx_request(RequestType::Txmeta, None, Some(PREV_HASH.to_vec()), None)),
        // The device acknowledges our Cancel with a Failure.
        wire(failure(
            proto_common::failure::FailureType::FailureActionCancelled,
            "Aborted",
        )),
    ]);
    let client = HwClient::new(transport, Vendor::Trezor);
    let mut events = client.events();

    let result = block_on(client.sign_tx(
        current_tx(),
        input_paths(),
        change_paths(),
        AncestorStore::new(),
    ));
    assert!(matches!(result, Err(HwError::MissingAncestor(_))));

    assert!(drain(&mut events)
        .iter()
        .any(|event| matches!(event, HwEvent::OperationFailed(_))));

    let written = written.lock().unwrap();
    assert_eq!(written[0].message_type(), MessageType::SignTx);
    assert_eq!(written[1].message_type(), MessageType::Cancel);
}

#[test]
fn mid_stream_detach_destroys_the_job_without_busy() {
    use proto_bitcoin::tx_request::RequestType;

    let (transport, _written) = MockTransport::scripted(vec![
        wire(tx_request(RequestType::Txmeta, None, None, None)),
        wire(tx_request(RequestType::Txinput, Some(0), None, None)),
        // EOF after this point.
    ]);
    let client = HwClient::new(transport, Vendor::Trezor);
    let mut events = client.events();

    let mut ancestors = AncestorStore::new();
    ancestors.insert(PREV_HASH.to_vec(), ancestor_tx());
    let result = block_on(client.sign_tx(current_tx(), input_paths(), change_paths(), ancestors));
    assert!(matches!(result, Err(HwError::TransportClosed)));

    assert!(drain(&mut events)
        .iter()
        .any(|event| matches!(event, HwEvent::DeviceDetached)));
    assert!(client.context().serialized_tx.is_empty());

    // The job died with the session; a new sign attempt must not be Busy.
    let mut ancestors = AncestorStore::new();
    ancestors.insert(PREV_HASH.to_vec(), ancestor_tx());
    let retry = block_on(client.sign_tx(current_tx(), input_paths(), change_paths(), ancestors));
    assert!(matches!(retry, Err(HwError::TransportClosed)));
}

#[test]
fn a_second_operation_while_suspended_is_busy() {
    let (transport, _written) = MockTransport::scripted(vec![
        wire(pin_request()),
        wire(proto_bitcoin::Address {
            address: "1BusyTest".to_owned(),
        }),
    ]);
    let client = HwClient::new(transport, Vendor::Trezor);
    let mut events = client.events();

    block_on(async {
        let request = client.request_address(0, KeyPurpose::ReceiveFunds, 0, false);
        let driver = async {
            while let Some(event) = (&mut events).next().await {
                if matches!(event, HwEvent::ShowPinEntry(_)) {
                    let busy = client.request_address(0, KeyPurpose::ReceiveFunds, 1, false).await;
                    assert!(matches!(busy, Err(HwError::Busy)));
                    client.provide_pin("1".to_owned());
                    break;
                }
            }
        };
        let (address, _) = join!(request, driver);
        assert!(address.is_ok());
    });
}

#[test]
fn cancel_short_circuits_a_pin_prompt() {
    let (transport, written) = MockTransport::scripted(vec![
        wire(pin_request()),
        // Reply to the Cancel we send when short-circuiting.
        wire(failure(
            proto_common::failure::FailureType::FailureActionCancelled,
            "Aborted",
        )),
    ]);
    let client = HwClient::new(transport, Vendor::Trezor);
    let mut events = client.events();

    block_on(async {
        let request = client.request_address(0, KeyPurpose::ReceiveFunds, 0, false);
        let driver = async {
            while let Some(event) = (&mut events).next().await {
                if matches!(event, HwEvent::ShowPinEntry(_)) {
                    client.cancel().await;
                    break;
                }
            }
        };
        let (result, _) = join!(request, driver);
        assert!(matches!(result, Err(HwError::Cancelled)));
    });

    let written = written.lock().unwrap();
    assert!(written
        .iter()
        .any(|message| message.message_type() == MessageType::Cancel));
}
