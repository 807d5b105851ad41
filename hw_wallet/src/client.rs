use crate::adapter::{self, DeviceFeatures, FailureKind, FailurePayload, MessageSignaturePayload, PublicKeyNode,
                     SignedIdentityPayload};
use crate::context::{HierarchyRoot, SessionContext};
use crate::derivation::{address_n, bip44_address_n, KeyPurpose};
use crate::error::{HwError, HwResult};
use crate::events::{EventBus, EventStream, HwEvent};
use crate::proto::messages::MessageType;
use crate::proto::messages_common as proto_common;
use crate::proto::messages_keepkey as proto_keepkey;
use crate::proto::messages_management as proto_management;
use crate::proto::{ProtoMessage, WireMessage};
use crate::response::HwResponse;
use crate::response_processor::{EventBusProcessor, ProcessResponse};
use crate::result_handler::ResultHandler;
use crate::transport::Transport;
use crate::user_interaction::UserInput;
use crate::utxo::{AncestorStore, ChangePathMap, IdentityDescriptor, InputPathMap, SigningJob, TxSignResult,
                  UnsignedTx, UtxoCoin};
use crate::Vendor;
use futures::channel::mpsc;
use futures::lock::{Mutex as AsyncMutex, MutexGuard as AsyncMutexGuard};
use hw_common::primitives::{DerivationPath, EcdsaCurve};
use log::warn;
use prost::Message;
use std::sync::{Arc, Mutex};

/// A cloneable handle to one device session.
///
/// Exactly one operation can be in flight at a time; a second call fails
/// synchronously with [`HwError::Busy`] without touching the wire. Prompt
/// answers (`provide_pin`, `provide_passphrase`) and `cancel` are the only
/// calls that are valid while an operation is suspended.
#[derive(Clone)]
pub struct HwClient {
    inner: Arc<AsyncMutex<HwClientImpl>>,
    vendor: Vendor,
    bus: Arc<EventBus>,
    context: Arc<Mutex<SessionContext>>,
    input_tx: mpsc::UnboundedSender<UserInput>,
    processor: Arc<EventBusProcessor>,
}

struct HwClientImpl {
    transport: Box<dyn Transport + Send + Sync + 'static>,
}

impl HwClient {
    pub fn new<T>(transport: T, vendor: Vendor) -> HwClient
    where
        T: Transport + Send + Sync + 'static,
    {
        let (input_tx, input_rx) = mpsc::unbounded();
        let bus = Arc::new(EventBus::new());
        let processor = Arc::new(EventBusProcessor::new(bus.clone(), input_rx));
        HwClient {
            inner: Arc::new(AsyncMutex::new(HwClientImpl {
                transport: Box::new(transport),
            })),
            vendor,
            bus,
            context: Arc::new(Mutex::new(SessionContext::default())),
            input_tx,
            processor,
        }
    }

    pub fn vendor(&self) -> Vendor { self.vendor }

    /// Subscribe to session events. Delivery is synchronous with respect to
    /// context updates: by the time an event can be observed, the context
    /// already reflects it.
    pub fn events(&self) -> EventStream { self.bus.subscribe() }

    /// A snapshot of the shared session context.
    pub fn context(&self) -> SessionContext { self.context.lock().expect("session context poisoned").clone() }

    pub fn is_wallet_present(&self) -> bool { self.context().is_wallet_present() }

    /// Answer a pending `SHOW_PIN_ENTRY` prompt. Never blocks.
    pub fn provide_pin(&self, pin: String) {
        if self.input_tx.unbounded_send(UserInput::Pin(pin)).is_err() {
            warn!("PIN supplied but the session is gone");
        }
    }

    /// Answer a pending `SHOW_PASSPHRASE_ENTRY` prompt. Never blocks.
    pub fn provide_passphrase(&self, passphrase: String) {
        if self.input_tx.unbounded_send(UserInput::Passphrase(passphrase)).is_err() {
            warn!("Passphrase supplied but the session is gone");
        }
    }

    /// Abort the in-flight operation, or tell an idle device to abandon
    /// whatever prompt it is showing.
    pub async fn cancel(&self) {
        let _ = self.input_tx.unbounded_send(UserInput::Cancel);
        if let Some(inner) = self.inner.try_lock() {
            // Nothing in flight; the queued cancel will be drained, so tell
            // the device directly.
            let mut session = HwSession {
                inner,
                vendor: self.vendor,
            };
            session.cancel_last_op().await;
        }
    }

    /// Bring the session up: reset the context, `Initialize` the device and
    /// cache its `Features`. Publishes DEVICE_READY on success.
    pub async fn start(&self) -> HwResult<DeviceFeatures> {
        self.set_context(|ctx| ctx.reset());
        self.bus.publish(HwEvent::DeviceAttached);

        let mut session = self.session()?;
        match self.features_exchange(&mut session, proto_management::Initialize {}).await {
            Ok(features) => {
                self.set_context(|ctx| ctx.features = Some(features.clone()));
                self.bus.publish(HwEvent::DeviceReady(features.clone()));
                Ok(features)
            },
            Err(e) => {
                if let HwError::TransportClosed = e {
                    self.set_context(|ctx| ctx.reset());
                    self.bus.publish(HwEvent::DeviceDetached);
                }
                self.bus.publish(HwEvent::DeviceFailed(e.to_string()));
                Err(e)
            },
        }
    }

    /// Wind the session down. Waits for an in-flight operation to finish
    /// (nudging it with a cancel first), clears the device session and the
    /// context.
    pub async fn stop(&self) {
        let _ = self.input_tx.unbounded_send(UserInput::Cancel);
        let inner = self.inner.lock().await;
        let mut session = HwSession {
            inner,
            vendor: self.vendor,
        };
        session.clear_session_quietly().await;
        drop(session);
        self.set_context(|ctx| ctx.reset());
        self.bus.publish(HwEvent::DeviceDetached);
    }

    pub async fn request_features(&self) -> HwResult<DeviceFeatures> {
        let mut session = self.session()?;
        match self.features_exchange(&mut session, proto_management::GetFeatures {}).await {
            Ok(features) => {
                self.set_context(|ctx| ctx.features = Some(features.clone()));
                Ok(features)
            },
            Err(e) => Err(self.report_op_error(e)),
        }
    }

    pub async fn request_public_key(&self, path: DerivationPath) -> HwResult<PublicKeyNode> {
        let mut session = self.session()?;
        let result = session
            .get_public_key(address_n(&path), UtxoCoin::Bitcoin, EcdsaCurve::Secp256k1, &*self.processor)
            .await;
        match result {
            Ok(node) => {
                self.bus.publish(HwEvent::PublicKeyReceived(node.clone()));
                Ok(node)
            },
            Err(e) => Err(self.report_op_error(e)),
        }
    }

    /// Retrieve the account root at `account_path` and cache it as the
    /// deterministic hierarchy root. Child derivation happens in the
    /// embedder's Bitcoin library, off the cached (chain code, public key).
    pub async fn request_deterministic_hierarchy(&self, account_path: DerivationPath) -> HwResult<HierarchyRoot> {
        let mut session = self.session()?;
        let result = session
            .get_public_key(
                address_n(&account_path),
                UtxoCoin::Bitcoin,
                EcdsaCurve::Secp256k1,
                &*self.processor,
            )
            .await;
        match result {
            Ok(node) => {
                let root = HierarchyRoot {
                    path: account_path,
                    chain_code: node.chain_code,
                    public_key: node.public_key,
                    xpub: node.xpub,
                };
                self.set_context(|ctx| ctx.hierarchy = Some(root.clone()));
                self.bus.publish(HwEvent::DeterministicHierarchy(root.clone()));
                Ok(root)
            },
            Err(e) => Err(self.report_op_error(e)),
        }
    }

    /// Request the address at `m/44'/0'/account'/chain/index`.
    pub async fn request_address(
        &self,
        account: u32,
        purpose: KeyPurpose,
        index: u32,
        show_on_device: bool,
    ) -> HwResult<String> {
        let mut session = self.session()?;
        let result = session
            .get_utxo_address(
                bip44_address_n(account, purpose, index),
                UtxoCoin::Bitcoin,
                show_on_device,
                &*self.processor,
            )
            .await;
        match result {
            Ok(address) => {
                self.bus.publish(HwEvent::AddressReceived(address.clone()));
                Ok(address)
            },
            Err(e) => Err(self.report_op_error(e)),
        }
    }

    /// Drive the device-led signing dialog for `tx`.
    ///
    /// `input_paths` must cover every input index the device will ask for,
    /// `ancestors` every previous transaction referenced by an input, and
    /// `change_paths` maps encoded change addresses to their account paths.
    /// The accumulated signatures and the serialized signed transaction are
    /// exposed on the context when OPERATION_SUCCEEDED fires.
    pub async fn sign_tx(
        &self,
        tx: UnsignedTx,
        input_paths: InputPathMap,
        change_paths: ChangePathMap,
        ancestors: AncestorStore,
    ) -> HwResult<TxSignResult> {
        let mut session = self.session()?;
        self.set_context(|ctx| ctx.reset_signing());

        let job = SigningJob {
            tx,
            input_paths,
            change_paths,
            ancestors,
        };
        match session.sign_tx_dialog(&job, &*self.processor).await {
            Ok(result) => {
                self.set_context(|ctx| {
                    ctx.signatures = result.signatures.clone();
                    ctx.serialized_tx = result.serialized_tx.clone();
                });
                self.bus.publish(HwEvent::OperationSucceeded(None));
                Ok(result)
            },
            Err(e) => {
                if matches!(
                    e,
                    HwError::MissingInputPath(_)
                        | HwError::MissingAncestor(_)
                        | HwError::IllegalOutputScript(_)
                        | HwError::ProtocolError(_)
                ) {
                    // Host-side data gap; the device is still waiting for a
                    // TxAck, so release it.
                    session.cancel_last_op().await;
                }
                Err(self.report_op_error(e))
            },
        }
    }

    /// Liveness check; the device echoes `message` in its `Success` reply.
    pub async fn ping(&self, message: String) -> HwResult<Option<String>> {
        self.run_success_op(proto_management::Ping {
            message: Some(message),
            button_protection: None,
            pin_protection: None,
            passphrase_protection: None,
        })
        .await
    }

    /// Drop the device's cached PIN/passphrase state.
    pub async fn clear_session(&self) -> HwResult<Option<String>> {
        self.run_success_op(proto_management::ClearSession {}).await
    }

    /// Wipe the device. Expect a button prompt.
    pub async fn wipe_device(&self) -> HwResult<Option<String>> {
        self.run_success_op(proto_management::WipeDevice {}).await
    }

    /// Start the on-device change/set/remove PIN workflow.
    pub async fn change_pin(&self, remove: bool) -> HwResult<Option<String>> {
        self.run_success_op(proto_management::ChangePin { remove: Some(remove) }).await
    }

    pub async fn apply_settings(
        &self,
        language: Option<String>,
        label: Option<String>,
        use_passphrase: Option<bool>,
    ) -> HwResult<Option<String>> {
        self.run_success_op(proto_management::ApplySettings {
            language,
            label,
            use_passphrase,
        })
        .await
    }

    /// Sample the device's hardware RNG.
    pub async fn get_entropy(&self, size: u32) -> HwResult<Vec<u8>> {
        let mut session = self.session()?;
        let result_handler = ResultHandler::new(|m: proto_management::Entropy| Ok(m.entropy));
        let result = match session.call(proto_management::GetEntropy { size }, result_handler).await {
            Ok(response) => response.process(&*self.processor).await,
            Err(e) => Err(e),
        };
        result.map_err(|e| self.report_op_error(e))
    }

    /// Sign `message` with the key at `path`, Bitcoin message-signing style.
    pub async fn sign_message(&self, path: DerivationPath, message: Vec<u8>) -> HwResult<MessageSignaturePayload> {
        let mut session = self.session()?;
        session
            .sign_message(address_n(&path), message, UtxoCoin::Bitcoin, &*self.processor)
            .await
            .map_err(|e| self.report_op_error(e))
    }

    /// Encrypt or decrypt `value` under the key at `path` (SLIP-0011 style
    /// symmetric key/value storage).
    #[allow(clippy::too_many_arguments)]
    pub async fn cipher_key_value(
        &self,
        path: DerivationPath,
        key: String,
        value: Vec<u8>,
        encrypt: bool,
        ask_on_encrypt: bool,
        ask_on_decrypt: bool,
        iv: Option<Vec<u8>>,
    ) -> HwResult<Vec<u8>> {
        let mut session = self.session()?;
        session
            .cipher_key_value(
                address_n(&path),
                key,
                value,
                encrypt,
                ask_on_encrypt,
                ask_on_decrypt,
                iv,
                &*self.processor,
            )
            .await
            .map_err(|e| self.report_op_error(e))
    }

    /// Sign an identity challenge (SLIP-0013).
    pub async fn sign_identity(
        &self,
        identity: &IdentityDescriptor,
        challenge_hidden: Vec<u8>,
        challenge_visual: String,
    ) -> HwResult<SignedIdentityPayload> {
        let mut session = self.session()?;
        session
            .sign_identity(identity, challenge_hidden, challenge_visual, &*self.processor)
            .await
            .map_err(|e| self.report_op_error(e))
    }

    async fn run_success_op<S: WireMessage>(&self, request: S) -> HwResult<Option<String>> {
        let mut session = self.session()?;
        match session.success_op(request, &*self.processor).await {
            Ok(message) => {
                self.bus.publish(HwEvent::OperationSucceeded(message.clone()));
                Ok(message)
            },
            Err(e) => Err(self.report_op_error(e)),
        }
    }

    async fn features_exchange<S: WireMessage>(
        &self,
        session: &mut HwSession<'_>,
        request: S,
    ) -> HwResult<DeviceFeatures> {
        match self.vendor {
            Vendor::Trezor => {
                let result_handler =
                    ResultHandler::new(|m: proto_management::Features| Ok(adapter::trezor::features(m)));
                session.call(request, result_handler).await?.process(&*self.processor).await
            },
            Vendor::KeepKey => {
                let result_handler =
                    ResultHandler::new(|m: proto_keepkey::Features| Ok(adapter::keepkey::features(m)));
                session.call(request, result_handler).await?.process(&*self.processor).await
            },
        }
    }

    /// Acquire the session for one operation, or fail with `Busy`.
    fn session(&self) -> HwResult<HwSession<'_>> {
        let inner = self.inner.try_lock().ok_or(HwError::Busy)?;
        // Inputs queued outside an operation answer nothing.
        self.processor.drain_stale_input();
        Ok(HwSession {
            inner,
            vendor: self.vendor,
        })
    }

    fn set_context<F: FnOnce(&mut SessionContext)>(&self, mutate: F) {
        let mut ctx = self.context.lock().expect("session context poisoned");
        mutate(&mut ctx);
    }

    /// Surface a failed operation on the bus and hand the error back.
    fn report_op_error(&self, error: HwError) -> HwError {
        match &error {
            HwError::TransportClosed => {
                self.set_context(|ctx| ctx.reset());
                self.bus.publish(HwEvent::DeviceDetached);
            },
            HwError::DeviceFailure(payload) => self.bus.publish(HwEvent::OperationFailed(payload.clone())),
            HwError::Cancelled => self.bus.publish(HwEvent::OperationFailed(FailurePayload {
                kind: FailureKind::ActionCancelled,
                message: "Cancelled by the host".to_owned(),
            })),
            // Busy is rejected before any wire traffic; nothing to publish.
            HwError::Busy => (),
            e => self.bus.publish(HwEvent::OperationFailed(FailurePayload {
                kind: FailureKind::Other,
                message: e.to_string(),
            })),
        }
        error
    }
}

/// Exclusive use of the transport for the duration of one operation.
pub struct HwSession<'a> {
    inner: AsyncMutexGuard<'a, HwClientImpl>,
    vendor: Vendor,
}

impl<'a> HwSession<'a> {
    pub(crate) fn vendor(&self) -> Vendor { self.vendor }

    /// Sends a message and returns an [`HwResponse`] with either the
    /// expected response message, a failure or an interaction request.
    pub(crate) async fn call<'b, T: 'static, S: WireMessage>(
        &'b mut self,
        message: S,
        result_handler: ResultHandler<T>,
    ) -> HwResult<HwResponse<'a, 'b, T>> {
        let resp = self.call_raw(message).await?;
        match resp.message_type() {
            mt if mt == result_handler.message_type() => Ok(HwResponse::Ready(result_handler.handle_raw(resp)?)),
            MessageType::Failure => {
                let fail_msg: proto_common::Failure = decode(resp)?;
                Err(HwError::DeviceFailure(adapter::failure(fail_msg, self.vendor)))
            },
            MessageType::ButtonRequest => {
                let req_msg = decode(resp)?;
                Ok(HwResponse::new_button_request(self, req_msg, result_handler))
            },
            MessageType::PinMatrixRequest => {
                let req_msg = decode(resp)?;
                Ok(HwResponse::new_pin_matrix_request(self, req_msg, result_handler))
            },
            MessageType::PassphraseRequest => {
                let _req_msg: proto_common::PassphraseRequest = decode(resp)?;
                Ok(HwResponse::new_passphrase_request(self, result_handler))
            },
            mtype => Err(HwError::UnexpectedMessageType(mtype)),
        }
    }

    /// Sends a message and returns the raw ProtoMessage struct that was
    /// responded by the device. Messages with a tag outside the registry are
    /// logged and dropped without failing the session.
    async fn call_raw<S: WireMessage>(&mut self, message: S) -> HwResult<ProtoMessage> {
        let mut buf = Vec::with_capacity(message.encoded_len());
        message.encode(&mut buf)?;

        let proto_msg = ProtoMessage::new(S::message_type(), buf);
        self.inner.transport.write_message(proto_msg).await?;
        loop {
            match self.inner.transport.read_message().await {
                Ok(response) => return Ok(response),
                Err(HwError::UnknownType(tag)) => {
                    warn!("Dropping a message of unknown type '{}'", tag);
                    continue;
                },
                Err(e) => return Err(e),
            }
        }
    }

    pub(crate) async fn success_op<S, P>(&mut self, request: S, processor: &P) -> HwResult<Option<String>>
    where
        S: WireMessage,
        P: crate::response_processor::RequestProcessor + Sync,
    {
        let result_handler = ResultHandler::new(|m: proto_common::Success| Ok(m.message));
        self.call(request, result_handler).await?.process(processor).await
    }

    /// Abort whatever the device is waiting on. The device answers a Cancel
    /// with a Failure which is read and discarded here.
    pub(crate) async fn cancel_last_op(&mut self) {
        let req = proto_management::Cancel {};
        let result_handler = ResultHandler::new(|_m: proto_common::Failure| Ok(()));
        // Ignore result.
        self.call(req, result_handler).await.ok();
    }

    async fn clear_session_quietly(&mut self) {
        let result_handler = ResultHandler::new(|_m: proto_common::Success| Ok(()));
        if let Ok(response) = self.call(proto_management::ClearSession {}, result_handler).await {
            response.ok().ok();
        }
    }
}

fn decode<M: WireMessage>(resp: ProtoMessage) -> HwResult<M> {
    resp.into_message()
        .map_err(|e| HwError::SchemaError(M::message_type(), e.to_string()))
}
