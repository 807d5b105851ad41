use crate::adapter::{self, MessageSignaturePayload, PublicKeyNode, SignedIdentityPayload};
use crate::client::HwSession;
use crate::error::HwResult;
use crate::proto::messages_bitcoin as proto_bitcoin;
use crate::response_processor::{ProcessResponse, RequestProcessor};
use crate::result_handler::ResultHandler;
use crate::utxo::UtxoCoin;
use hw_common::primitives::EcdsaCurve;

/// SLIP-0013 identity the device signs a challenge for, split the way the
/// wire wants it.
#[derive(Clone, Debug, Default)]
pub struct IdentityDescriptor {
    pub proto: Option<String>,
    pub user: Option<String>,
    pub host: Option<String>,
    pub port: Option<String>,
    pub path: Option<String>,
    pub index: u32,
}

impl IdentityDescriptor {
    fn to_proto(&self) -> proto_bitcoin::IdentityType {
        proto_bitcoin::IdentityType {
            proto: self.proto.clone(),
            user: self.user.clone(),
            host: self.host.clone(),
            port: self.port.clone(),
            path: self.path.clone(),
            index: Some(self.index),
        }
    }
}

fn ecdsa_curve_name(curve: EcdsaCurve) -> String {
    match curve {
        EcdsaCurve::Secp256k1 => "secp256k1".to_owned(),
    }
}

// Bitcoin (UTXO) operations.
impl<'a> HwSession<'a> {
    pub(crate) async fn get_utxo_address<P>(
        &mut self,
        address_n: Vec<u32>,
        coin: UtxoCoin,
        show_display: bool,
        processor: &P,
    ) -> HwResult<String>
    where
        P: RequestProcessor + Sync,
    {
        let req = proto_bitcoin::GetAddress {
            address_n,
            coin_name: Some(coin.to_string()),
            show_display: Some(show_display),
        };
        let result_handler = ResultHandler::new(|m: proto_bitcoin::Address| Ok(m.address));
        self.call(req, result_handler).await?.process(processor).await
    }

    pub(crate) async fn get_public_key<P>(
        &mut self,
        address_n: Vec<u32>,
        coin: UtxoCoin,
        ecdsa_curve: EcdsaCurve,
        processor: &P,
    ) -> HwResult<PublicKeyNode>
    where
        P: RequestProcessor + Sync,
    {
        let req = proto_bitcoin::GetPublicKey {
            address_n,
            ecdsa_curve_name: Some(ecdsa_curve_name(ecdsa_curve)),
            show_display: None,
            coin_name: Some(coin.to_string()),
        };
        let result_handler = ResultHandler::new(|m: proto_bitcoin::PublicKey| Ok(adapter::public_key(m)));
        self.call(req, result_handler).await?.process(processor).await
    }

    pub(crate) async fn sign_message<P>(
        &mut self,
        address_n: Vec<u32>,
        message: Vec<u8>,
        coin: UtxoCoin,
        processor: &P,
    ) -> HwResult<MessageSignaturePayload>
    where
        P: RequestProcessor + Sync,
    {
        let req = proto_bitcoin::SignMessage {
            address_n,
            message,
            coin_name: Some(coin.to_string()),
        };
        let result_handler = ResultHandler::new(|m: proto_bitcoin::MessageSignature| Ok(adapter::message_signature(m)));
        self.call(req, result_handler).await?.process(processor).await
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) async fn cipher_key_value<P>(
        &mut self,
        address_n: Vec<u32>,
        key: String,
        value: Vec<u8>,
        encrypt: bool,
        ask_on_encrypt: bool,
        ask_on_decrypt: bool,
        iv: Option<Vec<u8>>,
        processor: &P,
    ) -> HwResult<Vec<u8>>
    where
        P: RequestProcessor + Sync,
    {
        let req = proto_bitcoin::CipherKeyValue {
            address_n,
            key: Some(key),
            value: Some(value),
            encrypt: Some(encrypt),
            ask_on_encrypt: Some(ask_on_encrypt),
            ask_on_decrypt: Some(ask_on_decrypt),
            iv,
        };
        let result_handler =
            ResultHandler::new(|m: proto_bitcoin::CipheredKeyValue| Ok(m.value.unwrap_or_default()));
        self.call(req, result_handler).await?.process(processor).await
    }

    pub(crate) async fn sign_identity<P>(
        &mut self,
        identity: &IdentityDescriptor,
        challenge_hidden: Vec<u8>,
        challenge_visual: String,
        processor: &P,
    ) -> HwResult<SignedIdentityPayload>
    where
        P: RequestProcessor + Sync,
    {
        let req = proto_bitcoin::SignIdentity {
            identity: Some(identity.to_proto()),
            challenge_hidden: Some(challenge_hidden),
            challenge_visual: Some(challenge_visual),
            ecdsa_curve_name: Some(ecdsa_curve_name(EcdsaCurve::Secp256k1)),
        };
        let result_handler = ResultHandler::new(|m: proto_bitcoin::SignedIdentity| Ok(adapter::signed_identity(m)));
        self.call(req, result_handler).await?.process(processor).await
    }
}
