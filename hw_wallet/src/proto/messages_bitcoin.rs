///*
/// Request: Ask device for public key corresponding to address_n path
/// @next PublicKey
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetPublicKey {
    /// BIP-32 path to derive the key from master node
    #[prost(uint32, repeated, packed = "false", tag = "1")]
    pub address_n: ::prost::alloc::vec::Vec<u32>,
    /// ECDSA curve name to use
    #[prost(string, optional, tag = "2")]
    pub ecdsa_curve_name: ::core::option::Option<::prost::alloc::string::String>,
    /// optionally show on display before sending the result
    #[prost(bool, optional, tag = "3")]
    pub show_display: ::core::option::Option<bool>,
    /// coin to use
    #[prost(string, optional, tag = "4", default = "Bitcoin")]
    pub coin_name: ::core::option::Option<::prost::alloc::string::String>,
}
///*
/// Response: Contains public key derived from device private seed
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PublicKey {
    /// BIP32 public node
    #[prost(message, required, tag = "1")]
    pub node: super::messages_common::HdNodeType,
    /// serialized form of public node
    #[prost(string, optional, tag = "2")]
    pub xpub: ::core::option::Option<::prost::alloc::string::String>,
}
///*
/// Request: Ask device for address corresponding to address_n path
/// @next Address
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetAddress {
    /// BIP-32 path to derive the key from master node
    #[prost(uint32, repeated, packed = "false", tag = "1")]
    pub address_n: ::prost::alloc::vec::Vec<u32>,
    /// coin to use
    #[prost(string, optional, tag = "2", default = "Bitcoin")]
    pub coin_name: ::core::option::Option<::prost::alloc::string::String>,
    /// optionally show on display before sending the result
    #[prost(bool, optional, tag = "3")]
    pub show_display: ::core::option::Option<bool>,
}
///*
/// Response: Contains address derived from device private seed
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Address {
    /// Coin address in Base58 encoding
    #[prost(string, required, tag = "1")]
    pub address: ::prost::alloc::string::String,
}
///*
/// Request: Ask device to sign message
/// @next MessageSignature
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SignMessage {
    /// BIP-32 path to derive the key from master node
    #[prost(uint32, repeated, packed = "false", tag = "1")]
    pub address_n: ::prost::alloc::vec::Vec<u32>,
    /// message to be signed
    #[prost(bytes = "vec", required, tag = "2")]
    pub message: ::prost::alloc::vec::Vec<u8>,
    /// coin to use for signing
    #[prost(string, optional, tag = "3", default = "Bitcoin")]
    pub coin_name: ::core::option::Option<::prost::alloc::string::String>,
}
///*
/// Request: Ask device to verify message
/// @next Success
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VerifyMessage {
    /// address to verify
    #[prost(string, optional, tag = "1")]
    pub address: ::core::option::Option<::prost::alloc::string::String>,
    /// signature to verify
    #[prost(bytes = "vec", optional, tag = "2")]
    pub signature: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    /// message to verify
    #[prost(bytes = "vec", optional, tag = "3")]
    pub message: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
}
///*
/// Response: Signed message
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MessageSignature {
    /// address used to sign the message
    #[prost(string, optional, tag = "1")]
    pub address: ::core::option::Option<::prost::alloc::string::String>,
    /// signature of the message
    #[prost(bytes = "vec", optional, tag = "2")]
    pub signature: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
}
///*
/// Request: Ask device to encrypt message
/// @next EncryptedMessage
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EncryptMessage {
    /// public key
    #[prost(bytes = "vec", optional, tag = "1")]
    pub pubkey: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    /// message to encrypt
    #[prost(bytes = "vec", optional, tag = "2")]
    pub message: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    /// show just on display? (don't send back via wire)
    #[prost(bool, optional, tag = "3")]
    pub display_only: ::core::option::Option<bool>,
    /// BIP-32 path to derive the signing key from master node
    #[prost(uint32, repeated, packed = "false", tag = "4")]
    pub address_n: ::prost::alloc::vec::Vec<u32>,
    /// coin to use for signing
    #[prost(string, optional, tag = "5", default = "Bitcoin")]
    pub coin_name: ::core::option::Option<::prost::alloc::string::String>,
}
///*
/// Response: Encrypted message
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EncryptedMessage {
    /// nonce used during encryption
    #[prost(bytes = "vec", optional, tag = "1")]
    pub nonce: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    /// encrypted message
    #[prost(bytes = "vec", optional, tag = "2")]
    pub message: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    /// message hmac
    #[prost(bytes = "vec", optional, tag = "3")]
    pub hmac: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
}
///*
/// Request: Ask device to decrypt message
/// @next DecryptedMessage
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DecryptMessage {
    /// BIP-32 path to derive the decryption key from master node
    #[prost(uint32, repeated, packed = "false", tag = "1")]
    pub address_n: ::prost::alloc::vec::Vec<u32>,
    /// nonce used during encryption
    #[prost(bytes = "vec", optional, tag = "2")]
    pub nonce: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    /// message to decrypt
    #[prost(bytes = "vec", optional, tag = "3")]
    pub message: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    /// message hmac
    #[prost(bytes = "vec", optional, tag = "4")]
    pub hmac: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
}
///*
/// Response: Decrypted message
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DecryptedMessage {
    /// decrypted message
    #[prost(bytes = "vec", optional, tag = "1")]
    pub message: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    /// address used to sign the message (if used)
    #[prost(string, optional, tag = "2")]
    pub address: ::core::option::Option<::prost::alloc::string::String>,
}
///*
/// Request: Ask device to encrypt or decrypt value of given key
/// @next CipheredKeyValue
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CipherKeyValue {
    /// BIP-32 path to derive the key from master node
    #[prost(uint32, repeated, packed = "false", tag = "1")]
    pub address_n: ::prost::alloc::vec::Vec<u32>,
    /// key component of key:value
    #[prost(string, optional, tag = "2")]
    pub key: ::core::option::Option<::prost::alloc::string::String>,
    /// value component of key:value
    #[prost(bytes = "vec", optional, tag = "3")]
    pub value: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    /// are we encrypting (true) or decrypting (false)?
    #[prost(bool, optional, tag = "4")]
    pub encrypt: ::core::option::Option<bool>,
    /// should we ask on device screen before encrypting?
    #[prost(bool, optional, tag = "5")]
    pub ask_on_encrypt: ::core::option::Option<bool>,
    /// should we ask on device screen before decrypting?
    #[prost(bool, optional, tag = "6")]
    pub ask_on_decrypt: ::core::option::Option<bool>,
    /// initialization vector (will be computed if not set)
    #[prost(bytes = "vec", optional, tag = "7")]
    pub iv: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
}
///*
/// Response: Return ciphered/deciphered value
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CipheredKeyValue {
    /// ciphered/deciphered value
    #[prost(bytes = "vec", optional, tag = "1")]
    pub value: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
}
///*
/// Structure representing identity data
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IdentityType {
    /// proto part of URI
    #[prost(string, optional, tag = "1")]
    pub proto: ::core::option::Option<::prost::alloc::string::String>,
    /// user part of URI
    #[prost(string, optional, tag = "2")]
    pub user: ::core::option::Option<::prost::alloc::string::String>,
    /// host part of URI
    #[prost(string, optional, tag = "3")]
    pub host: ::core::option::Option<::prost::alloc::string::String>,
    /// port part of URI
    #[prost(string, optional, tag = "4")]
    pub port: ::core::option::Option<::prost::alloc::string::String>,
    /// path part of URI
    #[prost(string, optional, tag = "5")]
    pub path: ::core::option::Option<::prost::alloc::string::String>,
    /// identity index
    #[prost(uint32, optional, tag = "6", default = "0")]
    pub index: ::core::option::Option<u32>,
}
///*
/// Request: Ask device to sign identity
/// @next SignedIdentity
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SignIdentity {
    /// identity
    #[prost(message, optional, tag = "1")]
    pub identity: ::core::option::Option<IdentityType>,
    /// non-visible challenge
    #[prost(bytes = "vec", optional, tag = "2")]
    pub challenge_hidden: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    /// challenge shown on display (e.g. date+time)
    #[prost(string, optional, tag = "3")]
    pub challenge_visual: ::core::option::Option<::prost::alloc::string::String>,
    /// ECDSA curve name to use
    #[prost(string, optional, tag = "4")]
    pub ecdsa_curve_name: ::core::option::Option<::prost::alloc::string::String>,
}
///*
/// Response: Device provides signed identity
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SignedIdentity {
    /// identity address
    #[prost(string, optional, tag = "1")]
    pub address: ::core::option::Option<::prost::alloc::string::String>,
    /// identity public key
    #[prost(bytes = "vec", optional, tag = "2")]
    pub public_key: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    /// signature of the identity data
    #[prost(bytes = "vec", optional, tag = "3")]
    pub signature: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
}
///*
/// Request: Ask device to sign transaction
/// @next TxRequest
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SignTx {
    /// number of transaction outputs
    #[prost(uint32, required, tag = "1")]
    pub outputs_count: u32,
    /// number of transaction inputs
    #[prost(uint32, required, tag = "2")]
    pub inputs_count: u32,
    /// coin to use
    #[prost(string, optional, tag = "3", default = "Bitcoin")]
    pub coin_name: ::core::option::Option<::prost::alloc::string::String>,
    /// transaction version
    #[prost(uint32, optional, tag = "4", default = "1")]
    pub version: ::core::option::Option<u32>,
    /// transaction lock_time
    #[prost(uint32, optional, tag = "5", default = "0")]
    pub lock_time: ::core::option::Option<u32>,
}
///*
/// Request: Simplified transaction signing
/// This method doesn't support streaming, so make sure the transaction fits into the device memory.
/// @next TxRequest
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SimpleSignTx {
    /// transaction inputs
    #[prost(message, repeated, tag = "1")]
    pub inputs: ::prost::alloc::vec::Vec<TxInputType>,
    /// transaction outputs
    #[prost(message, repeated, tag = "2")]
    pub outputs: ::prost::alloc::vec::Vec<TxOutputType>,
    /// transactions whose outputs are used to build current inputs
    #[prost(message, repeated, tag = "3")]
    pub transactions: ::prost::alloc::vec::Vec<TransactionType>,
    /// coin to use
    #[prost(string, optional, tag = "4", default = "Bitcoin")]
    pub coin_name: ::core::option::Option<::prost::alloc::string::String>,
    /// transaction version
    #[prost(uint32, optional, tag = "5", default = "1")]
    pub version: ::core::option::Option<u32>,
    /// transaction lock_time
    #[prost(uint32, optional, tag = "6", default = "0")]
    pub lock_time: ::core::option::Option<u32>,
}
///*
/// Response: Device asks for information for signing transaction or returns the last result
/// If request_index is set, device awaits TxAck message (with fields filled in according to request_type)
/// If signature_index is set, 'signature' contains signed input of signature_index's input
/// @next TxAck
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TxRequest {
    /// what should be filled in TxAck message?
    #[prost(enumeration = "tx_request::RequestType", optional, tag = "1")]
    pub request_type: ::core::option::Option<i32>,
    /// request for tx details
    #[prost(message, optional, tag = "2")]
    pub details: ::core::option::Option<TxRequestDetailsType>,
    /// serialized data and request for next
    #[prost(message, optional, tag = "3")]
    pub serialized: ::core::option::Option<TxRequestSerializedType>,
}
/// Nested message and enum types in `TxRequest`.
pub mod tx_request {
    ///*
    /// Type of information required by transaction signing process
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum RequestType {
        Txinput = 0,
        Txoutput = 1,
        Txmeta = 2,
        Txfinished = 3,
    }
}
///*
/// Structure representing request details
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TxRequestDetailsType {
    /// device expects TxAck message from the computer
    #[prost(uint32, optional, tag = "1")]
    pub request_index: ::core::option::Option<u32>,
    /// tx_hash of requested transaction
    #[prost(bytes = "vec", optional, tag = "2")]
    pub tx_hash: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
}
///*
/// Structure representing serialized data
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TxRequestSerializedType {
    /// 'signature' field contains signed input of this index
    #[prost(uint32, optional, tag = "1")]
    pub signature_index: ::core::option::Option<u32>,
    /// signature of the signature_index's input
    #[prost(bytes = "vec", optional, tag = "2")]
    pub signature: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    /// part of serialized and signed transaction
    #[prost(bytes = "vec", optional, tag = "3")]
    pub serialized_tx: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
}
///*
/// Request: Reported transaction data
/// @next TxRequest
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TxAck {
    #[prost(message, optional, tag = "1")]
    pub tx: ::core::option::Option<TransactionType>,
}
///*
/// Structure representing transaction
/// One of the fields is filled in depending on the request_type of the TxRequest
/// this message answers.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransactionType {
    #[prost(uint32, optional, tag = "1", default = "1")]
    pub version: ::core::option::Option<u32>,
    #[prost(message, repeated, tag = "2")]
    pub inputs: ::prost::alloc::vec::Vec<TxInputType>,
    #[prost(message, repeated, tag = "3")]
    pub bin_outputs: ::prost::alloc::vec::Vec<TxOutputBinType>,
    #[prost(message, repeated, tag = "5")]
    pub outputs: ::prost::alloc::vec::Vec<TxOutputType>,
    #[prost(uint32, optional, tag = "4", default = "0")]
    pub lock_time: ::core::option::Option<u32>,
    #[prost(uint32, optional, tag = "6")]
    pub inputs_cnt: ::core::option::Option<u32>,
    #[prost(uint32, optional, tag = "7")]
    pub outputs_cnt: ::core::option::Option<u32>,
}
///*
/// Structure representing transaction input
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TxInputType {
    /// BIP-32 path to derive the key from master node
    #[prost(uint32, repeated, packed = "false", tag = "1")]
    pub address_n: ::prost::alloc::vec::Vec<u32>,
    /// hash of previous transaction output to spend by this input
    #[prost(bytes = "vec", required, tag = "2")]
    pub prev_hash: ::prost::alloc::vec::Vec<u8>,
    /// index of previous output to spend
    #[prost(uint32, required, tag = "3")]
    pub prev_index: u32,
    /// script signature, unset for tx to sign
    #[prost(bytes = "vec", optional, tag = "4")]
    pub script_sig: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    /// sequence
    #[prost(uint32, optional, tag = "5", default = "4294967295")]
    pub sequence: ::core::option::Option<u32>,
    /// defines template of input script
    #[prost(enumeration = "InputScriptType", optional, tag = "6", default = "Spendaddress")]
    pub script_type: ::core::option::Option<i32>,
}
///*
/// Structure representing transaction output
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TxOutputType {
    /// target coin address in Base58 encoding
    #[prost(string, optional, tag = "1")]
    pub address: ::core::option::Option<::prost::alloc::string::String>,
    /// BIP-32 path to derive the key from master node; has higher priority than "address"
    #[prost(uint32, repeated, packed = "false", tag = "2")]
    pub address_n: ::prost::alloc::vec::Vec<u32>,
    /// amount to spend in satoshis
    #[prost(uint64, required, tag = "3")]
    pub amount: u64,
    /// output script type
    #[prost(enumeration = "OutputScriptType", required, tag = "4")]
    pub script_type: i32,
}
///*
/// Structure representing compiled transaction output
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TxOutputBinType {
    #[prost(uint64, required, tag = "1")]
    pub amount: u64,
    #[prost(bytes = "vec", required, tag = "2")]
    pub script_pubkey: ::prost::alloc::vec::Vec<u8>,
}
///*
/// Type of script which will be used for transaction input
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum InputScriptType {
    /// standard p2pkh address
    Spendaddress = 0,
    /// p2sh multisig address
    Spendmultisig = 1,
}
///*
/// Type of script which will be used for transaction output
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum OutputScriptType {
    /// used for all addresses (bitcoin, p2sh)
    Paytoaddress = 0,
    /// p2sh address (deprecated; use Paytoaddress)
    Paytoscripthash = 1,
    /// only for change output
    Paytomultisig = 2,
    /// op_return
    Paytoopreturn = 3,
}
