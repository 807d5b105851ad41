///*
/// Request: Reset device to default state and ask for device details
/// @next Features
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Initialize {}
///*
/// Request: Ask for device details (no device reset)
/// @next Features
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetFeatures {}
///*
/// Response: Reports various information about the device
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Features {
    /// name of the manufacturer, e.g. "bitcointrezor.com"
    #[prost(string, optional, tag = "1")]
    pub vendor: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(uint32, optional, tag = "2")]
    pub major_version: ::core::option::Option<u32>,
    #[prost(uint32, optional, tag = "3")]
    pub minor_version: ::core::option::Option<u32>,
    #[prost(uint32, optional, tag = "4")]
    pub patch_version: ::core::option::Option<u32>,
    /// is device in bootloader mode?
    #[prost(bool, optional, tag = "5")]
    pub bootloader_mode: ::core::option::Option<bool>,
    /// device's unique identifier
    #[prost(string, optional, tag = "6")]
    pub device_id: ::core::option::Option<::prost::alloc::string::String>,
    /// is device protected by PIN?
    #[prost(bool, optional, tag = "7")]
    pub pin_protection: ::core::option::Option<bool>,
    /// is node/mnemonic encrypted using passphrase?
    #[prost(bool, optional, tag = "8")]
    pub passphrase_protection: ::core::option::Option<bool>,
    #[prost(string, optional, tag = "9")]
    pub language: ::core::option::Option<::prost::alloc::string::String>,
    /// device description label
    #[prost(string, optional, tag = "10")]
    pub label: ::core::option::Option<::prost::alloc::string::String>,
    /// supported coins
    #[prost(message, repeated, tag = "11")]
    pub coins: ::prost::alloc::vec::Vec<CoinType>,
    /// does device contain seed?
    #[prost(bool, optional, tag = "12")]
    pub initialized: ::core::option::Option<bool>,
    /// SCM revision of firmware
    #[prost(bytes = "vec", optional, tag = "13")]
    pub revision: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    /// double sha256 hash of the bootloader
    #[prost(bytes = "vec", optional, tag = "14")]
    pub bootloader_hash: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    /// was the storage imported from an external source?
    #[prost(bool, optional, tag = "15")]
    pub imported: ::core::option::Option<bool>,
}
///*
/// Supported coin description
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CoinType {
    #[prost(string, optional, tag = "1")]
    pub coin_name: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "2")]
    pub coin_shortcut: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(uint32, optional, tag = "3", default = "0")]
    pub address_type: ::core::option::Option<u32>,
    #[prost(uint64, optional, tag = "4")]
    pub maxfee_kb: ::core::option::Option<u64>,
    #[prost(uint32, optional, tag = "5", default = "5")]
    pub address_type_p2sh: ::core::option::Option<u32>,
}
///*
/// Request: Test if the device is alive, device sends back the message in Success response
/// @next Success
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Ping {
    /// message to send back in Success message
    #[prost(string, optional, tag = "1")]
    pub message: ::core::option::Option<::prost::alloc::string::String>,
    /// ask for button press
    #[prost(bool, optional, tag = "2")]
    pub button_protection: ::core::option::Option<bool>,
    /// ask for PIN if set in device
    #[prost(bool, optional, tag = "3")]
    pub pin_protection: ::core::option::Option<bool>,
    /// ask for passphrase if set in device
    #[prost(bool, optional, tag = "4")]
    pub passphrase_protection: ::core::option::Option<bool>,
}
///*
/// Request: Starts workflow for setting/changing/removing the PIN
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChangePin {
    /// is PIN removal requested?
    #[prost(bool, optional, tag = "1")]
    pub remove: ::core::option::Option<bool>,
}
///*
/// Request: Request device to wipe all sensitive data and settings
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WipeDevice {}
///*
/// Request: Ask device to erase its firmware (so it can be replaced via FirmwareUpload)
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FirmwareErase {}
///*
/// Request: Send firmware in binary form to the device
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FirmwareUpload {
    /// firmware to be loaded into device
    #[prost(bytes = "vec", required, tag = "1")]
    pub payload: ::prost::alloc::vec::Vec<u8>,
}
///*
/// Request: Request a sample of random data generated by hardware RNG. May be used for testing.
/// @next Entropy
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetEntropy {
    /// size of requested entropy
    #[prost(uint32, required, tag = "1")]
    pub size: u32,
}
///*
/// Response: Reply with random data generated by hardware RNG
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Entropy {
    /// stream of random generated bytes
    #[prost(bytes = "vec", required, tag = "1")]
    pub entropy: ::prost::alloc::vec::Vec<u8>,
}
///*
/// Request: Load seed and related internal settings from the computer
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LoadDevice {
    /// seed encoded as BIP-39 mnemonic (12, 18 or 24 words)
    #[prost(string, optional, tag = "1")]
    pub mnemonic: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(message, optional, tag = "2")]
    pub node: ::core::option::Option<super::messages_common::HdNodeType>,
    /// set PIN protection
    #[prost(string, optional, tag = "3")]
    pub pin: ::core::option::Option<::prost::alloc::string::String>,
    /// enable master node encryption using passphrase
    #[prost(bool, optional, tag = "4")]
    pub passphrase_protection: ::core::option::Option<bool>,
    #[prost(string, optional, tag = "5", default = "english")]
    pub language: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "6")]
    pub label: ::core::option::Option<::prost::alloc::string::String>,
    /// do not test mnemonic for valid BIP-39 checksum
    #[prost(bool, optional, tag = "7")]
    pub skip_checksum: ::core::option::Option<bool>,
}
///*
/// Request: Ask device to do initialization involving user interaction
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ResetDevice {
    /// display entropy generated by the device before asking for additional entropy
    #[prost(bool, optional, tag = "1")]
    pub display_random: ::core::option::Option<bool>,
    /// strength of seed in bits
    #[prost(uint32, optional, tag = "2", default = "128")]
    pub strength: ::core::option::Option<u32>,
    #[prost(bool, optional, tag = "3")]
    pub passphrase_protection: ::core::option::Option<bool>,
    #[prost(bool, optional, tag = "4")]
    pub pin_protection: ::core::option::Option<bool>,
    #[prost(string, optional, tag = "5", default = "english")]
    pub language: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "6")]
    pub label: ::core::option::Option<::prost::alloc::string::String>,
}
///*
/// Request: Start recovery workflow asking user for specific words of mnemonic
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RecoveryDevice {
    /// number of words in BIP-39 mnemonic
    #[prost(uint32, optional, tag = "1")]
    pub word_count: ::core::option::Option<u32>,
    #[prost(bool, optional, tag = "2")]
    pub passphrase_protection: ::core::option::Option<bool>,
    #[prost(bool, optional, tag = "3")]
    pub pin_protection: ::core::option::Option<bool>,
    #[prost(string, optional, tag = "4", default = "english")]
    pub language: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "5")]
    pub label: ::core::option::Option<::prost::alloc::string::String>,
    /// enforce BIP-39 wordlist during the process
    #[prost(bool, optional, tag = "6")]
    pub enforce_wordlist: ::core::option::Option<bool>,
}
///*
/// Response: Device is waiting for user to enter word of the mnemonic
/// @next WordAck
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WordRequest {}
///*
/// Request: Computer replies with word from the mnemonic
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WordAck {
    /// one word of mnemonic on asked position
    #[prost(string, required, tag = "1")]
    pub word: ::prost::alloc::string::String,
}
///*
/// Response: Ask for additional entropy from host computer
/// @next EntropyAck
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EntropyRequest {}
///*
/// Request: Provide additional entropy for seed generation function
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EntropyAck {
    /// 256 bits (32 bytes) of random data
    #[prost(bytes = "vec", optional, tag = "1")]
    pub entropy: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
}
///*
/// Request: Abort last operation that required user interaction
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Cancel {}
///*
/// Request: Clear session (removes cached PIN, passphrase, etc).
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ClearSession {}
///*
/// Request: change language and/or label of the device
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ApplySettings {
    #[prost(string, optional, tag = "1")]
    pub language: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "2")]
    pub label: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(bool, optional, tag = "3")]
    pub use_passphrase: ::core::option::Option<bool>,
}
///*
/// Request: Estimated size of the transaction
/// This behaves exactly like SignTx, which means that it can ask using TxRequest
/// This call is non-blocking (except possible PIN/passphrase request)
/// @next TxSize
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EstimateTxSize {
    /// number of transaction outputs
    #[prost(uint32, required, tag = "1")]
    pub outputs_count: u32,
    /// number of transaction inputs
    #[prost(uint32, required, tag = "2")]
    pub inputs_count: u32,
    /// coin to use
    #[prost(string, optional, tag = "3", default = "Bitcoin")]
    pub coin_name: ::core::option::Option<::prost::alloc::string::String>,
}
///*
/// Response: Estimated size of the transaction
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TxSize {
    /// estimated size of transaction in bytes
    #[prost(uint32, optional, tag = "1")]
    pub tx_size: ::core::option::Option<u32>,
}
///*
/// Request: "Press" the button on the device
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DebugLinkDecision {
    /// true for "Confirm", false for "Cancel"
    #[prost(bool, required, tag = "1")]
    pub yes_no: bool,
}
///*
/// Request: Computer asks for device state
/// @next DebugLinkState
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DebugLinkGetState {}
///*
/// Response: Device current state
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DebugLinkState {
    /// raw buffer of display
    #[prost(bytes = "vec", optional, tag = "1")]
    pub layout: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    /// current PIN, blank if PIN is not set/enabled
    #[prost(string, optional, tag = "2")]
    pub pin: ::core::option::Option<::prost::alloc::string::String>,
    /// current PIN matrix
    #[prost(string, optional, tag = "3")]
    pub matrix: ::core::option::Option<::prost::alloc::string::String>,
    /// current BIP-39 mnemonic
    #[prost(string, optional, tag = "4")]
    pub mnemonic: ::core::option::Option<::prost::alloc::string::String>,
    /// current BIP-32 node
    #[prost(message, optional, tag = "5")]
    pub node: ::core::option::Option<super::messages_common::HdNodeType>,
    /// is node/mnemonic encrypted using passphrase?
    #[prost(bool, optional, tag = "6")]
    pub passphrase_protection: ::core::option::Option<bool>,
}
///*
/// Request: Ask device to restart
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DebugLinkStop {}
///*
/// Response: Device wants host to log event
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DebugLinkLog {
    #[prost(uint32, optional, tag = "1")]
    pub level: ::core::option::Option<u32>,
    #[prost(string, optional, tag = "2")]
    pub bucket: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "3")]
    pub text: ::core::option::Option<::prost::alloc::string::String>,
}
