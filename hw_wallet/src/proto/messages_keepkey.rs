//! Records where the KeepKey fork of the first-generation protobuf diverges
//! from the Trezor schema. Everything not defined here is wire-compatible and
//! shared with the sibling modules.

///*
/// Response: Reports various information about the device
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Features {
    /// name of the manufacturer, e.g. "keepkey.com"
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
    pub coins: ::prost::alloc::vec::Vec<super::messages_management::CoinType>,
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
    /// active policies (KeepKey extension)
    #[prost(message, repeated, tag = "16")]
    pub policies: ::prost::alloc::vec::Vec<PolicyType>,
}
///*
/// Policy descriptor (KeepKey extension)
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PolicyType {
    #[prost(string, optional, tag = "1")]
    pub policy_name: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(bool, optional, tag = "2")]
    pub enabled: ::core::option::Option<bool>,
}
