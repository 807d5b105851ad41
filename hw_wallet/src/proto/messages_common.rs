///*
/// Response: Success of the previous request
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Success {
    /// human readable description of action or request-specific payload
    #[prost(string, optional, tag = "1", default = "")]
    pub message: ::core::option::Option<::prost::alloc::string::String>,
}
///*
/// Response: Failure of the previous request
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Failure {
    /// computer-readable definition of the error state
    #[prost(enumeration = "failure::FailureType", optional, tag = "1")]
    pub code: ::core::option::Option<i32>,
    /// human-readable message of the error state
    #[prost(string, optional, tag = "2")]
    pub message: ::core::option::Option<::prost::alloc::string::String>,
}
/// Nested message and enum types in `Failure`.
pub mod failure {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    #[allow(clippy::enum_variant_names)]
    pub enum FailureType {
        FailureUnexpectedMessage = 1,
        FailureButtonExpected = 2,
        FailureSyntaxError = 3,
        FailureActionCancelled = 4,
        FailurePinExpected = 5,
        FailurePinCancelled = 6,
        FailurePinInvalid = 7,
        FailureInvalidSignature = 8,
        FailureOther = 9,
        FailureNotEnoughFunds = 10,
        FailureNotInitialized = 11,
        FailureFirmwareError = 99,
    }
}
///*
/// Response: Device is waiting for HW button press.
/// @next ButtonAck
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ButtonRequest {
    /// enum identifier of the screen
    #[prost(enumeration = "button_request::ButtonRequestType", optional, tag = "1")]
    pub code: ::core::option::Option<i32>,
    /// device-specific supplementary text for the screen
    #[prost(string, optional, tag = "2")]
    pub data: ::core::option::Option<::prost::alloc::string::String>,
}
/// Nested message and enum types in `ButtonRequest`.
pub mod button_request {
    ///*
    /// Type of button request
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum ButtonRequestType {
        ButtonRequestOther = 1,
        ButtonRequestFeeOverThreshold = 2,
        ButtonRequestConfirmOutput = 3,
        ButtonRequestResetDevice = 4,
        ButtonRequestConfirmWord = 5,
        ButtonRequestWipeDevice = 6,
        ButtonRequestProtectCall = 7,
        ButtonRequestSignTx = 8,
        ButtonRequestFirmwareCheck = 9,
        ButtonRequestAddress = 10,
        ButtonRequestPublicKey = 11,
    }
}
///*
/// Request: Computer agrees to wait for HW button press
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ButtonAck {}
///*
/// Response: Device is asking computer to show PIN matrix and awaits PIN encoded using this matrix scheme
/// @next PinMatrixAck
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PinMatrixRequest {
    #[prost(enumeration = "pin_matrix_request::PinMatrixRequestType", optional, tag = "1")]
    pub r#type: ::core::option::Option<i32>,
}
/// Nested message and enum types in `PinMatrixRequest`.
pub mod pin_matrix_request {
    ///*
    /// Type of PIN request
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum PinMatrixRequestType {
        Current = 1,
        NewFirst = 2,
        NewSecond = 3,
    }
}
///*
/// Request: Computer responds with encoded PIN
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PinMatrixAck {
    /// matrix encoded PIN entered by user
    #[prost(string, required, tag = "1")]
    pub pin: ::prost::alloc::string::String,
}
///*
/// Response: Device awaits encryption passphrase
/// @next PassphraseAck
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PassphraseRequest {}
///*
/// Request: Send passphrase back
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PassphraseAck {
    #[prost(string, required, tag = "1")]
    pub passphrase: ::prost::alloc::string::String,
}
///*
/// Structure representing BIP32 (hierarchical deterministic) node
/// Used for imports of private key into the device and exporting public key out of device
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HdNodeType {
    #[prost(uint32, required, tag = "1")]
    pub depth: u32,
    #[prost(uint32, required, tag = "2")]
    pub fingerprint: u32,
    #[prost(uint32, required, tag = "3")]
    pub child_num: u32,
    #[prost(bytes = "vec", required, tag = "4")]
    pub chain_code: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", optional, tag = "5")]
    pub private_key: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    #[prost(bytes = "vec", required, tag = "6")]
    pub public_key: ::prost::alloc::vec::Vec<u8>,
}
