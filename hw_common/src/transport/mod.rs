pub mod hid_driver;

pub use hid_driver::{HidDevice, HidDeviceInfo, HidError, HidInstance, HidResult};
