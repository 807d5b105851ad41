use crate::error::HwResult;
use crate::proto::ProtoMessage;
use crate::Vendor;
use async_trait::async_trait;

pub mod hid;
pub mod protocol;

pub use hid::{AvailableHidDevice, HidTransport, ReportScheme};

/// USB identities the engine recognises. The KeepKey shares the Trezor v1
/// HID pair and additionally enumerates the Raspberry Pi shield device.
/// Opening them on Linux needs a udev rule granting the HID node to the
/// embedder's user (the vendors ship MODE=0666 GROUP=dialout rules).
pub const SUPPORTED_DEVICES: [DeviceModel; 3] = [
    DeviceModel::new(Vendor::Trezor, 0x534c, 0x0001),
    DeviceModel::new(Vendor::KeepKey, 0x534c, 0x0001),
    DeviceModel::new(Vendor::KeepKey, 0x10c4, 0xea80),
];

#[derive(Clone, Copy, Debug)]
pub struct DeviceModel {
    pub vendor: Vendor,
    pub vendor_id: u16,
    pub product_id: u16,
}

impl DeviceModel {
    const fn new(vendor: Vendor, vendor_id: u16, product_id: u16) -> DeviceModel {
        DeviceModel {
            vendor,
            vendor_id,
            product_id,
        }
    }
}

/// The transport interface that is implemented by the different ways to
/// communicate with a device. One message in each direction per exchange;
/// the session layer owns the half-duplex discipline.
#[async_trait]
pub trait Transport {
    async fn write_message(&mut self, message: ProtoMessage) -> HwResult<()>;
    async fn read_message(&mut self) -> HwResult<ProtoMessage>;
}
