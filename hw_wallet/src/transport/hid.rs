use crate::error::HwResult;
use crate::proto::ProtoMessage;
use crate::transport::protocol::{Link, ProtocolV1};
use crate::transport::{Transport, SUPPORTED_DEVICES};
use crate::Vendor;
use async_trait::async_trait;
use hw_common::transport::{HidDevice, HidInstance};

/// The protocol has no intrinsic timeouts; a device may sit on a PIN prompt
/// indefinitely, so reads block until the device answers or disappears.
const READ_TIMEOUT_MS: i32 = -1;

/// How the platform HID stack interprets byte 0 of an outbound report.
///
/// Windows-style stacks want an explicit payload-length byte of value 63 in
/// front; by a convenient accident that value is `?` (0x3F), the very byte
/// the protocol already puts first, so the report is written as-is. Stacks
/// that consume byte 0 as a numbered report id instead need a 0x00 id
/// prepended so the sentinel byte survives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReportScheme {
    LengthByte,
    ReportId,
}

pub struct HidTransport {
    protocol: ProtocolV1<HidLink>,
}

#[async_trait]
impl Transport for HidTransport {
    async fn write_message(&mut self, message: ProtoMessage) -> HwResult<()> { self.protocol.write(message).await }

    async fn read_message(&mut self) -> HwResult<ProtoMessage> { self.protocol.read().await }
}

struct HidLink {
    device: HidDevice,
    scheme: ReportScheme,
}

#[async_trait]
impl Link for HidLink {
    async fn write_chunk(&mut self, chunk: Vec<u8>) -> HwResult<()> {
        let buffer = match self.scheme {
            ReportScheme::LengthByte => chunk,
            ReportScheme::ReportId => {
                let mut buffer = Vec::with_capacity(chunk.len() + 1);
                buffer.push(0);
                buffer.extend(chunk);
                buffer
            },
        };
        Ok(self.device.write_chunk(buffer).await?)
    }

    async fn read_chunk(&mut self, chunk_len: u32) -> HwResult<Vec<u8>> {
        loop {
            let chunk = self.device.read_chunk(chunk_len as usize, READ_TIMEOUT_MS).await?;
            if !chunk.is_empty() {
                return Ok(chunk);
            }
        }
    }
}

/// List attached devices of the given family.
pub async fn find_devices(instance: &HidInstance, vendor: Vendor) -> HwResult<Vec<AvailableHidDevice>> {
    let devices = instance
        .device_list()
        .await
        .map_err(crate::error::HwError::from)?
        .into_iter()
        .filter(|device| is_supported(device, vendor))
        .map(|device| AvailableHidDevice { device, vendor })
        .collect();
    Ok(devices)
}

pub struct AvailableHidDevice {
    device: HidDevice,
    vendor: Vendor,
}

impl AvailableHidDevice {
    /// Open the device and wrap it into a framed transport.
    pub async fn connect(self, scheme: ReportScheme) -> HwResult<HidTransport> {
        self.device.connect().await?;
        let link = HidLink {
            device: self.device,
            scheme,
        };
        Ok(HidTransport {
            protocol: ProtocolV1 {
                link,
                vendor: self.vendor,
            },
        })
    }

    pub fn vendor(&self) -> Vendor { self.vendor }
}

fn is_supported(device: &HidDevice, vendor: Vendor) -> bool {
    let info = device.device_info();
    SUPPORTED_DEVICES.iter().any(|model| {
        model.vendor == vendor && model.vendor_id == info.vendor_id && model.product_id == info.product_id
    })
}
