//! [`hidapi::HidApi`] is not thread-safe https://github.com/libusb/hidapi/issues/133 and synchronous,
//! so the whole API lives behind a single async mutex and reads block with an explicit timeout.
//! A session engine built on top of this driver holds exactly one device open at a time, which
//! keeps the lock uncontended in practice.
//! `hidapi` also cannot tell a silent device from a disconnected one
//! (https://github.com/libusb/hidapi/issues/103#issuecomment-537336680), so disconnection
//! surfaces as a read/write error rather than a dedicated signal.

use derive_more::Display;
use futures::lock::Mutex as AsyncMutex;
use hidapi::HidApi;
use log::warn;
use std::collections::HashMap;
use std::ffi::CString;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub type HidResult<T> = Result<T, HidError>;
type HidContextShared = Arc<AsyncMutex<HidContext>>;

#[derive(Debug, Display)]
pub enum HidError {
    /// Please note it's not the same as disconnected!
    DeviceNotInitializedYet,
    #[display(fmt = "Device is open already: {:?}", _0)]
    DeviceIsOpenAlready(HidDeviceInfo),
    #[display(fmt = "HID API has been initialized already")]
    InitializedAlready,
    #[display(fmt = "Error initializing HID API: {}", _0)]
    ErrorInitializing(hidapi::HidError),
    #[display(fmt = "Error getting devices: {}", _0)]
    ErrorGettingDevices(hidapi::HidError),
    #[display(fmt = "Error opening device: {}", _0)]
    ErrorOpeningDevice(hidapi::HidError),
    #[display(fmt = "Error writing chunk: {}", _0)]
    ErrorWritingChunk(hidapi::HidError),
    #[display(
        fmt = "Writing to the HID device descriptor has been interrupted. Tried to send '{}' bytes, but '{}' are only sent",
        chunk_len,
        sent
    )]
    WritingInterrupted {
        chunk_len: usize,
        sent: usize,
    },
    #[display(fmt = "Error reading chunk: {}", _0)]
    ErrorReadingChunk(hidapi::HidError),
    #[display(fmt = "Received chunk is too long: '{}', expected '{}'", actual, expected)]
    ReceivedChunkTooLong {
        actual: usize,
        expected: usize,
    },
    #[display(fmt = "Not enough info to connect to a HID device: {:?}", _0)]
    NotEnoughInfoToConnect(HidDeviceInfo),
    Internal(String),
}

static HID_API_INITIALIZED: AtomicBool = AtomicBool::new(false);

pub struct HidInstance {
    ctx: HidContextShared,
}

impl HidInstance {
    pub fn init() -> HidResult<HidInstance> {
        HidInstance::check_on_init()?;
        let api = HidApi::new().map_err(HidError::ErrorInitializing)?;
        HID_API_INITIALIZED.store(true, Ordering::Relaxed);
        let ctx = Arc::new(AsyncMutex::new(HidContext::new(api)));
        Ok(HidInstance { ctx })
    }

    fn check_on_init() -> HidResult<()> {
        if HID_API_INITIALIZED.load(Ordering::Relaxed) {
            return Err(HidError::InitializedAlready);
        }
        Ok(())
    }

    pub async fn device_list(&self) -> HidResult<Vec<HidDevice>> {
        let mut ctx = self.ctx.lock().await;
        let devices = ctx
            .device_list()?
            .into_iter()
            .map(|device_info| HidDevice {
                ctx: self.ctx.clone(),
                device_info,
            })
            .collect();
        Ok(devices)
    }
}

struct HidContext {
    api: HidApi,
    connected_devices: HashMap<HidDeviceInfo, hidapi::HidDevice>,
}

impl Drop for HidContext {
    fn drop(&mut self) {
        const EXPECTED_CURRENT: bool = true;
        if HID_API_INITIALIZED
            .compare_exchange(EXPECTED_CURRENT, false, Ordering::Relaxed, Ordering::Relaxed)
            .is_err()
        {
            warn!("HID API has been released already");
        }
    }
}

impl HidContext {
    fn new(api: HidApi) -> HidContext {
        HidContext {
            api,
            connected_devices: HashMap::new(),
        }
    }

    fn device_list(&mut self) -> HidResult<Vec<HidDeviceInfo>> {
        self.api.refresh_devices().map_err(HidError::ErrorGettingDevices)?;
        Ok(self.api.device_list().map(HidDeviceInfo::from).collect())
    }
}

pub struct HidDevice {
    ctx: HidContextShared,
    device_info: HidDeviceInfo,
}

impl HidDevice {
    pub async fn connect(&self) -> HidResult<()> {
        let mut ctx = self.ctx.lock().await;
        if ctx.connected_devices.contains_key(&self.device_info) {
            return Err(HidError::DeviceIsOpenAlready(self.device_info.clone()));
        }

        // `CString` is expected to end with a zero byte and has a length of at least one.
        let device = if self.device_info.path.as_bytes().len() > 1 {
            ctx.api
                .open_path(self.device_info.path.as_c_str())
                .map_err(HidError::ErrorOpeningDevice)?
        } else {
            let serial_number = self
                .device_info
                .serial_number
                .as_ref()
                .ok_or_else(|| HidError::NotEnoughInfoToConnect(self.device_info.clone()))?;
            ctx.api
                .open_serial(self.device_info.vendor_id, self.device_info.product_id, serial_number)
                .map_err(HidError::ErrorOpeningDevice)?
        };
        ctx.connected_devices.insert(self.device_info.clone(), device);
        Ok(())
    }

    /// Returns true if the device is open yet.
    /// Please note USB enumeration can be expensive on some OS.
    pub async fn is_open(&self) -> bool {
        let mut ctx = self.ctx.lock().await;
        if ctx.connected_devices.get(&self.device_info).is_none() {
            return false;
        }
        let devices = match ctx.device_list() {
            Ok(devices) => devices,
            Err(e) => {
                warn!("{}", e);
                return false;
            },
        };
        devices.contains(&self.device_info)
    }

    pub fn device_info(&self) -> &HidDeviceInfo { &self.device_info }

    pub async fn write_chunk(&self, chunk: Vec<u8>) -> HidResult<()> {
        let ctx = self.ctx.lock().await;
        let chunk_len = chunk.len();

        let device = ctx
            .connected_devices
            .get(&self.device_info)
            .ok_or(HidError::DeviceNotInitializedYet)?;
        let sent = device.write(&chunk).map_err(HidError::ErrorWritingChunk)?;
        if sent < chunk_len {
            return Err(HidError::WritingInterrupted { chunk_len, sent });
        }
        Ok(())
    }

    /// Blocks until a report arrives or `timeout_ms` passes (`-1` blocks indefinitely,
    /// matching the protocol's lack of intrinsic timeouts).
    ///
    /// # Important
    ///
    /// May return a chunk with the length less than `chunk_len`.
    pub async fn read_chunk(&self, chunk_len: usize, timeout_ms: i32) -> HidResult<Vec<u8>> {
        let ctx = self.ctx.lock().await;
        let device = ctx
            .connected_devices
            .get(&self.device_info)
            .ok_or(HidError::DeviceNotInitializedYet)?;
        let mut buf = vec![0; chunk_len];
        let received = device
            .read_timeout(&mut buf, timeout_ms)
            .map_err(HidError::ErrorReadingChunk)?;
        if received > chunk_len {
            return Err(HidError::ReceivedChunkTooLong {
                actual: received,
                expected: chunk_len,
            });
        }
        Ok(buf[0..received].to_vec())
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct HidDeviceInfo {
    pub vendor_id: u16,
    pub product_id: u16,
    pub interface_number: i32,
    pub path: CString,
    pub serial_number: Option<String>,
    pub manufacturer_string: Option<String>,
    pub product_string: Option<String>,
}

impl From<&hidapi::DeviceInfo> for HidDeviceInfo {
    fn from(info: &hidapi::DeviceInfo) -> Self {
        HidDeviceInfo {
            vendor_id: info.vendor_id(),
            product_id: info.product_id(),
            interface_number: info.interface_number(),
            path: info.path().to_owned(),
            serial_number: info.serial_number().map(str::to_owned),
            manufacturer_string: info.manufacturer_string().map(str::to_owned),
            product_string: info.product_string().map(str::to_owned),
        }
    }
}
