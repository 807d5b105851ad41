//! Framing of protobuf messages across fixed 64-byte HID reports.
//!
//! Wire layout of a message:
//! `## <type:u16 BE> <size:u32 BE> <body> <zero padding to a multiple of 63>`
//! carried in reports of `0x3F` + 63 payload bytes. The first report of a
//! message therefore starts `3F 23 23`; the reader resynchronises on that
//! sentinel and skips anything else.

use crate::proto::messages::MessageType;
use crate::proto::ProtoMessage;
use crate::error::{HwError, HwResult};
use crate::Vendor;
use async_trait::async_trait;
use byteorder::{BigEndian, ByteOrder};
use log::{debug, warn};

const CHUNK_LEN: u32 = 64;
const CHUNK_HEADER_LEN: usize = 9;
/// Upper bound on a reassembled body. A frame announcing more than this is
/// considered malformed and the buffer is discarded.
const MAX_MESSAGE_LEN: usize = 32 * 1024;

/// A link represents a serial connection to send and receive byte chunks from and to a device.
#[async_trait]
pub trait Link {
    async fn write_chunk(&mut self, chunk: Vec<u8>) -> HwResult<()>;
    async fn read_chunk(&mut self, chunk_len: u32) -> HwResult<Vec<u8>>;
}

/// The original first-generation binary protocol.
pub struct ProtocolV1<L: Link> {
    pub link: L,
    pub vendor: Vendor,
}

impl<L: Link + Send> ProtocolV1<L> {
    pub async fn write(&mut self, message: ProtoMessage) -> HwResult<()> {
        // First generate the total payload, then write it to the transport in chunks.
        let tag = message.message_type().wire_tag(self.vendor);
        let mut data = vec![0; 8];
        data[0] = 0x23;
        data[1] = 0x23;
        BigEndian::write_u16(&mut data[2..4], tag);
        BigEndian::write_u32(&mut data[4..8], message.payload().len() as u32);
        data.extend(message.into_payload());

        let mut cur: usize = 0;
        while cur < data.len() {
            let mut chunk = vec![0x3f];
            let end = std::cmp::min(cur + (CHUNK_LEN - 1) as usize, data.len());
            chunk.extend(&data[cur..end]);
            cur = end;
            debug_assert!(chunk.len() <= CHUNK_LEN as usize);
            chunk.resize(CHUNK_LEN as usize, 0);

            self.link.write_chunk(chunk).await?;
        }

        Ok(())
    }

    pub async fn read(&mut self) -> HwResult<ProtoMessage> {
        // Keep reading until synchronized on the '?##' sentinel.
        let first = loop {
            let chunk = self.link.read_chunk(CHUNK_LEN).await?;
            if chunk.len() < CHUNK_HEADER_LEN {
                debug!("Discarding a short report of {} bytes", chunk.len());
                continue;
            }
            if chunk[0] == 0x3f && chunk[1] == 0x23 && chunk[2] == 0x23 {
                break chunk;
            }
            debug!(
                "Discarding a report without the start sentinel: 0x{:02x}{:02x}{:02x}",
                chunk[0], chunk[1], chunk[2]
            );
        };

        let tag = BigEndian::read_u16(&first[3..5]);
        let data_length = BigEndian::read_u32(&first[5..9]) as usize;
        if data_length > MAX_MESSAGE_LEN {
            let error = format!("Announced body of '{}' bytes exceeds '{}'", data_length, MAX_MESSAGE_LEN);
            return Err(HwError::MalformedFrame(error));
        }
        let mut data: Vec<u8> = first[9..].into();

        while data.len() < data_length {
            let chunk = self.link.read_chunk(CHUNK_LEN).await?;
            if chunk.is_empty() || chunk[0] != 0x3f {
                warn!(
                    "Skipping a continuation report with bad first byte: expected '3f', actual '{:02x}'",
                    chunk.first().copied().unwrap_or_default()
                );
                continue;
            }
            data.extend(&chunk[1..]);
        }
        data.truncate(data_length);

        let message_type =
            MessageType::from_wire(self.vendor, tag).ok_or(HwError::UnknownType(tag))?;
        Ok(ProtoMessage::new(message_type, data))
    }
}
