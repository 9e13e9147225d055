//! Snapshot frame encoding
//!
//! Header fields are little-endian; the body is bincode.

use crate::error::{MimeError, Result};
use crate::record::Record;

/// Magic bytes at the start of every snapshot
pub const MAGIC: &[u8; 4] = b"MKVS";

/// Current frame version
pub const VERSION: u16 = 1;

/// magic (4) + version (2) + entry count (8) + body len (8) + crc (4)
pub const HEADER_SIZE: usize = 26;

/// Header metadata of a snapshot file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotInfo {
    pub version: u16,
    pub entry_count: u64,
    pub body_len: u64,
    pub body_crc: u32,
}

/// Encode entries into a complete snapshot frame
pub fn encode(entries: &[(&str, &Record)]) -> Result<Vec<u8>> {
    let body = bincode::serialize(entries)
        .map_err(|e| MimeError::Serialization(format!("Failed to encode snapshot: {}", e)))?;
    let crc = crc32fast::hash(&body);

    let mut buf = Vec::with_capacity(HEADER_SIZE + body.len());
    buf.extend_from_slice(MAGIC);
    buf.extend_from_slice(&VERSION.to_le_bytes());
    buf.extend_from_slice(&(entries.len() as u64).to_le_bytes());
    buf.extend_from_slice(&(body.len() as u64).to_le_bytes());
    buf.extend_from_slice(&crc.to_le_bytes());
    buf.extend_from_slice(&body);

    Ok(buf)
}

/// Parse and verify the header; returns the info and the body slice
pub fn read_header(bytes: &[u8]) -> Result<(SnapshotInfo, &[u8])> {
    if bytes.len() < HEADER_SIZE {
        return Err(MimeError::CorruptSnapshot(format!(
            "truncated header: {} bytes, need {}",
            bytes.len(),
            HEADER_SIZE
        )));
    }

    let (header, body) = bytes.split_at(HEADER_SIZE);
    if &header[0..4] != MAGIC {
        return Err(MimeError::CorruptSnapshot("bad magic".to_string()));
    }

    let version = u16::from_le_bytes([header[4], header[5]]);
    if version != VERSION {
        return Err(MimeError::CorruptSnapshot(format!(
            "unsupported version {}",
            version
        )));
    }

    let info = SnapshotInfo {
        version,
        entry_count: u64::from_le_bytes(le_array(&header[6..14])),
        body_len: u64::from_le_bytes(le_array(&header[14..22])),
        body_crc: u32::from_le_bytes(le_array(&header[22..26])),
    };

    if body.len() as u64 != info.body_len {
        return Err(MimeError::CorruptSnapshot(format!(
            "body length mismatch: header says {}, found {}",
            info.body_len,
            body.len()
        )));
    }

    let actual_crc = crc32fast::hash(body);
    if actual_crc != info.body_crc {
        return Err(MimeError::CorruptSnapshot(format!(
            "checksum mismatch: expected {:08x}, got {:08x}",
            info.body_crc, actual_crc
        )));
    }

    Ok((info, body))
}

/// Decode a complete snapshot frame into its entries
pub fn decode(bytes: &[u8]) -> Result<Vec<(String, Record)>> {
    let (info, body) = read_header(bytes)?;

    let entries: Vec<(String, Record)> = bincode::deserialize(body)
        .map_err(|e| MimeError::CorruptSnapshot(format!("undecodable body: {}", e)))?;

    if entries.len() as u64 != info.entry_count {
        return Err(MimeError::CorruptSnapshot(format!(
            "entry count mismatch: header says {}, decoded {}",
            info.entry_count,
            entries.len()
        )));
    }

    Ok(entries)
}

fn le_array<const N: usize>(slice: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(slice);
    out
}
