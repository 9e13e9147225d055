//! Snapshot Manager
//!
//! Saves a store to disk and loads it back.
//!
//! ## Responsibilities
//! - Copy the store's entries and write them to a fresh temp file
//! - Flush, optionally fsync, then rename over the destination
//! - Read a snapshot fully and hand back a validated mapping

use std::collections::HashMap;
use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{MimeError, Result};
use crate::record::{self, Record};
use crate::store::Store;

use super::format::{self, SnapshotInfo};

/// Write every record in `store` to `path`
///
/// The destination is only replaced once the new file is completely
/// written, so a failed save leaves any previous snapshot intact. Saves of
/// the same store are serialized; they share one temp file.
pub fn save(store: &Store, path: &Path, sync: bool) -> Result<()> {
    let _save_guard = store.lock_saves();

    let entries = store.entries();
    let refs: Vec<(&str, &Record)> = entries
        .iter()
        .map(|(key, record)| (key.as_str(), record.as_ref()))
        .collect();

    let bytes = format::encode(&refs)?;
    write_replace(path, &bytes, sync)?;

    tracing::debug!(
        path = %path.display(),
        entries = refs.len(),
        bytes = bytes.len(),
        "snapshot saved"
    );
    Ok(())
}

/// Read and decode the snapshot at `path`
///
/// A missing file is `SnapshotNotFound`; anything that does not decode into
/// a valid key → record mapping is `CorruptSnapshot`.
pub fn load(path: &Path) -> Result<HashMap<String, Record>> {
    let bytes = read_file(path)?;
    let entries = format::decode(&bytes)?;

    let mut records = HashMap::with_capacity(entries.len());
    for (key, record) in entries {
        record::validate(&key, &record).map_err(|e| {
            MimeError::CorruptSnapshot(format!("invalid record under key {:?}: {}", key, e))
        })?;
        if records.insert(key.clone(), record).is_some() {
            return Err(MimeError::CorruptSnapshot(format!(
                "duplicate key {:?}",
                key
            )));
        }
    }

    tracing::debug!(path = %path.display(), entries = records.len(), "snapshot loaded");
    Ok(records)
}

/// Verify the header and checksum of the snapshot at `path` without
/// decoding its records
pub fn inspect(path: &Path) -> Result<SnapshotInfo> {
    let bytes = read_file(path)?;
    let (info, _) = format::read_header(&bytes)?;
    Ok(info)
}

// =============================================================================
// Private Helpers
// =============================================================================

fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => MimeError::SnapshotNotFound(path.to_path_buf()),
        _ => MimeError::Io(e),
    })
}

/// "<path>.tmp", next to the destination so the rename stays on one filesystem
fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

fn write_replace(path: &Path, bytes: &[u8], sync: bool) -> Result<()> {
    let tmp = temp_path(path);

    let result = write_temp(&tmp, bytes, sync).and_then(|()| {
        fs::rename(&tmp, path)?;
        Ok(())
    });

    if result.is_err() {
        // Best effort cleanup
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn write_temp(tmp: &Path, bytes: &[u8], sync: bool) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(tmp)?;

    let mut writer = BufWriter::new(file);
    writer.write_all(bytes)?;
    writer.flush()?;

    let file = writer
        .into_inner()
        .map_err(|e| MimeError::Io(e.into_error()))?;
    if sync {
        file.sync_all()?;
    }
    Ok(())
}
