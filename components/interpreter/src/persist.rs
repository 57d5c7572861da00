//! Persisted objects
//!
//! File layout:
//!
//! | bytes | content                                   |
//! |-------|-------------------------------------------|
//! | 10    | signature `CLAC FILE\x1A`                 |
//! | 8     | payload length, little-endian `u64`       |
//! | 1     | type tag, the value's [`Kind::index`]     |
//! | n     | payload, the `bincode` encoding of the value |

use std::fs;
use std::io::Write;
use std::path::Path;

use core_types::{ClacError, ClacResult, Kind, Value};
use tempfile::NamedTempFile;

/// Signature at the start of every persisted object
pub const SIGNATURE: &[u8; 10] = b"CLAC FILE\x1A";

const HEADER_LEN: usize = SIGNATURE.len() + 8 + 1;

/// Encode `value` in the persisted layout
pub fn encode(value: &Value) -> ClacResult<Vec<u8>> {
    let payload = bincode::serialize(value)
        .map_err(|e| ClacError::io(format!("Unable to encode object: {}", e)))?;
    let mut bytes = Vec::with_capacity(HEADER_LEN + payload.len());
    bytes.extend_from_slice(SIGNATURE);
    bytes.extend_from_slice(&(payload.len() as u64).to_le_bytes());
    // Kind indices are below 12.
    bytes.push(value.kind().index() as u8);
    bytes.extend_from_slice(&payload);
    Ok(bytes)
}

/// Decode a value from the persisted layout
pub fn decode(bytes: &[u8]) -> ClacResult<Value> {
    if bytes.len() < HEADER_LEN || &bytes[..SIGNATURE.len()] != SIGNATURE {
        return Err(ClacError::io("Not a Clac object file"));
    }
    let mut length = [0u8; 8];
    length.copy_from_slice(&bytes[SIGNATURE.len()..SIGNATURE.len() + 8]);
    let length = u64::from_le_bytes(length);
    let payload = &bytes[HEADER_LEN..];
    if payload.len() as u64 != length {
        return Err(ClacError::io(format!(
            "Object length mismatch: header says {}, file holds {}",
            length,
            payload.len()
        )));
    }
    let tag = bytes[HEADER_LEN - 1];
    let kind = Kind::from_index(usize::from(tag))
        .ok_or_else(|| ClacError::io(format!("Unknown object type tag {}", tag)))?;
    let value: Value = bincode::deserialize(payload)
        .map_err(|e| ClacError::io(format!("Corrupt object: {}", e)))?;
    if value.kind() != kind {
        return Err(ClacError::io(format!(
            "Object tagged {} holds a {}",
            kind,
            value.kind()
        )));
    }
    value
        .validate()
        .map_err(|e| ClacError::io(format!("Corrupt object: {}", e)))?;
    Ok(value)
}

/// Write `value` to `path`.
///
/// The object goes to a temporary file in the same directory which then
/// replaces `path`, so on failure `path` keeps whatever it held before.
pub fn write_object(path: &Path, value: &Value) -> ClacResult<()> {
    let bytes = encode(value)?;
    let failed = |e: std::io::Error| {
        ClacError::io(format!("Unable to write {}: {}", path.display(), e))
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir).map_err(failed)?;
    file.write_all(&bytes).map_err(failed)?;
    file.as_file().sync_all().map_err(failed)?;
    file.persist(path).map_err(|e| failed(e.error))?;
    tracing::debug!(path = %path.display(), kind = %value.kind(), bytes = bytes.len(), "object written");
    Ok(())
}

/// Read the object stored at `path`
pub fn read_object(path: &Path) -> ClacResult<Value> {
    let bytes = fs::read(path)
        .map_err(|e| ClacError::io(format!("Unable to read {}: {}", path.display(), e)))?;
    let value = decode(&bytes)?;
    tracing::debug!(path = %path.display(), kind = %value.kind(), "object read");
    Ok(value)
}
