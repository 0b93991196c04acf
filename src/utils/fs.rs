use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::models::EdsignError;

pub const SIGNATURE_EXTENSION: &str = "sig";

/// `<path>.sig`, appended to the full file name rather than replacing its extension.
pub fn signature_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(SIGNATURE_EXTENSION);
    PathBuf::from(name)
}

pub fn is_signature_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == SIGNATURE_EXTENSION)
}

pub fn read_bytes(path: &Path) -> Result<Vec<u8>, EdsignError> {
    fs::read(path).map_err(|e| EdsignError::io("Failed to read", path, e))
}

/// Reads a text artifact. Bytes that are not UTF-8 are a format error.
pub fn read_text(path: &Path) -> Result<String, EdsignError> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::InvalidData => {
            EdsignError::Format(format!("{} is not valid UTF-8 text", path.display()))
        }
        _ => EdsignError::io("Failed to read", path, e),
    })
}

pub fn write_bytes(path: &Path, contents: impl AsRef<[u8]>) -> Result<(), EdsignError> {
    fs::write(path, contents).map_err(|e| EdsignError::io("Failed to write", path, e))
}

/// Source files must exist before any work is done on them.
pub fn ensure_exists(path: &Path) -> Result<(), EdsignError> {
    if !path.exists() {
        return Err(EdsignError::NotFound(path.to_path_buf()));
    }
    Ok(())
}
