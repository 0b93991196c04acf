use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EdsignError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("{action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid format: {0}")]
    Format(String),

    #[error("Key file already exists: {} (use --force to overwrite)", .0.display())]
    KeyExists(PathBuf),
}

impl EdsignError {
    /// Wraps an I/O failure, folding "not found" into [`EdsignError::NotFound`].
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            return EdsignError::NotFound(path);
        }
        EdsignError::Io { action, path, source }
    }
}

impl From<ed25519_dalek::SignatureError> for EdsignError {
    fn from(err: ed25519_dalek::SignatureError) -> Self {
        EdsignError::Format(format!("bad key material: {}", err))
    }
}

impl From<base64::DecodeError> for EdsignError {
    fn from(err: base64::DecodeError) -> Self {
        EdsignError::Format(format!("signature is not valid base64: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_path() {
        let err = EdsignError::NotFound(PathBuf::from("missing.txt"));
        assert_eq!(err.to_string(), "File not found: missing.txt");
    }

    #[test]
    fn test_io_not_found_is_folded() {
        let source = io::Error::new(io::ErrorKind::NotFound, "gone");
        let err = EdsignError::io("Failed to read", "a.txt", source);
        assert!(matches!(err, EdsignError::NotFound(ref p) if p == &PathBuf::from("a.txt")));
    }

    #[test]
    fn test_io_other_kinds_keep_context() {
        let source = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = EdsignError::io("Failed to write", "/keys/private.key", source);
        assert_eq!(err.to_string(), "Failed to write /keys/private.key: denied");
    }
}
