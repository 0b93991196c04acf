use std::fmt;
use std::path::{Path, PathBuf};

use ed25519_dalek::{Verifier as _, VerifyingKey};
use log::debug;

use crate::models::{EdsignError, SignatureArtifact};
use crate::utils::fs::{ensure_exists, read_bytes, read_text, signature_path};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Valid => write!(f, "valid"),
            Verdict::Invalid => write!(f, "invalid"),
        }
    }
}

/// Outcome of verifying one file in a batch.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<Verdict, EdsignError>,
}

/// Checks detached `.sig` artifacts against a single public key.
pub struct Verifier {
    verifying_key: VerifyingKey,
}

impl Verifier {
    pub fn new(verifying_key: VerifyingKey) -> Self {
        Self { verifying_key }
    }

    pub fn verify_bytes(&self, message: &[u8], artifact: &SignatureArtifact) -> Verdict {
        match self.verifying_key.verify(message, &artifact.signature) {
            Ok(()) => Verdict::Valid,
            Err(_) => Verdict::Invalid,
        }
    }

    /// A mismatched signature is an `Invalid` verdict; only missing or
    /// unreadable inputs are errors.
    pub fn verify_file(&self, path: &Path) -> Result<Verdict, EdsignError> {
        ensure_exists(path)?;
        let contents = read_bytes(path)?;
        let artifact = SignatureArtifact::parse(&read_text(&signature_path(path))?)?;
        if let Some(comment) = &artifact.comment {
            debug!("Ignoring comment on {}: {}", path.display(), comment);
        }
        Ok(self.verify_bytes(&contents, &artifact))
    }

    /// Verifies every path independently, in order. One file's error does
    /// not stop the rest.
    pub fn verify_files(&self, paths: &[PathBuf]) -> Vec<FileOutcome> {
        paths
            .iter()
            .map(|path| FileOutcome {
                path: path.clone(),
                result: self.verify_file(path),
            })
            .collect()
    }
}
