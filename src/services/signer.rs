use std::path::{Path, PathBuf};

use ed25519_dalek::{Signer as _, SigningKey};
use log::debug;

use crate::models::{EdsignError, SignatureArtifact};
use crate::utils::fs::{ensure_exists, read_bytes, signature_path, write_bytes};

/// Produces detached `.sig` artifacts with a single private key.
pub struct Signer {
    signing_key: SigningKey,
}

impl Signer {
    pub fn new(signing_key: SigningKey) -> Self {
        Self { signing_key }
    }

    pub fn sign_bytes(&self, message: &[u8], comment: Option<&str>) -> SignatureArtifact {
        SignatureArtifact::new(self.signing_key.sign(message), comment)
    }

    /// Signs the file's current contents and writes `<path>.sig`, replacing
    /// any earlier artifact. Returns the artifact path.
    pub fn sign_file(&self, path: &Path, comment: Option<&str>) -> Result<PathBuf, EdsignError> {
        ensure_exists(path)?;
        let contents = read_bytes(path)?;
        let artifact = self.sign_bytes(&contents, comment);

        let sig_path = signature_path(path);
        write_bytes(&sig_path, artifact.to_string())?;
        debug!("Wrote {} ({} bytes signed)", sig_path.display(), contents.len());
        Ok(sig_path)
    }
}
