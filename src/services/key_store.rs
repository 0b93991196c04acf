use std::fs;
use std::path::Path;

use ed25519_dalek::{SigningKey, VerifyingKey};
use log::{debug, info};

use crate::config::KeyConfig;
use crate::models::key::{signing_key_from_bytes, verifying_key_from_bytes};
use crate::models::{EdsignError, KeyPair};
use crate::utils::fs::{read_bytes, write_bytes};

/// Creates and loads key material at the configured locations.
pub struct KeyStore {
    config: KeyConfig,
}

impl KeyStore {
    pub fn new(config: KeyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &KeyConfig {
        &self.config
    }

    /// Generates a fresh pair and writes both halves. Existing key files are
    /// left untouched unless `overwrite` is set.
    pub fn create_key_pair(&self, overwrite: bool) -> Result<KeyPair, EdsignError> {
        let private_path = &self.config.private_key_path;
        let public_path = &self.config.public_key_path;

        if !overwrite {
            for path in [private_path, public_path] {
                if path.exists() {
                    return Err(EdsignError::KeyExists(path.clone()));
                }
            }
        }

        let key_pair = KeyPair::generate();
        for path in [private_path, public_path] {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| EdsignError::io("Failed to create directory", parent, e))?;
            }
        }

        write_bytes(private_path, key_pair.private_key_bytes())?;
        restrict_permissions(private_path)?;
        write_bytes(public_path, key_pair.public_key_bytes())?;

        info!("Wrote key pair to {} and {}", private_path.display(), public_path.display());
        Ok(key_pair)
    }

    /// Loads the private key from `path`, or the configured location.
    pub fn load_private_key(&self, path: Option<&Path>) -> Result<SigningKey, EdsignError> {
        let path = path.unwrap_or(self.config.private_key_path.as_path());
        debug!("Loading private key from {}", path.display());
        let bytes = read_bytes(path)?;
        signing_key_from_bytes(&bytes)
    }

    /// Loads the public key from `path`, or the configured location.
    pub fn load_public_key(&self, path: Option<&Path>) -> Result<VerifyingKey, EdsignError> {
        let path = path.unwrap_or(self.config.public_key_path.as_path());
        debug!("Loading public key from {}", path.display());
        let bytes = read_bytes(path)?;
        verifying_key_from_bytes(&bytes)
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<(), EdsignError> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
        .map_err(|e| EdsignError::io("Failed to set permissions on", path, e))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<(), EdsignError> {
    Ok(())
}
