use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::models::EdsignError;

pub const KEY_DIR_NAME: &str = ".edsign";
pub const PRIVATE_KEY_FILE: &str = "private.key";
pub const PUBLIC_KEY_FILE: &str = "public.key";

/// Where key material lives. Defaults to `~/.edsign/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyConfig {
    pub private_key_path: PathBuf,
    pub public_key_path: PathBuf,
}

impl KeyConfig {
    pub fn load() -> Result<Self, EdsignError> {
        let home = dirs::home_dir().ok_or_else(|| {
            EdsignError::io(
                "Failed to resolve",
                Path::new("~").join(KEY_DIR_NAME),
                io::Error::new(io::ErrorKind::Other, "no home directory for the current user"),
            )
        })?;
        let config = Self::in_dir(home.join(KEY_DIR_NAME));
        debug!("Using key directory {}", home.join(KEY_DIR_NAME).display());
        Ok(config)
    }

    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            private_key_path: dir.join(PRIVATE_KEY_FILE),
            public_key_path: dir.join(PUBLIC_KEY_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_dir_layout() {
        let config = KeyConfig::in_dir("/home/alice/.edsign");
        assert_eq!(config.private_key_path, PathBuf::from("/home/alice/.edsign/private.key"));
        assert_eq!(config.public_key_path, PathBuf::from("/home/alice/.edsign/public.key"));
    }

    #[test]
    fn test_load_uses_home_directory() {
        if let Some(home) = dirs::home_dir() {
            let config = KeyConfig::load().unwrap();
            assert_eq!(config.private_key_path, home.join(".edsign").join("private.key"));
            assert_eq!(config.public_key_path, home.join(".edsign").join("public.key"));
        }
    }
}
