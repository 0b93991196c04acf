use std::path::Path;

use log::info;

use crate::handlers::Status;
use crate::models::EdsignError;
use crate::services::{KeyStore, Signer};
use crate::utils::pattern::{expand_pattern, Directories};

/// Sign every file matching `pattern`. Matched directories are skipped, and
/// the batch stops at the first file that fails.
pub fn sign_files(
    key_store: &KeyStore,
    pattern: &str,
    comment: Option<&str>,
    key_path: Option<&Path>,
) -> Result<Status, EdsignError> {
    let signer = Signer::new(key_store.load_private_key(key_path)?);
    let files = expand_pattern(pattern, Directories::Skip)?;
    info!("Signing {} file(s) matching {}", files.len(), pattern);

    for file in &files {
        signer.sign_file(file, comment)?;
        println!("Signed file: {}", file.display());
    }
    Ok(Status::Completed)
}
