use log::info;

use crate::handlers::Status;
use crate::models::EdsignError;
use crate::services::KeyStore;
use crate::utils::crypto::fingerprint;

/// Generate and persist a new key pair
pub fn create_key_pair(key_store: &KeyStore, force: bool) -> Result<Status, EdsignError> {
    info!("Creating key pair (overwrite: {})", force);
    let key_pair = key_store.create_key_pair(force)?;
    let config = key_store.config();

    println!("Key pair generated successfully.");
    println!("Private key file created: {}", config.private_key_path.display());
    println!("Public key file created: {}", config.public_key_path.display());
    println!("Public key: {}", fingerprint(&key_pair.verifying_key()));
    Ok(Status::Completed)
}
