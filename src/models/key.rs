use ed25519_dalek::{SigningKey, VerifyingKey, KEYPAIR_LENGTH, PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH};
use rand::rngs::OsRng;

use crate::models::EdsignError;

/// Matched Ed25519 private/public key material.
#[derive(Debug)]
pub struct KeyPair {
    signing_key: SigningKey,
}

impl KeyPair {
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut OsRng),
        }
    }

    pub fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }

    pub fn verifying_key(&self) -> VerifyingKey {
        self.signing_key().verifying_key()
    }

    /// On-disk private key layout: 32-byte seed followed by the 32-byte public key.
    pub fn private_key_bytes(&self) -> [u8; KEYPAIR_LENGTH] {
        self.signing_key.to_keypair_bytes()
    }

    pub fn public_key_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.signing_key.verifying_key().to_bytes()
    }
}

/// Parses a private key file. Accepts the 64-byte keypair layout or a bare 32-byte seed.
pub fn signing_key_from_bytes(bytes: &[u8]) -> Result<SigningKey, EdsignError> {
    match bytes.len() {
        KEYPAIR_LENGTH => {
            let mut array = [0u8; KEYPAIR_LENGTH];
            array.copy_from_slice(bytes);
            Ok(SigningKey::from_keypair_bytes(&array)?)
        }
        SECRET_KEY_LENGTH => {
            let mut array = [0u8; SECRET_KEY_LENGTH];
            array.copy_from_slice(bytes);
            Ok(SigningKey::from_bytes(&array))
        }
        len => Err(EdsignError::Format(format!(
            "private key must be {} or {} bytes, got {}",
            KEYPAIR_LENGTH, SECRET_KEY_LENGTH, len
        ))),
    }
}

pub fn verifying_key_from_bytes(bytes: &[u8]) -> Result<VerifyingKey, EdsignError> {
    let array: [u8; PUBLIC_KEY_LENGTH] = bytes.try_into().map_err(|_| {
        EdsignError::Format(format!(
            "public key must be {} bytes, got {}",
            PUBLIC_KEY_LENGTH,
            bytes.len()
        ))
    })?;
    Ok(VerifyingKey::from_bytes(&array)?)
}
