use ed25519_dalek::VerifyingKey;

/// Hex form of a public key, printed so users can share it out of band.
pub fn fingerprint(key: &VerifyingKey) -> String {
    hex::encode(key.as_bytes())
}
