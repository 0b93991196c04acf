use std::fmt;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use ed25519_dalek::{Signature, SIGNATURE_LENGTH};

use crate::models::EdsignError;

/// Parsed contents of a `.sig` file: `<base64-signature>[ <comment>]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureArtifact {
    pub signature: Signature,
    pub comment: Option<String>,
}

impl SignatureArtifact {
    /// An empty comment is stored as no comment, so no trailing space is written.
    pub fn new(signature: Signature, comment: Option<&str>) -> Self {
        Self {
            signature,
            comment: comment.filter(|c| !c.is_empty()).map(str::to_string),
        }
    }

    pub fn parse(text: &str) -> Result<Self, EdsignError> {
        let text = text.trim_end_matches(|c: char| c == '\r' || c == '\n');
        let (token, comment) = match text.split_once(' ') {
            Some((token, comment)) => (token, Some(comment)),
            None => (text, None),
        };

        let bytes = BASE64.decode(token)?;
        let array: [u8; SIGNATURE_LENGTH] = bytes.as_slice().try_into().map_err(|_| {
            EdsignError::Format(format!(
                "signature must be {} bytes, got {}",
                SIGNATURE_LENGTH,
                bytes.len()
            ))
        })?;

        Ok(Self::new(Signature::from_bytes(&array), comment))
    }
}

impl fmt::Display for SignatureArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = BASE64.encode(self.signature.to_bytes());
        match &self.comment {
            Some(comment) => write!(f, "{} {}", encoded, comment),
            None => write!(f, "{}", encoded),
        }
    }
}
