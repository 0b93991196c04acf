pub mod error;
pub mod key;
pub mod signature;

pub use error::EdsignError;
pub use key::KeyPair;
pub use signature::SignatureArtifact;
