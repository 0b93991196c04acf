mod key_store;
mod signer;
pub mod verifier;

pub use key_store::KeyStore;
pub use signer::Signer;
pub use verifier::Verifier;
