pub mod crypto;
pub mod fs;
pub mod pattern;
