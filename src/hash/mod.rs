//! Hashing stage.
//!
//! A hash function maps any string to a fixed-length lowercase hex digest.
//! The pipeline only depends on [`HashFunction`], so digests can be swapped
//! without touching the iteration loop.

mod md5;
mod sha256;

pub use md5::Md5Hash;
pub use sha256::Sha256Hash;

use crate::error::ConfigError;

/// One-way hash of a string into a hex digest.
pub trait HashFunction: Send + Sync {
    /// Human-readable name for this hash
    fn name(&self) -> &'static str;

    /// Hash the UTF-8 bytes of `input`. Must be deterministic.
    fn hash(&self, input: &str) -> String;
}

/// Available hash types
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HashType {
    #[default]
    Md5,
    Sha256,
}

impl HashType {
    /// Create a boxed hash instance
    pub fn create(&self) -> Box<dyn HashFunction> {
        match self {
            HashType::Md5 => Box::new(Md5Hash),
            HashType::Sha256 => Box::new(Sha256Hash),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HashType::Md5 => "md5",
            HashType::Sha256 => "sha256",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s.to_lowercase().as_str() {
            "md5" => Ok(HashType::Md5),
            "sha256" => Ok(HashType::Sha256),
            _ => Err(ConfigError::UnknownHash(s.to_string())),
        }
    }
}
