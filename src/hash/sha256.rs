//! SHA256 hash - 64 lowercase hex characters.

use sha2::{Digest, Sha256};

use super::HashFunction;

pub struct Sha256Hash;

impl HashFunction for Sha256Hash {
    fn name(&self) -> &'static str {
        "sha256"
    }

    fn hash(&self, input: &str) -> String {
        hex::encode(Sha256::digest(input.as_bytes()))
    }
}
