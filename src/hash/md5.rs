//! MD5 hash - 32 lowercase hex characters.

use md5::{Digest, Md5};

use super::HashFunction;

pub struct Md5Hash;

impl HashFunction for Md5Hash {
    fn name(&self) -> &'static str {
        "md5"
    }

    fn hash(&self, input: &str) -> String {
        hex::encode(Md5::digest(input.as_bytes()))
    }
}
