use std::fmt;

use sha1::{Digest, Sha1};

/// Number of hex characters sent to the range endpoint.
pub const RANGE_PREFIX_LEN: usize = 5;

/// Lowercase hex SHA-1 of a plaintext password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(password: &str) -> Self {
        Self(sha1_hex(password.as_bytes()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part of the hash that leaves the machine.
    pub fn prefix(&self) -> &str {
        &self.0[..RANGE_PREFIX_LEN]
    }

    /// The remaining 35 characters, matched locally against the range body.
    pub fn suffix(&self) -> &str {
        &self.0[RANGE_PREFIX_LEN..]
    }
}

impl fmt::Display for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn sha1_hex(input: &[u8]) -> String {
    hex::encode(Sha1::digest(input))
}
