use crate::grid::Grid;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Content address of a grid: lowercase hex SHA-256 of its rows,
/// concatenated in order with no delimiter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

/// Hex digits in a fingerprint.
pub const FINGERPRINT_LEN: usize = 64;

impl Fingerprint {
    pub fn of(grid: &Grid) -> Self {
        let mut hasher = Sha256::new();
        for row in grid.rows() {
            hasher.update(row);
        }
        Self(hex::encode(hasher.finalize()))
    }

    /// Re-wraps a key read back from storage. Rejects anything that is not
    /// 64 lowercase hex digits.
    pub fn from_hex(s: &str) -> Option<Self> {
        let well_formed = s.len() == FINGERPRINT_LEN
            && s.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        well_formed.then(|| Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First `n` hex digits, for logs and tables.
    pub fn short(&self, n: usize) -> &str {
        &self.0[..n.min(self.0.len())]
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
