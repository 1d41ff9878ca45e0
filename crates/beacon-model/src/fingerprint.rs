//! Deterministic label-set fingerprints.
//!
//! A [`Fingerprint`] is the content-derived identity of a label set: equal
//! sets always hash to the same value, on every run, on every platform. It
//! is also totally ordered, which makes it usable as the final tie-break in
//! the canonical alert ordering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::labels::LabelSet;

/// Separator between hashed name and value bytes. Cannot occur in a valid
/// label name, so `{"ab": "c"}` and `{"a": "bc"}` hash differently.
const SEPARATOR: [u8; 1] = [0xff];

/// A deterministic, totally-ordered hash of a label set.
///
/// The canonical textual form is 16 lowercase hex digits, e.g.
/// `"00c8f2a17d3b9e04"`. The value is stable across process restarts: it
/// depends only on the label pairs, never on memory addresses, map
/// iteration order, or seeded hashers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fingerprint(u64);

impl Fingerprint {
    /// Computes the fingerprint of a label set.
    ///
    /// Hashes the pairs in sorted name order, names and values delimited by
    /// a separator byte, and keeps the first eight digest bytes.
    #[must_use]
    pub fn of(labels: &LabelSet) -> Self {
        let mut hasher = blake3::Hasher::new();
        for (name, value) in labels.iter() {
            hasher.update(name.as_str().as_bytes());
            hasher.update(&SEPARATOR);
            hasher.update(value.as_bytes());
            hasher.update(&SEPARATOR);
        }

        let digest = hasher.finalize();
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest.as_bytes()[..8]);
        Self(u64::from_le_bytes(prefix))
    }

    /// Creates a fingerprint from a raw value.
    #[must_use]
    pub const fn from_u64(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw fingerprint value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl FromStr for Fingerprint {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        u64::from_str_radix(s, 16)
            .map(Self)
            .map_err(|_| ModelError::InvalidFingerprint {
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for Fingerprint {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Fingerprint> for String {
    fn from(fp: Fingerprint) -> Self {
        fp.to_string()
    }
}
