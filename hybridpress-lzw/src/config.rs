//! LZW configuration: how far the dictionary may grow.

use crate::error::{LzwError, Result};
use serde::{Deserialize, Serialize};

/// Number of seed entries, one per byte value (codes 0-255).
pub const SEED_CODES: u32 = 256;

/// Default dictionary capacity, in codes (seed entries included).
pub const DEFAULT_MAX_CODES: u32 = 4096;

/// Growth policy for the dictionary.
///
/// Both the encoder and the decoder apply the same policy, so an artifact must
/// carry the policy it was produced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "max_codes")]
pub enum DictionaryLimit {
    /// Grow without bound for the lifetime of one call.
    Unbounded,
    /// Stop adding entries once the table holds this many codes. The table
    /// stays usable, it just no longer learns new strings.
    Freeze(u32),
}

/// LZW configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LzwConfig {
    /// Dictionary growth policy.
    pub limit: DictionaryLimit,
}

impl LzwConfig {
    /// Unbounded dictionary growth.
    pub const UNBOUNDED: Self = Self {
        limit: DictionaryLimit::Unbounded,
    };

    /// Dictionary frozen at [`DEFAULT_MAX_CODES`] codes.
    pub const CAPPED: Self = Self {
        limit: DictionaryLimit::Freeze(DEFAULT_MAX_CODES),
    };

    /// Create a configuration that freezes the dictionary at `max_codes`.
    pub fn new(max_codes: u32) -> Self {
        Self {
            limit: DictionaryLimit::Freeze(max_codes),
        }
    }

    /// Check that the limit leaves room for the seed table.
    pub fn validate(&self) -> Result<()> {
        match self.limit {
            DictionaryLimit::Freeze(max) if max < SEED_CODES => Err(LzwError::InvalidLimit(max)),
            _ => Ok(()),
        }
    }

    /// Maximum number of codes, if bounded.
    pub fn max_codes(&self) -> Option<u32> {
        match self.limit {
            DictionaryLimit::Unbounded => None,
            DictionaryLimit::Freeze(max) => Some(max),
        }
    }

    /// Whether a new entry may be assigned `next_code`.
    pub fn allows(&self, next_code: u32) -> bool {
        self.max_codes().is_none_or(|max| next_code < max)
    }
}

impl Default for LzwConfig {
    fn default() -> Self {
        Self::CAPPED
    }
}
