//! Credential pool for quota spreading.

use rand::seq::IndexedRandom;

use crate::error::{YoutubeError, YoutubeResult};

/// Maximum number of credential slots read from the environment.
const MAX_POOL_SLOTS: usize = 5;

/// A fixed pool of equivalent API credentials.
///
/// Each publish call picks one credential uniformly at random. Selection is
/// stateless: no rotation cursor, no affinity, no per-credential quota
/// tracking. Over many calls this spreads quota roughly evenly.
#[derive(Debug, Clone)]
pub struct CredentialPool {
    keys: Vec<String>,
}

impl CredentialPool {
    /// Create a pool from explicit keys.
    pub fn new(keys: Vec<String>) -> YoutubeResult<Self> {
        if keys.is_empty() {
            return Err(YoutubeError::config_error("credential pool is empty"));
        }
        Ok(Self { keys })
    }

    /// Create a pool from `YT_API_KEY_1` through `YT_API_KEY_5`.
    ///
    /// Unset or empty slots are skipped; at least one key must be present.
    pub fn from_env() -> YoutubeResult<Self> {
        let keys: Vec<String> = (1..=MAX_POOL_SLOTS)
            .filter_map(|n| std::env::var(format!("YT_API_KEY_{}", n)).ok())
            .filter(|k| !k.is_empty())
            .collect();

        if keys.is_empty() {
            return Err(YoutubeError::config_error(
                "no YouTube API keys configured (set YT_API_KEY_1..YT_API_KEY_5)",
            ));
        }

        Ok(Self { keys })
    }

    /// Pick a credential uniformly at random.
    pub fn pick(&self) -> &str {
        self.keys
            .choose(&mut rand::rng())
            .expect("pool is non-empty by construction")
    }

    /// Number of credentials in the pool.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
