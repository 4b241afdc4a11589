//! Reply models for the cache driver
//!
//! Each executed command produces one JSON document.

use serde::Serialize;

use crate::cache::CacheStats;

/// Reply written for one command, tagged by `op`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Reply {
    Put {
        key: String,
    },
    /// `value` is null on a miss
    Get {
        key: String,
        value: Option<String>,
    },
    Peek {
        key: String,
        value: Option<String>,
    },
    Stats {
        #[serde(flatten)]
        stats: CacheStats,
        hit_rate: f64,
    },
    Keys {
        keys: Vec<String>,
    },
    Error {
        error: String,
    },
}

impl Reply {
    /// Creates a stats reply with the derived hit rate.
    pub fn stats(stats: CacheStats) -> Self {
        let hit_rate = stats.hit_rate();
        Reply::Stats { stats, hit_rate }
    }

    /// Creates an error reply.
    pub fn error(error: impl ToString) -> Self {
        Reply::Error {
            error: error.to_string(),
        }
    }

    /// Serializes the reply as a single JSON line (without newline).
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
