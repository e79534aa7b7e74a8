//! Configuration for the bounded terminal drain.

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrainConfig {
    /// Hard cap on the number of elements a drain may materialize. Draining a
    /// producer with more elements than this fails instead of growing forever.
    pub max_items: Option<usize>,

    /// Initial capacity for the output vector.
    pub size_hint: usize,
}

impl Default for DrainConfig {
    fn default() -> Self {
        Self {
            max_items: None,
            size_hint: 0,
        }
    }
}

impl DrainConfig {
    pub fn with_max_items(mut self, max: usize) -> Self {
        self.max_items = Some(max);
        self
    }

    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `LAZYSEQ_MAX_ITEMS`: drain cap in elements
    /// - `LAZYSEQ_SIZE_HINT`: initial output capacity
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("LAZYSEQ_MAX_ITEMS") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.max_items = Some(v);
            }
        }

        if let Ok(s) = std::env::var("LAZYSEQ_SIZE_HINT") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.size_hint = v;
            }
        }

        cfg
    }

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}
