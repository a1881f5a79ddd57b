//! Configuration for dictionary loading and path precomputation.
//!
//! Load order: `.wordgraph/config.toml` → environment variables → defaults.

use crate::words::CaseFold;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WordGraphConfig {
    pub words: WordsConfig,
    pub precompute: PrecomputeConfig,
}

/// Dictionary normalization settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WordsConfig {
    /// Canonical casing applied to dictionary words and query words.
    pub case_fold: CaseFold,
}

/// Shortest-path precomputation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrecomputeConfig {
    /// Run per-source searches on a rayon pool. Default: true.
    pub parallel: bool,
    /// Worker threads for the pool. 0 uses rayon's global pool.
    pub threads: usize,
}

impl Default for PrecomputeConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            threads: 0,
        }
    }
}

/// Helper to parse an env var and apply it to a config field.
fn env_override<T: std::str::FromStr>(var: &str, target: &mut T) {
    if let Ok(v) = std::env::var(var)
        && let Ok(n) = v.parse()
    {
        *target = n;
    }
}

impl WordGraphConfig {
    /// Load config from `.wordgraph/config.toml` in the project root, with env var overrides.
    /// Falls back to defaults if no config file exists.
    pub fn load(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join(".wordgraph").join("config.toml");

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };

        env_override("WORDGRAPH_CASE_FOLD", &mut config.words.case_fold);
        env_override("WORDGRAPH_PARALLEL", &mut config.precompute.parallel);
        env_override("WORDGRAPH_THREADS", &mut config.precompute.threads);

        config.validate()?;
        Ok(config)
    }

    /// Reject settings that contradict each other.
    pub fn validate(&self) -> Result<()> {
        if !self.precompute.parallel && self.precompute.threads > 1 {
            anyhow::bail!(
                "precompute.threads ({}) requires precompute.parallel = true",
                self.precompute.threads,
            );
        }
        Ok(())
    }
}
