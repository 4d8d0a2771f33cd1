//! Generator configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LickError, LickResult};
use crate::gate::PitchWindow;

/// Tunables for a phrase session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Attempts the chaining loop makes before giving up (default: 100)
    pub max_chain_attempts: u32,
    /// Absolute-pitch window every accepted phrase lies in
    pub range: PitchWindow,
    /// Session seed; `None` draws one from OS entropy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Warn every this many consecutive gate rejections (default: 1000)
    pub rejection_warn_interval: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_chain_attempts: 100,
            range: PitchWindow::default(),
            seed: None,
            rejection_warn_interval: 1000,
        }
    }
}

impl GeneratorConfig {
    /// Parse a config from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> LickResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LickError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
            .map_err(|e| LickError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> LickResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| LickError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject windows with `low > high`.
    pub fn validate(&self) -> LickResult<()> {
        if self.range.low > self.range.high {
            return Err(LickError::Config(format!(
                "range low ({}) is above range high ({})",
                self.range.low, self.range.high
            )));
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
