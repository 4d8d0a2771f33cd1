//! CLI command implementations

pub mod cells;
pub mod generate;
pub mod keys;

use std::path::Path;

use anyhow::{Context, Result};
use licksmith_engine::GeneratorConfig;

/// Generator settings shared by every command that builds phrases.
#[derive(Debug, Clone, Default)]
pub struct ConfigArgs {
    /// JSON config file
    pub config: Option<String>,
    pub seed: Option<u64>,
    pub max_attempts: Option<u32>,
}

impl ConfigArgs {
    /// Load the config file, if any, and apply the command-line overrides.
    pub fn load(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_file(Path::new(path))
                .with_context(|| format!("Failed to load config: {}", path))?,
            None => GeneratorConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(max_attempts) = self.max_attempts {
            config.max_chain_attempts = max_attempts;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_overrides_apply_over_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"max_chain_attempts": 5, "seed": 1}}"#).unwrap();

        let args = ConfigArgs {
            config: Some(file.path().display().to_string()),
            seed: Some(9),
            max_attempts: None,
        };
        let config = args.load().unwrap();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.max_chain_attempts, 5);
    }

    #[test]
    fn test_missing_config_names_path() {
        let args = ConfigArgs {
            config: Some("/nonexistent/licksmith.json".to_string()),
            ..Default::default()
        };
        let err = args.load().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/licksmith.json"));
    }
}
