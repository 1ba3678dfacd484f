// src/config.rs
//! Engine configuration: the currency-symbol set recognized by the
//! standalone-number counter and the worker-pool width for batch runs.
//!
//! Resolution order: `$SENTIMENT_ENGINE_CONFIG`, then `config/engine.toml`,
//! then built-in defaults.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const ENV_ENGINE_CONFIG_PATH: &str = "SENTIMENT_ENGINE_CONFIG";
pub const DEFAULT_ENGINE_CONFIG_PATH: &str = "config/engine.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Currency symbols accepted as a number prefix. The original set is
    /// almost certainly incomplete for global filings, hence configurable.
    pub currency_symbols: Vec<char>,
    /// Worker-pool width for batch scoring. Defaults to available
    /// parallelism.
    pub concurrency: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            currency_symbols: vec!['$', '€', '£'],
            concurrency: default_concurrency(),
        }
    }
}

fn default_concurrency() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

impl EngineConfig {
    /// Load from an explicit TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading engine config from {}", path.display()))?;
        let cfg: EngineConfig = toml::from_str(&content)
            .with_context(|| format!("parsing engine config at {}", path.display()))?;
        if cfg.concurrency == 0 {
            return Err(anyhow!("concurrency must be at least 1"));
        }
        Ok(cfg)
    }

    /// Load using env var + fallbacks:
    /// 1) $SENTIMENT_ENGINE_CONFIG (must exist if set)
    /// 2) config/engine.toml
    /// 3) built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_ENGINE_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                return Err(anyhow!(
                    "{ENV_ENGINE_CONFIG_PATH} points to non-existent path"
                ));
            }
            let cfg = Self::load_from(&pb)?;
            info!(path = %pb.display(), "engine config loaded");
            return Ok(cfg);
        }
        let default_p = PathBuf::from(DEFAULT_ENGINE_CONFIG_PATH);
        if default_p.exists() {
            let cfg = Self::load_from(&default_p)?;
            info!(path = %default_p.display(), "engine config loaded");
            return Ok(cfg);
        }
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_original_symbol_set() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.currency_symbols, vec!['$', '€', '£']);
        assert!(cfg.concurrency >= 1);
    }

    #[test]
    fn parses_toml_overrides() {
        let cfg: EngineConfig =
            toml::from_str("currency_symbols = [\"$\", \"¥\"]\nconcurrency = 2\n").unwrap();
        assert_eq!(cfg.currency_symbols, vec!['$', '¥']);
        assert_eq!(cfg.concurrency, 2);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg: EngineConfig = toml::from_str("concurrency = 8\n").unwrap();
        assert_eq!(cfg.concurrency, 8);
        assert_eq!(cfg.currency_symbols, vec!['$', '€', '£']);
    }
}
