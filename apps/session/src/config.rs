use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::session::DEFAULT_STORAGE_KEY;

const DEFAULT_STORE_DIR: &str = ".talent-session";
const DEFAULT_LATENCY_MS: u64 = 1000;

/// Session configuration loaded from environment variables.
/// Every value has a default; only malformed numbers are errors.
#[derive(Debug, Clone)]
pub struct Config {
    pub store_dir: PathBuf,
    pub storage_key: String,
    pub simulated_latency: Duration,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let simulated_latency_ms = match lookup("SIMULATED_LATENCY_MS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .context("SIMULATED_LATENCY_MS must be a whole number of milliseconds")?,
            None => DEFAULT_LATENCY_MS,
        };

        Ok(Config {
            store_dir: lookup("TALENT_SESSION_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_DIR)),
            storage_key: lookup("TALENT_SESSION_KEY")
                .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string()),
            simulated_latency: Duration::from_millis(simulated_latency_ms),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.store_dir, PathBuf::from(".talent-session"));
        assert_eq!(config.storage_key, "talentGenius_user");
        assert_eq!(config.simulated_latency, Duration::from_millis(1000));
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("TALENT_SESSION_DIR", "/tmp/sessions"),
            ("TALENT_SESSION_KEY", "tg_user"),
            ("SIMULATED_LATENCY_MS", " 0 "),
            ("RUST_LOG", "debug"),
        ])
        .unwrap();
        assert_eq!(config.store_dir, PathBuf::from("/tmp/sessions"));
        assert_eq!(config.storage_key, "tg_user");
        assert!(config.simulated_latency.is_zero());
        assert_eq!(config.rust_log, "debug");
    }

    #[test]
    fn test_bad_latency_is_an_error() {
        let err = config_from(&[("SIMULATED_LATENCY_MS", "soon")]).unwrap_err();
        assert!(err.to_string().contains("SIMULATED_LATENCY_MS"));
    }
}
