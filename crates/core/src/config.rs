//! # Pantry Configuration
//!
//! Tunables for the in-memory pantry. Defaults match the behaviour of the
//! household app; environment variables can override them.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding [`PantryConfig::expiring_soon_days`]
pub const ENV_EXPIRING_SOON_DAYS: &str = "PANTRY_EXPIRING_SOON_DAYS";
/// Environment variable overriding [`PantryConfig::seed_example_data`]
pub const ENV_SEED: &str = "PANTRY_SEED";

/// Configuration for a [`crate::state::Pantry`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PantryConfig {
    /// Items expiring within this many days count as expiring soon (default: 3)
    pub expiring_soon_days: i64,
    /// Seed the example snapshot on start (default: true)
    pub seed_example_data: bool,
}

impl Default for PantryConfig {
    fn default() -> Self {
        Self {
            expiring_soon_days: 3,
            seed_example_data: true,
        }
    }
}

impl PantryConfig {
    /// Defaults overlaid with any `PANTRY_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(days) = lookup(ENV_EXPIRING_SOON_DAYS) {
            config.expiring_soon_days = days
                .trim()
                .parse()
                .with_context(|| format!("Invalid {}: {:?}", ENV_EXPIRING_SOON_DAYS, days))?;
        }

        if let Some(seed) = lookup(ENV_SEED) {
            config.seed_example_data = parse_flag(&seed)
                .with_context(|| format!("Invalid {}: {:?}", ENV_SEED, seed))?;
        }

        Ok(config)
    }

    /// Override the expiring-soon window
    pub fn with_expiring_soon_days(mut self, days: i64) -> Self {
        self.expiring_soon_days = days;
        self
    }

    /// Start without the example snapshot
    pub fn without_seed(mut self) -> Self {
        self.seed_example_data = false;
        self
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("expected a boolean, got {:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = PantryConfig::default();
        assert_eq!(config.expiring_soon_days, 3);
        assert!(config.seed_example_data);
    }

    #[test]
    fn test_env_overrides() {
        let config = PantryConfig::from_lookup(lookup_from(&[
            (ENV_EXPIRING_SOON_DAYS, "7"),
            (ENV_SEED, "no"),
        ]))
        .unwrap();
        assert_eq!(config.expiring_soon_days, 7);
        assert!(!config.seed_example_data);
    }

    #[test]
    fn test_missing_env_keeps_defaults() {
        let config = PantryConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, PantryConfig::default());
    }

    #[test]
    fn test_malformed_env_is_rejected() {
        let err = PantryConfig::from_lookup(lookup_from(&[(ENV_EXPIRING_SOON_DAYS, "soon")]))
            .unwrap_err();
        assert!(err.to_string().contains(ENV_EXPIRING_SOON_DAYS));

        assert!(PantryConfig::from_lookup(lookup_from(&[(ENV_SEED, "maybe")])).is_err());
    }

    #[test]
    fn test_builder_overrides() {
        let config = PantryConfig::default()
            .with_expiring_soon_days(5)
            .without_seed();
        assert_eq!(config.expiring_soon_days, 5);
        assert!(!config.seed_example_data);
    }
}
