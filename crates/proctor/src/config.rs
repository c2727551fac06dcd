//! Configuration management for Proctor.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use proctor_common::constants::{
    DEFAULT_COUNTER_PATH, DEFAULT_LISTEN_ADDR, DEFAULT_REDIS_URL, redis_keys,
};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Allow cross-origin requests from any origin (browser front end)
    #[serde(default = "default_cors_permissive")]
    pub cors_permissive: bool,

    /// Passcode counter configuration
    #[serde(default)]
    pub counter: CounterConfig,
}

/// Where the passcode counter lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterBackend {
    /// Single text file, one serving process
    #[default]
    File,
    /// Shared Redis key, any number of serving processes
    Redis,
}

/// Passcode counter configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CounterConfig {
    #[serde(default)]
    pub backend: CounterBackend,

    /// Counter file (file backend)
    #[serde(default = "default_counter_path")]
    pub path: String,

    /// Redis connection URL (redis backend)
    #[serde(default = "default_redis_url")]
    pub redis_url: String,

    /// Key holding the counter (redis backend)
    #[serde(default = "default_redis_key")]
    pub redis_key: String,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            backend: CounterBackend::default(),
            path: default_counter_path(),
            redis_url: default_redis_url(),
            redis_key: default_redis_key(),
        }
    }
}

// Default value functions
fn default_listen_addr() -> String { DEFAULT_LISTEN_ADDR.to_string() }
fn default_cors_permissive() -> bool { true }
fn default_counter_path() -> String { DEFAULT_COUNTER_PATH.to_string() }
fn default_redis_url() -> String { DEFAULT_REDIS_URL.to_string() }
fn default_redis_key() -> String { redis_keys::PASSCODE_COUNTER.to_string() }

impl AppConfig {
    /// Load configuration from file, with CLI overrides
    pub fn load(config_path: &str, args: &super::Args) -> Result<Self> {
        let mut config = Self::from_file(config_path)?;

        // Apply CLI overrides
        if let Some(ref listen) = args.listen {
            config.listen_addr = listen.clone();
        }
        if let Some(ref counter_path) = args.counter_path {
            config.counter.path = counter_path.clone();
        }
        if let Some(ref redis_url) = args.redis_url {
            // Asking for Redis implies the Redis backend
            config.counter.redis_url = redis_url.clone();
            config.counter.backend = CounterBackend::Redis;
        }

        Ok(config)
    }

    fn from_file(config_path: &str) -> Result<Self> {
        if !Path::new(config_path).exists() {
            // Use defaults if config file doesn't exist
            tracing::warn!(path = %config_path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path))
            .build()
            .context("Failed to load config file")?;

        settings
            .try_deserialize()
            .context("Failed to parse config")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            cors_permissive: default_cors_permissive(),
            counter: CounterConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args() -> super::super::Args {
        super::super::Args {
            config: "unused.toml".to_string(),
            listen: None,
            counter_path: None,
            redis_url: None,
            log_level: "info".to_string(),
            json_logs: false,
        }
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = AppConfig::load("does/not/exist.toml", &args()).unwrap();

        assert_eq!(config.listen_addr, DEFAULT_LISTEN_ADDR);
        assert_eq!(config.counter.backend, CounterBackend::File);
        assert_eq!(config.counter.path, DEFAULT_COUNTER_PATH);
        assert!(config.cors_permissive);
    }

    #[test]
    fn test_file_values_and_cli_overrides() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
listen_addr = "0.0.0.0:8080"
cors_permissive = false

[counter]
backend = "file"
path = "/var/lib/proctor/counter.txt"
"#
        )
        .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config = AppConfig::load(&path, &args()).unwrap();
        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert!(!config.cors_permissive);
        assert_eq!(config.counter.path, "/var/lib/proctor/counter.txt");
        assert_eq!(config.counter.redis_key, redis_keys::PASSCODE_COUNTER);

        let overrides = super::super::Args {
            listen: Some("127.0.0.1:9000".to_string()),
            redis_url: Some("redis://cache:6379".to_string()),
            ..args()
        };
        let config = AppConfig::load(&path, &overrides).unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:9000");
        assert_eq!(config.counter.backend, CounterBackend::Redis);
        assert_eq!(config.counter.redis_url, "redis://cache:6379");
    }
}
