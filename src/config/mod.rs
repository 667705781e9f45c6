use std::time::Duration;

use crate::domain::{default_sources, Source};
use crate::errors::{DeskError, DeskResult};

/// Hosted inference endpoint for the default summarization model
pub const DEFAULT_SUMMARIZER_URL: &str =
    "https://api-inference.huggingface.co/models/sshleifer/distilbart-cnn-12-6";

const DEFAULT_SUMMARIZER_TIMEOUT_SECS: u64 = 60;

/// Settings needed to acquire the summarization model.
///
/// `enabled` and `timeout_secs` are kept as given and only checked when the
/// model is acquired, so a bad value disables the model instead of the program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelConfig {
    pub url: String,
    pub token: Option<String>,
    pub enabled: Option<String>,
    pub timeout_secs: Option<String>,
}

impl ModelConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            token: None,
            enabled: None,
            timeout_secs: None,
        }
    }

    /// Whether the model should be used; unset means yes
    pub fn is_enabled(&self) -> DeskResult<bool> {
        let Some(raw) = &self.enabled else {
            return Ok(true);
        };

        match raw.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => Err(DeskError::Config(format!(
                "SUMMARIZER_ENABLED must be a boolean, got '{}'",
                other
            ))),
        }
    }

    pub fn timeout(&self) -> DeskResult<Duration> {
        let Some(raw) = &self.timeout_secs else {
            return Ok(Duration::from_secs(DEFAULT_SUMMARIZER_TIMEOUT_SECS));
        };

        raw.trim().parse::<u64>().map(Duration::from_secs).map_err(|_| {
            DeskError::Config(format!(
                "SUMMARIZER_TIMEOUT_SECS must be an integer, got '{}'",
                raw
            ))
        })
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub model: ModelConfig,
    pub sources: Vec<Source>,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> Self {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            model: ModelConfig {
                url: present("SUMMARIZER_URL")
                    .unwrap_or_else(|| DEFAULT_SUMMARIZER_URL.to_string()),
                token: present("SUMMARIZER_TOKEN"),
                enabled: present("SUMMARIZER_ENABLED"),
                timeout_secs: present("SUMMARIZER_TIMEOUT_SECS"),
            },
            sources: default_sources(),
        }
    }
}
