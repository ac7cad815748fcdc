use crate::application::resolver::ResolverConfig;
use crate::application::resolver::config::{CALL_TIMEOUT, CONFIDENCE_THRESHOLD};
use crate::infrastructure::translation::config::MYMEMORY_API;
use std::path::PathBuf;
use std::time::Duration;

pub const TRANSLATOR_VAR: &str = "LEXICOUNT_TRANSLATOR";
pub const API_URL_VAR: &str = "LEXICOUNT_API_URL";
pub const TIMEOUT_VAR: &str = "LEXICOUNT_TIMEOUT_MS";
pub const CONFIDENCE_VAR: &str = "LEXICOUNT_CONFIDENCE";
pub const DICTIONARY_DIR_VAR: &str = "LEXICOUNT_DICTIONARY_DIR";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TranslatorBackend {
    MyMemory,
    Offline,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub backend: TranslatorBackend,
    pub api_url: String,
    pub call_timeout: Duration,
    pub confidence_threshold: f64,
    pub dictionary_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend: TranslatorBackend::MyMemory,
            api_url: MYMEMORY_API.to_string(),
            call_timeout: CALL_TIMEOUT,
            confidence_threshold: CONFIDENCE_THRESHOLD,
            dictionary_dir: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unparseable values keep their default and log a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(value) = get(TRANSLATOR_VAR) {
            match value.to_ascii_lowercase().as_str() {
                "mymemory" | "remote" => settings.backend = TranslatorBackend::MyMemory,
                "offline" | "static" => settings.backend = TranslatorBackend::Offline,
                other => {
                    log::warn!("{}={} not recognised, keeping mymemory", TRANSLATOR_VAR, other)
                }
            }
        }

        if let Some(value) = get(API_URL_VAR) {
            settings.api_url = value;
        }

        if let Some(value) = get(TIMEOUT_VAR) {
            match value.parse::<u64>() {
                Ok(ms) if ms > 0 => settings.call_timeout = Duration::from_millis(ms),
                _ => log::warn!(
                    "{}={} is not a positive integer, keeping default",
                    TIMEOUT_VAR,
                    value
                ),
            }
        }

        if let Some(value) = get(CONFIDENCE_VAR) {
            match value.parse::<f64>() {
                Ok(score) if (0.0..=1.0).contains(&score) => {
                    settings.confidence_threshold = score
                }
                _ => log::warn!(
                    "{}={} is not within [0, 1], keeping default",
                    CONFIDENCE_VAR,
                    value
                ),
            }
        }

        settings.dictionary_dir = get(DICTIONARY_DIR_VAR).map(PathBuf::from);
        settings
    }

    pub fn resolver_config(&self) -> ResolverConfig {
        ResolverConfig {
            call_timeout: self.call_timeout,
            confidence_threshold: self.confidence_threshold,
            ..ResolverConfig::default()
        }
    }
}
