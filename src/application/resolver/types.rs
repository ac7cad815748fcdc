use super::config::{CALL_TIMEOUT, CONFIDENCE_THRESHOLD, SUPPORTED_LANGUAGES, TARGET_LANGUAGE};
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct ResolverConfig {
    /// Source languages tried, in order, for every uncached word.
    pub languages: Vec<String>,
    pub target_language: String,
    /// A remote answer must score strictly above this.
    pub confidence_threshold: f64,
    pub call_timeout: Duration,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            languages: SUPPORTED_LANGUAGES.iter().map(|l| l.to_string()).collect(),
            target_language: TARGET_LANGUAGE.to_string(),
            confidence_threshold: CONFIDENCE_THRESHOLD,
            call_timeout: CALL_TIMEOUT,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolverStats {
    pub cache_size: usize,
    pub static_translations: usize,
    /// Cached words whose canonical form differs from the word itself.
    pub successful_translations: usize,
    pub cache_hits: u64,
    pub remote_hits: u64,
    pub static_hits: u64,
    pub identity_fallbacks: u64,
}
