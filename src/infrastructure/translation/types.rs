use async_trait::async_trait;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub struct Translation {
    pub text: String,
    /// Provider confidence in `[0, 1]`.
    pub confidence: f64,
}

impl Translation {
    pub fn new(text: impl Into<String>, confidence: f64) -> Self {
        Self {
            text: text.into(),
            confidence,
        }
    }
}

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("translation request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("translation service returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed translation response: {0}")]
    Decode(String),
    #[error("invalid translation endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
    #[error("translation service unavailable: {0}")]
    Unavailable(String),
}

pub type TranslateResult<T> = Result<T, TranslateError>;

/// Remote lookup used by the resolver. `Ok(None)` means the provider had
/// nothing to offer for this language pair.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> TranslateResult<Option<Translation>>;
}
