use thiserror::Error;

/// Rejection of a raw word. `raw_input` is exactly what the caller sent, or
/// `None` when nothing was sent at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct InvalidWord {
    reason: String,
    raw_input: Option<String>,
}

impl InvalidWord {
    pub fn new(reason: impl Into<String>, raw_input: Option<&str>) -> Self {
        Self {
            reason: reason.into(),
            raw_input: raw_input.map(str::to_string),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn raw_input(&self) -> Option<&str> {
        self.raw_input.as_deref()
    }
}
