use super::types::{TranslateError, TranslateResult, Translation, Translator};
use async_trait::async_trait;
use dashmap::{DashMap, DashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Clone, Debug)]
enum StubReply {
    Answer(Translation),
    Fail,
}

/// Deterministic translator keyed by `(text, source language)`.
///
/// Unknown pairs answer `Ok(None)`. Words registered with [`forbid`] panic
/// when looked up, which lets tests prove a code path never went remote.
///
/// [`forbid`]: StubTranslator::forbid
#[derive(Debug, Default)]
pub struct StubTranslator {
    replies: DashMap<(String, String), StubReply>,
    forbidden: DashSet<String>,
    delay: Option<Duration>,
    calls: DashMap<String, usize>,
    total_calls: AtomicUsize,
}

impl StubTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, text: &str, source: &str, translated: &str, confidence: f64) -> Self {
        self.replies.insert(
            (text.to_string(), source.to_string()),
            StubReply::Answer(Translation::new(translated, confidence)),
        );
        self
    }

    pub fn failing(self, text: &str, source: &str) -> Self {
        self.replies
            .insert((text.to_string(), source.to_string()), StubReply::Fail);
        self
    }

    pub fn forbid(self, text: &str) -> Self {
        self.forbidden.insert(text.to_string());
        self
    }

    /// Every call sleeps this long before answering.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls_for(&self, text: &str) -> usize {
        self.calls.get(text).map(|c| *c).unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.total_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl Translator for StubTranslator {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        _target: &str,
    ) -> TranslateResult<Option<Translation>> {
        if self.forbidden.contains(text) {
            panic!("stub translator called for forbidden word {:?}", text);
        }

        self.total_calls.fetch_add(1, Ordering::Relaxed);
        *self.calls.entry(text.to_string()).or_insert(0) += 1;

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let reply = self
            .replies
            .get(&(text.to_string(), source.to_string()))
            .map(|r| r.value().clone());

        match reply {
            Some(StubReply::Answer(t)) => Ok(Some(t)),
            Some(StubReply::Fail) => Err(TranslateError::Unavailable(format!(
                "stubbed failure for {}|{}",
                text, source
            ))),
            None => Ok(None),
        }
    }
}
