use super::dictionary::StaticDictionary;
use super::filter::looks_english;
use super::types::{ResolverConfig, ResolverStats};
use crate::infrastructure::translation::{OfflineTranslator, Translation, Translator};
use dashmap::DashMap;
use futures::future::join_all;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Turns a word into the key it is counted under.
///
/// Lookup order is cache, remote translator, static dictionary, identity. The
/// first tier that answers wins and its answer is cached, so every word costs
/// at most one remote round per resolver lifetime. Concurrent first lookups
/// of the same word may both go remote; the last cache write wins.
pub struct Resolver {
    translator: Arc<dyn Translator>,
    dictionary: StaticDictionary,
    cache: DashMap<String, String>,
    config: ResolverConfig,
    cache_hits: AtomicU64,
    remote_hits: AtomicU64,
    static_hits: AtomicU64,
    identity_fallbacks: AtomicU64,
}

#[derive(Default)]
pub struct ResolverBuilder {
    translator: Option<Arc<dyn Translator>>,
    dictionary: Option<StaticDictionary>,
    config: Option<ResolverConfig>,
}

impl ResolverBuilder {
    pub fn translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = Some(translator);
        self
    }

    pub fn dictionary(mut self, dictionary: StaticDictionary) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    pub fn config(mut self, config: ResolverConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Missing parts default to an offline translator, the seed dictionary
    /// and [`ResolverConfig::default`].
    pub fn build(self) -> Resolver {
        Resolver {
            translator: self
                .translator
                .unwrap_or_else(|| Arc::new(OfflineTranslator)),
            dictionary: self.dictionary.unwrap_or_else(StaticDictionary::seeded),
            cache: DashMap::new(),
            config: self.config.unwrap_or_default(),
            cache_hits: AtomicU64::new(0),
            remote_hits: AtomicU64::new(0),
            static_hits: AtomicU64::new(0),
            identity_fallbacks: AtomicU64::new(0),
        }
    }
}

impl Resolver {
    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::default()
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub async fn resolve(&self, word: &str) -> String {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return word;
        }

        let cached = self.cache.get(&word).map(|v| v.value().clone());
        if let Some(canonical) = cached {
            self.cache_hits.fetch_add(1, Ordering::Relaxed);
            return canonical;
        }

        let canonical = if let Some(remote) = self.resolve_remote(&word).await {
            self.remote_hits.fetch_add(1, Ordering::Relaxed);
            remote
        } else if let Some(known) = self.dictionary.get(&word) {
            self.static_hits.fetch_add(1, Ordering::Relaxed);
            known
        } else {
            self.identity_fallbacks.fetch_add(1, Ordering::Relaxed);
            word.clone()
        };

        self.cache.insert(word, canonical.clone());
        canonical
    }

    async fn resolve_remote(&self, word: &str) -> Option<String> {
        let target = self.config.target_language.as_str();

        for lang in &self.config.languages {
            let t0 = Instant::now();
            let call = self.translator.translate(word, lang, target);

            match tokio::time::timeout(self.config.call_timeout, call).await {
                Ok(Ok(Some(translation))) => {
                    if let Some(canonical) = self.accept(word, &translation) {
                        log::debug!(
                            "resolve.remote word={} lang={} canonical={} score={:.2} perf.us={}",
                            word,
                            lang,
                            canonical,
                            translation.confidence,
                            t0.elapsed().as_micros()
                        );
                        return Some(canonical);
                    }
                }
                Ok(Ok(None)) => {}
                Ok(Err(e)) => {
                    log::debug!("resolve.remote_failed word={} lang={} err={}", word, lang, e);
                }
                Err(_) => {
                    log::debug!(
                        "resolve.remote_timeout word={} lang={} budget_ms={}",
                        word,
                        lang,
                        self.config.call_timeout.as_millis()
                    );
                }
            }
        }

        None
    }

    fn accept(&self, word: &str, translation: &Translation) -> Option<String> {
        let score = translation.confidence;
        if score.is_nan() || score <= self.config.confidence_threshold {
            return None;
        }

        let candidate = translation.text.trim().to_lowercase();
        if candidate == word {
            return None;
        }

        looks_english(&candidate).then_some(candidate)
    }

    /// Answers from recorded knowledge only; never goes remote.
    pub fn is_available(&self, word: &str) -> bool {
        let word = word.trim().to_lowercase();

        let cached = self.cache.get(&word).map(|v| v.value().clone());
        if let Some(canonical) = cached {
            return canonical != word;
        }

        self.dictionary
            .get(&word)
            .is_some_and(|canonical| canonical != word)
    }

    pub async fn resolve_batch<I, S>(&self, words: I) -> HashMap<String, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let unique: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().to_string())
            .filter(|w| seen.insert(w.clone()))
            .collect();

        let resolved = join_all(unique.iter().map(|w| self.resolve(w))).await;
        unique.into_iter().zip(resolved).collect()
    }

    pub fn add_custom_translation<'a>(
        &self,
        foreign: impl Into<Option<&'a str>>,
        english: impl Into<Option<&'a str>>,
    ) {
        let (Some(foreign), Some(english)) = (foreign.into(), english.into()) else {
            return;
        };

        let foreign = foreign.trim().to_lowercase();
        let english = english.trim().to_lowercase();
        if foreign.is_empty() || english.is_empty() {
            return;
        }

        self.dictionary.insert(&foreign, &english);
        self.cache.insert(foreign, english);
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    pub fn stats(&self) -> ResolverStats {
        let successful_translations = self
            .cache
            .iter()
            .filter(|e| e.key() != e.value())
            .count();

        ResolverStats {
            cache_size: self.cache.len(),
            static_translations: self.dictionary.len(),
            successful_translations,
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            remote_hits: self.remote_hits.load(Ordering::Relaxed),
            static_hits: self.static_hits.load(Ordering::Relaxed),
            identity_fallbacks: self.identity_fallbacks.load(Ordering::Relaxed),
        }
    }
}
