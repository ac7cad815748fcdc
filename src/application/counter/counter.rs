use super::types::Tally;
use crate::application::resolver::Resolver;
use crate::application::validator::{InvalidWord, normalize, validate};
use arc_swap::ArcSwap;
use std::sync::Arc;

/// Concurrent word counts keyed by canonical form.
///
/// Increments are lock-free against each other. `reset` swaps in a fresh
/// tally instead of clearing in place: an increment that raced with it lands
/// entirely in the old generation or entirely in the new one.
pub struct Counter {
    resolver: Arc<Resolver>,
    tally: ArcSwap<Tally>,
}

impl Counter {
    pub fn new(resolver: Arc<Resolver>) -> Self {
        Self {
            resolver,
            tally: ArcSwap::from_pointee(Tally::default()),
        }
    }

    pub fn resolver(&self) -> &Arc<Resolver> {
        &self.resolver
    }

    pub async fn add_word<'a>(&self, raw: impl Into<Option<&'a str>>) -> Result<(), InvalidWord> {
        let raw = raw.into();
        validate(raw)?;

        let normalized = normalize(raw).unwrap_or_default();
        let canonical = self.resolver.resolve(&normalized).await;
        log::trace!("counter.add word={} canonical={}", normalized, canonical);

        self.tally.load().increment(canonical);
        Ok(())
    }

    /// Counts `words` in order and stops at the first invalid one. Words
    /// before the failure stay counted.
    pub async fn add_words<I, S>(&self, words: I) -> Result<(), InvalidWord>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.add_word(word.as_ref()).await?;
        }
        Ok(())
    }

    pub async fn get_count<'a>(&self, raw: impl Into<Option<&'a str>>) -> u64 {
        let normalized = match normalize(raw) {
            Some(w) if !w.is_empty() => w,
            _ => return 0,
        };

        let canonical = self.resolver.resolve(&normalized).await;
        self.tally.load().count(&canonical)
    }

    pub fn reset(&self) {
        let previous = self.tally.swap(Arc::new(Tally::default()));
        log::info!(
            "counter.reset dropped_total={} dropped_unique={}",
            previous.total(),
            previous.unique()
        );
    }

    pub fn total_words(&self) -> u64 {
        self.tally.load().total()
    }

    pub fn unique_word_count(&self) -> usize {
        self.tally.load().unique()
    }

    pub fn is_empty(&self) -> bool {
        self.total_words() == 0
    }

    /// Highest counts first, ties broken alphabetically.
    pub fn top(&self, n: usize) -> Vec<(String, u64)> {
        let mut entries = self.tally.load().snapshot();
        entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(n);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::translation::StubTranslator;

    fn offline_counter() -> Counter {
        Counter::new(Arc::new(Resolver::builder().build()))
    }

    #[tokio::test]
    async fn counts_single_and_repeated_words() {
        let counter = offline_counter();

        counter.add_word("hello").await.unwrap();
        assert_eq!(counter.get_count("hello").await, 1);

        counter.add_word(" HELLO ").await.unwrap();
        counter.add_word("Hello").await.unwrap();
        assert_eq!(counter.get_count("hello").await, 3);
        assert_eq!(counter.total_words(), 3);
        assert_eq!(counter.unique_word_count(), 1);
    }

    #[tokio::test]
    async fn translations_fold_onto_one_count() {
        let counter = offline_counter();

        counter.add_word("flor").await.unwrap();
        counter.add_word("blume").await.unwrap();
        counter.add_word("fiore").await.unwrap();

        assert_eq!(counter.get_count("flower").await, 3);
        assert_eq!(counter.get_count("flor").await, 3);
        assert_eq!(counter.get_count("bloem").await, 3);
        assert_eq!(counter.total_words(), 3);
    }

    #[tokio::test]
    async fn words_sharing_a_canonical_form_share_a_count() {
        let stub = Arc::new(StubTranslator::new().with("hund", "de", "dog", 0.95));
        let counter = Counter::new(Arc::new(Resolver::builder().translator(stub).build()));

        counter.add_word("hund").await.unwrap();
        counter.add_word("perro").await.unwrap();

        assert_eq!(counter.get_count("dog").await, 2);
        assert_eq!(counter.get_count("hund").await, 2);
        assert_eq!(counter.get_count("perro").await, 2);
    }

    #[tokio::test]
    async fn invalid_words_change_nothing() {
        let counter = offline_counter();

        for raw in ["hello123", "hello!", "hello world", "hello-world", "", "  "] {
            let err = counter.add_word(raw).await.unwrap_err();
            assert_eq!(err.raw_input(), Some(raw));
        }

        let err = counter.add_word(None).await.unwrap_err();
        assert_eq!(err.raw_input(), None);

        assert_eq!(counter.total_words(), 0);
        assert!(counter.is_empty());
        assert_eq!(counter.resolver().cache_size(), 0);
    }

    #[tokio::test]
    async fn batch_stops_at_first_invalid_word() {
        let counter = offline_counter();

        let err = counter
            .add_words(["valid", "invalid123", "stillvalid"])
            .await
            .unwrap_err();

        assert_eq!(err.raw_input(), Some("invalid123"));
        assert_eq!(counter.get_count("valid").await, 1);
        assert_eq!(counter.get_count("stillvalid").await, 0);
        assert_eq!(counter.total_words(), 1);
    }

    #[tokio::test]
    async fn batch_counts_every_word() {
        let counter = offline_counter();
        let words = vec!["apple".to_string(), "banana".into(), "apple".into()];

        counter.add_words(&words).await.unwrap();

        assert_eq!(counter.get_count("apple").await, 2);
        assert_eq!(counter.get_count("banana").await, 1);
        assert_eq!(counter.total_words(), 3);
    }

    #[tokio::test]
    async fn absent_or_unknown_words_count_zero() {
        let counter = offline_counter();
        counter.add_word("present").await.unwrap();

        assert_eq!(counter.get_count(None).await, 0);
        assert_eq!(counter.get_count("   ").await, 0);
        assert_eq!(counter.get_count("absent").await, 0);
    }

    #[tokio::test]
    async fn get_count_resolves_through_the_cache() {
        let stub = Arc::new(StubTranslator::new().with("katze", "de", "cat", 0.9));
        let resolver = Resolver::builder().translator(stub.clone()).build();
        let counter = Counter::new(Arc::new(resolver));

        assert_eq!(counter.get_count("katze").await, 0);
        counter.add_word("katze").await.unwrap();
        assert_eq!(counter.get_count("Katze").await, 1);
        assert_eq!(stub.calls_for("katze"), 2);
    }

    #[tokio::test]
    async fn reset_clears_counts_and_total() {
        let counter = offline_counter();
        counter.add_words(["casa", "haus", "dog"]).await.unwrap();
        assert_eq!(counter.get_count("house").await, 2);

        counter.reset();

        assert_eq!(counter.get_count("house").await, 0);
        assert_eq!(counter.get_count("dog").await, 0);
        assert_eq!(counter.total_words(), 0);
        assert_eq!(counter.unique_word_count(), 0);

        counter.add_word("maison").await.unwrap();
        assert_eq!(counter.get_count("house").await, 1);
        assert_eq!(counter.total_words(), 1);
    }

    #[tokio::test]
    async fn top_orders_by_count_then_word() {
        let counter = offline_counter();
        counter
            .add_words(["gato", "zebra", "kat", "perro", "apple", "chat"])
            .await
            .unwrap();

        assert_eq!(
            counter.top(3),
            vec![
                ("cat".to_string(), 3),
                ("apple".to_string(), 1),
                ("dog".to_string(), 1),
            ]
        );
        assert_eq!(counter.top(10).len(), 4);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn concurrent_increments_are_never_lost() {
        let counter = Arc::new(offline_counter());
        let mut handles = Vec::new();

        for _ in 0..10 {
            let counter = Arc::clone(&counter);
            handles.push(tokio::spawn(async move {
                for _ in 0..100 {
                    counter.add_word("concurrent").await.unwrap();
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(counter.get_count("concurrent").await, 1000);
        assert_eq!(counter.total_words(), 1000);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn concurrent_variants_race_on_entry_creation() {
        let counter = Arc::new(offline_counter());
        let variants = ["flor", "Blume", "FIORE", "fleur", "bloem"];
        let mut handles = Vec::new();

        for i in 0..20 {
            let counter = Arc::clone(&counter);
            let word = variants[i % variants.len()];
            handles.push(tokio::spawn(async move {
                for _ in 0..50 {
                    counter.add_word(word).await.unwrap();
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(counter.get_count("flower").await, 1000);
        assert_eq!(counter.unique_word_count(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn total_matches_counts_after_racing_resets() {
        let counter = Arc::new(offline_counter());
        let words = ["alpha", "beta", "gamma", "delta"];
        let mut handles = Vec::new();

        for i in 0..8 {
            let counter = Arc::clone(&counter);
            let word = words[i % words.len()];
            handles.push(tokio::spawn(async move {
                for _ in 0..200 {
                    counter.add_word(word).await.unwrap();
                }
            }));
        }

        let resetter = {
            let counter = Arc::clone(&counter);
            tokio::spawn(async move {
                for _ in 0..20 {
                    counter.reset();
                    tokio::task::yield_now().await;
                }
            })
        };

        for handle in handles {
            handle.await.unwrap();
        }
        resetter.await.unwrap();

        let summed: u64 = counter.top(usize::MAX).iter().map(|(_, c)| c).sum();
        assert_eq!(counter.total_words(), summed);
        assert!(counter.total_words() <= 1600);
    }
}
