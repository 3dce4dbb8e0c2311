//! Read-through cache around any [`BreedFetcher`].

use std::collections::HashMap;

use crate::error::BreedNotFound;
use crate::fetcher::BreedFetcher;

/// A [`BreedFetcher`] that caches successful lookups of the fetcher it wraps.
///
/// The wrapped fetcher is owned by the cache, so every call to it goes
/// through [`fetch_sub_breeds`](BreedFetcher::fetch_sub_breeds) here.
///
/// - A breed is cached only after a successful lookup. Failures are passed
///   through unchanged and the next call for the same breed asks the wrapped
///   fetcher again.
/// - Cached entries are never replaced or evicted.
/// - [`calls_made`](Self::calls_made) counts every call, hits and failures
///   included.
#[derive(Debug)]
pub struct CachingBreedFetcher<F> {
    inner: F,
    cache: HashMap<String, Vec<String>>,
    calls_made: usize,
}

impl<F: BreedFetcher> CachingBreedFetcher<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            cache: HashMap::new(),
            calls_made: 0,
        }
    }

    /// Number of times `fetch_sub_breeds` has been called on this instance.
    pub fn calls_made(&self) -> usize {
        self.calls_made
    }

    pub fn is_cached(&self, breed: &str) -> bool {
        self.cache.contains_key(breed)
    }

    /// Number of breeds currently cached.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    pub fn inner(&self) -> &F {
        &self.inner
    }

    /// Drop the cache and give back the wrapped fetcher.
    pub fn into_inner(self) -> F {
        self.inner
    }
}

impl<F: BreedFetcher> BreedFetcher for CachingBreedFetcher<F> {
    fn fetch_sub_breeds(&mut self, breed: &str) -> Result<Vec<String>, BreedNotFound> {
        self.calls_made += 1;

        if let Some(sub_breeds) = self.cache.get(breed) {
            tracing::debug!(breed, "sub-breed cache hit");
            return Ok(sub_breeds.clone());
        }

        tracing::debug!(breed, "sub-breed cache miss");
        let sub_breeds = self.inner.fetch_sub_breeds(breed)?;
        self.cache.insert(breed.to_string(), sub_breeds.clone());
        Ok(sub_breeds)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    /// Serves canned answers and records every breed it is asked for.
    #[derive(Default)]
    struct StubFetcher {
        answers: HashMap<String, Vec<String>>,
        requests: Vec<String>,
    }

    impl StubFetcher {
        fn with(mut self, breed: &str, sub_breeds: &[&str]) -> Self {
            self.answers.insert(
                breed.to_string(),
                sub_breeds.iter().map(|s| s.to_string()).collect(),
            );
            self
        }

        fn calls_for(&self, breed: &str) -> usize {
            self.requests.iter().filter(|b| *b == breed).count()
        }
    }

    impl BreedFetcher for StubFetcher {
        fn fetch_sub_breeds(&mut self, breed: &str) -> Result<Vec<String>, BreedNotFound> {
            self.requests.push(breed.to_string());
            self.answers
                .get(breed)
                .cloned()
                .ok_or_else(|| BreedNotFound::new(breed))
        }
    }

    /// Fails the first `failures` calls, then answers like the wrapped stub.
    struct FlakyFetcher {
        failures: usize,
        stub: StubFetcher,
    }

    impl BreedFetcher for FlakyFetcher {
        fn fetch_sub_breeds(&mut self, breed: &str) -> Result<Vec<String>, BreedNotFound> {
            if self.failures > 0 {
                self.failures -= 1;
                self.stub.requests.push(breed.to_string());
                return Err(BreedNotFound::new("Network error for breed: ".to_string() + breed));
            }
            self.stub.fetch_sub_breeds(breed)
        }
    }

    #[test]
    fn test_new_starts_empty() {
        let fetcher = CachingBreedFetcher::new(StubFetcher::default());
        assert_eq!(fetcher.calls_made(), 0);
        assert_eq!(fetcher.cached_len(), 0);
    }

    #[test]
    fn test_first_call_delegates_once() {
        let mut fetcher =
            CachingBreedFetcher::new(StubFetcher::default().with("hound", &["afghan", "basset"]));

        let result = fetcher.fetch_sub_breeds("hound").unwrap();

        assert_eq!(result, vec!["afghan", "basset"]);
        assert_eq!(fetcher.calls_made(), 1);
        assert_eq!(fetcher.inner().calls_for("hound"), 1);
        assert!(fetcher.is_cached("hound"));
    }

    #[test]
    fn test_terrier_served_from_cache() {
        let mut fetcher =
            CachingBreedFetcher::new(StubFetcher::default().with("terrier", &["affenpinscher"]));

        assert_eq!(fetcher.fetch_sub_breeds("terrier").unwrap(), vec!["affenpinscher"]);
        assert_eq!(fetcher.calls_made(), 1);
        assert_eq!(fetcher.inner().calls_for("terrier"), 1);

        assert_eq!(fetcher.fetch_sub_breeds("terrier").unwrap(), vec!["affenpinscher"]);
        assert_eq!(fetcher.calls_made(), 2);
        assert_eq!(fetcher.inner().calls_for("terrier"), 1);
    }

    #[test]
    fn test_repeated_hits_return_first_result() {
        let mut fetcher =
            CachingBreedFetcher::new(StubFetcher::default().with("spaniel", &["cocker", "welsh"]));
        let first = fetcher.fetch_sub_breeds("spaniel").unwrap();

        for _ in 0..5 {
            assert_eq!(fetcher.fetch_sub_breeds("spaniel").unwrap(), first);
        }

        assert_eq!(fetcher.calls_made(), 6);
        assert_eq!(fetcher.inner().calls_for("spaniel"), 1);
    }

    #[test]
    fn test_ghostbreed_failures_not_cached() {
        let mut fetcher = CachingBreedFetcher::new(StubFetcher::default());

        let err = fetcher.fetch_sub_breeds("ghostbreed").unwrap_err();
        assert_eq!(err, BreedNotFound::new("ghostbreed"));
        assert_eq!(fetcher.calls_made(), 1);

        let err = fetcher.fetch_sub_breeds("ghostbreed").unwrap_err();
        assert_eq!(err, BreedNotFound::new("ghostbreed"));
        assert_eq!(fetcher.calls_made(), 2);

        assert_eq!(fetcher.inner().calls_for("ghostbreed"), 2);
        assert!(!fetcher.is_cached("ghostbreed"));
        assert_eq!(fetcher.cached_len(), 0);
    }

    #[test]
    fn test_retry_after_failure_can_succeed() {
        let flaky = FlakyFetcher {
            failures: 1,
            stub: StubFetcher::default().with("hound", &["blood"]),
        };
        let mut fetcher = CachingBreedFetcher::new(flaky);

        let err = fetcher.fetch_sub_breeds("hound").unwrap_err();
        assert_eq!(err.message(), "Network error for breed: hound");
        assert!(!fetcher.is_cached("hound"));

        assert_eq!(fetcher.fetch_sub_breeds("hound").unwrap(), vec!["blood"]);
        assert!(fetcher.is_cached("hound"));

        assert_eq!(fetcher.fetch_sub_breeds("hound").unwrap(), vec!["blood"]);
        assert_eq!(fetcher.calls_made(), 3);
        assert_eq!(fetcher.into_inner().stub.calls_for("hound"), 2);
    }

    #[test]
    fn test_empty_list_is_cached() {
        let mut fetcher = CachingBreedFetcher::new(StubFetcher::default().with("pug", &[]));

        assert!(fetcher.fetch_sub_breeds("pug").unwrap().is_empty());
        assert!(fetcher.fetch_sub_breeds("pug").unwrap().is_empty());

        assert_eq!(fetcher.inner().calls_for("pug"), 1);
        assert!(fetcher.is_cached("pug"));
    }

    #[test]
    fn test_counter_tracks_mixed_calls() {
        let mut fetcher = CachingBreedFetcher::new(
            StubFetcher::default()
                .with("hound", &["afghan"])
                .with("terrier", &["affenpinscher"]),
        );

        let breeds = ["hound", "ghostbreed", "terrier", "hound", "ghostbreed", "terrier", "hound"];
        for (i, breed) in breeds.iter().enumerate() {
            let _ = fetcher.fetch_sub_breeds(breed);
            assert_eq!(fetcher.calls_made(), i + 1);
        }

        assert_eq!(fetcher.cached_len(), 2);
        assert_eq!(fetcher.inner().calls_for("hound"), 1);
        assert_eq!(fetcher.inner().calls_for("terrier"), 1);
        assert_eq!(fetcher.inner().calls_for("ghostbreed"), 2);
    }

    #[test]
    fn test_keys_are_not_normalized() {
        let mut fetcher =
            CachingBreedFetcher::new(StubFetcher::default().with("hound", &["afghan"]));

        fetcher.fetch_sub_breeds("hound").unwrap();
        assert!(fetcher.fetch_sub_breeds("Hound").is_err());

        assert!(fetcher.is_cached("hound"));
        assert!(!fetcher.is_cached("Hound"));
    }

    #[test]
    fn test_decorators_compose() {
        let inner = CachingBreedFetcher::new(StubFetcher::default().with("hound", &["afghan"]));
        let mut outer = CachingBreedFetcher::new(inner);

        outer.fetch_sub_breeds("hound").unwrap();
        outer.fetch_sub_breeds("hound").unwrap();

        assert_eq!(outer.calls_made(), 2);
        assert_eq!(outer.inner().calls_made(), 1);
    }
}
