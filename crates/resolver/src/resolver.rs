use crate::cache::FragmentCache;
use crate::error::ResolveError;
use crate::props::Props;
use iconforge_traits::{FragmentSource, SharedFragment};

/// Resolves icon names to complete SVG markup.
///
/// Owns its [`FragmentCache`]; share one resolver (e.g. behind an `Arc`)
/// across request handlers to share the cache.
#[derive(Debug)]
pub struct IconResolver<S: FragmentSource> {
    source: S,
    cache: FragmentCache,
}

impl<S: FragmentSource> IconResolver<S> {
    pub fn new(source: S) -> Self {
        Self::with_cache(source, FragmentCache::new())
    }

    /// Uses a pre-built (possibly pre-warmed) cache.
    pub fn with_cache(source: S, cache: FragmentCache) -> Self {
        Self { source, cache }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn cache(&self) -> &FragmentCache {
        &self.cache
    }

    /// Returns the fragment for `name`, loading it from the source on first use.
    pub fn fragment(&self, name: &str) -> Result<SharedFragment, ResolveError> {
        self.cache.get_or_load(name, || {
            log::debug!("Loading icon '{}' from {}", name, self.source.name());
            self.source
                .load(name)
                .map_err(|e| ResolveError::from_source(name, e))
        })
    }

    /// Renders `name` as a complete `<svg>` element.
    pub fn resolve(&self, name: &str, props: &Props) -> Result<String, ResolveError> {
        let fragment = self.fragment(name)?;
        Ok(props.wrap(&fragment))
    }

    /// Loads every name into the cache, stopping at the first failure.
    ///
    /// Returns how many names were processed.
    pub fn preload<I, N>(&self, names: I) -> Result<usize, ResolveError>
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        let mut count = 0;
        for name in names {
            self.fragment(name.as_ref())?;
            count += 1;
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iconforge_traits::{InMemoryFragmentSource, SourceError};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Barrier};
    use std::thread;

    /// Counts how often the wrapped source is hit.
    #[derive(Debug)]
    struct CountingSource {
        inner: InMemoryFragmentSource,
        loads: AtomicUsize,
    }

    impl CountingSource {
        fn new(pairs: &[(&str, &str)]) -> Self {
            Self {
                inner: InMemoryFragmentSource::from_pairs(pairs.iter().copied()),
                loads: AtomicUsize::new(0),
            }
        }

        fn loads(&self) -> usize {
            self.loads.load(Ordering::SeqCst)
        }
    }

    impl FragmentSource for CountingSource {
        fn load(&self, name: &str) -> Result<SharedFragment, SourceError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            // Widen the race window for concurrent first access.
            thread::sleep(std::time::Duration::from_millis(5));
            self.inner.load(name)
        }

        fn exists(&self, name: &str) -> bool {
            self.inner.exists(name)
        }

        fn name(&self) -> &'static str {
            "CountingSource"
        }
    }

    #[derive(Debug)]
    struct BrokenSource;

    impl FragmentSource for BrokenSource {
        fn load(&self, name: &str) -> Result<SharedFragment, SourceError> {
            Err(SourceError::LoadFailed {
                name: name.to_string(),
                message: "permission denied".to_string(),
            })
        }

        fn exists(&self, _name: &str) -> bool {
            true
        }

        fn name(&self) -> &'static str {
            "BrokenSource"
        }
    }

    #[test]
    fn test_resolve_with_defaults() {
        let resolver = IconResolver::new(InMemoryFragmentSource::from_pairs([("x", "<path/>")]));
        assert_eq!(
            resolver.resolve("x", &Props::default()).unwrap(),
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" class=""><path/></svg>"#
        );
    }

    #[test]
    fn test_resolve_color_sets_stroke() {
        let resolver = IconResolver::new(InMemoryFragmentSource::from_pairs([("x", "<path/>")]));
        let svg = resolver.resolve("x", &Props::new().with_color("red")).unwrap();
        assert!(svg.contains(r#"stroke="red""#));
    }

    #[test]
    fn test_resolve_missing_is_not_found_and_not_cached() {
        let resolver = IconResolver::new(InMemoryFragmentSource::from_pairs([("x", "<path/>")]));
        resolver.resolve("x", &Props::default()).unwrap();
        let before = resolver.cache().len();

        let err = resolver.resolve("missing", &Props::default()).unwrap_err();
        assert_eq!(err, ResolveError::NotFound("missing".to_string()));
        assert_eq!(err.to_string(), "icon missing not found");
        assert_eq!(resolver.cache().len(), before);
    }

    #[test]
    fn test_resolve_caches_after_first_load() {
        let resolver = IconResolver::new(CountingSource::new(&[("x", "<path/>")]));
        for _ in 0..3 {
            resolver.resolve("x", &Props::default()).unwrap();
        }
        assert_eq!(resolver.source().loads(), 1);
    }

    #[test]
    fn test_failed_lookups_retry_the_source() {
        let resolver = IconResolver::new(CountingSource::new(&[]));
        assert!(resolver.fragment("missing").is_err());
        assert!(resolver.fragment("missing").is_err());
        assert_eq!(resolver.source().loads(), 2);
    }

    #[test]
    fn test_source_failure_is_not_not_found() {
        let resolver = IconResolver::new(BrokenSource);
        let err = resolver.resolve("x", &Props::default()).unwrap_err();
        assert!(matches!(err, ResolveError::Source { .. }));
        assert!(!err.is_not_found());
        assert!(resolver.cache().is_empty());
    }

    #[test]
    fn test_concurrent_first_access_loads_once() {
        for _ in 0..20 {
            let resolver = IconResolver::new(CountingSource::new(&[("x", "<path/>")]));
            let barrier = Barrier::new(16);

            thread::scope(|s| {
                for _ in 0..16 {
                    s.spawn(|| {
                        barrier.wait();
                        let svg = resolver.resolve("x", &Props::default()).unwrap();
                        assert!(svg.ends_with("<path/></svg>"));
                    });
                }
            });

            assert_eq!(resolver.source().loads(), 1);
            assert_eq!(resolver.cache().len(), 1);
        }
    }

    #[test]
    fn test_shared_resolver_across_threads() {
        let resolver = Arc::new(IconResolver::new(InMemoryFragmentSource::from_pairs([
            ("a", "<circle/>"),
            ("b", "<rect/>"),
        ])));

        let handles: Vec<_> = ["a", "b", "a", "b"]
            .into_iter()
            .map(|name| {
                let resolver = Arc::clone(&resolver);
                thread::spawn(move || resolver.fragment(name).unwrap())
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(resolver.cache().len(), 2);
    }

    #[test]
    fn test_preload() {
        let source = CountingSource::new(&[("a", "<circle/>"), ("b", "<rect/>")]);
        let resolver = IconResolver::new(source);
        assert_eq!(resolver.preload(["a", "b"]).unwrap(), 2);
        assert_eq!(resolver.cache().len(), 2);

        let err = resolver.preload(vec!["a".to_string(), "c".to_string()]).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(resolver.source().loads(), 3);
    }
}
