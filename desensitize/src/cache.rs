//! Shared cache of compiled regular expressions.
//!
//! Compiling a [`Regex`] is far more expensive than running it, and the same
//! handful of patterns is used on every log line. [`PatternCache`] memoizes
//! compiled patterns by their exact source text.
//!
//! The cache is bounded: once it holds `max_entries` patterns, further
//! patterns are compiled on every call but never stored. Existing entries are
//! never evicted individually; [`PatternCache::clear`] drops all of them.
//!
//! The bound is checked before inserting and is not atomic with the insert, so
//! concurrent misses for different patterns may leave the cache a few entries
//! over `max_entries`.

use std::sync::atomic::{AtomicBool, Ordering};

use dashmap::DashMap;
use regex::Regex;
use tracing::debug;

use crate::error::{Error, Result};

/// Default upper bound on the number of cached patterns.
pub const DEFAULT_MAX_CACHED_PATTERNS: usize = 100;

/// Thread-safe, bounded memo table from pattern text to compiled [`Regex`].
#[derive(Debug)]
pub struct PatternCache {
    entries: DashMap<String, Regex>,
    max_entries: usize,
    enabled: AtomicBool,
}

impl PatternCache {
    /// Creates an enabled cache holding at most `max_entries` patterns.
    #[must_use]
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: DashMap::new(),
            max_entries,
            enabled: AtomicBool::new(true),
        }
    }

    /// Creates a cache that compiles on every call and never stores.
    #[must_use]
    pub fn disabled() -> Self {
        let cache = Self::new(DEFAULT_MAX_CACHED_PATTERNS);
        cache.set_enabled(false);
        cache
    }

    /// Compiles `pattern`, returning the cached regex when one exists.
    ///
    /// `Regex` is reference counted internally, so the returned value is a
    /// cheap clone of the cached one.
    pub fn compile(&self, pattern: &str) -> Result<Regex> {
        if pattern.is_empty() {
            return Err(Error::EmptyPattern);
        }

        if !self.is_enabled() {
            return compile_uncached(pattern);
        }

        if let Some(cached) = self.entries.get(pattern) {
            return Ok(cached.value().clone());
        }

        let regex = compile_uncached(pattern)?;
        if self.entries.len() < self.max_entries {
            // First writer wins when two threads miss on the same pattern.
            let stored = self
                .entries
                .entry(pattern.to_owned())
                .or_insert(regex)
                .value()
                .clone();
            return Ok(stored);
        }

        debug!(
            max_entries = self.max_entries,
            "pattern cache full, compiled pattern will not be stored"
        );
        Ok(regex)
    }

    /// Drops every cached pattern.
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Number of cached patterns.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Maximum number of patterns the cache stores.
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Whether compiled patterns are memoized.
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    /// Turns memoization on or off. Already cached entries are kept.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Release);
    }
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CACHED_PATTERNS)
    }
}

fn compile_uncached(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::InvalidPattern {
        pattern: pattern.to_owned(),
        source,
    })
}
