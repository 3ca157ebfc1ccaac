//! Entry point used by the logging pipeline.
//!
//! A [`Desensitizer`] owns one instance of every strategy, the pattern cache
//! they share, and the active configuration. Strategies are selected by an
//! exhaustive `match` on [`SensitiveType`], so adding a type without a
//! strategy does not compile.

use std::{borrow::Cow, sync::Arc};

use arc_swap::ArcSwap;
use tracing::debug;

use crate::{
    cache::PatternCache,
    config::DesensitizeConfig,
    rule::{DesensitizeRule, SensitiveType},
    strategy::{
        AddressStrategy, BankCardStrategy, DesensitizeStrategy, EmailStrategy, IdCardStrategy,
        KeyValueStrategy, PasswordStrategy, PhoneStrategy,
    },
};

/// Applies masking rules to text.
///
/// `Desensitizer` is `Send + Sync`; share it behind an `Arc` (or a `static`)
/// and call it from any logging call site.
#[derive(Debug)]
pub struct Desensitizer {
    cache: Arc<PatternCache>,
    config: ArcSwap<DesensitizeConfig>,
    email: EmailStrategy,
    phone: PhoneStrategy,
    id_card: IdCardStrategy,
    bank_card: BankCardStrategy,
    address: AddressStrategy,
    password: PasswordStrategy,
    key_value: KeyValueStrategy,
}

impl Desensitizer {
    /// Builds an engine with a pattern cache sized and toggled by `config`.
    #[must_use]
    pub fn new(config: DesensitizeConfig) -> Self {
        let cache = PatternCache::new(config.performance.max_cached_patterns);
        cache.set_enabled(config.performance.cache_patterns);
        Self::with_cache(config, Arc::new(cache))
    }

    /// Builds an engine around an existing cache, e.g. one shared with
    /// another engine.
    #[must_use]
    pub fn with_cache(config: DesensitizeConfig, cache: Arc<PatternCache>) -> Self {
        Self {
            email: EmailStrategy::new(Arc::clone(&cache)),
            phone: PhoneStrategy::new(Arc::clone(&cache)),
            id_card: IdCardStrategy::new(Arc::clone(&cache)),
            bank_card: BankCardStrategy::new(Arc::clone(&cache)),
            address: AddressStrategy::new(Arc::clone(&cache)),
            password: PasswordStrategy::new(Arc::clone(&cache)),
            key_value: KeyValueStrategy::new(Arc::clone(&cache)),
            config: ArcSwap::from_pointee(config),
            cache,
        }
    }

    /// The strategy serving `sensitive_type`.
    pub fn strategy(&self, sensitive_type: SensitiveType) -> &dyn DesensitizeStrategy {
        match sensitive_type {
            SensitiveType::Email => &self.email,
            SensitiveType::Phone => &self.phone,
            SensitiveType::IdCard => &self.id_card,
            SensitiveType::BankCard => &self.bank_card,
            SensitiveType::Address => &self.address,
            SensitiveType::Password => &self.password,
            SensitiveType::KeyValue => &self.key_value,
        }
    }

    /// Masks `text` with a single rule.
    pub fn desensitize<'a>(&self, text: &'a str, rule: &DesensitizeRule) -> Cow<'a, str> {
        self.strategy(rule.sensitive_type).desensitize(text, rule)
    }

    /// Like [`desensitize`](Self::desensitize), passing `None` through.
    pub fn desensitize_opt<'a>(
        &self,
        text: Option<&'a str>,
        rule: &DesensitizeRule,
    ) -> Option<Cow<'a, str>> {
        text.map(|text| self.desensitize(text, rule))
    }

    /// Returns `true` if `rule` would mask something in `text`.
    pub fn matches(&self, text: &str, rule: &DesensitizeRule) -> bool {
        self.strategy(rule.sensitive_type).matches(text, rule)
    }

    /// Applies every enabled rule of the active configuration, in order.
    ///
    /// Returns the input borrowed when the master switch is off or no rule
    /// masks anything.
    pub fn desensitize_all<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let config = self.config.load();
        let mut current = Cow::Borrowed(text);
        for rule in config.enabled_rules() {
            let masked = match self.desensitize(&current, rule) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(masked) => masked,
            };
            current = Cow::Owned(masked);
        }
        current
    }

    /// Returns `true` if any enabled rule would mask something in `text`.
    pub fn matches_any(&self, text: &str) -> bool {
        self.config
            .load()
            .enabled_rules()
            .into_iter()
            .any(|rule| self.matches(text, rule))
    }

    /// A snapshot of the active configuration.
    pub fn config(&self) -> Arc<DesensitizeConfig> {
        self.config.load_full()
    }

    /// Swaps in a new configuration without blocking concurrent callers.
    ///
    /// The cache toggle follows `config.performance.cache_patterns`; the
    /// cache size bound is fixed at construction.
    pub fn reload(&self, config: DesensitizeConfig) {
        self.cache.set_enabled(config.performance.cache_patterns);
        debug!(
            rules = config.rules.len(),
            enabled = config.enabled,
            cache_patterns = config.performance.cache_patterns,
            "desensitize configuration reloaded"
        );
        self.config.store(Arc::new(config));
    }

    /// Drops every cached pattern.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Number of cached patterns.
    pub fn cache_size(&self) -> usize {
        self.cache.size()
    }
}

impl Default for Desensitizer {
    fn default() -> Self {
        Self::new(DesensitizeConfig::default())
    }
}
