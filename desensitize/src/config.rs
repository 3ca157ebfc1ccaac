//! Process-wide masking configuration.
//!
//! A [`DesensitizeConfig`] is loaded once at startup and treated as read-only
//! afterwards. To change it at runtime, build a new one and hand it to
//! [`Desensitizer::reload`](crate::Desensitizer::reload).

use serde::{Deserialize, Serialize};

use crate::{
    cache::DEFAULT_MAX_CACHED_PATTERNS,
    rule::{DesensitizeRule, SensitiveType},
};

/// Performance knobs consulted when building the pattern cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Memoize compiled patterns.
    pub cache_patterns: bool,
    /// Upper bound on memoized patterns.
    pub max_cached_patterns: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            cache_patterns: true,
            max_cached_patterns: DEFAULT_MAX_CACHED_PATTERNS,
        }
    }
}

/// Master switch, ordered rules and performance settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesensitizeConfig {
    /// When `false`, no rule is applied.
    pub enabled: bool,
    /// Rules in application order.
    pub rules: Vec<DesensitizeRule>,
    pub performance: PerformanceConfig,
}

impl DesensitizeConfig {
    /// A configuration with no rules.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            enabled: true,
            rules: Vec::new(),
            performance: PerformanceConfig::default(),
        }
    }

    /// Appends a rule.
    #[must_use]
    pub fn with_rule(mut self, rule: DesensitizeRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Sets the master switch.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Turns pattern memoization on or off.
    #[must_use]
    pub fn with_cache_patterns(mut self, cache_patterns: bool) -> Self {
        self.performance.cache_patterns = cache_patterns;
        self
    }

    /// Rules to apply, in configured order. Empty when the master switch is off.
    pub fn enabled_rules(&self) -> Vec<&DesensitizeRule> {
        if !self.enabled {
            return Vec::new();
        }
        self.rules.iter().filter(|rule| rule.enabled).collect()
    }

    /// The first enabled rule for `sensitive_type`, if any.
    pub fn rule_for(&self, sensitive_type: SensitiveType) -> Option<&DesensitizeRule> {
        self.enabled_rules()
            .into_iter()
            .find(|rule| rule.sensitive_type == sensitive_type)
    }

    /// Parses a JSON configuration document.
    ///
    /// Missing fields take their defaults; a missing `rules` array yields the
    /// default rule set.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

// Cards run before ids. Both patterns require whole digit runs, so the order
// only matters for 18-digit ids, which the card rule masks with the same 6/4
// shape.
const DEFAULT_RULE_ORDER: [SensitiveType; 7] = [
    SensitiveType::Email,
    SensitiveType::Phone,
    SensitiveType::BankCard,
    SensitiveType::IdCard,
    SensitiveType::Address,
    SensitiveType::Password,
    SensitiveType::KeyValue,
];

/// One default rule per sensitivity type.
impl Default for DesensitizeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rules: DEFAULT_RULE_ORDER
                .into_iter()
                .map(DesensitizeRule::default_for)
                .collect(),
            performance: PerformanceConfig::default(),
        }
    }
}
