use std::{borrow::Cow, sync::Arc};

use super::{DesensitizeStrategy, template::RegexTemplate};
use crate::{
    cache::PatternCache,
    rule::{DesensitizeRule, SensitiveType},
};

/// Upper bound on mask characters emitted for the username.
const MAX_MASK: usize = 3;

/// Masks the username of an email address and keeps the domain.
///
/// At most three mask characters are emitted whatever the username length,
/// so the output does not leak it (`"alexander@example.com"` with one kept
/// character → `"a***@example.com"`).
#[derive(Clone, Debug)]
pub struct EmailStrategy {
    template: RegexTemplate,
}

impl EmailStrategy {
    pub const DEFAULT_PATTERN: &'static str = r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}";

    #[must_use]
    pub fn new(cache: Arc<PatternCache>) -> Self {
        Self {
            template: RegexTemplate::new(cache, SensitiveType::Email, Self::DEFAULT_PATTERN),
        }
    }

    fn mask_email<'m>(&self, value: &'m str, rule: &DesensitizeRule) -> Cow<'m, str> {
        let Some(at) = value.find('@') else {
            return Cow::Borrowed(value);
        };
        let (username, domain) = value.split_at(at);
        let username_len = username.chars().count();
        if username_len <= rule.keep_prefix.max(1) {
            return Cow::Borrowed(value);
        }

        let visible: String = username.chars().take(rule.keep_prefix).collect();
        let masked = self.generate_mask((username_len - rule.keep_prefix).min(MAX_MASK), rule);
        Cow::Owned(format!("{visible}{masked}{domain}"))
    }
}

impl Default for EmailStrategy {
    fn default() -> Self {
        Self::new(Arc::new(PatternCache::default()))
    }
}

impl DesensitizeStrategy for EmailStrategy {
    fn supported_type(&self) -> SensitiveType {
        self.template.sensitive_type()
    }

    fn matches(&self, text: &str, rule: &DesensitizeRule) -> bool {
        self.template.matches(text, rule)
    }

    fn desensitize<'a>(&self, text: &'a str, rule: &DesensitizeRule) -> Cow<'a, str> {
        self.template
            .desensitize(text, rule, |matched| self.mask_email(matched, rule))
    }
}
