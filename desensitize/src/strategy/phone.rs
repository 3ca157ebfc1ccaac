use std::{borrow::Cow, sync::Arc};

use super::{DesensitizeStrategy, keep_visible, template::RegexTemplate};
use crate::{
    cache::PatternCache,
    rule::{DesensitizeRule, SensitiveType},
};

const PHONE_LENGTH: usize = 11;
const MAX_PREFIX: usize = 6;
const MAX_SUFFIX: usize = 4;

/// Masks 11-digit mobile numbers (e.g. `"13812345678"` → `"138****5678"`).
#[derive(Clone, Debug)]
pub struct PhoneStrategy {
    template: RegexTemplate,
}

impl PhoneStrategy {
    /// Whole digit runs that contain a mainland mobile number.
    ///
    /// Matching the surrounding digits as well means an id or card number is
    /// matched in full and then rejected by the length check, instead of
    /// having a phone-shaped slice masked out of its middle.
    pub const DEFAULT_PATTERN: &'static str = r"\d*1[3-9]\d{9}\d*";

    #[must_use]
    pub fn new(cache: Arc<PatternCache>) -> Self {
        Self {
            template: RegexTemplate::new(cache, SensitiveType::Phone, Self::DEFAULT_PATTERN),
        }
    }

    fn mask_phone<'m>(&self, value: &'m str, rule: &DesensitizeRule) -> Cow<'m, str> {
        if value.chars().count() != PHONE_LENGTH {
            return Cow::Borrowed(value);
        }
        keep_visible(
            value,
            rule.keep_prefix.min(MAX_PREFIX),
            rule.keep_suffix.min(MAX_SUFFIX),
            |hidden| self.generate_mask(hidden, rule),
        )
    }
}

impl Default for PhoneStrategy {
    fn default() -> Self {
        Self::new(Arc::new(PatternCache::default()))
    }
}

impl DesensitizeStrategy for PhoneStrategy {
    fn supported_type(&self) -> SensitiveType {
        self.template.sensitive_type()
    }

    fn matches(&self, text: &str, rule: &DesensitizeRule) -> bool {
        self.template.matches(text, rule)
    }

    fn desensitize<'a>(&self, text: &'a str, rule: &DesensitizeRule) -> Cow<'a, str> {
        self.template
            .desensitize(text, rule, |matched| self.mask_phone(matched, rule))
    }
}

#[cfg(test)]
mod tests {
    use super::PhoneStrategy;
    use crate::{DesensitizeRule, DesensitizeStrategy, SensitiveType};

    fn rule() -> DesensitizeRule {
        DesensitizeRule::new(SensitiveType::Phone).with_keep(3, 4)
    }

    #[test]
    fn masks_middle_of_mobile_number() {
        let strategy = PhoneStrategy::default();
        assert_eq!(strategy.desensitize("13812345678", &rule()), "138****5678");
    }

    #[test]
    fn masks_numbers_inside_text() {
        let strategy = PhoneStrategy::default();
        assert_eq!(
            strategy.desensitize("call 13812345678 or 15900001111.", &rule()),
            "call 138****5678 or 159****1111."
        );
    }

    #[test]
    fn leaves_other_lengths_unchanged() {
        let strategy = PhoneStrategy::default();
        assert_eq!(strategy.mask_phone("1381234567", &rule()), "1381234567");
        assert_eq!(strategy.mask_phone("138123456789", &rule()), "138123456789");
    }

    #[test]
    fn does_not_split_longer_digit_runs() {
        let strategy = PhoneStrategy::default();
        let id = "110101199001011234";
        assert!(strategy.matches(id, &rule()));
        assert_eq!(strategy.desensitize(id, &rule()), id);
    }

    #[test]
    fn caps_visible_prefix_and_suffix() {
        let wide = DesensitizeRule::new(SensitiveType::Phone).with_keep(10, 10);
        let strategy = PhoneStrategy::default();
        assert_eq!(strategy.mask_phone("13812345678", &wide), "138123*5678");
    }

    #[test]
    fn masked_output_no_longer_matches() {
        let strategy = PhoneStrategy::default();
        let masked = strategy.desensitize("13812345678", &rule()).into_owned();
        assert!(!strategy.matches(&masked, &rule()));
        assert_eq!(strategy.desensitize(&masked, &rule()), masked);
    }
}
