use std::{borrow::Cow, sync::Arc};

use super::{DesensitizeStrategy, keep_visible, template::RegexTemplate};
use crate::{
    cache::PatternCache,
    rule::{DesensitizeRule, SensitiveType},
};

const MIN_LENGTH: usize = 15;
const MAX_PREFIX: usize = 8;
const MAX_SUFFIX: usize = 4;

/// Masks national id numbers (15 digits, or 17 digits plus a check character).
#[derive(Clone, Debug)]
pub struct IdCardStrategy {
    template: RegexTemplate,
}

impl IdCardStrategy {
    /// 18-character ids (last may be `X`) or legacy 15-digit ids, not
    /// touching an ASCII letter or digit.
    pub const DEFAULT_PATTERN: &'static str = r"(?-u:\b)(?:\d{17}[\dXx]|\d{15})(?-u:\b)";

    #[must_use]
    pub fn new(cache: Arc<PatternCache>) -> Self {
        Self {
            template: RegexTemplate::new(cache, SensitiveType::IdCard, Self::DEFAULT_PATTERN),
        }
    }

    fn mask_id_card<'m>(&self, value: &'m str, rule: &DesensitizeRule) -> Cow<'m, str> {
        if value.chars().count() < MIN_LENGTH {
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

impl Default for IdCardStrategy {
    fn default() -> Self {
        Self::new(Arc::new(PatternCache::default()))
    }
}

impl DesensitizeStrategy for IdCardStrategy {
    fn supported_type(&self) -> SensitiveType {
        self.template.sensitive_type()
    }

    fn matches(&self, text: &str, rule: &DesensitizeRule) -> bool {
        self.template.matches(text, rule)
    }

    fn desensitize<'a>(&self, text: &'a str, rule: &DesensitizeRule) -> Cow<'a, str> {
        self.template
            .desensitize(text, rule, |matched| self.mask_id_card(matched, rule))
    }
}

#[cfg(test)]
mod tests {
    use super::IdCardStrategy;
    use crate::{DesensitizeRule, DesensitizeStrategy, SensitiveType};

    fn rule() -> DesensitizeRule {
        DesensitizeRule::new(SensitiveType::IdCard).with_keep(6, 4)
    }

    #[test]
    fn masks_birth_date_and_sequence() {
        let strategy = IdCardStrategy::default();
        assert_eq!(
            strategy.desensitize("110101199001011234", &rule()),
            "110101********1234"
        );
    }

    #[test]
    fn handles_check_character_and_legacy_ids() {
        let strategy = IdCardStrategy::default();
        assert_eq!(
            strategy.desensitize("id=11010119900101123X", &rule()),
            "id=110101********123X"
        );
        assert_eq!(
            strategy.desensitize("old id 110101900101123", &rule()),
            "old id 110101*****1123"
        );
    }

    #[test]
    fn caps_prefix_at_eight() {
        let wide = DesensitizeRule::new(SensitiveType::IdCard).with_keep(20, 20);
        let strategy = IdCardStrategy::default();
        assert_eq!(
            strategy.mask_id_card("110101199001011234", &wide),
            "11010119******1234"
        );
    }

    #[test]
    fn leaves_short_values_unchanged() {
        let strategy = IdCardStrategy::default();
        assert_eq!(strategy.mask_id_card("11010119900101", &rule()), "11010119900101");
    }

    #[test]
    fn leaves_card_numbers_alone() {
        let strategy = IdCardStrategy::default();
        let card = "6222021234567890";
        assert!(!strategy.matches(card, &rule()));
        assert_eq!(strategy.desensitize(card, &rule()), card);
    }
}
