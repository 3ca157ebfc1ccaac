use std::{borrow::Cow, sync::Arc};

use super::{DesensitizeStrategy, keep_visible, template::RegexTemplate};
use crate::{
    cache::PatternCache,
    rule::{DesensitizeRule, SensitiveType},
};

const MIN_LENGTH: usize = 16;
const MAX_PREFIX: usize = 6;
const MAX_SUFFIX: usize = 4;

/// Masks bank card numbers, keeping at most the issuer prefix and the last
/// four digits (e.g. `"6222021234567890"` → `"6222********7890"`).
///
/// The masked value has the same length as the original.
#[derive(Clone, Debug)]
pub struct BankCardStrategy {
    template: RegexTemplate,
}

impl BankCardStrategy {
    /// 16 to 19 consecutive digits, not touching an ASCII letter or digit.
    ///
    /// The ASCII boundary still matches next to Han text (`卡号6222...`).
    pub const DEFAULT_PATTERN: &'static str = r"(?-u:\b)\d{16,19}(?-u:\b)";

    #[must_use]
    pub fn new(cache: Arc<PatternCache>) -> Self {
        Self {
            template: RegexTemplate::new(cache, SensitiveType::BankCard, Self::DEFAULT_PATTERN),
        }
    }

    fn mask_bank_card<'m>(&self, value: &'m str, rule: &DesensitizeRule) -> Cow<'m, str> {
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

impl Default for BankCardStrategy {
    fn default() -> Self {
        Self::new(Arc::new(PatternCache::default()))
    }
}

impl DesensitizeStrategy for BankCardStrategy {
    fn supported_type(&self) -> SensitiveType {
        self.template.sensitive_type()
    }

    fn matches(&self, text: &str, rule: &DesensitizeRule) -> bool {
        self.template.matches(text, rule)
    }

    fn desensitize<'a>(&self, text: &'a str, rule: &DesensitizeRule) -> Cow<'a, str> {
        self.template
            .desensitize(text, rule, |matched| self.mask_bank_card(matched, rule))
    }
}

#[cfg(test)]
mod tests {
    use super::BankCardStrategy;
    use crate::{DesensitizeRule, DesensitizeStrategy, SensitiveType};

    #[test]
    fn keeps_prefix_and_last_four() {
        let strategy = BankCardStrategy::default();
        let rule = DesensitizeRule::new(SensitiveType::BankCard).with_keep(4, 4);
        assert_eq!(
            strategy.desensitize("6222021234567890", &rule),
            "6222********7890"
        );
    }

    #[test]
    fn caps_prefix_at_six_and_suffix_at_four() {
        let rule = DesensitizeRule::new(SensitiveType::BankCard).with_keep(12, 12);
        assert_eq!(
            BankCardStrategy::default().mask_bank_card("6222021234567890123", &rule),
            "622202*********0123"
        );
    }

    #[test]
    fn leaves_short_custom_matches_unchanged() {
        let strategy = BankCardStrategy::default();
        let rule = DesensitizeRule::new(SensitiveType::BankCard)
            .with_pattern(r"\d{12,19}")
            .with_keep(4, 4);
        assert_eq!(strategy.desensitize("card 622202123456", &rule), "card 622202123456");
    }

    #[test]
    fn respects_mask_char() {
        let strategy = BankCardStrategy::default();
        let rule = DesensitizeRule::new(SensitiveType::BankCard)
            .with_keep(6, 4)
            .with_mask_char('#');
        assert_eq!(
            strategy.desensitize("pay with 6222021234567890 now", &rule),
            "pay with 622202######7890 now"
        );
    }

    #[test]
    fn ignores_digits_glued_to_letters_or_longer_runs() {
        let strategy = BankCardStrategy::default();
        let rule = DesensitizeRule::new(SensitiveType::BankCard).with_keep(6, 4);
        for text in ["11010119900101123X", "62220212345678901234", "a6222021234567890"] {
            assert!(!strategy.matches(text, &rule), "{text}");
            assert_eq!(strategy.desensitize(text, &rule), text);
        }
    }

    #[test]
    fn matches_next_to_han_text() {
        let strategy = BankCardStrategy::default();
        let rule = DesensitizeRule::new(SensitiveType::BankCard).with_keep(6, 4);
        assert_eq!(
            strategy.desensitize("卡号6222021234567890。", &rule),
            "卡号622202******7890。"
        );
    }
}
