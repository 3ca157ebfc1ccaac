use std::{borrow::Cow, sync::Arc};

use super::{DesensitizeStrategy, key_name::KeyNameScanner, mask};
use crate::{
    cache::PatternCache,
    rule::{DesensitizeRule, SensitiveType},
};

/// Length of every password mask, independent of the secret's length.
const PASSWORD_MASK_LEN: usize = 6;

/// Masks values assigned to password-like keys (`password=admin123` →
/// `password=******`).
///
/// The mask always has six characters so the output does not reveal the
/// length of the secret.
#[derive(Clone, Debug)]
pub struct PasswordStrategy {
    scanner: KeyNameScanner,
}

impl PasswordStrategy {
    #[must_use]
    pub fn new(cache: Arc<PatternCache>) -> Self {
        Self {
            scanner: KeyNameScanner::new(cache),
        }
    }
}

impl Default for PasswordStrategy {
    fn default() -> Self {
        Self::new(Arc::new(PatternCache::default()))
    }
}

impl DesensitizeStrategy for PasswordStrategy {
    fn supported_type(&self) -> SensitiveType {
        SensitiveType::Password
    }

    fn matches(&self, text: &str, rule: &DesensitizeRule) -> bool {
        rule.sensitive_type == self.supported_type() && KeyNameScanner::matches(text, rule)
    }

    fn desensitize<'a>(&self, text: &'a str, rule: &DesensitizeRule) -> Cow<'a, str> {
        if rule.sensitive_type != self.supported_type() {
            return Cow::Borrowed(text);
        }
        self.scanner.desensitize(self, text, rule)
    }

    fn generate_mask(&self, _length: usize, rule: &DesensitizeRule) -> String {
        mask(rule.mask_char, PASSWORD_MASK_LEN)
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::PasswordStrategy;
    use crate::{DesensitizeRule, DesensitizeStrategy, SensitiveType};

    fn rule() -> DesensitizeRule {
        DesensitizeRule::new(SensitiveType::Password).with_key_names(["password", "pwd"])
    }

    #[test]
    fn masks_assignment_with_fixed_length() {
        let strategy = PasswordStrategy::default();
        assert_eq!(
            strategy.desensitize("password=admin123", &rule()),
            "password=******"
        );
        assert_eq!(strategy.desensitize("pwd=x", &rule()), "pwd=******");
    }

    #[test]
    fn masks_every_delimiter_style() {
        let strategy = PasswordStrategy::default();
        assert_eq!(
            strategy.desensitize("user=bob, Password: hunter2, pwd => abc", &rule()),
            "user=bob, Password: ******, pwd => ******"
        );
    }

    #[test]
    fn masks_json_values_and_keeps_quotes() {
        let strategy = PasswordStrategy::default();
        assert_eq!(
            strategy.desensitize(r#"{"user":"bob","password":"s3cr3t!"}"#, &rule()),
            r#"{"user":"bob","password":"******"}"#
        );
    }

    #[test]
    fn ignores_keys_without_delimiter() {
        let strategy = PasswordStrategy::default();
        let text = "forgot password again";
        assert!(!strategy.matches(text, &rule()));
        assert!(matches!(
            strategy.desensitize(text, &rule()),
            Cow::Borrowed("forgot password again")
        ));
    }

    #[test]
    fn rules_of_other_types_are_no_ops() {
        let strategy = PasswordStrategy::default();
        let other = DesensitizeRule::new(SensitiveType::KeyValue).with_key_names(["password"]);
        assert!(!strategy.matches("password=abc", &other));
        assert_eq!(strategy.desensitize("password=abc", &other), "password=abc");
    }

    #[test]
    fn generate_mask_ignores_length() {
        let strategy = PasswordStrategy::default();
        assert_eq!(strategy.generate_mask(0, &rule()), "******");
        assert_eq!(strategy.generate_mask(40, &rule().with_mask_char('#')), "######");
    }
}
