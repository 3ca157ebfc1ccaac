use std::{borrow::Cow, sync::Arc};

use super::{DesensitizeStrategy, key_name::KeyNameScanner, mask};
use crate::{
    cache::PatternCache,
    rule::{DesensitizeRule, SensitiveType},
};

const MIN_MASK_LEN: usize = 3;
const MAX_MASK_LEN: usize = 6;

/// Masks values assigned to configured keys such as tokens and API keys.
///
/// The mask roughly follows the value length but is clamped to 3..=6
/// characters.
#[derive(Clone, Debug)]
pub struct KeyValueStrategy {
    scanner: KeyNameScanner,
}

impl KeyValueStrategy {
    #[must_use]
    pub fn new(cache: Arc<PatternCache>) -> Self {
        Self {
            scanner: KeyNameScanner::new(cache),
        }
    }
}

impl Default for KeyValueStrategy {
    fn default() -> Self {
        Self::new(Arc::new(PatternCache::default()))
    }
}

impl DesensitizeStrategy for KeyValueStrategy {
    fn supported_type(&self) -> SensitiveType {
        SensitiveType::KeyValue
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

    fn generate_mask(&self, length: usize, rule: &DesensitizeRule) -> String {
        mask(rule.mask_char, length.clamp(MIN_MASK_LEN, MAX_MASK_LEN))
    }
}
