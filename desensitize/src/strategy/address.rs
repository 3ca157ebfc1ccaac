use std::{borrow::Cow, sync::Arc};

use super::{DesensitizeStrategy, template::RegexTemplate};
use crate::{
    cache::PatternCache,
    rule::{DesensitizeRule, SensitiveType},
};

const MIN_LENGTH: usize = 8;

/// Masks the detail of front-loaded postal addresses.
///
/// Addresses read from the largest unit to the smallest, so the kept prefix
/// (province, city, district) is capped at half the address and the street
/// detail is what gets masked.
#[derive(Clone, Debug)]
pub struct AddressStrategy {
    template: RegexTemplate,
}

impl AddressStrategy {
    /// A Han-script province or city followed by street detail that ends in a
    /// road, number or building marker.
    pub const DEFAULT_PATTERN: &'static str = r"\p{Han}{2,}(?:省|市|自治区|特别行政区)[\p{Han}A-Za-z0-9#-]{2,}(?:路|街|道|巷|弄|号|室|栋|楼|村|组)";

    #[must_use]
    pub fn new(cache: Arc<PatternCache>) -> Self {
        Self {
            template: RegexTemplate::new(cache, SensitiveType::Address, Self::DEFAULT_PATTERN),
        }
    }

    // The suffix is not capped; one that covers the mask leaves the value as is.
    fn mask_address<'m>(&self, value: &'m str, rule: &DesensitizeRule) -> Cow<'m, str> {
        let chars: Vec<char> = value.chars().collect();
        let total = chars.len();
        if total < MIN_LENGTH {
            return Cow::Borrowed(value);
        }

        let prefix = rule.keep_prefix.min(total / 2);
        let suffix = rule.keep_suffix;
        let masked_len = total.saturating_sub(prefix.saturating_add(suffix));
        if masked_len == 0 {
            return Cow::Borrowed(value);
        }

        let mut out: String = chars[..prefix].iter().collect();
        out.push_str(&self.generate_mask(masked_len, rule));
        out.extend(&chars[total - suffix..]);
        Cow::Owned(out)
    }
}

impl Default for AddressStrategy {
    fn default() -> Self {
        Self::new(Arc::new(PatternCache::default()))
    }
}

impl DesensitizeStrategy for AddressStrategy {
    fn supported_type(&self) -> SensitiveType {
        self.template.sensitive_type()
    }

    fn matches(&self, text: &str, rule: &DesensitizeRule) -> bool {
        self.template.matches(text, rule)
    }

    fn desensitize<'a>(&self, text: &'a str, rule: &DesensitizeRule) -> Cow<'a, str> {
        self.template
            .desensitize(text, rule, |matched| self.mask_address(matched, rule))
    }
}
