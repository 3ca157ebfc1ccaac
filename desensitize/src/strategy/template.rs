//! Scanning and masking logic shared by the strategies.
//!
//! Regex-driven strategies hold a [`RegexTemplate`] and hand it a per-match
//! closure; the template resolves the pattern through the shared cache, finds
//! every non-overlapping match and splices the closure's output back into the
//! text. Spans between matches are copied verbatim.

use std::{borrow::Cow, sync::Arc};

use regex::{Captures, Regex};
use tracing::warn;

use crate::{
    cache::PatternCache,
    rule::{DesensitizeRule, SensitiveType},
};

/// Builds a mask of `max(1, length)` copies of `mask_char`.
pub fn mask(mask_char: char, length: usize) -> String {
    std::iter::repeat_n(mask_char, length.max(1)).collect()
}

/// Keeps `keep_prefix` leading and `keep_suffix` trailing characters visible
/// and replaces the rest with `mask_span(hidden_len)`.
///
/// Operates on Unicode scalar values. If the kept spans cover the whole value,
/// the value is returned unchanged and `mask_span` is not called.
pub fn keep_visible<F>(
    value: &str,
    keep_prefix: usize,
    keep_suffix: usize,
    mask_span: F,
) -> Cow<'_, str>
where
    F: FnOnce(usize) -> String,
{
    let total = value.chars().count();
    let prefix = keep_prefix.min(total);
    let suffix = keep_suffix.min(total - prefix);
    if prefix + suffix >= total {
        return Cow::Borrowed(value);
    }

    let mut out: String = value.chars().take(prefix).collect();
    out.push_str(&mask_span(total - prefix - suffix));
    out.extend(value.chars().skip(total - suffix));
    Cow::Owned(out)
}

/// Replaces every match of `pattern` in `text` with `redact(matched)`.
///
/// Returns the input borrowed when nothing matches, so the common "no
/// sensitive data" line costs one scan and no allocation.
pub fn redact_matches<'a, F>(text: &'a str, pattern: &Regex, redact: F) -> Cow<'a, str>
where
    F: Fn(&str) -> Cow<'_, str>,
{
    pattern.replace_all(text, |caps: &Captures<'_>| redact(&caps[0]).into_owned())
}

/// Pattern resolution for one regex-driven strategy.
///
/// Holds the shared cache, the type the strategy serves and its built-in
/// pattern. Every failure (wrong rule type, empty or invalid pattern) turns
/// into "no match" here so strategies never surface an error.
#[derive(Clone, Debug)]
pub(crate) struct RegexTemplate {
    cache: Arc<PatternCache>,
    sensitive_type: SensitiveType,
    default_pattern: &'static str,
}

impl RegexTemplate {
    pub(crate) fn new(
        cache: Arc<PatternCache>,
        sensitive_type: SensitiveType,
        default_pattern: &'static str,
    ) -> Self {
        Self {
            cache,
            sensitive_type,
            default_pattern,
        }
    }

    pub(crate) fn sensitive_type(&self) -> SensitiveType {
        self.sensitive_type
    }

    pub(crate) fn matches(&self, text: &str, rule: &DesensitizeRule) -> bool {
        if text.is_empty() {
            return false;
        }
        self.resolve(rule).is_some_and(|regex| regex.is_match(text))
    }

    pub(crate) fn desensitize<'a, F>(
        &self,
        text: &'a str,
        rule: &DesensitizeRule,
        redact: F,
    ) -> Cow<'a, str>
    where
        F: Fn(&str) -> Cow<'_, str>,
    {
        if text.is_empty() {
            return Cow::Borrowed(text);
        }
        match self.resolve(rule) {
            Some(regex) => redact_matches(text, &regex, redact),
            None => Cow::Borrowed(text),
        }
    }

    fn resolve(&self, rule: &DesensitizeRule) -> Option<Regex> {
        if rule.sensitive_type != self.sensitive_type {
            return None;
        }
        let pattern = match rule.pattern.as_deref() {
            None => self.default_pattern,
            Some("") => return None,
            Some(pattern) => pattern,
        };
        match self.cache.compile(pattern) {
            Ok(regex) => Some(regex),
            Err(err) => {
                warn!(
                    sensitive_type = %self.sensitive_type,
                    error = %err,
                    "unusable desensitize pattern, leaving text unchanged"
                );
                None
            }
        }
    }
}
