//! Scanner for values located by the field name in front of them.
//!
//! Recognized shapes, all case-insensitive on the key:
//!
//! ```text
//! password=secret   password: secret   password => secret
//! "password": "secret"   'password'='secret'
//! ```
//!
//! The value runs until `,`, `}`, whitespace or a quote.

use std::{borrow::Cow, sync::Arc};

use regex::{Captures, Regex};
use tracing::warn;

use super::DesensitizeStrategy;
use crate::{cache::PatternCache, rule::DesensitizeRule};

/// Shared state of the key-driven strategies.
#[derive(Clone, Debug)]
pub(crate) struct KeyNameScanner {
    cache: Arc<PatternCache>,
}

impl KeyNameScanner {
    pub(crate) fn new(cache: Arc<PatternCache>) -> Self {
        Self { cache }
    }

    /// Textual pre-check: does any configured key appear followed by a
    /// delimiter? Does not compile a pattern.
    pub(crate) fn matches(text: &str, rule: &DesensitizeRule) -> bool {
        if text.is_empty() {
            return false;
        }
        let haystack = text.to_ascii_lowercase();
        rule.key_names
            .iter()
            .filter(|key| !key.is_empty())
            .any(|key| {
                let key = key.to_ascii_lowercase();
                haystack
                    .match_indices(key.as_str())
                    .any(|(pos, _)| followed_by_delimiter(&haystack[pos + key.len()..]))
            })
    }

    /// Replaces the value after every configured key with
    /// `strategy.generate_mask(value_len, rule)`.
    pub(crate) fn desensitize<'a, S>(
        &self,
        strategy: &S,
        text: &'a str,
        rule: &DesensitizeRule,
    ) -> Cow<'a, str>
    where
        S: DesensitizeStrategy + ?Sized,
    {
        if !Self::matches(text, rule) {
            return Cow::Borrowed(text);
        }
        let Some(regex) = self.compile(rule) else {
            return Cow::Borrowed(text);
        };

        regex.replace_all(text, |caps: &Captures<'_>| {
            let value_len = caps[2].chars().count();
            format!("{}{}", &caps[1], strategy.generate_mask(value_len, rule))
        })
    }

    fn compile(&self, rule: &DesensitizeRule) -> Option<Regex> {
        let pattern = assignment_pattern(&rule.key_names)?;
        match self.cache.compile(&pattern) {
            Ok(regex) => Some(regex),
            Err(err) => {
                warn!(
                    sensitive_type = %rule.sensitive_type,
                    error = %err,
                    "unusable key name pattern, leaving text unchanged"
                );
                None
            }
        }
    }
}

/// Builds one pattern covering every key name.
///
/// Group 1 is the key with its delimiter and opening quote, group 2 the value.
fn assignment_pattern(key_names: &[String]) -> Option<String> {
    let alternatives: Vec<String> = key_names
        .iter()
        .filter(|key| !key.is_empty())
        .map(|key| regex::escape(key))
        .collect();
    if alternatives.is_empty() {
        return None;
    }
    Some(format!(
        r#"(?i)(["']?(?:{})["']?\s*(?:=>|=|:)\s*["']?)([^,}}\s"']+)"#,
        alternatives.join("|")
    ))
}

fn followed_by_delimiter(rest: &str) -> bool {
    let rest = rest.strip_prefix(['"', '\'']).unwrap_or(rest).trim_start();
    rest.starts_with('=') || rest.starts_with(':')
}

#[cfg(test)]
mod tests {
    use super::{KeyNameScanner, assignment_pattern, followed_by_delimiter};
    use crate::{DesensitizeRule, SensitiveType};

    fn rule(keys: &[&str]) -> DesensitizeRule {
        DesensitizeRule::new(SensitiveType::Password).with_key_names(keys.iter().copied())
    }

    #[test]
    fn recognizes_delimiters() {
        assert!(followed_by_delimiter("=x"));
        assert!(followed_by_delimiter(" : x"));
        assert!(followed_by_delimiter("\" : \"x\""));
        assert!(followed_by_delimiter("=> x"));
        assert!(!followed_by_delimiter(" is x"));
        assert!(!followed_by_delimiter(""));
    }

    #[test]
    fn pre_check_is_case_insensitive() {
        assert!(KeyNameScanner::matches("PassWord=abc", &rule(&["password"])));
        assert!(KeyNameScanner::matches(r#"{"Token": "x"}"#, &rule(&["token"])));
        assert!(!KeyNameScanner::matches("my password is abc", &rule(&["password"])));
    }

    #[test]
    fn pre_check_needs_key_names() {
        assert!(!KeyNameScanner::matches("password=abc", &rule(&[])));
        assert!(!KeyNameScanner::matches("password=abc", &rule(&[""])));
    }

    #[test]
    fn pattern_escapes_key_names() {
        let pattern = assignment_pattern(&["api.key".to_owned()]).unwrap();
        assert!(pattern.contains(r"api\.key"));
        assert!(assignment_pattern(&[]).is_none());
    }
}
