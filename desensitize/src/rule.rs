//! Rule model: what kind of data to mask and how much of it stays visible.
//!
//! A [`DesensitizeRule`] is plain data. Strategies read it and never mutate
//! it, so the same rule can be shared freely across threads.
//!
//! # Example
//!
//! ```rust
//! use desensitize::{DesensitizeRule, SensitiveType};
//!
//! let rule = DesensitizeRule::new(SensitiveType::BankCard)
//!     .with_keep(6, 4)
//!     .with_mask_char('#');
//! assert_eq!(rule.keep_prefix, 6);
//! assert_eq!(rule.mask_char, '#');
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default character used to mask sensitive characters.
pub const MASK_CHAR: char = '*';

/// The closed set of sensitivity types. Exactly one strategy exists per value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SensitiveType {
    Email,
    Phone,
    IdCard,
    BankCard,
    Address,
    Password,
    KeyValue,
}

impl SensitiveType {
    /// Every sensitivity type, in declaration order.
    pub const ALL: [SensitiveType; 7] = [
        SensitiveType::Email,
        SensitiveType::Phone,
        SensitiveType::IdCard,
        SensitiveType::BankCard,
        SensitiveType::Address,
        SensitiveType::Password,
        SensitiveType::KeyValue,
    ];

    /// Returns `true` for types located by field name rather than by value shape.
    pub fn is_key_driven(self) -> bool {
        matches!(self, SensitiveType::Password | SensitiveType::KeyValue)
    }

    /// Configuration name of the type (`"ID_CARD"`, `"EMAIL"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            SensitiveType::Email => "EMAIL",
            SensitiveType::Phone => "PHONE",
            SensitiveType::IdCard => "ID_CARD",
            SensitiveType::BankCard => "BANK_CARD",
            SensitiveType::Address => "ADDRESS",
            SensitiveType::Password => "PASSWORD",
            SensitiveType::KeyValue => "KEY_VALUE",
        }
    }
}

impl fmt::Display for SensitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Describes one sensitivity type, how to detect it and how to mask it.
///
/// `keep_prefix + keep_suffix` may exceed the length of a match; the match is
/// then left unchanged rather than masked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesensitizeRule {
    /// Which strategy this rule drives.
    #[serde(rename = "type")]
    pub sensitive_type: SensitiveType,
    /// Per-rule switch. Disabled rules are skipped by
    /// [`DesensitizeConfig::enabled_rules`](crate::DesensitizeConfig::enabled_rules).
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    /// Detection pattern override. `None` selects the strategy's built-in pattern.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Number of leading characters of a match to keep visible.
    #[serde(default)]
    pub keep_prefix: usize,
    /// Number of trailing characters of a match to keep visible.
    #[serde(default)]
    pub keep_suffix: usize,
    /// Symbol used to build the mask.
    #[serde(default = "default_mask_char")]
    pub mask_char: char,
    /// Case-insensitive field names for the key-driven types.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_names: Vec<String>,
}

fn enabled_by_default() -> bool {
    true
}

fn default_mask_char() -> char {
    MASK_CHAR
}

impl DesensitizeRule {
    /// Creates a rule for `sensitive_type` that keeps nothing visible.
    #[must_use]
    pub fn new(sensitive_type: SensitiveType) -> Self {
        Self {
            sensitive_type,
            enabled: true,
            pattern: None,
            keep_prefix: 0,
            keep_suffix: 0,
            mask_char: MASK_CHAR,
            key_names: Vec::new(),
        }
    }

    /// The rule shipped in the default configuration for `sensitive_type`.
    #[must_use]
    pub fn default_for(sensitive_type: SensitiveType) -> Self {
        let rule = Self::new(sensitive_type);
        match sensitive_type {
            SensitiveType::Email => rule.with_keep(1, 0),
            SensitiveType::Phone => rule.with_keep(3, 4),
            SensitiveType::IdCard | SensitiveType::BankCard => rule.with_keep(6, 4),
            SensitiveType::Address => rule.with_keep(6, 0),
            SensitiveType::Password => {
                rule.with_key_names(["password", "passwd", "pwd", "secret"])
            }
            SensitiveType::KeyValue => {
                rule.with_key_names(["token", "api_key", "access_key", "secret_key"])
            }
        }
    }

    /// Overrides the detection pattern.
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Sets how many leading and trailing characters stay visible.
    #[must_use]
    pub fn with_keep(mut self, keep_prefix: usize, keep_suffix: usize) -> Self {
        self.keep_prefix = keep_prefix;
        self.keep_suffix = keep_suffix;
        self
    }

    /// Uses a specific masking character.
    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    /// Replaces the configured key names.
    #[must_use]
    pub fn with_key_names<I, S>(mut self, key_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.key_names = key_names.into_iter().map(Into::into).collect();
        self
    }

    /// Turns the rule on or off.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}
