//! Masking strategies, one per [`SensitiveType`].
//!
//! This module provides:
//!
//! - **The trait** ([`DesensitizeStrategy`]): the contract every strategy
//!   implements.
//!
//! - **Regex strategies** (`email`, `phone`, `id_card`, `bank_card`,
//!   `address`): find values by shape, then keep a type-specific prefix and
//!   suffix visible.
//!
//! - **Key-driven strategies** (`password`, `key_value`): find values by the
//!   field name in front of them (`password=...`, `"token": "..."`) and mask
//!   them whatever their shape.
//!
//! - **Shared helpers** (`template`): the mask builder, the keep-prefix/suffix
//!   rule and the match-and-splice loop.
//!
//! Strategies are stateless apart from a shared [`PatternCache`] handle, so a
//! single instance can be used from any number of threads.
//!
//! # Example
//!
//! ```rust
//! use desensitize::{DesensitizeRule, DesensitizeStrategy, EmailStrategy, SensitiveType};
//!
//! let strategy = EmailStrategy::default();
//! let rule = DesensitizeRule::new(SensitiveType::Email).with_keep(1, 0);
//! assert_eq!(strategy.desensitize("test@example.com", &rule), "t***@example.com");
//! ```
//!
//! [`PatternCache`]: crate::PatternCache

use std::borrow::Cow;

use crate::rule::{DesensitizeRule, SensitiveType};

mod address;
mod bank_card;
mod email;
mod id_card;
mod key_name;
mod key_value;
mod password;
mod phone;
mod template;

pub use address::AddressStrategy;
pub use bank_card::BankCardStrategy;
pub use email::EmailStrategy;
pub use id_card::IdCardStrategy;
pub use key_value::KeyValueStrategy;
pub use password::PasswordStrategy;
pub use phone::PhoneStrategy;
pub use template::{keep_visible, mask, redact_matches};

/// Contract implemented once per [`SensitiveType`].
///
/// Implementations never fail: a rule of another type, an empty input or an
/// unusable pattern all leave the text unchanged.
pub trait DesensitizeStrategy: Send + Sync {
    /// The type this strategy serves.
    fn supported_type(&self) -> SensitiveType;

    /// Returns `true` if `text` contains something this strategy would mask
    /// under `rule`.
    fn matches(&self, text: &str, rule: &DesensitizeRule) -> bool;

    /// Masks every occurrence in `text`.
    ///
    /// Returns the input borrowed when nothing is masked.
    fn desensitize<'a>(&self, text: &'a str, rule: &DesensitizeRule) -> Cow<'a, str>;

    /// Builds the filler for a masked span of `length` characters.
    fn generate_mask(&self, length: usize, rule: &DesensitizeRule) -> String {
        mask(rule.mask_char, length)
    }
}
