//! Masking of sensitive substrings in free-form text.
//!
//! This crate separates:
//! - **Rules**: what kind of sensitive data to look for (`SensitiveType`) and
//!   how much of each match stays visible (`DesensitizeRule`).
//! - **Strategies**: how a given kind of data is found and masked
//!   (`DesensitizeStrategy`, one implementation per `SensitiveType`).
//!
//! The [`Desensitizer`] ties both together with a shared [`PatternCache`] and
//! a hot-swappable [`DesensitizeConfig`], and is meant to sit in front of a
//! log sink.
//!
//! What this crate does:
//! - detects emails, phone numbers, id cards, bank cards, addresses and
//!   key/value secrets in text and masks them
//! - caches compiled regular expressions across calls
//! - provides adapters for `tracing` and (behind a feature flag) `slog`
//!
//! What it does not do:
//! - discover rules or recognize entities in natural language
//! - guarantee that masked output can be reversed
//!
//! Masking never fails the caller: an invalid pattern degrades to leaving the
//! text unchanged and emits a `tracing` warning.
//!
//! # Example
//!
//! ```rust
//! use desensitize::{DesensitizeRule, Desensitizer, SensitiveType};
//!
//! let engine = Desensitizer::default();
//! let rule = DesensitizeRule::new(SensitiveType::Phone).with_keep(3, 4);
//! assert_eq!(engine.desensitize("call 13812345678", &rule), "call 138****5678");
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub mod cache;
pub mod config;
mod engine;
mod error;
pub mod rule;
#[cfg(feature = "slog")]
pub mod slog;
pub mod strategy;
pub mod tracing;

pub use cache::{DEFAULT_MAX_CACHED_PATTERNS, PatternCache};
pub use config::{DesensitizeConfig, PerformanceConfig};
pub use engine::Desensitizer;
pub use error::{Error, Result};
pub use rule::{DesensitizeRule, MASK_CHAR, SensitiveType};
pub use strategy::{
    AddressStrategy, BankCardStrategy, DesensitizeStrategy, EmailStrategy, IdCardStrategy,
    KeyValueStrategy, PasswordStrategy, PhoneStrategy,
};
