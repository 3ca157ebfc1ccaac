//! Adapter for emitting masked text through `slog`.
//!
//! This module provides a `slog::Value` that masks its text when the record
//! is serialized, so the raw value never reaches a drain.
//!
//! It does not configure `slog` or choose which rules apply; that is the
//! [`Desensitizer`]'s configuration.
//!
//! ## Example
//! ```ignore
//! use desensitize::slog::SlogMaskedExt;
//!
//! info!(logger, "login"; "request" => body.slog_masked(&engine));
//! ```

use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{engine::Desensitizer, rule::DesensitizeRule};

/// Text that is masked when serialized by `slog`.
#[derive(Clone, Copy)]
pub struct MaskedValue<'a> {
    engine: &'a Desensitizer,
    rule: Option<&'a DesensitizeRule>,
    text: &'a str,
}

impl<'a> MaskedValue<'a> {
    /// Masks `text` with every enabled rule of `engine`.
    pub fn new(engine: &'a Desensitizer, text: &'a str) -> Self {
        Self {
            engine,
            rule: None,
            text,
        }
    }

    /// Masks `text` with `rule` only.
    pub fn with_rule(engine: &'a Desensitizer, rule: &'a DesensitizeRule, text: &'a str) -> Self {
        Self {
            engine,
            rule: Some(rule),
            text,
        }
    }
}

impl SlogValue for MaskedValue<'_> {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let masked = match self.rule {
            Some(rule) => self.engine.desensitize(self.text, rule),
            None => self.engine.desensitize_all(self.text),
        };
        serializer.emit_str(key, &masked)
    }
}

/// Extension trait for ergonomic slog logging of masked text.
pub trait SlogMaskedExt {
    /// Wraps `self` so it is masked with every enabled rule when logged.
    fn slog_masked<'a>(&'a self, engine: &'a Desensitizer) -> MaskedValue<'a>;

    /// Wraps `self` so it is masked with `rule` when logged.
    fn slog_masked_with<'a>(
        &'a self,
        engine: &'a Desensitizer,
        rule: &'a DesensitizeRule,
    ) -> MaskedValue<'a>;
}

impl<T> SlogMaskedExt for T
where
    T: AsRef<str> + ?Sized,
{
    fn slog_masked<'a>(&'a self, engine: &'a Desensitizer) -> MaskedValue<'a> {
        MaskedValue::new(engine, self.as_ref())
    }

    fn slog_masked_with<'a>(
        &'a self,
        engine: &'a Desensitizer,
        rule: &'a DesensitizeRule,
    ) -> MaskedValue<'a> {
        MaskedValue::with_rule(engine, rule, self.as_ref())
    }
}
