//! Adapter for emitting masked text through `tracing`.
//!
//! # Example
//!
//! ```rust
//! use desensitize::{Desensitizer, tracing::TracingMaskedExt};
//!
//! let engine = Desensitizer::default();
//! let line = "login password=hunter2 from 13812345678";
//! tracing::info!(line = line.tracing_masked(&engine));
//! ```

use tracing::field::{DisplayValue, display};

use crate::{engine::Desensitizer, rule::DesensitizeRule};

/// Extension trait for logging text after masking it.
pub trait TracingMaskedExt {
    /// Applies every enabled rule of `engine` and wraps the result as a
    /// `tracing` display value.
    fn tracing_masked(&self, engine: &Desensitizer) -> DisplayValue<String>;

    /// Applies only `rule` and wraps the result as a `tracing` display value.
    fn tracing_masked_with(
        &self,
        engine: &Desensitizer,
        rule: &DesensitizeRule,
    ) -> DisplayValue<String>;
}

impl<T> TracingMaskedExt for T
where
    T: AsRef<str> + ?Sized,
{
    fn tracing_masked(&self, engine: &Desensitizer) -> DisplayValue<String> {
        display(engine.desensitize_all(self.as_ref()).into_owned())
    }

    fn tracing_masked_with(
        &self,
        engine: &Desensitizer,
        rule: &DesensitizeRule,
    ) -> DisplayValue<String> {
        display(engine.desensitize(self.as_ref(), rule).into_owned())
    }
}
