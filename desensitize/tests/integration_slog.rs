//! Integration tests for the slog module.
//!
//! These tests verify that:
//! - `MaskedValue` emits the masked text, never the raw value
//! - `slog_masked` applies every enabled rule and `slog_masked_with` only one
//! - configuration reloads are picked up at serialization time

#![cfg(feature = "slog")]

use std::{cell::RefCell, collections::HashMap, fmt::Arguments};

use desensitize::{
    DesensitizeConfig, DesensitizeRule, Desensitizer, SensitiveType,
    slog::{MaskedValue, SlogMaskedExt},
};

// A test serializer that captures serialized key-value pairs
struct CapturingSerializer {
    captured: RefCell<HashMap<String, String>>,
}

impl CapturingSerializer {
    fn new() -> Self {
        Self {
            captured: RefCell::new(HashMap::new()),
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        self.captured.borrow().get(key).cloned()
    }
}

impl slog::Serializer for CapturingSerializer {
    fn emit_arguments(&mut self, key: slog::Key, val: &Arguments<'_>) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), val.to_string());
        Ok(())
    }

    fn emit_str(&mut self, key: slog::Key, val: &str) -> slog::Result {
        self.captured.borrow_mut().insert(key.into(), val.into());
        Ok(())
    }
}

fn serialize_to_capture<V: slog::Value, S: slog::Serializer>(
    value: &V,
    key: &'static str,
    serializer: &mut S,
) {
    static RS: slog::RecordStatic<'static> = slog::record_static!(slog::Level::Info, "");
    let args = format_args!("");
    let record = slog::Record::new(&RS, &args, slog::b!());
    value.serialize(&record, key, serializer).unwrap();
}

mod masked_value {
    use super::*;

    #[test]
    fn emits_text_masked_by_every_rule() {
        let engine = Desensitizer::default();
        let line = "login test@example.com password=hunter2";

        let mut serializer = CapturingSerializer::new();
        serialize_to_capture(&line.slog_masked(&engine), "line", &mut serializer);

        assert_eq!(
            serializer.get("line").as_deref(),
            Some("login t***@example.com password=******")
        );
    }

    #[test]
    fn single_rule_leaves_other_data_alone() {
        let engine = Desensitizer::default();
        let rule = DesensitizeRule::new(SensitiveType::Phone).with_keep(3, 4);
        let line = String::from("test@example.com 13812345678");

        let mut serializer = CapturingSerializer::new();
        serialize_to_capture(&line.slog_masked_with(&engine, &rule), "line", &mut serializer);

        assert_eq!(
            serializer.get("line").as_deref(),
            Some("test@example.com 138****5678")
        );
    }

    #[test]
    fn uses_configuration_active_at_serialization() {
        let engine = Desensitizer::default();
        let value = MaskedValue::new(&engine, "13812345678");
        engine.reload(DesensitizeConfig::default().with_enabled(false));

        let mut serializer = CapturingSerializer::new();
        serialize_to_capture(&value, "phone", &mut serializer);

        assert_eq!(serializer.get("phone").as_deref(), Some("13812345678"));
    }
}
