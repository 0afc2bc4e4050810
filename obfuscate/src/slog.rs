//! Adapters for emitting obfuscated values through `slog`.
//!
//! [`SlogObfuscated`] implements `slog::Value` by emitting the obfuscated
//! string. The plain text is never passed to the serializer.

use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::obfuscator::Obfuscator;

/// `slog::Value` wrapper that emits the obfuscated form of its text.
pub struct SlogObfuscated<'a, O: ?Sized> {
    obfuscator: &'a O,
    text: &'a str,
}

impl<O: Obfuscator + ?Sized> SlogValue for SlogObfuscated<'_, O> {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_str(key, &self.obfuscator.obfuscate(self.text))
    }
}

/// Extension trait for logging obfuscated text with `slog`.
pub trait SlogObfuscatedExt: Obfuscator {
    /// Wraps `text` so that it is obfuscated when logged.
    fn slog_obfuscated<'a>(&'a self, text: &'a str) -> SlogObfuscated<'a, Self> {
        SlogObfuscated {
            obfuscator: self,
            text,
        }
    }
}

impl<O: Obfuscator + ?Sized> SlogObfuscatedExt for O {}
