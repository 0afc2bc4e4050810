//! Lazy obfuscated formatting.
//!
//! [`Obfuscated`] pairs an obfuscator with a piece of text and obfuscates it
//! only when formatted, so it can be handed to `format!` or to a logging macro
//! without allocating up front.

use std::fmt;

use crate::obfuscator::Obfuscator;

// =============================================================================
// Obfuscated - Display wrapper
// =============================================================================

/// Display wrapper that formats the obfuscated form of its text.
///
/// `Debug` formats the same output, so the plain text never leaks through
/// `{:?}` either.
pub struct Obfuscated<'a, O: ?Sized> {
    obfuscator: &'a O,
    text: &'a str,
}

impl<O: ?Sized> Clone for Obfuscated<'_, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O: ?Sized> Copy for Obfuscated<'_, O> {}

impl<'a, O: Obfuscator + ?Sized> Obfuscated<'a, O> {
    /// Wraps `text` so it is obfuscated by `obfuscator` when formatted.
    pub fn new(obfuscator: &'a O, text: &'a str) -> Self {
        Self { obfuscator, text }
    }
}

impl<O: Obfuscator + ?Sized> fmt::Display for Obfuscated<'_, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.obfuscator.obfuscate(self.text))
    }
}

impl<O: Obfuscator + ?Sized> fmt::Debug for Obfuscated<'_, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// =============================================================================
// ObfuscatedExt - Extension trait
// =============================================================================

/// Extension methods for formatting text through any [`Obfuscator`].
pub trait ObfuscatedExt: Obfuscator {
    /// Returns a wrapper that formats the obfuscated form of `text`.
    fn obfuscated<'a>(&'a self, text: &'a str) -> Obfuscated<'a, Self> {
        Obfuscated::new(self, text)
    }
}

impl<O: Obfuscator + ?Sized> ObfuscatedExt for O {}
