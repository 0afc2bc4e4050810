//! Adapters for emitting obfuscated values through `tracing`.
//!
//! # Example
//!
//! ```rust
//! use obfuscate::{all, tracing::TracingObfuscatedExt};
//!
//! let password = all();
//! tracing::info!(password = %password.tracing_obfuscated("admin1234"), "user logged in");
//! ```

use tracing::field::{DisplayValue, display};

use crate::obfuscator::Obfuscator;

/// Extension trait for logging obfuscated text as `tracing` display values.
pub trait TracingObfuscatedExt: Obfuscator {
    /// Obfuscates `text` and wraps the result as a `tracing` display value.
    fn tracing_obfuscated(&self, text: &str) -> DisplayValue<String> {
        display(self.obfuscate(text))
    }
}

impl<O: Obfuscator + ?Sized> TracingObfuscatedExt for O {}
