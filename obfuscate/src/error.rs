//! Configuration errors.
//!
//! Obfuscators only fail while they are being built. Once built, applying an
//! obfuscator is total: [`Obfuscator::obfuscate`](crate::Obfuscator::obfuscate)
//! has no error channel.

use thiserror::Error;

/// An invalid obfuscator configuration, reported when the rule is built.
///
/// These describe mistakes in rule setup rather than problems with the data
/// being obfuscated. Callers that treat them as fatal can simply `expect` the
/// result of the builder.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The mask string is empty.
    #[error("mask must not be empty")]
    EmptyMask,

    /// A fixed total length cannot fit the characters kept at both ends.
    #[error(
        "fixed_total_length ({fixed_total_length}) < keep_at_start ({keep_at_start}) + keep_at_end ({keep_at_end})"
    )]
    FixedTotalLengthTooSmall {
        fixed_total_length: usize,
        keep_at_start: usize,
        keep_at_end: usize,
    },

    /// A chain prefix length is not larger than the previous one in the chain.
    #[error("prefix_length: {prefix_length} < {minimum}")]
    PrefixLengthTooSmall { prefix_length: usize, minimum: usize },

    /// Repeating the mask the requested number of times exceeds the maximum
    /// size of a `String` (`isize::MAX` bytes).
    #[error("fixed_length ({fixed_length}) * mask length ({mask_length}) exceeds isize::MAX bytes")]
    FixedLengthOverflow {
        fixed_length: usize,
        mask_length: usize,
    },
}

/// A malformed percent-escape in an HTTP parameter string.
///
/// Obfuscation stops at the first malformed escape. The output produced up to
/// that point is kept in the error.
#[cfg(feature = "http")]
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("invalid URL escape {escape:?}")]
pub struct ParameterError {
    escape: String,
    partial_output: String,
}

#[cfg(feature = "http")]
impl ParameterError {
    pub(crate) fn new(escape: String, partial_output: String) -> Self {
        Self {
            escape,
            partial_output,
        }
    }

    /// Returns the malformed escape sequence, for example `%A`.
    #[must_use]
    pub fn escape(&self) -> &str {
        &self.escape
    }

    /// Returns the obfuscated output produced before the malformed escape.
    #[must_use]
    pub fn partial_output(&self) -> &str {
        &self.partial_output
    }

    /// Consumes the error, returning the obfuscated output produced before
    /// the malformed escape.
    #[must_use]
    pub fn into_partial_output(self) -> String {
        self.partial_output
    }
}
