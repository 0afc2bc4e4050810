//! Length-based chaining of obfuscators.
//!
//! `first.until_length(4)?.then(second)` obfuscates the first 4 characters
//! with `first` and the remainder with `second`. Because the result is an
//! obfuscator itself, chains extend to any depth:
//!
//! ```rust
//! use obfuscate::{Obfuscator, all, none};
//!
//! let obfuscator = none()
//!     .until_length(4)?
//!     .then(all())
//!     .until_length(12)?
//!     .then(none());
//! assert_eq!(obfuscator.obfuscate("0123456789ABCDEF"), "0123********CDEF");
//! # Ok::<(), obfuscate::ConfigError>(())
//! ```

use super::{Obfuscator, byte_offset};
use crate::error::ConfigError;

// =============================================================================
// ObfuscatorPrefix
// =============================================================================

/// An obfuscator bound to a prefix length, waiting for the obfuscator that
/// handles the rest of the input.
///
/// Created by [`Obfuscator::until_length`].
#[derive(Clone, Debug)]
#[must_use = "an obfuscator prefix does nothing until `then` is called"]
pub struct ObfuscatorPrefix<F> {
    first: F,
    prefix_length: usize,
}

impl<F: Obfuscator> ObfuscatorPrefix<F> {
    pub(crate) fn new(first: F, prefix_length: usize) -> Result<Self, ConfigError> {
        let minimum = first.min_prefix_length();
        if prefix_length < minimum {
            return Err(ConfigError::PrefixLengthTooSmall {
                prefix_length,
                minimum,
            });
        }
        Ok(Self {
            first,
            prefix_length,
        })
    }

    /// Returns the number of characters handled by the prefix obfuscator.
    #[must_use]
    pub fn prefix_length(&self) -> usize {
        self.prefix_length
    }

    /// Completes the chain: `second` obfuscates everything after the prefix.
    pub fn then<S: Obfuscator>(self, second: S) -> PrefixChain<F, S> {
        PrefixChain {
            first: self.first,
            prefix_length: self.prefix_length,
            second,
        }
    }
}

// =============================================================================
// PrefixChain
// =============================================================================

/// Obfuscates a fixed-length prefix with one obfuscator and the remainder
/// with another.
///
/// Inputs no longer than the prefix are handled entirely by the first
/// obfuscator; the second is never called with an empty remainder.
#[derive(Clone, Debug)]
pub struct PrefixChain<F, S> {
    first: F,
    prefix_length: usize,
    second: S,
}

impl<F, S> PrefixChain<F, S> {
    /// Returns the obfuscator for the prefix.
    pub fn first(&self) -> &F {
        &self.first
    }

    /// Returns the obfuscator for everything after the prefix.
    pub fn second(&self) -> &S {
        &self.second
    }

    /// Returns the prefix length, in characters.
    pub fn prefix_length(&self) -> usize {
        self.prefix_length
    }
}

impl<F: Obfuscator, S: Obfuscator> Obfuscator for PrefixChain<F, S> {
    fn obfuscate(&self, text: &str) -> String {
        let split = byte_offset(text, self.prefix_length);
        if split == text.len() {
            return self.first.obfuscate(text);
        }
        let (prefix, rest) = text.split_at(split);
        let mut result = self.first.obfuscate(prefix);
        result.push_str(&self.second.obfuscate(rest));
        result
    }

    fn min_prefix_length(&self) -> usize {
        self.prefix_length.saturating_add(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obfuscator::{all, none, portion, with_fixed_length, with_fixed_value};

    fn assert_cases(obfuscator: &impl Obfuscator, cases: &[(&str, &str)]) {
        for (input, expected) in cases {
            assert_eq!(&obfuscator.obfuscate(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn none_then_all_then_none() {
        let obfuscator = none()
            .until_length(4)
            .unwrap()
            .then(all())
            .until_length(12)
            .unwrap()
            .then(none());
        assert_cases(
            &obfuscator,
            &[
                ("", ""),
                ("0", "0"),
                ("0123", "0123"),
                ("01234", "0123*"),
                ("0123456789AB", "0123********"),
                ("0123456789ABC", "0123********C"),
                ("0123456789ABCDEF", "0123********CDEF"),
            ],
        );
    }

    #[test]
    fn none_then_fixed_length() {
        let obfuscator = none()
            .until_length(4)
            .unwrap()
            .then(with_fixed_length(3).unwrap());
        assert_cases(
            &obfuscator,
            &[
                ("012", "012"),
                ("0123", "0123"),
                ("01234", "0123***"),
                ("0123456789ABCDEF", "0123***"),
            ],
        );
    }

    #[test]
    fn fixed_length_then_fixed_value() {
        let obfuscator = with_fixed_length(3)
            .unwrap()
            .until_length(4)
            .unwrap()
            .then(with_fixed_value("xxx"));
        assert_cases(
            &obfuscator,
            &[
                ("", "***"),
                ("0", "***"),
                ("0123", "***"),
                ("01234", "***xxx"),
                ("0123456789ABCDEF", "***xxx"),
            ],
        );
    }

    #[test]
    fn none_then_portion() {
        let obfuscator = none().until_length(4).unwrap().then(
            portion()
                .keep_at_end(4)
                .at_least_from_start(8)
                .build()
                .unwrap(),
        );
        assert_eq!(obfuscator.obfuscate("12345678901234"), "1234********34");
    }

    #[test]
    fn prefix_length_counts_characters() {
        let obfuscator = none().until_length(2).unwrap().then(all());
        assert_eq!(obfuscator.obfuscate("äöüß"), "äö**");
    }

    #[test]
    fn prefix_lengths_must_increase() {
        let obfuscator = none().until_length(1).unwrap().then(all());
        assert_eq!(obfuscator.min_prefix_length(), 2);
        assert_eq!(
            obfuscator.clone().until_length(1).unwrap_err(),
            ConfigError::PrefixLengthTooSmall {
                prefix_length: 1,
                minimum: 2,
            }
        );

        let obfuscator = obfuscator.until_length(2).unwrap().then(none());
        assert_eq!(
            obfuscator.clone().until_length(2).unwrap_err().to_string(),
            "prefix_length: 2 < 3"
        );
        assert_eq!(obfuscator.until_length(3).unwrap().prefix_length(), 3);
    }

    #[test]
    fn nested_second_resets_minimum() {
        // A chain passed to `then` only constrains its own links.
        let tail = all().until_length(10).unwrap().then(none());
        let obfuscator = none().until_length(2).unwrap().then(tail);
        assert_eq!(obfuscator.min_prefix_length(), 3);
        assert_eq!(obfuscator.obfuscate("ab0123456789xyz"), "ab**********xyz");
    }
}
