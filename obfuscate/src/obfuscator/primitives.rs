//! Primitive obfuscators that replace their whole input.
//!
//! These are the leaves of most composition trees. None of them look at the
//! content of the input; [`AllMask`] only looks at its length.

use std::{borrow::Cow, fmt};

use super::Obfuscator;
use crate::error::ConfigError;

/// Default mask used for obfuscated characters.
pub const MASK: &str = "*";

// =============================================================================
// AllMask
// =============================================================================

/// Replaces every character of the input with a mask.
///
/// The output has as many mask repetitions as the input has characters. With
/// a multi-character mask the output is correspondingly longer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllMask {
    mask: Cow<'static, str>,
}

impl AllMask {
    /// Returns the mask that replaces each character.
    #[must_use]
    pub fn mask(&self) -> &str {
        &self.mask
    }
}

impl Obfuscator for AllMask {
    fn obfuscate(&self, text: &str) -> String {
        self.mask.repeat(text.chars().count())
    }
}

/// Returns an obfuscator that replaces all characters with an asterisk (`*`).
#[must_use]
pub fn all() -> AllMask {
    all_with_mask(MASK)
}

/// Returns an obfuscator that replaces all characters with the given mask.
#[must_use]
pub fn all_with_mask<M>(mask: M) -> AllMask
where
    M: Into<Cow<'static, str>>,
{
    AllMask { mask: mask.into() }
}

// =============================================================================
// Passthrough
// =============================================================================

/// Leaves the input unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Passthrough;

impl Obfuscator for Passthrough {
    fn obfuscate(&self, text: &str) -> String {
        text.to_owned()
    }
}

/// Returns an obfuscator that does not obfuscate anything.
///
/// Useful as a default, or as the "keep this part" side of a combinator.
#[must_use]
pub fn none() -> Passthrough {
    Passthrough
}

// =============================================================================
// FixedValue
// =============================================================================

/// Replaces the input with a constant value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedValue {
    value: Cow<'static, str>,
}

impl FixedValue {
    /// Returns the constant output.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Obfuscator for FixedValue {
    fn obfuscate(&self, _text: &str) -> String {
        self.value.clone().into_owned()
    }
}

/// Returns an obfuscator that always produces `value`, whatever the input.
#[must_use]
pub fn with_fixed_value<V>(value: V) -> FixedValue
where
    V: Into<Cow<'static, str>>,
{
    FixedValue {
        value: value.into(),
    }
}

/// Returns an obfuscator that replaces strings with `fixed_length` asterisks.
pub fn with_fixed_length(fixed_length: usize) -> Result<FixedValue, ConfigError> {
    with_fixed_length_with_mask(fixed_length, MASK)
}

/// Returns an obfuscator that replaces strings with `fixed_length`
/// repetitions of `mask`.
///
/// Fails if the resulting string would be larger than `isize::MAX` bytes.
pub fn with_fixed_length_with_mask(
    fixed_length: usize,
    mask: &str,
) -> Result<FixedValue, ConfigError> {
    check_mask_repeat(fixed_length, mask.len())?;
    Ok(with_fixed_value(mask.repeat(fixed_length)))
}

/// Checks that `count` repetitions of a `mask_length`-byte mask fit in a `String`.
pub(crate) fn check_mask_repeat(count: usize, mask_length: usize) -> Result<(), ConfigError> {
    match count.checked_mul(mask_length) {
        Some(bytes) if isize::try_from(bytes).is_ok() => Ok(()),
        _ => Err(ConfigError::FixedLengthOverflow {
            fixed_length: count,
            mask_length,
        }),
    }
}

// =============================================================================
// FnObfuscator
// =============================================================================

/// Delegates to an arbitrary function.
#[derive(Clone)]
pub struct FnObfuscator<F> {
    obfuscate: F,
}

impl<F> fmt::Debug for FnObfuscator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnObfuscator").finish_non_exhaustive()
    }
}

impl<F> Obfuscator for FnObfuscator<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn obfuscate(&self, text: &str) -> String {
        (self.obfuscate)(text)
    }
}

/// Returns an obfuscator that delegates to `obfuscate`.
///
/// The function should be pure: it may be called concurrently and any number
/// of times.
///
/// ```rust
/// use obfuscate::{Obfuscator, from_fn};
///
/// let upper = from_fn(str::to_uppercase);
/// assert_eq!(upper.obfuscate("Hello World"), "HELLO WORLD");
/// ```
#[must_use]
pub fn from_fn<F>(obfuscate: F) -> FnObfuscator<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    FnObfuscator { obfuscate }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_masks_every_character() {
        let obfuscator = all();
        assert_eq!(obfuscator.obfuscate("foo"), "***");
        assert_eq!(obfuscator.obfuscate("hello world"), "***********");
        assert_eq!(obfuscator.obfuscate(""), "");
    }

    #[test]
    fn all_counts_characters_not_bytes() {
        assert_eq!(all().obfuscate("héllo"), "*****");
        assert_eq!(all_with_mask("xx").obfuscate("日本"), "xxxx");
        assert_eq!(all_with_mask("●").obfuscate("abc"), "●●●");
    }

    #[test]
    fn none_returns_input() {
        let obfuscator = none();
        assert_eq!(obfuscator.obfuscate("foo"), "foo");
        assert_eq!(obfuscator.obfuscate(""), "");
    }

    #[test]
    fn fixed_value_ignores_input() {
        let obfuscator = with_fixed_value("foo");
        assert_eq!(obfuscator.obfuscate("hello world"), "foo");
        assert_eq!(obfuscator.obfuscate(""), "foo");
        assert_eq!(obfuscator.value(), "foo");
    }

    #[test]
    fn fixed_length_is_constant() {
        let obfuscator = with_fixed_length(5).unwrap();
        assert_eq!(obfuscator.obfuscate("foo"), "*****");
        assert_eq!(obfuscator.obfuscate("hello world"), "*****");
        assert_eq!(obfuscator.obfuscate(""), "*****");

        let obfuscator = with_fixed_length(0).unwrap();
        assert_eq!(obfuscator.obfuscate("foo"), "");
    }

    #[test]
    fn fixed_length_with_mask_repeats_mask() {
        let obfuscator = with_fixed_length_with_mask(3, "xy").unwrap();
        assert_eq!(obfuscator.obfuscate("foo"), "xyxyxy");
    }

    #[test]
    fn fixed_length_rejects_overflow() {
        let err = with_fixed_length_with_mask(usize::MAX, "xy").unwrap_err();
        assert_eq!(
            err,
            ConfigError::FixedLengthOverflow {
                fixed_length: usize::MAX,
                mask_length: 2,
            }
        );
    }

    #[test]
    fn fixed_length_rejects_strings_larger_than_isize_max() {
        assert_eq!(
            with_fixed_length(usize::MAX).unwrap_err(),
            ConfigError::FixedLengthOverflow {
                fixed_length: usize::MAX,
                mask_length: 1,
            }
        );
        let half = usize::MAX / 2 + 1;
        assert!(with_fixed_length_with_mask(half, "*").is_err());
        assert!(with_fixed_length_with_mask(half / 2, "xy").is_err());
    }

    #[test]
    fn fn_obfuscator_delegates() {
        let obfuscator = from_fn(|text: &str| text.chars().rev().collect());
        assert_eq!(obfuscator.obfuscate("abc"), "cba");
        assert_eq!(format!("{obfuscator:?}"), "FnObfuscator { .. }");
    }
}
