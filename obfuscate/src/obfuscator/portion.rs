//! Portion obfuscation: keep the ends, mask the middle.
//!
//! A [`Portion`] decides per input how many leading and trailing characters
//! stay readable, then replaces everything in between with a mask. Five knobs
//! interact:
//!
//! - `keep_at_start` / `keep_at_end`: characters to leave readable at either end.
//! - `at_least_from_start` / `at_least_from_end`: characters that must be
//!   obfuscated at either end. These overrule the keep knobs.
//! - `fixed_total_length`: pads or truncates the masked region so every output
//!   has the same length. When the input is shorter than the combined keep
//!   spans, characters may appear in both the readable head and tail.
//!
//! All lengths count Unicode scalar values.

use std::borrow::Cow;

use super::{MASK, Obfuscator, byte_offset, primitives::check_mask_repeat};
use crate::error::ConfigError;

// =============================================================================
// PortionConfig
// =============================================================================

/// Plain configuration for a [`Portion`].
///
/// Every field has a default, so a partially specified configuration (for
/// example one deserialized from a settings file) is valid as long as it
/// passes [`Portion::try_from`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct PortionConfig {
    /// Number of leading characters to leave readable.
    pub keep_at_start: usize,
    /// Number of trailing characters to leave readable.
    pub keep_at_end: usize,
    /// Minimum number of leading characters to obfuscate.
    pub at_least_from_start: usize,
    /// Minimum number of trailing characters to obfuscate.
    pub at_least_from_end: usize,
    /// Exact number of characters in every output, if set.
    pub fixed_total_length: Option<usize>,
    /// String used for each masked character.
    pub mask: Cow<'static, str>,
}

impl Default for PortionConfig {
    fn default() -> Self {
        Self {
            keep_at_start: 0,
            keep_at_end: 0,
            at_least_from_start: 0,
            at_least_from_end: 0,
            fixed_total_length: None,
            mask: Cow::Borrowed(MASK),
        }
    }
}

impl PortionConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.mask.is_empty() {
            return Err(ConfigError::EmptyMask);
        }
        match self.fixed_total_length {
            Some(fixed_total_length)
                if fixed_total_length < self.keep_at_start.saturating_add(self.keep_at_end) =>
            {
                Err(ConfigError::FixedTotalLengthTooSmall {
                    fixed_total_length,
                    keep_at_start: self.keep_at_start,
                    keep_at_end: self.keep_at_end,
                })
            }
            Some(fixed_total_length) => check_mask_repeat(fixed_total_length, self.mask.len()),
            None => Ok(()),
        }
    }
}

// =============================================================================
// PortionBuilder
// =============================================================================

/// Builder for [`Portion`] obfuscators.
///
/// Setters never fail; cross-field checks happen once in [`PortionBuilder::build`].
#[derive(Clone, Debug, Default)]
#[must_use]
pub struct PortionBuilder {
    config: PortionConfig,
}

impl PortionBuilder {
    /// Sets the number of leading characters to leave readable. Defaults to 0.
    pub fn keep_at_start(mut self, value: usize) -> Self {
        self.config.keep_at_start = value;
        self
    }

    /// Sets the number of trailing characters to leave readable. Defaults to 0.
    pub fn keep_at_end(mut self, value: usize) -> Self {
        self.config.keep_at_end = value;
        self
    }

    /// Sets the minimum number of leading characters to obfuscate.
    ///
    /// Any non-zero value overrules `keep_at_start`, and limits `keep_at_end`
    /// for short inputs. Defaults to 0.
    pub fn at_least_from_start(mut self, value: usize) -> Self {
        self.config.at_least_from_start = value;
        self
    }

    /// Sets the minimum number of trailing characters to obfuscate.
    ///
    /// Any non-zero value overrules `keep_at_end`, and limits `keep_at_start`
    /// for short inputs. Defaults to 0.
    pub fn at_least_from_end(mut self, value: usize) -> Self {
        self.config.at_least_from_end = value;
        self
    }

    /// Sets the exact length of every obfuscated output.
    ///
    /// Must be at least `keep_at_start + keep_at_end`, and the masked output
    /// must fit in a `String`. If the input is shorter than that sum, parts of
    /// the input are repeated in the output.
    pub fn fixed_total_length(mut self, value: usize) -> Self {
        self.config.fixed_total_length = Some(value);
        self
    }

    /// Sets the string used for masking. Defaults to `*`. Must not be empty.
    pub fn mask<M>(mut self, mask: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        self.config.mask = mask.into();
        self
    }

    /// Validates the configuration and builds the obfuscator.
    pub fn build(self) -> Result<Portion, ConfigError> {
        Portion::try_from(self.config)
    }
}

/// Returns a builder for obfuscators that obfuscate a portion of their input.
///
/// ```rust
/// use obfuscate::{Obfuscator, portion};
///
/// let obfuscator = portion().keep_at_start(4).keep_at_end(4).build()?;
/// assert_eq!(obfuscator.obfuscate("hello world"), "hell***orld");
/// # Ok::<(), obfuscate::ConfigError>(())
/// ```
pub fn portion() -> PortionBuilder {
    PortionBuilder::default()
}

// =============================================================================
// Portion
// =============================================================================

/// Obfuscates everything except configurable spans at the start and end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Portion {
    config: PortionConfig,
}

impl TryFrom<PortionConfig> for Portion {
    type Error = ConfigError;

    fn try_from(config: PortionConfig) -> Result<Self, Self::Error> {
        config.validate()?;
        Ok(Self { config })
    }
}

impl Portion {
    /// Returns the validated configuration.
    #[must_use]
    pub fn config(&self) -> &PortionConfig {
        &self.config
    }

    /// Readable characters at the start, for an input of `length` characters.
    fn from_start(&self, length: usize) -> usize {
        let config = &self.config;
        if config.at_least_from_start > 0 {
            return 0;
        }
        let keep_at_most = length.saturating_sub(config.at_least_from_end);
        config.keep_at_start.min(keep_at_most)
    }

    /// Readable characters at the end, for an input of `length` characters.
    ///
    /// Without a fixed total length the tail never reuses characters already
    /// kept at the start.
    fn from_end(&self, length: usize, from_start: usize) -> usize {
        let config = &self.config;
        if config.at_least_from_end > 0 {
            return 0;
        }
        let available = if config.fixed_total_length.is_some() {
            length
        } else {
            length - from_start
        };
        let keep_at_most = length.saturating_sub(config.at_least_from_start);
        config.keep_at_end.min(available).min(keep_at_most)
    }
}

impl Obfuscator for Portion {
    fn obfuscate(&self, text: &str) -> String {
        let length = text.chars().count();
        let from_start = self.from_start(length);
        let from_end = self.from_end(length, from_start);
        // 0 <= from_start, from_end <= length

        let output_length = self.config.fixed_total_length.unwrap_or(length);
        let masked = output_length
            .saturating_sub(from_start)
            .saturating_sub(from_end);

        let head = &text[..byte_offset(text, from_start)];
        let tail = &text[byte_offset(text, length - from_end)..];

        let capacity = masked
            .saturating_mul(self.config.mask.len())
            .saturating_add(head.len() + tail.len());
        let mut result = String::with_capacity(capacity);
        result.push_str(head);
        for _ in 0..masked {
            result.push_str(&self.config.mask);
        }
        result.push_str(tail);
        result
    }
}
