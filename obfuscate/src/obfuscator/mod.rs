//! The obfuscator contract and its building blocks.
//!
//! This module provides:
//!
//! - **The trait** ([`Obfuscator`]): a pure string transformation plus the
//!   bookkeeping needed to chain rules by length.
//!
//! - **Primitives** (`primitives`): total-replacement rules such as [`all`],
//!   [`none`], [`with_fixed_length`] and [`with_fixed_value`].
//!
//! - **Portions** (`portion`): [`Portion`] keeps configurable head and tail
//!   spans and masks the rest.
//!
//! - **Combinators** (`chain`, `split`): [`PrefixChain`] switches rules at a
//!   given length, [`SplitObfuscator`] switches rules around a located substring.
//!
//! # Example
//!
//! ```rust
//! use obfuscate::{Obfuscator, all, at_first, at_last, none, portion};
//!
//! let local_part = portion()
//!     .keep_at_start(1)
//!     .keep_at_end(1)
//!     .fixed_total_length(8)
//!     .build()?;
//! let domain = at_last(".").split_to(all(), none());
//! let email = at_first("@").split_to(local_part, domain);
//! assert_eq!(email.obfuscate("test@example.org"), "t******t@*******.org");
//! # Ok::<(), obfuscate::ConfigError>(())
//! ```

use std::{fmt, sync::Arc};

use crate::error::ConfigError;

pub mod chain;
pub mod portion;
pub mod primitives;
pub mod split;

pub use chain::{ObfuscatorPrefix, PrefixChain};
pub use portion::{Portion, PortionBuilder, PortionConfig, portion};
pub use primitives::{
    AllMask, FixedValue, FnObfuscator, MASK, Passthrough, all, all_with_mask, from_fn, none,
    with_fixed_length, with_fixed_length_with_mask, with_fixed_value,
};
pub use split::{SplitObfuscator, SplitPoint, at_first, at_last, at_nth};

// =============================================================================
// Obfuscator trait
// =============================================================================

/// A rule that makes strings partly or completely unreadable.
///
/// Implementations are immutable once built, so a single value can be shared
/// between threads and applied to any number of inputs.
pub trait Obfuscator: fmt::Debug + Send + Sync {
    /// Obfuscates `text`.
    ///
    /// This method is total (it does not return errors).
    #[must_use]
    fn obfuscate(&self, text: &str) -> String;

    /// The smallest prefix length accepted by [`Obfuscator::until_length`].
    ///
    /// Fresh rules accept any length of at least 1. A [`PrefixChain`] raises
    /// this to one more than its own prefix length so that lengths within a
    /// chain strictly increase.
    fn min_prefix_length(&self) -> usize {
        1
    }

    /// Starts a chain: this obfuscator handles the first `prefix_length`
    /// characters, and the obfuscator passed to [`ObfuscatorPrefix::then`]
    /// handles everything after.
    ///
    /// Fails if `prefix_length` is smaller than [`Obfuscator::min_prefix_length`].
    fn until_length(self, prefix_length: usize) -> Result<ObfuscatorPrefix<Self>, ConfigError>
    where
        Self: Sized,
    {
        ObfuscatorPrefix::new(self, prefix_length)
    }
}

impl<T: Obfuscator + ?Sized> Obfuscator for &T {
    fn obfuscate(&self, text: &str) -> String {
        (**self).obfuscate(text)
    }

    fn min_prefix_length(&self) -> usize {
        (**self).min_prefix_length()
    }
}

impl<T: Obfuscator + ?Sized> Obfuscator for Box<T> {
    fn obfuscate(&self, text: &str) -> String {
        (**self).obfuscate(text)
    }

    fn min_prefix_length(&self) -> usize {
        (**self).min_prefix_length()
    }
}

impl<T: Obfuscator + ?Sized> Obfuscator for Arc<T> {
    fn obfuscate(&self, text: &str) -> String {
        (**self).obfuscate(text)
    }

    fn min_prefix_length(&self) -> usize {
        (**self).min_prefix_length()
    }
}

/// A shareable, type-erased obfuscator.
pub type SharedObfuscator = Arc<dyn Obfuscator>;

// =============================================================================
// Character helpers
// =============================================================================

/// Returns the byte offset of the `char_count`-th character of `text`, or
/// `text.len()` if `text` has fewer characters.
pub(crate) fn byte_offset(text: &str, char_count: usize) -> usize {
    text.char_indices()
        .nth(char_count)
        .map_or(text.len(), |(offset, _)| offset)
}
