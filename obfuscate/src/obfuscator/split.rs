//! Splitting obfuscation around a located substring.
//!
//! A [`SplitPoint`] finds a position in the input, for example the first `@`
//! of an email address. [`SplitPoint::split_to`] then obfuscates the part
//! before that position with one obfuscator and the part after it with
//! another, leaving the located substring itself readable.
//!
//! Split points do not chain like [`until_length`](crate::Obfuscator::until_length),
//! but they nest:
//!
//! ```rust
//! use obfuscate::{Obfuscator, all, at_first, at_last, none, portion};
//!
//! let local_part = portion()
//!     .keep_at_start(1)
//!     .keep_at_end(1)
//!     .fixed_total_length(8)
//!     .build()?;
//! let obfuscator = at_first("@").split_to(local_part, at_last(".").split_to(all(), none()));
//! assert_eq!(obfuscator.obfuscate("test@example.org"), "t******t@*******.org");
//! # Ok::<(), obfuscate::ConfigError>(())
//! ```
//!
//! Positions are byte offsets, as returned by [`str::find`].

use std::{borrow::Cow, fmt, sync::Arc};

use super::Obfuscator;

type LocateFn = dyn Fn(&str) -> Option<usize> + Send + Sync;

#[derive(Clone)]
enum Locate {
    First(Cow<'static, str>),
    Last(Cow<'static, str>),
    Nth {
        separator: Cow<'static, str>,
        occurrence: usize,
    },
    Custom(Arc<LocateFn>),
}

impl fmt::Debug for Locate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First(separator) => f.debug_tuple("First").field(separator).finish(),
            Self::Last(separator) => f.debug_tuple("Last").field(separator).finish(),
            Self::Nth {
                separator,
                occurrence,
            } => f
                .debug_struct("Nth")
                .field("separator", separator)
                .field("occurrence", occurrence)
                .finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl Locate {
    fn locate(&self, text: &str) -> Option<usize> {
        match self {
            Self::First(separator) => text.find(&**separator),
            Self::Last(separator) => text.rfind(&**separator),
            Self::Nth {
                separator,
                occurrence,
            } => nth_index(text, separator, *occurrence),
            Self::Custom(locate) => locate(text),
        }
    }
}

/// Finds the zero-based `occurrence`-th match of `separator` in `text`.
///
/// After each match the search resumes one character past the start of that
/// match, so overlapping occurrences are counted.
fn nth_index(text: &str, separator: &str, occurrence: usize) -> Option<usize> {
    let mut start = 0;
    let mut remaining = occurrence;
    loop {
        let index = start + text[start..].find(separator)?;
        if remaining == 0 {
            return Some(index);
        }
        remaining -= 1;
        start = index + text[index..].chars().next()?.len_utf8();
    }
}

// =============================================================================
// SplitPoint
// =============================================================================

/// A position in a string at which obfuscation switches from one obfuscator
/// to another.
#[derive(Clone, Debug)]
pub struct SplitPoint {
    locate: Locate,
    match_length: usize,
}

impl SplitPoint {
    /// Creates a split point from a custom locate function.
    ///
    /// `locate` returns the byte offset where the split starts, or `None` if
    /// the input should not be split. The `match_length` bytes starting at
    /// that offset are copied to the output unchanged; a length of 0 splits
    /// at a pure position.
    ///
    /// A located span that falls outside the input or not on character
    /// boundaries is treated as not found.
    ///
    /// ```rust
    /// use obfuscate::{Obfuscator, SplitPoint, all, none};
    ///
    /// // Keep everything from the first digit onwards.
    /// let split = SplitPoint::new(|text| text.find(|c: char| c.is_ascii_digit()), 0);
    /// let obfuscator = split.split_to(all(), none());
    /// assert_eq!(obfuscator.obfuscate("order-1234"), "******1234");
    /// ```
    pub fn new<F>(locate: F, match_length: usize) -> Self
    where
        F: Fn(&str) -> Option<usize> + Send + Sync + 'static,
    {
        Self {
            locate: Locate::Custom(Arc::new(locate)),
            match_length,
        }
    }

    /// Returns the number of bytes kept readable at the split.
    #[must_use]
    pub fn match_length(&self) -> usize {
        self.match_length
    }

    /// Creates an obfuscator that obfuscates the part before this split point
    /// with `before` and the part after it with `after`.
    ///
    /// If the split point is not found, `before` obfuscates the whole input.
    pub fn split_to<B, A>(self, before: B, after: A) -> SplitObfuscator<B, A>
    where
        B: Obfuscator,
        A: Obfuscator,
    {
        SplitObfuscator {
            split_point: self,
            before,
            after,
        }
    }

    /// Returns the byte range of the located span, if any.
    fn span(&self, text: &str) -> Option<(usize, usize)> {
        let start = self.locate.locate(text)?;
        let end = start.checked_add(self.match_length)?;
        (end <= text.len() && text.is_char_boundary(start) && text.is_char_boundary(end))
            .then_some((start, end))
    }
}

/// Creates a split point at the first occurrence of `separator`.
///
/// The separator itself is not obfuscated.
pub fn at_first<S>(separator: S) -> SplitPoint
where
    S: Into<Cow<'static, str>>,
{
    let separator = separator.into();
    SplitPoint {
        match_length: separator.len(),
        locate: Locate::First(separator),
    }
}

/// Creates a split point at the last occurrence of `separator`.
///
/// The separator itself is not obfuscated.
pub fn at_last<S>(separator: S) -> SplitPoint
where
    S: Into<Cow<'static, str>>,
{
    let separator = separator.into();
    SplitPoint {
        match_length: separator.len(),
        locate: Locate::Last(separator),
    }
}

/// Creates a split point at the zero-based `occurrence`-th occurrence of
/// `separator`.
///
/// The separator itself is not obfuscated.
///
/// ```rust
/// use obfuscate::{Obfuscator, at_nth, none, with_fixed_value};
///
/// let obfuscator = at_nth(".", 1).split_to(with_fixed_value("xxx"), none());
/// assert_eq!(obfuscator.obfuscate("alpha.bravo.charlie"), "xxx.charlie");
/// ```
pub fn at_nth<S>(separator: S, occurrence: usize) -> SplitPoint
where
    S: Into<Cow<'static, str>>,
{
    let separator = separator.into();
    SplitPoint {
        match_length: separator.len(),
        locate: Locate::Nth {
            separator,
            occurrence,
        },
    }
}

// =============================================================================
// SplitObfuscator
// =============================================================================

/// Obfuscates the parts of a string before and after a [`SplitPoint`] with
/// different obfuscators.
#[derive(Clone, Debug)]
pub struct SplitObfuscator<B, A> {
    split_point: SplitPoint,
    before: B,
    after: A,
}

impl<B, A> SplitObfuscator<B, A> {
    /// Returns the split point.
    pub fn split_point(&self) -> &SplitPoint {
        &self.split_point
    }

    /// Returns the obfuscator for the part before the split point.
    pub fn before(&self) -> &B {
        &self.before
    }

    /// Returns the obfuscator for the part after the split point.
    pub fn after(&self) -> &A {
        &self.after
    }
}

impl<B: Obfuscator, A: Obfuscator> Obfuscator for SplitObfuscator<B, A> {
    fn obfuscate(&self, text: &str) -> String {
        let Some((start, end)) = self.split_point.span(text) else {
            return self.before.obfuscate(text);
        };
        let mut result = self.before.obfuscate(&text[..start]);
        result.push_str(&text[start..end]);
        result.push_str(&self.after.obfuscate(&text[end..]));
        result
    }
}
