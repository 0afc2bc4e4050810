//! Composable string obfuscators for logging sensitive values.
//!
//! An [`Obfuscator`] turns a string into a partly or completely unreadable
//! version of itself. Obfuscators are immutable once built and can be
//! combined:
//!
//! - **Primitives**: [`all`], [`none`], [`with_fixed_length`] and
//!   [`with_fixed_value`] replace or keep the whole input.
//! - **Portions**: [`portion`] keeps characters at the start and end and masks
//!   the rest.
//! - **Prefix chains**: [`Obfuscator::until_length`] hands the first `n`
//!   characters to one rule and the rest to another.
//! - **Split points**: [`at_first`], [`at_last`] and [`at_nth`] locate a
//!   substring and obfuscate the text before and after it separately.
//!
//! Adapters behind feature flags apply obfuscators to map values (`maps`),
//! HTTP headers and parameters (`http`), and log records (`tracing`, `slog`).
//!
//! What this crate does not do:
//! - detect sensitive data on its own
//! - perform I/O or configure logging
//!
//! ```rust
//! use obfuscate::{Obfuscator, all, none};
//!
//! let obfuscator = none().until_length(4)?.then(all());
//! assert_eq!(obfuscator.obfuscate("Hello World"), "Hell*******");
//! # Ok::<(), obfuscate::ConfigError>(())
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
mod display;
mod error;
#[cfg(feature = "http")]
pub mod http;
#[cfg(feature = "maps")]
pub mod maps;
pub mod obfuscator;
#[cfg(feature = "slog")]
pub mod slog;
#[cfg(feature = "tracing")]
pub mod tracing;

pub use display::{Obfuscated, ObfuscatedExt};
#[cfg(feature = "http")]
pub use error::ParameterError;
pub use error::ConfigError;
#[cfg(feature = "http")]
pub use http::{ErrorStrategy, HeaderObfuscator, ParameterObfuscator, ParameterOptions};
#[cfg(feature = "maps")]
pub use maps::MapObfuscator;
// Re-exports from obfuscator module
pub use obfuscator::{
    AllMask, FixedValue, FnObfuscator, MASK, Obfuscator, ObfuscatorPrefix, Passthrough, Portion,
    PortionBuilder, PortionConfig, PrefixChain, SharedObfuscator, SplitObfuscator, SplitPoint, all,
    all_with_mask, at_first, at_last, at_nth, from_fn, none, portion, with_fixed_length,
    with_fixed_length_with_mask, with_fixed_value,
};
#[cfg(feature = "slog")]
pub use slog::{SlogObfuscated, SlogObfuscatedExt};
#[cfg(feature = "tracing")]
pub use tracing::TracingObfuscatedExt;
