//! Obfuscation of HTTP headers and HTTP query / form parameters.
//!
//! - **Headers** (`headers`): [`HeaderObfuscator`] matches header names
//!   case-insensitively.
//! - **Parameters** (`parameters`): [`ParameterObfuscator`] obfuscates
//!   `name=value&...` strings and reports malformed escapes according to an
//!   [`ErrorStrategy`].

pub mod headers;
pub mod parameters;

pub use headers::HeaderObfuscator;
pub use parameters::{ErrorStrategy, ParameterObfuscator, ParameterOptions};
