//! HTTP query and form parameter obfuscation.
//!
//! Parameter strings have the form `name1=value1&name2=value2`. Names and
//! values are URL-unescaped before the obfuscator for a name is looked up
//! and applied. The obfuscated value is written unescaped; the output is
//! meant for logs, not for sending back over the wire.

use std::fmt::{self, Write as _};

use crate::{error::ParameterError, maps::MapObfuscator, obfuscator::Obfuscator};

// =============================================================================
// ErrorStrategy
// =============================================================================

/// What a [`ParameterObfuscator`] does when obfuscating a string through
/// [`Obfuscator::obfuscate`] hits a malformed escape.
///
/// Obfuscation always stops at the first malformed escape; the strategies only
/// differ in how the error is surfaced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorStrategy {
    /// Stop and emit a `tracing` warning with the error.
    #[default]
    Log,
    /// Stop and append `<error: ...>` to the output.
    Include,
    /// Stop without reporting the error.
    Stop,
    /// Emit a `tracing` error event, then panic.
    Panic,
}

impl fmt::Display for ErrorStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Log => "OnErrorLog",
            Self::Include => "OnErrorInclude",
            Self::Stop => "OnErrorStop",
            Self::Panic => "OnErrorPanic",
        })
    }
}

/// Options for a [`ParameterObfuscator`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParameterOptions {
    /// How malformed escapes are reported by [`Obfuscator::obfuscate`].
    pub on_error: ErrorStrategy,
}

impl ParameterOptions {
    /// Uses a specific error strategy.
    #[must_use]
    pub fn with_on_error(mut self, on_error: ErrorStrategy) -> Self {
        self.on_error = on_error;
        self
    }
}

// =============================================================================
// ParameterObfuscator
// =============================================================================

/// Obfuscates HTTP query and form parameter strings, as well as single
/// parameter values.
///
/// Parameter names are case-sensitive: they are registered as given and
/// matched exactly after unescaping, unlike header names.
///
/// ```rust
/// use obfuscate::{ParameterObfuscator, ParameterOptions, with_fixed_length};
///
/// let obfuscator = ParameterObfuscator::new(
///     [("password", with_fixed_length(3)?)],
///     ParameterOptions::default(),
/// );
/// assert_eq!(
///     obfuscator.obfuscate_parameter_string("username=admin&password=admin1234").unwrap(),
///     "username=admin&password=***"
/// );
/// # Ok::<(), obfuscate::ConfigError>(())
/// ```
#[derive(Clone, Debug)]
pub struct ParameterObfuscator {
    obfuscators: MapObfuscator<String>,
    on_error: ErrorStrategy,
}

impl ParameterObfuscator {
    /// Creates a parameter obfuscator from `(parameter name, obfuscator)` pairs.
    pub fn new<I, N, O>(obfuscators: I, options: ParameterOptions) -> Self
    where
        I: IntoIterator<Item = (N, O)>,
        N: Into<String>,
        O: Obfuscator + 'static,
    {
        Self {
            obfuscators: MapObfuscator::new(
                obfuscators
                    .into_iter()
                    .map(|(name, obfuscator)| (name.into(), obfuscator)),
            ),
            on_error: options.on_error,
        }
    }

    /// Returns the configured error strategy.
    #[must_use]
    pub fn on_error(&self) -> ErrorStrategy {
        self.on_error
    }

    /// Obfuscates the value of a single, already unescaped, parameter.
    pub fn obfuscate_parameter(&self, name: &str, value: &str) -> String {
        self.obfuscators.obfuscate_value(name, value)
    }

    /// Obfuscates a full parameter string.
    ///
    /// Unlike [`Obfuscator::obfuscate`], this ignores the error strategy and
    /// returns malformed escapes as errors. The error keeps the output
    /// produced before the malformed escape.
    pub fn obfuscate_parameter_string(&self, text: &str) -> Result<String, ParameterError> {
        let mut output = String::with_capacity(text.len());
        match self.write_parameters(text, &mut output) {
            Ok(()) => Ok(output),
            Err(escape) => Err(ParameterError::new(escape, output)),
        }
    }

    fn write_parameters(&self, text: &str, output: &mut String) -> Result<(), String> {
        for (index, parameter) in text.split('&').enumerate() {
            if index > 0 {
                output.push('&');
            }
            self.write_parameter(parameter, output)?;
        }
        Ok(())
    }

    fn write_parameter(&self, parameter: &str, output: &mut String) -> Result<(), String> {
        let Some(separator) = parameter.find('=') else {
            output.push_str(parameter);
            return Ok(());
        };
        let name = query_unescape(&parameter[..separator])?;
        output.push_str(&parameter[..=separator]);
        let value = query_unescape(&parameter[separator + 1..])?;
        output.push_str(&self.obfuscate_parameter(&name, &value));
        Ok(())
    }
}

impl Obfuscator for ParameterObfuscator {
    /// Obfuscates a full parameter string, handling malformed escapes
    /// according to the configured [`ErrorStrategy`].
    fn obfuscate(&self, text: &str) -> String {
        let mut output = String::with_capacity(text.len());
        let Err(escape) = self.write_parameters(text, &mut output) else {
            return output;
        };
        let error = ParameterError::new(escape, String::new());
        match self.on_error {
            ErrorStrategy::Log => {
                tracing::warn!(%error, "failed to obfuscate parameter string");
            }
            ErrorStrategy::Include => {
                let _ = write!(output, "<error: {error}>");
            }
            ErrorStrategy::Stop => {}
            ErrorStrategy::Panic => {
                tracing::error!(%error, "failed to obfuscate parameter string");
                panic!("failed to obfuscate parameter string: {error}");
            }
        }
        output
    }
}

// =============================================================================
// Unescaping
// =============================================================================

/// Decodes `+` as a space and `%XX` as the byte `0xXX`.
///
/// Returns the malformed escape (at most three bytes, starting at `%`) on
/// failure. Decoded bytes that are not valid UTF-8 are replaced with U+FFFD.
fn query_unescape(text: &str) -> Result<String, String> {
    if !text.contains(['%', '+']) {
        return Ok(text.to_owned());
    }

    let bytes = text.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut index = 0;
    while index < bytes.len() {
        match bytes[index] {
            b'%' => {
                let high = bytes.get(index + 1).copied().and_then(hex_value);
                let low = bytes.get(index + 2).copied().and_then(hex_value);
                let (Some(high), Some(low)) = (high, low) else {
                    let end = (index + 3).min(bytes.len());
                    return Err(String::from_utf8_lossy(&bytes[index..end]).into_owned());
                };
                decoded.push((high << 4) | low);
                index += 3;
            }
            b'+' => {
                decoded.push(b' ');
                index += 1;
            }
            byte => {
                decoded.push(byte);
                index += 1;
            }
        }
    }
    Ok(String::from_utf8_lossy(&decoded).into_owned())
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
