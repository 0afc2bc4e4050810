//! HTTP header value obfuscation.

use std::{
    collections::HashMap,
    hash::{BuildHasher, Hash},
};

use crate::{maps::MapObfuscator, obfuscator::Obfuscator};

/// Obfuscates HTTP header values by header name.
///
/// Header names are case-insensitive: obfuscators are registered and looked up
/// by their lower-cased name, while obfuscated maps keep the caller's keys.
///
/// ```rust
/// use obfuscate::{HeaderObfuscator, with_fixed_length};
///
/// let obfuscator = HeaderObfuscator::new([("Authorization", with_fixed_length(3)?)]);
/// assert_eq!(obfuscator.obfuscate_header_value("authorization", "Bearer someToken"), "***");
/// assert_eq!(obfuscator.obfuscate_header_value("Content-Type", "application/json"), "application/json");
/// # Ok::<(), obfuscate::ConfigError>(())
/// ```
#[derive(Clone, Debug)]
pub struct HeaderObfuscator {
    obfuscators: MapObfuscator<String>,
}

impl HeaderObfuscator {
    /// Creates a header obfuscator from `(header name, obfuscator)` pairs.
    pub fn new<I, N, O>(obfuscators: I) -> Self
    where
        I: IntoIterator<Item = (N, O)>,
        N: AsRef<str>,
        O: Obfuscator + 'static,
    {
        Self {
            obfuscators: MapObfuscator::new(
                obfuscators
                    .into_iter()
                    .map(|(name, obfuscator)| (name.as_ref().to_ascii_lowercase(), obfuscator)),
            ),
        }
    }

    fn obfuscator(&self, header_name: &str) -> Option<&dyn Obfuscator> {
        self.obfuscators
            .obfuscator(header_name.to_ascii_lowercase().as_str())
            .map(|obfuscator| &**obfuscator)
    }

    /// Obfuscates the value of a single header.
    pub fn obfuscate_header_value(&self, header_name: &str, header_value: &str) -> String {
        match self.obfuscator(header_name) {
            Some(obfuscator) => obfuscator.obfuscate(header_value),
            None => header_value.to_owned(),
        }
    }

    /// Obfuscates all values of a single, possibly repeated, header.
    pub fn obfuscate_header_values<V>(&self, header_name: &str, header_values: &[V]) -> Vec<String>
    where
        V: AsRef<str>,
    {
        match self.obfuscator(header_name) {
            Some(obfuscator) => header_values
                .iter()
                .map(|value| obfuscator.obfuscate(value.as_ref()))
                .collect(),
            None => header_values
                .iter()
                .map(|value| value.as_ref().to_owned())
                .collect(),
        }
    }

    /// Obfuscates a map from header names to header values.
    pub fn obfuscate_header_map<K, S>(&self, headers: &HashMap<K, String, S>) -> HashMap<K, String, S>
    where
        K: AsRef<str> + Eq + Hash + Clone,
        S: BuildHasher + Default,
    {
        headers
            .iter()
            .map(|(name, value)| {
                (
                    name.clone(),
                    self.obfuscate_header_value(name.as_ref(), value),
                )
            })
            .collect()
    }

    /// Obfuscates a map from header names to all values of each header.
    pub fn obfuscate_header_multi_map<K, S>(
        &self,
        headers: &HashMap<K, Vec<String>, S>,
    ) -> HashMap<K, Vec<String>, S>
    where
        K: AsRef<str> + Eq + Hash + Clone,
        S: BuildHasher + Default,
    {
        headers
            .iter()
            .map(|(name, values)| {
                (
                    name.clone(),
                    self.obfuscate_header_values(name.as_ref(), values),
                )
            })
            .collect()
    }
}
