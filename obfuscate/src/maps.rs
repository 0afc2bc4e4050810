//! Obfuscation of map values by key.
//!
//! A [`MapObfuscator`] holds one obfuscator per key. Values stored under a key
//! without an obfuscator are copied unchanged.

use std::{
    borrow::Borrow,
    collections::HashMap,
    hash::{BuildHasher, Hash},
    sync::Arc,
};

use crate::obfuscator::{Obfuscator, SharedObfuscator};

/// Obfuscates map values using per-key obfuscators.
///
/// ```rust
/// use std::collections::HashMap;
///
/// use obfuscate::{MapObfuscator, with_fixed_length};
///
/// let obfuscator = MapObfuscator::new([("password", with_fixed_length(3)?)]);
///
/// let input = HashMap::from([("username", "admin".to_string()), ("password", "admin1234".to_string())]);
/// let output = obfuscator.obfuscate_map(&input);
/// assert_eq!(output["username"], "admin");
/// assert_eq!(output["password"], "***");
/// # Ok::<(), obfuscate::ConfigError>(())
/// ```
#[derive(Clone, Debug)]
pub struct MapObfuscator<K> {
    obfuscators: HashMap<K, SharedObfuscator>,
}

impl<K: Eq + Hash> MapObfuscator<K> {
    /// Creates a map obfuscator from `(key, obfuscator)` pairs.
    ///
    /// If a key appears more than once, the last obfuscator wins.
    pub fn new<I, O>(obfuscators: I) -> Self
    where
        I: IntoIterator<Item = (K, O)>,
        O: Obfuscator + 'static,
    {
        Self {
            obfuscators: obfuscators
                .into_iter()
                .map(|(key, obfuscator)| {
                    let shared: SharedObfuscator = Arc::new(obfuscator);
                    (key, shared)
                })
                .collect(),
        }
    }

    /// Returns the obfuscator registered for `key`, if any.
    pub fn obfuscator<Q>(&self, key: &Q) -> Option<&SharedObfuscator>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.obfuscators.get(key)
    }

    /// Obfuscates a single value stored under `key`.
    pub fn obfuscate_value<Q>(&self, key: &Q, value: &str) -> String
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        match self.obfuscator(key) {
            Some(obfuscator) => obfuscator.obfuscate(value),
            None => value.to_owned(),
        }
    }

    /// Obfuscates all values in `map`, returning a new map with the same keys.
    pub fn obfuscate_map<S>(&self, map: &HashMap<K, String, S>) -> HashMap<K, String, S>
    where
        K: Clone,
        S: BuildHasher + Default,
    {
        map.iter()
            .map(|(key, value)| (key.clone(), self.obfuscate_value(key, value)))
            .collect()
    }

    /// Obfuscates every value of every key in `map`, returning a new map with
    /// the same keys.
    pub fn obfuscate_multi_map<S>(
        &self,
        map: &HashMap<K, Vec<String>, S>,
    ) -> HashMap<K, Vec<String>, S>
    where
        K: Clone,
        S: BuildHasher + Default,
    {
        map.iter()
            .map(|(key, values)| {
                let values = match self.obfuscators.get(key) {
                    Some(obfuscator) => values.iter().map(|v| obfuscator.obfuscate(v)).collect(),
                    None => values.clone(),
                };
                (key.clone(), values)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::MapObfuscator;
    use crate::obfuscator::{Obfuscator, portion, with_fixed_length};

    fn obfuscator() -> MapObfuscator<String> {
        let key1: Box<dyn Obfuscator> = Box::new(with_fixed_length(3).unwrap());
        let key2: Box<dyn Obfuscator> = Box::new(portion().keep_at_end(2).build().unwrap());
        MapObfuscator::new([("key1".to_string(), key1), ("KEY2".to_string(), key2)])
    }

    #[test]
    fn obfuscates_registered_keys_only() {
        let input: HashMap<String, String> = [
            ("key0", "value0"),
            ("key1", "value1"),
            ("key2", "value2"),
            ("KEY0", "VALUE0"),
            ("KEY1", "VALUE1"),
            ("KEY2", "VALUE2"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let output = obfuscator().obfuscate_map(&input);

        assert_eq!(output.len(), 6);
        assert_eq!(output["key0"], "value0");
        assert_eq!(output["key1"], "***");
        assert_eq!(output["key2"], "value2");
        assert_eq!(output["KEY1"], "VALUE1");
        assert_eq!(output["KEY2"], "****E2");
    }

    #[test]
    fn empty_map_stays_empty() {
        let input: HashMap<String, String> = HashMap::new();
        assert!(obfuscator().obfuscate_map(&input).is_empty());
    }

    #[test]
    fn obfuscates_every_value_of_multi_map() {
        let input: HashMap<String, Vec<String>> = [
            ("key0", vec!["value00", "value01"]),
            ("key1", vec!["value10", "value11"]),
            ("KEY2", vec!["VALUE20", "VALUE21"]),
            ("KEY3", vec![]),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.into_iter().map(String::from).collect()))
        .collect();

        let output = obfuscator().obfuscate_multi_map(&input);

        assert_eq!(output["key0"], ["value00", "value01"]);
        assert_eq!(output["key1"], ["***", "***"]);
        assert_eq!(output["KEY2"], ["*****20", "*****21"]);
        assert!(output["KEY3"].is_empty());
    }

    #[test]
    fn looks_up_borrowed_keys() {
        let obfuscator = obfuscator();
        assert_eq!(obfuscator.obfuscate_value("key1", "secret"), "***");
        assert_eq!(obfuscator.obfuscate_value("key2", "secret"), "secret");
        assert!(obfuscator.obfuscator("KEY2").is_some());
    }
}
