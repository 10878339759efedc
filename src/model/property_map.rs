use log::trace;
use std::collections::HashMap;

use super::unfold::unfold;

/// The properties of a single VEVENT, keyed by upper-cased property name
///
/// Values are kept as raw trimmed strings; nothing is unescaped or interpreted here.
/// When a property appears more than once the last occurrence wins.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PropertyMap {
    properties: HashMap<String, String>,
}

impl PropertyMap {
    /// Parse the body of a VEVENT block
    ///
    /// The block is unfolded first. Every line holding at least one `:` is split on the first one;
    /// lines without a `:` are skipped.
    pub fn parse(block: &str) -> PropertyMap {
        let block = unfold(block);
        let mut properties = HashMap::new();

        for line in block.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim().to_uppercase();
            trace!("parsed property: {}: {:?}", key, value.trim());
            properties.insert(key, value.trim().to_owned());
        }

        PropertyMap { properties }
    }

    /// The raw value of a property, `None` if the event does not carry it
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        PropertyMap {
            properties: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
