//! Translator configuration parameters.
//!
//! A configuration is an opaque, string-keyed parameter bag. Bindings cache
//! one configuration per translator; the cached copy is cloned on every read
//! so an in-flight edit can never alias the committed state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::ParamValue;

/// Parameters for one translator, keyed by parameter name.
///
/// Insertion order is irrelevant; the backing map keeps keys sorted so the
/// serialized form is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslatorConfig {
    params: BTreeMap<String, ParamValue>,
}

impl TranslatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Insert or replace a parameter.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.params.insert(key.into(), value.into());
    }

    /// Builder-style variant of [`Self::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }

    /// The parameter as text, if present and textual.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.params.get(key) {
            Some(ParamValue::Text(v)) => Some(v),
            _ => None,
        }
    }

    pub fn integer(&self, key: &str) -> Option<i64> {
        match self.params.get(key) {
            Some(ParamValue::Int(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn float(&self, key: &str) -> Option<f64> {
        match self.params.get(key) {
            Some(ParamValue::Float(v)) => Some(*v),
            Some(ParamValue::Int(v)) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn boolean(&self, key: &str) -> Option<bool> {
        match self.params.get(key) {
            Some(ParamValue::Bool(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, ParamValue)> for TranslatorConfig {
    fn from_iter<I: IntoIterator<Item = (String, ParamValue)>>(iter: I) -> Self {
        Self {
            params: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_accessors() {
        let config = TranslatorConfig::new()
            .with("separator", ",")
            .with("offset", 4i64)
            .with("strict", true);
        assert_eq!(config.text("separator"), Some(","));
        assert_eq!(config.integer("offset"), Some(4));
        assert_eq!(config.boolean("strict"), Some(true));
        assert_eq!(config.float("offset"), Some(4.0));
        assert_eq!(config.text("missing"), None);
    }

    #[test]
    fn empty_config_reports_empty() {
        assert!(TranslatorConfig::new().is_empty());
        assert!(!TranslatorConfig::new().with("a", 1i64).is_empty());
    }
}
