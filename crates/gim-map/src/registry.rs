//! Translator registry: the ordered set of available translators.

use gim_model::{AttrValue, AttributeType, TranslatorConfig};

use crate::error::TranslateError;
use crate::translators::{
    DatetimeFormat, DegreesMinutesSeconds, FindReplace, Identity, Lowercase, Uppercase,
};

/// A pluggable conversion strategy from raw column text to a typed
/// attribute value, optionally parameterized.
pub trait Translator {
    /// Stable identifier, used in templates and menus.
    fn id(&self) -> &str;

    /// Human-readable label.
    fn label(&self) -> &str;

    /// Whether this translator can target attributes of the given type.
    fn applies_to(&self, attribute_type: AttributeType) -> bool;

    /// A fresh configuration with this translator's parameters at their
    /// defaults, or `None` if the translator takes no parameters.
    fn default_config(&self) -> Option<TranslatorConfig>;

    /// Convert one raw value.
    fn translate(
        &self,
        raw: &str,
        config: &TranslatorConfig,
    ) -> Result<AttrValue, TranslateError>;
}

/// Ordered collection of translators.
///
/// Registration order is the enumeration order everywhere (menus, CLI
/// listings), so it must be deterministic.
pub struct TranslatorRegistry {
    translators: Vec<Box<dyn Translator>>,
}

impl TranslatorRegistry {
    pub fn new() -> Self {
        Self {
            translators: Vec::new(),
        }
    }

    /// The standard translator set. `Identity` registers first and is the
    /// default offer for every attribute type.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(Identity));
        registry.register(Box::new(Uppercase));
        registry.register(Box::new(Lowercase));
        registry.register(Box::new(FindReplace));
        registry.register(Box::new(DatetimeFormat));
        registry.register(Box::new(DegreesMinutesSeconds));
        registry
    }

    pub fn register(&mut self, translator: Box<dyn Translator>) {
        self.translators.push(translator);
    }

    pub fn len(&self) -> usize {
        self.translators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translators.is_empty()
    }

    /// All translators in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Translator> {
        self.translators.iter().map(Box::as_ref)
    }

    pub fn get(&self, id: &str) -> Option<&dyn Translator> {
        self.translators
            .iter()
            .find(|t| t.id() == id)
            .map(Box::as_ref)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Translators applicable to the given attribute type, in registration
    /// order. Stable across calls so menus and tests are reproducible.
    pub fn list_applicable(&self, attribute_type: AttributeType) -> Vec<&dyn Translator> {
        self.translators
            .iter()
            .filter(|t| t.applies_to(attribute_type))
            .map(Box::as_ref)
            .collect()
    }

    /// A fresh configuration for the translator, or `None` if it is unknown
    /// or takes no parameters.
    pub fn create_config(&self, id: &str) -> Option<TranslatorConfig> {
        self.get(id).and_then(Translator::default_config)
    }
}

impl Default for TranslatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
