//! Import template documents.
//!
//! A template is the persisted form of a configured import: per attribute,
//! the key flag, default value, translator selection and its parameters, and
//! the name of the source column it was bound to. Templates are part of a
//! larger import job description; this crate only defines the mapping slice.

use serde::{Deserialize, Serialize};

use crate::attribute::AttributeType;
use crate::config::TranslatorConfig;

/// A translator selection as stored in a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslatorSpec {
    /// Translator identifier, resolved against the registry on replay.
    pub id: String,
    /// Confirmed parameters; empty for parameterless translators.
    #[serde(default)]
    pub params: TranslatorConfig,
}

/// One attribute binding as stored in a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingSpec {
    /// Attribute name in the destination graph.
    pub attribute: String,
    /// Semantic type of the attribute.
    pub attribute_type: AttributeType,
    /// True if the attribute participates in record-identity semantics.
    #[serde(default)]
    pub is_key: bool,
    /// Value used when the source column yields none.
    #[serde(default)]
    pub default_value: Option<String>,
    /// Active translator, if any.
    #[serde(default)]
    pub translator: Option<TranslatorSpec>,
    /// Name of the source column this attribute was bound to.
    #[serde(default)]
    pub column: Option<String>,
}

/// Complete mapping template for one import destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportTemplate {
    /// Template name, also the repository storage key.
    pub name: String,
    /// Label of the destination the template was built against.
    pub destination: String,
    /// Bindings in display order.
    pub bindings: Vec<BindingSpec>,
}
