use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Semantic type of a destination graph attribute.
///
/// Translators declare which of these they apply to, so the set is closed
/// rather than an open string space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttributeType {
    Boolean,
    Integer,
    Float,
    Text,
    Color,
    DateTime,
}

impl AttributeType {
    /// Canonical name as shown to users and stored in templates.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeType::Boolean => "boolean",
            AttributeType::Integer => "integer",
            AttributeType::Float => "float",
            AttributeType::Text => "text",
            AttributeType::Color => "color",
            AttributeType::DateTime => "datetime",
        }
    }

    /// All semantic types, in a fixed display order.
    pub fn all() -> &'static [AttributeType] {
        &[
            AttributeType::Boolean,
            AttributeType::Integer,
            AttributeType::Float,
            AttributeType::Text,
            AttributeType::Color,
            AttributeType::DateTime,
        ]
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AttributeType {
    type Err = ModelError;

    /// Parse a semantic type name (case-insensitive, with common aliases).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "BOOLEAN" | "BOOL" => Ok(AttributeType::Boolean),
            "INTEGER" | "INT" | "LONG" => Ok(AttributeType::Integer),
            "FLOAT" | "REAL" | "DOUBLE" => Ok(AttributeType::Float),
            "TEXT" | "STRING" => Ok(AttributeType::Text),
            "COLOR" | "COLOUR" => Ok(AttributeType::Color),
            "DATETIME" | "DATE TIME" | "DATE" => Ok(AttributeType::DateTime),
            _ => Err(ModelError::UnknownAttributeType(s.to_string())),
        }
    }
}

/// Whether an attribute pre-exists in the destination schema or was added
/// during import configuration.
///
/// Placeholder attributes are the only ones the user may remove again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttributeOrigin {
    Schema,
    Placeholder,
}

/// A destination graph attribute an import column can be mapped onto.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    attr_type: AttributeType,
    description: Option<String>,
}

impl Attribute {
    /// Create an attribute. The name is trimmed; empty names are rejected.
    pub fn new(name: impl Into<String>, attr_type: AttributeType) -> Result<Self, ModelError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidAttributeName(name));
        }
        Ok(Self {
            name: trimmed.to_string(),
            attr_type,
            description: None,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attr_type(&self) -> AttributeType {
        self.attr_type
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.attr_type)
    }
}

/// One entry of a destination's schema listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaAttribute {
    pub attribute: Attribute,
    pub is_key: bool,
}

impl SchemaAttribute {
    pub fn new(attribute: Attribute, is_key: bool) -> Self {
        Self { attribute, is_key }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_name_is_trimmed() {
        let attr = Attribute::new("  Label ", AttributeType::Text).unwrap();
        assert_eq!(attr.name(), "Label");
    }

    #[test]
    fn empty_attribute_name_rejected() {
        assert!(Attribute::new("   ", AttributeType::Text).is_err());
    }

    #[test]
    fn attribute_type_parses_aliases() {
        assert_eq!(
            "String".parse::<AttributeType>().unwrap(),
            AttributeType::Text
        );
        assert_eq!(
            "date-time".parse::<AttributeType>().unwrap(),
            AttributeType::DateTime
        );
        assert!("vertex".parse::<AttributeType>().is_err());
    }
}
