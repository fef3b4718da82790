use gim_model::{AttrValue, AttributeType, TranslatorConfig};

use crate::error::TranslateError;
use crate::registry::Translator;

/// Folds text values to upper case.
pub struct Uppercase;

impl Translator for Uppercase {
    fn id(&self) -> &str {
        "uppercase"
    }

    fn label(&self) -> &str {
        "Uppercase"
    }

    fn applies_to(&self, attribute_type: AttributeType) -> bool {
        attribute_type == AttributeType::Text
    }

    fn default_config(&self) -> Option<TranslatorConfig> {
        None
    }

    fn translate(
        &self,
        raw: &str,
        _config: &TranslatorConfig,
    ) -> Result<AttrValue, TranslateError> {
        Ok(AttrValue::Text(raw.to_uppercase()))
    }
}

/// Folds text values to lower case.
pub struct Lowercase;

impl Translator for Lowercase {
    fn id(&self) -> &str {
        "lowercase"
    }

    fn label(&self) -> &str {
        "Lowercase"
    }

    fn applies_to(&self, attribute_type: AttributeType) -> bool {
        attribute_type == AttributeType::Text
    }

    fn default_config(&self) -> Option<TranslatorConfig> {
        None
    }

    fn translate(
        &self,
        raw: &str,
        _config: &TranslatorConfig,
    ) -> Result<AttrValue, TranslateError> {
        Ok(AttrValue::Text(raw.to_lowercase()))
    }
}
