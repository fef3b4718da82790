use gim_model::{AttrValue, AttributeType, TranslatorConfig};

use crate::error::TranslateError;
use crate::registry::Translator;

/// Literal substring substitution on text values.
///
/// Parameters: `find` (required at translate time), `replace` (defaults to
/// the empty string, i.e. deletion).
pub struct FindReplace;

impl Translator for FindReplace {
    fn id(&self) -> &str {
        "find-replace"
    }

    fn label(&self) -> &str {
        "Find & Replace"
    }

    fn applies_to(&self, attribute_type: AttributeType) -> bool {
        attribute_type == AttributeType::Text
    }

    fn default_config(&self) -> Option<TranslatorConfig> {
        Some(
            TranslatorConfig::new()
                .with("find", "")
                .with("replace", ""),
        )
    }

    fn translate(
        &self,
        raw: &str,
        config: &TranslatorConfig,
    ) -> Result<AttrValue, TranslateError> {
        let find = config
            .text("find")
            .ok_or(TranslateError::MissingParameter("find"))?;
        if find.is_empty() {
            return Ok(AttrValue::Text(raw.to_string()));
        }
        let replace = config.text("replace").unwrap_or("");
        Ok(AttrValue::Text(raw.replace(find, replace)))
    }
}
