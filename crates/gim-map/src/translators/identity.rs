use gim_model::{AttrValue, AttributeType, TranslatorConfig};

use crate::error::TranslateError;
use crate::registry::Translator;

/// Passes the raw column text through unchanged.
///
/// Applies to every attribute type and takes no parameters, so selecting it
/// always commits immediately.
pub struct Identity;

impl Translator for Identity {
    fn id(&self) -> &str {
        "identity"
    }

    fn label(&self) -> &str {
        "Identity"
    }

    fn applies_to(&self, _attribute_type: AttributeType) -> bool {
        true
    }

    fn default_config(&self) -> Option<TranslatorConfig> {
        None
    }

    fn translate(
        &self,
        raw: &str,
        _config: &TranslatorConfig,
    ) -> Result<AttrValue, TranslateError> {
        Ok(AttrValue::Text(raw.to_string()))
    }
}
