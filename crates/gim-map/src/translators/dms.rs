use gim_model::{AttrValue, AttributeType, TranslatorConfig};

use crate::error::TranslateError;
use crate::registry::Translator;

const SEPARATOR_PARAM: &str = "separator";
const DEFAULT_SEPARATOR: &str = ":";

/// Converts degrees/minutes/seconds coordinate text to decimal degrees.
///
/// Accepts one to three numeric parts split on the `separator` parameter
/// (`40:26:46.302` with the default separator). A leading sign applies to
/// the whole coordinate.
pub struct DegreesMinutesSeconds;

impl Translator for DegreesMinutesSeconds {
    fn id(&self) -> &str {
        "degrees-minutes-seconds"
    }

    fn label(&self) -> &str {
        "Degrees Minutes Seconds"
    }

    fn applies_to(&self, attribute_type: AttributeType) -> bool {
        attribute_type == AttributeType::Float
    }

    fn default_config(&self) -> Option<TranslatorConfig> {
        Some(TranslatorConfig::new().with(SEPARATOR_PARAM, DEFAULT_SEPARATOR))
    }

    fn translate(
        &self,
        raw: &str,
        config: &TranslatorConfig,
    ) -> Result<AttrValue, TranslateError> {
        let separator = config.text(SEPARATOR_PARAM).unwrap_or(DEFAULT_SEPARATOR);
        if separator.is_empty() {
            return Err(TranslateError::MissingParameter(SEPARATOR_PARAM));
        }

        let trimmed = raw.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let parts: Vec<&str> = unsigned.split(separator).map(str::trim).collect();
        if parts.is_empty() || parts.len() > 3 || parts.iter().any(|p| p.is_empty()) {
            return Err(TranslateError::invalid(
                raw,
                format!("expected degrees{separator}minutes{separator}seconds"),
            ));
        }

        let mut magnitude = 0.0_f64;
        let scales = [1.0, 60.0, 3600.0];
        for (part, scale) in parts.iter().zip(scales) {
            let value: f64 = part
                .parse()
                .map_err(|_| TranslateError::invalid(raw, format!("not a number: {part:?}")))?;
            if value < 0.0 {
                return Err(TranslateError::invalid(raw, "sign must lead the coordinate"));
            }
            magnitude += value / scale;
        }

        Ok(AttrValue::Float(if negative {
            -magnitude
        } else {
            magnitude
        }))
    }
}
