use chrono::{NaiveDate, NaiveDateTime};
use gim_model::{AttrValue, AttributeType, TranslatorConfig};

use crate::error::TranslateError;
use crate::registry::Translator;

const FORMAT_PARAM: &str = "format";
const DEFAULT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Reformats source datetimes to ISO 8601 extended format.
///
/// The `format` parameter is a chrono format string describing the source
/// text. Values parsing as a full datetime emit `YYYY-MM-DDTHH:MM:SS`;
/// values parsing as a date only emit `YYYY-MM-DD`.
pub struct DatetimeFormat;

impl Translator for DatetimeFormat {
    fn id(&self) -> &str {
        "datetime-format"
    }

    fn label(&self) -> &str {
        "Datetime Format"
    }

    fn applies_to(&self, attribute_type: AttributeType) -> bool {
        attribute_type == AttributeType::DateTime
    }

    fn default_config(&self) -> Option<TranslatorConfig> {
        Some(TranslatorConfig::new().with(FORMAT_PARAM, DEFAULT_FORMAT))
    }

    fn translate(
        &self,
        raw: &str,
        config: &TranslatorConfig,
    ) -> Result<AttrValue, TranslateError> {
        let format = config.text(FORMAT_PARAM).unwrap_or(DEFAULT_FORMAT);
        let trimmed = raw.trim();
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(AttrValue::Text(
                datetime.format("%Y-%m-%dT%H:%M:%S").to_string(),
            ));
        }
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(AttrValue::Text(date.format("%Y-%m-%d").to_string()));
        }
        Err(TranslateError::invalid(
            raw,
            format!("does not match format {format:?}"),
        ))
    }
}
