//! Error types for mapping operations.

use thiserror::Error;

use gim_model::{AttributeType, ModelError};

use crate::binding::BindingId;

/// Contract violations raised by binding operations.
///
/// These indicate a host driving the model incorrectly (offering a
/// translator the registry would not have offered, removing a schema
/// attribute); they are not user-facing runtime failures.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("no binding with id {0}")]
    UnknownBinding(BindingId),
    #[error("unknown translator: {0}")]
    UnknownTranslator(String),
    #[error("translator '{translator}' does not apply to {attribute_type} attributes")]
    NotApplicable {
        translator: String,
        attribute_type: AttributeType,
    },
    #[error("attribute '{0}' exists in the destination schema and cannot be removed")]
    SchemaAttributeNotRemovable(String),
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Failures converting raw column text to a typed value.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("cannot translate {value:?}: {reason}")]
    InvalidValue { value: String, reason: String },
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),
}

impl TranslateError {
    pub fn invalid(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            value: value.into(),
            reason: reason.into(),
        }
    }
}
