#![deny(unsafe_code)]

pub mod attribute;
pub mod config;
pub mod error;
pub mod template;
pub mod value;

pub use attribute::{Attribute, AttributeOrigin, AttributeType, SchemaAttribute};
pub use config::TranslatorConfig;
pub use error::{ModelError, Result};
pub use template::{BindingSpec, ImportTemplate, TranslatorSpec};
pub use value::{AttrValue, ParamValue};
