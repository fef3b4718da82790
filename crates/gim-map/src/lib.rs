#![deny(unsafe_code)]

//! Import column mapping core.
//!
//! Owns, per import column, the target graph attribute, its key flag, a
//! default value, and a translator selection with a per-translator
//! configuration cache. Hosts supply the synchronous collaborators in
//! [`host`]; the core guarantees re-validation requests at the defined
//! mutation points and a deterministic display order.

pub mod binding;
pub mod destination;
pub mod error;
pub mod host;
pub mod list;
pub mod order;
pub mod registry;
pub mod repository;
pub mod translators;

pub use binding::{AttributeBinding, BindingId, ColumnRef, TranslatorSelection};
pub use destination::{GraphDestination, ImportDestination};
pub use error::{MapError, TranslateError};
pub use host::{
    ConfigEditor, DefaultValuePrompt, DefaultValueResponse, DialogResult, RemovalObserver,
    Validator,
};
pub use list::{BindingList, BindingSummary, SelectionOutcome};
pub use order::display_order;
pub use registry::{Translator, TranslatorRegistry};
pub use repository::{StoredTemplate, TemplateMetadata, TemplateRepository};
