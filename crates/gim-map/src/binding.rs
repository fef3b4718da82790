//! Attribute bindings: one destination attribute per import column.

use std::collections::BTreeMap;
use std::fmt;

use gim_model::{Attribute, AttributeOrigin, TranslatorConfig};

/// Identifier of a binding within its owning [`crate::BindingList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BindingId(pub(crate) u32);

impl fmt::Display for BindingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of an import-file column. A relation only, never ownership:
/// the import file itself lives with the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    pub index: usize,
    pub name: String,
}

impl ColumnRef {
    pub fn new(index: usize, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
        }
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The active translator choice on a binding.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatorSelection {
    pub translator_id: String,
    /// Confirmed parameters; `None` for parameterless translators.
    pub config: Option<TranslatorConfig>,
}

/// One destination attribute mapped (or mappable) to an import column.
///
/// Owns the per-translator configuration cache: switching back to a
/// previously confirmed translator restores its last parameters without
/// re-prompting. Cache entries are written only on commit; cancelling a
/// selection leaves both the cache and the active selection untouched.
#[derive(Debug, Clone)]
pub struct AttributeBinding {
    id: BindingId,
    attribute: Attribute,
    origin: AttributeOrigin,
    is_key: bool,
    default_value: Option<String>,
    selection: Option<TranslatorSelection>,
    config_cache: BTreeMap<String, Option<TranslatorConfig>>,
    column: Option<ColumnRef>,
}

impl AttributeBinding {
    pub(crate) fn new(
        id: BindingId,
        attribute: Attribute,
        origin: AttributeOrigin,
        is_key: bool,
    ) -> Self {
        Self {
            id,
            attribute,
            origin,
            is_key,
            default_value: None,
            selection: None,
            config_cache: BTreeMap::new(),
            column: None,
        }
    }

    pub fn id(&self) -> BindingId {
        self.id
    }

    pub fn attribute(&self) -> &Attribute {
        &self.attribute
    }

    pub fn origin(&self) -> AttributeOrigin {
        self.origin
    }

    /// True for attributes added during import configuration; only these
    /// may be removed again.
    pub fn is_placeholder(&self) -> bool {
        self.origin == AttributeOrigin::Placeholder
    }

    pub fn is_key(&self) -> bool {
        self.is_key
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn selection(&self) -> Option<&TranslatorSelection> {
        self.selection.as_ref()
    }

    /// The column currently bound to this attribute, if any.
    pub fn column(&self) -> Option<&ColumnRef> {
        self.column.as_ref()
    }

    /// Last confirmed configuration for a translator on this binding.
    ///
    /// The outer `Option` is cache presence; the inner one distinguishes a
    /// confirmed parameterless commit (`Some(None)`) from a confirmed
    /// parameter set.
    pub fn cached_config(&self, translator_id: &str) -> Option<&Option<TranslatorConfig>> {
        self.config_cache.get(translator_id)
    }

    pub fn has_cached_config(&self, translator_id: &str) -> bool {
        self.config_cache.contains_key(translator_id)
    }

    pub(crate) fn set_key(&mut self, is_key: bool) {
        self.is_key = is_key;
    }

    pub(crate) fn set_default_value(&mut self, value: Option<String>) {
        self.default_value = value;
    }

    /// Commit a selection: set it active and remember the configuration
    /// under the translator's id.
    pub(crate) fn commit_selection(
        &mut self,
        translator_id: &str,
        config: Option<TranslatorConfig>,
    ) {
        self.config_cache
            .insert(translator_id.to_string(), config.clone());
        self.selection = Some(TranslatorSelection {
            translator_id: translator_id.to_string(),
            config,
        });
    }

    pub(crate) fn set_column(&mut self, column: Option<ColumnRef>) {
        self.column = column;
    }

    pub(crate) fn take_column(&mut self) -> Option<ColumnRef> {
        self.column.take()
    }
}
