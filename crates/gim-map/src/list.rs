//! The binding list: all attribute bindings for one import destination.
//!
//! Operations live here rather than on the binding itself because they need
//! the host collaborators and, for attachment, sibling bindings. All
//! operations run on the host's single logical thread; `&mut self`
//! throughout encodes the exclusive-mutation assumption.

use tracing::{debug, warn};

use gim_model::{
    Attribute, AttributeOrigin, BindingSpec, ImportTemplate, TranslatorConfig, TranslatorSpec,
};

use crate::binding::{AttributeBinding, BindingId, ColumnRef};
use crate::destination::ImportDestination;
use crate::error::MapError;
use crate::host::{
    ConfigEditor, DefaultValuePrompt, DefaultValueResponse, DialogResult, RemovalObserver,
    Validator,
};
use crate::order::display_order;
use crate::registry::TranslatorRegistry;

/// Result of an interactive translator selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The selection was committed (and cached).
    Committed,
    /// The user backed out; nothing changed.
    Cancelled,
}

/// Summary counts over a binding list.
#[derive(Debug, Clone, Copy)]
pub struct BindingSummary {
    pub total: usize,
    pub keys: usize,
    pub attached: usize,
    pub placeholders: usize,
    pub with_translator: usize,
}

/// All attribute bindings for one import destination.
pub struct BindingList {
    destination: String,
    bindings: Vec<AttributeBinding>,
    next_id: u32,
}

impl BindingList {
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            bindings: Vec::new(),
            next_id: 0,
        }
    }

    /// A list seeded with the destination's schema attributes.
    pub fn for_destination(destination: &dyn ImportDestination) -> Self {
        let mut list = Self::new(destination.label());
        for entry in destination.schema() {
            list.add(entry.attribute, AttributeOrigin::Schema, entry.is_key);
        }
        list
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttributeBinding> {
        self.bindings.iter()
    }

    pub fn binding(&self, id: BindingId) -> Option<&AttributeBinding> {
        self.bindings.iter().find(|b| b.id() == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&AttributeBinding> {
        self.bindings.iter().find(|b| b.attribute().name() == name)
    }

    pub fn binding_for_column(&self, column: &ColumnRef) -> Option<&AttributeBinding> {
        self.bindings.iter().find(|b| b.column() == Some(column))
    }

    /// Add a placeholder attribute created during import configuration.
    pub fn add_placeholder(&mut self, attribute: Attribute, is_key: bool) -> BindingId {
        self.add(attribute, AttributeOrigin::Placeholder, is_key)
    }

    fn add(&mut self, attribute: Attribute, origin: AttributeOrigin, is_key: bool) -> BindingId {
        let id = BindingId(self.next_id);
        self.next_id += 1;
        self.bindings
            .push(AttributeBinding::new(id, attribute, origin, is_key));
        id
    }

    /// Whether the removal control should be enabled for this binding.
    pub fn can_remove(&self, id: BindingId) -> bool {
        self.binding(id).is_some_and(AttributeBinding::is_placeholder)
    }

    /// Remove a placeholder binding. Attributes pre-existing in the
    /// destination schema are not removable.
    pub fn remove_binding(
        &mut self,
        id: BindingId,
        observer: &mut dyn RemovalObserver,
    ) -> Result<AttributeBinding, MapError> {
        let index = self
            .bindings
            .iter()
            .position(|b| b.id() == id)
            .ok_or(MapError::UnknownBinding(id))?;
        if !self.bindings[index].is_placeholder() {
            return Err(MapError::SchemaAttributeNotRemovable(
                self.bindings[index].attribute().name().to_string(),
            ));
        }
        let binding = self.bindings.remove(index);
        debug!(binding = %id, attribute = binding.attribute().name(), "placeholder removed");
        observer.binding_removed(&binding);
        Ok(binding)
    }

    /// Interactive translator selection with the confirm/cancel protocol.
    ///
    /// A cached configuration for the translator is offered in place of a
    /// fresh one; either way the offered copy is a clone, so cancellation
    /// cannot corrupt committed state. Parameterless translators commit
    /// without involving the editor. Re-validation is requested only when
    /// the binding is attached to a column.
    pub fn select_translator(
        &mut self,
        id: BindingId,
        translator_id: &str,
        registry: &TranslatorRegistry,
        editor: &mut dyn ConfigEditor,
        validator: &mut dyn Validator,
    ) -> Result<SelectionOutcome, MapError> {
        let translator = registry
            .get(translator_id)
            .ok_or_else(|| MapError::UnknownTranslator(translator_id.to_string()))?;
        let binding = self
            .bindings
            .iter_mut()
            .find(|b| b.id() == id)
            .ok_or(MapError::UnknownBinding(id))?;
        let attribute_type = binding.attribute().attr_type();
        if !translator.applies_to(attribute_type) {
            return Err(MapError::NotApplicable {
                translator: translator_id.to_string(),
                attribute_type,
            });
        }

        let offered = match binding.cached_config(translator_id) {
            Some(cached) => cached.clone(),
            None => translator.default_config(),
        };

        let config = match offered {
            None => None,
            Some(mut config) => {
                let title = format!("{} Parameters", translator.label());
                match editor.present(&mut config, &title) {
                    DialogResult::Ok => Some(config),
                    DialogResult::Cancelled => {
                        debug!(binding = %id, translator = translator_id, "selection cancelled");
                        return Ok(SelectionOutcome::Cancelled);
                    }
                }
            }
        };

        binding.commit_selection(translator_id, config);
        debug!(binding = %id, translator = translator_id, "translator committed");
        if let Some(column) = binding.column().cloned() {
            validator.validate(Some(&column));
        }
        Ok(SelectionOutcome::Committed)
    }

    /// Programmatic selection, used when replaying saved templates.
    ///
    /// The translator must be known to the registry; configuration shape is
    /// the caller's responsibility. Not subject to confirm/cancel.
    pub fn set_translator(
        &mut self,
        id: BindingId,
        translator_id: &str,
        config: Option<TranslatorConfig>,
        registry: &TranslatorRegistry,
        validator: &mut dyn Validator,
    ) -> Result<(), MapError> {
        if !registry.contains(translator_id) {
            return Err(MapError::UnknownTranslator(translator_id.to_string()));
        }
        let binding = self.lookup_mut(id)?;
        binding.commit_selection(translator_id, config);
        debug!(binding = %id, translator = translator_id, "translator set");
        if let Some(column) = binding.column().cloned() {
            validator.validate(Some(&column));
        }
        Ok(())
    }

    /// Set the default value used when the source column yields no value.
    ///
    /// Always requests re-validation, attached or not: a default can make
    /// an otherwise-unbound optional column valid.
    pub fn set_default_value(
        &mut self,
        id: BindingId,
        value: Option<String>,
        validator: &mut dyn Validator,
    ) -> Result<(), MapError> {
        let binding = self.lookup_mut(id)?;
        binding.set_default_value(value);
        validator.validate(binding.column());
        Ok(())
    }

    /// Ask the host for a new default value; `Unchanged` is a no-op.
    pub fn prompt_default_value(
        &mut self,
        id: BindingId,
        prompt: &mut dyn DefaultValuePrompt,
        validator: &mut dyn Validator,
    ) -> Result<(), MapError> {
        let binding = self.lookup_mut(id)?;
        let response =
            prompt.prompt_default_value(binding.attribute().name(), binding.default_value());
        match response {
            DefaultValueResponse::Set(value) => {
                binding.set_default_value(value);
                validator.validate(binding.column());
            }
            DefaultValueResponse::Unchanged => {}
        }
        Ok(())
    }

    /// Attach a column to a binding.
    ///
    /// A column feeds at most one binding per list, so attaching a column
    /// already attached elsewhere moves it. Attachment never alters the
    /// translator selection, default value or configuration cache;
    /// re-validation is requested for each column whose content changed.
    pub fn attach_column(
        &mut self,
        id: BindingId,
        column: ColumnRef,
        validator: &mut dyn Validator,
    ) -> Result<(), MapError> {
        self.lookup(id)?;
        let mut moved = false;
        for other in &mut self.bindings {
            if other.id() != id && other.column() == Some(&column) {
                other.set_column(None);
                moved = true;
            }
        }
        let binding = self.lookup_mut(id)?;
        if binding.column() == Some(&column) {
            if moved {
                validator.validate(Some(&column));
            }
            return Ok(());
        }
        if let Some(previous) = binding.take_column() {
            validator.validate(Some(&previous));
        }
        debug!(binding = %id, column = %column, "column attached");
        binding.set_column(Some(column));
        validator.validate(binding.column());
        Ok(())
    }

    /// Detach the binding's column, if any.
    pub fn detach_column(
        &mut self,
        id: BindingId,
        validator: &mut dyn Validator,
    ) -> Result<(), MapError> {
        let binding = self.lookup_mut(id)?;
        if let Some(previous) = binding.take_column() {
            debug!(binding = %id, column = %previous, "column detached");
            validator.validate(Some(&previous));
        }
        Ok(())
    }

    /// Bindings in display order: keys first, `__` labels last,
    /// alphabetical in between. The sort is stable, so tied bindings keep
    /// their insertion order.
    pub fn sorted(&self) -> Vec<&AttributeBinding> {
        let mut ordered: Vec<&AttributeBinding> = self.bindings.iter().collect();
        ordered.sort_by(|a, b| display_order(a, b));
        ordered
    }

    pub fn summary(&self) -> BindingSummary {
        BindingSummary {
            total: self.bindings.len(),
            keys: self.bindings.iter().filter(|b| b.is_key()).count(),
            attached: self.bindings.iter().filter(|b| b.column().is_some()).count(),
            placeholders: self
                .bindings
                .iter()
                .filter(|b| b.is_placeholder())
                .count(),
            with_translator: self
                .bindings
                .iter()
                .filter(|b| b.selection().is_some())
                .count(),
        }
    }

    /// Capture the current state as a template document.
    pub fn to_template(&self, name: impl Into<String>) -> ImportTemplate {
        let bindings = self
            .sorted()
            .into_iter()
            .map(|binding| BindingSpec {
                attribute: binding.attribute().name().to_string(),
                attribute_type: binding.attribute().attr_type(),
                is_key: binding.is_key(),
                default_value: binding.default_value().map(str::to_string),
                translator: binding.selection().map(|selection| TranslatorSpec {
                    id: selection.translator_id.clone(),
                    params: selection.config.clone().unwrap_or_default(),
                }),
                column: binding.column().map(|c| c.name.clone()),
            })
            .collect();
        ImportTemplate {
            name: name.into(),
            destination: self.destination.clone(),
            bindings,
        }
    }

    /// Replay a template: restore key flags, defaults and translator
    /// selections, creating placeholders for attributes the list does not
    /// have, and attach columns by name against the live import file.
    ///
    /// Each binding spec is checked before any of its mutations are
    /// applied; specs earlier in the template stay applied if a later one
    /// fails. Column names the file no longer has are skipped with a
    /// warning rather than aborting the replay.
    pub fn apply_template(
        &mut self,
        template: &ImportTemplate,
        columns: &[ColumnRef],
        registry: &TranslatorRegistry,
        validator: &mut dyn Validator,
    ) -> Result<(), MapError> {
        debug!(template = template.name.as_str(), "applying template");
        for spec in &template.bindings {
            if let Some(translator) = &spec.translator
                && !registry.contains(&translator.id)
            {
                return Err(MapError::UnknownTranslator(translator.id.clone()));
            }

            let id = match self.find_by_name(&spec.attribute) {
                Some(binding) => binding.id(),
                None => {
                    let attribute = Attribute::new(spec.attribute.clone(), spec.attribute_type)?;
                    self.add_placeholder(attribute, spec.is_key)
                }
            };
            self.lookup_mut(id)?.set_key(spec.is_key);
            self.set_default_value(id, spec.default_value.clone(), validator)?;
            if let Some(translator) = &spec.translator {
                let config = if translator.params.is_empty() {
                    None
                } else {
                    Some(translator.params.clone())
                };
                self.set_translator(id, &translator.id, config, registry, validator)?;
            }
            if let Some(column_name) = &spec.column {
                match columns.iter().find(|c| &c.name == column_name) {
                    Some(column) => self.attach_column(id, column.clone(), validator)?,
                    None => warn!(
                        template = template.name.as_str(),
                        column = column_name.as_str(),
                        "template references a column the import file does not have"
                    ),
                }
            }
        }
        Ok(())
    }

    fn lookup(&self, id: BindingId) -> Result<&AttributeBinding, MapError> {
        self.binding(id).ok_or(MapError::UnknownBinding(id))
    }

    fn lookup_mut(&mut self, id: BindingId) -> Result<&mut AttributeBinding, MapError> {
        self.bindings
            .iter_mut()
            .find(|b| b.id() == id)
            .ok_or(MapError::UnknownBinding(id))
    }
}
