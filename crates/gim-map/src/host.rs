//! Collaborator contracts supplied by the hosting application.
//!
//! A GUI host drives these from modal dialogs and a validation pane;
//! a scripted host supplies canned responses. All calls are synchronous: an
//! operation suspends on the collaborator and resumes with its answer.

use gim_model::TranslatorConfig;

use crate::binding::{AttributeBinding, ColumnRef};

/// Outcome of presenting a configuration for editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResult {
    /// The user confirmed the edited configuration.
    Ok,
    /// Anything other than confirmation. No state is mutated.
    Cancelled,
}

/// Answer from the default-value prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultValueResponse {
    /// Use this default from now on (`None` clears it).
    Set(Option<String>),
    /// Keep the current default.
    Unchanged,
}

/// Presents a translator configuration for modal editing.
///
/// The configuration is edited in place; [`DialogResult::Ok`] means the
/// edited state should be committed.
pub trait ConfigEditor {
    fn present(&mut self, config: &mut TranslatorConfig, title: &str) -> DialogResult;
}

/// Asks the user for an attribute's default value.
pub trait DefaultValuePrompt {
    fn prompt_default_value(
        &mut self,
        attribute_name: &str,
        current: Option<&str>,
    ) -> DefaultValueResponse;
}

/// Receives re-validation requests.
///
/// Invoked whenever a binding's translator, default value or attachment
/// changes. `column` is `None` when the mutated binding is not attached to
/// any column. The core never interprets a validation result; rendering
/// warnings is the host's concern.
pub trait Validator {
    fn validate(&mut self, column: Option<&ColumnRef>);
}

/// Notified when a placeholder binding is removed by the user.
pub trait RemovalObserver {
    fn binding_removed(&mut self, binding: &AttributeBinding);
}
