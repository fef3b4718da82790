//! Import destinations.

use gim_model::{Attribute, SchemaAttribute};

/// Where an import lands: an existing graph, a new graph, a staging area.
///
/// The mapping core only needs a label and the destination's attribute
/// schema; everything else about the destination stays with the host.
pub trait ImportDestination {
    fn label(&self) -> String;

    /// Attributes the destination already defines, with their key flags.
    fn schema(&self) -> Vec<SchemaAttribute>;
}

/// A plain in-memory destination, sufficient for tests and scripted hosts.
pub struct GraphDestination {
    label: String,
    schema: Vec<SchemaAttribute>,
}

impl GraphDestination {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            schema: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, attribute: Attribute, is_key: bool) -> Self {
        self.schema.push(SchemaAttribute::new(attribute, is_key));
        self
    }
}

impl ImportDestination for GraphDestination {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn schema(&self) -> Vec<SchemaAttribute> {
        self.schema.clone()
    }
}
