//! Template repository for persisting and reusing import mappings.
//!
//! Templates are stored as JSON files, one per template, named after the
//! normalized template name. The repository supports saving, loading by
//! name, listing with metadata, and deletion.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use gim_model::ImportTemplate;

/// File-system backed store of import templates.
#[derive(Debug, Clone)]
pub struct TemplateRepository {
    base_dir: PathBuf,
}

/// Metadata about a stored template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateMetadata {
    pub name: String,
    pub destination: String,
    pub binding_count: usize,
    pub file_path: PathBuf,
}

/// A template with repository bookkeeping attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredTemplate {
    #[serde(flatten)]
    pub template: ImportTemplate,
    /// When this template was saved (ISO 8601).
    pub saved_at: Option<String>,
    /// Optional notes about the template.
    pub description: Option<String>,
    /// Version of the template format.
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl StoredTemplate {
    pub fn new(template: ImportTemplate) -> Self {
        Self {
            template,
            saved_at: Some(Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()),
            description: None,
            version: default_version(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl TemplateRepository {
    /// Open a repository at the given directory, creating it if needed.
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir).with_context(|| {
            format!(
                "Failed to create template repository: {}",
                base_dir.display()
            )
        })?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Save a template, stamping it with the current time.
    pub fn save(&self, template: &ImportTemplate) -> Result<PathBuf> {
        let stored = StoredTemplate::new(template.clone());
        self.save_stored(&stored)
    }

    pub fn save_stored(&self, stored: &StoredTemplate) -> Result<PathBuf> {
        let filename = template_filename(&stored.template.name);
        let path = self.base_dir.join(&filename);
        let json = serde_json::to_string_pretty(stored)
            .with_context(|| format!("Failed to serialize template {}", stored.template.name))?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write template to {}", path.display()))?;
        Ok(path)
    }

    /// Load a template by name. Returns `None` if no such template exists.
    pub fn load(&self, name: &str) -> Result<Option<ImportTemplate>> {
        let stored = self.load_stored(name)?;
        Ok(stored.map(|s| s.template))
    }

    pub fn load_stored(&self, name: &str) -> Result<Option<StoredTemplate>> {
        let path = self.base_dir.join(template_filename(name));
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read template from {}", path.display()))?;
        let stored: StoredTemplate = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse template from {}", path.display()))?;
        Ok(Some(stored))
    }

    /// List all stored templates, sorted by name.
    pub fn list(&self) -> Result<Vec<TemplateMetadata>> {
        let mut metadata = Vec::new();

        for entry in fs::read_dir(&self.base_dir)
            .with_context(|| format!("Failed to read repository: {}", self.base_dir.display()))?
        {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let filename = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default();
            if !filename.ends_with(".json") {
                continue;
            }

            let contents = fs::read_to_string(&path)?;
            if let Ok(stored) = serde_json::from_str::<StoredTemplate>(&contents) {
                metadata.push(TemplateMetadata {
                    name: stored.template.name.clone(),
                    destination: stored.template.destination.clone(),
                    binding_count: stored.template.bindings.len(),
                    file_path: path,
                });
            }
        }

        metadata.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(metadata)
    }

    /// Delete a template. Returns true if one existed.
    pub fn delete(&self, name: &str) -> Result<bool> {
        let path = self.base_dir.join(template_filename(name));
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to delete template: {}", path.display()))?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn exists(&self, name: &str) -> bool {
        self.base_dir.join(template_filename(name)).exists()
    }
}

/// Normalize a template name for use as a filename.
fn template_filename(name: &str) -> String {
    let normalized: String = name
        .trim()
        .to_uppercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    format!("{normalized}.json")
}
