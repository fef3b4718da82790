//! Command implementations.

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use tracing::debug;

use gim_map::{
    BindingList, ColumnRef, TemplateRepository, TranslatorRegistry, Validator,
};
use gim_model::{AttributeType, ImportTemplate};

use crate::cli::{ListArgs, TemplateArgs};

pub fn run_translators() -> Result<()> {
    let registry = TranslatorRegistry::with_builtins();
    let mut table = Table::new();
    table.set_header(vec!["Id", "Label", "Parameters", "Applies to"]);
    apply_table_style(&mut table);
    for translator in registry.iter() {
        let parameters = match translator.default_config() {
            Some(config) => config
                .iter()
                .map(|(key, _)| key.to_string())
                .collect::<Vec<_>>()
                .join(", "),
            None => "-".to_string(),
        };
        let applies: Vec<&str> = AttributeType::all()
            .iter()
            .filter(|t| translator.applies_to(**t))
            .map(|t| t.as_str())
            .collect();
        table.add_row(vec![
            translator.id().to_string(),
            translator.label().to_string(),
            parameters,
            applies.join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_list(args: &ListArgs) -> Result<()> {
    let repo = TemplateRepository::new(&args.repo)?;
    let templates = repo.list()?;
    if templates.is_empty() {
        println!("No templates in {}", args.repo.display());
        return Ok(());
    }
    let mut table = Table::new();
    table.set_header(vec!["Name", "Destination", "Bindings", "File"]);
    apply_table_style(&mut table);
    for metadata in templates {
        table.add_row(vec![
            metadata.name,
            metadata.destination,
            metadata.binding_count.to_string(),
            metadata.file_path.display().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_show(args: &TemplateArgs) -> Result<()> {
    let template = load_template(args)?;
    let registry = TranslatorRegistry::with_builtins();
    let (list, _) = rebuild(&template, &registry)?;

    println!("Template: {}", template.name);
    println!("Destination: {}", template.destination);
    let mut table = Table::new();
    table.set_header(vec!["Attribute", "Type", "Key", "Column", "Translator", "Default"]);
    apply_table_style(&mut table);
    for binding in list.sorted() {
        table.add_row(vec![
            binding.attribute().name().to_string(),
            binding.attribute().attr_type().to_string(),
            if binding.is_key() { "yes" } else { "" }.to_string(),
            binding
                .column()
                .map(|c| c.name.clone())
                .unwrap_or_default(),
            binding
                .selection()
                .map(|s| s.translator_id.clone())
                .unwrap_or_default(),
            binding.default_value().unwrap_or_default().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_check(args: &TemplateArgs) -> Result<bool> {
    let template = load_template(args)?;
    let registry = TranslatorRegistry::with_builtins();

    let issues = check_template(&template, &registry);
    if !issues.is_empty() {
        for issue in &issues {
            println!("error: {issue}");
        }
        println!("{}: {} issue(s) found", template.name, issues.len());
        return Ok(false);
    }

    // Replay against a scripted host: synthetic columns from the template's
    // own references, a counting validator in place of the UI.
    let (list, validation_requests) = rebuild(&template, &registry)?;
    let summary = list.summary();
    println!(
        "{}: ok ({} bindings, {} keys, {} attached, {} validation requests)",
        template.name, summary.total, summary.keys, summary.attached, validation_requests
    );
    Ok(true)
}

/// Static checks: every translator named by the template must be known to
/// the registry and applicable to its binding's attribute type.
fn check_template(template: &ImportTemplate, registry: &TranslatorRegistry) -> Vec<String> {
    let mut issues = Vec::new();
    for spec in &template.bindings {
        let Some(translator) = &spec.translator else {
            continue;
        };
        match registry.get(&translator.id) {
            None => issues.push(format!(
                "binding '{}': unknown translator '{}'",
                spec.attribute, translator.id
            )),
            Some(found) => {
                if !found.applies_to(spec.attribute_type) {
                    issues.push(format!(
                        "binding '{}': translator '{}' does not apply to {} attributes",
                        spec.attribute, translator.id, spec.attribute_type
                    ));
                }
            }
        }
    }
    issues
}

fn load_template(args: &TemplateArgs) -> Result<ImportTemplate> {
    let repo = TemplateRepository::new(&args.repo)?;
    repo.load(&args.name)?.with_context(|| {
        format!(
            "no template named '{}' in {}",
            args.name,
            args.repo.display()
        )
    })
}

fn rebuild(
    template: &ImportTemplate,
    registry: &TranslatorRegistry,
) -> Result<(BindingList, usize)> {
    let columns = template_columns(template);
    debug!(
        template = template.name.as_str(),
        columns = columns.len(),
        "rebuilding binding list"
    );
    let mut validator = CountingValidator::default();
    let mut list = BindingList::new(template.destination.clone());
    list.apply_template(template, &columns, registry, &mut validator)?;
    Ok((list, validator.requests))
}

/// Column identities synthesized from the template's own references, so a
/// replay succeeds without the original import file.
fn template_columns(template: &ImportTemplate) -> Vec<ColumnRef> {
    let mut columns: Vec<ColumnRef> = Vec::new();
    for spec in &template.bindings {
        if let Some(name) = &spec.column
            && !columns.iter().any(|c| &c.name == name)
        {
            columns.push(ColumnRef::new(columns.len(), name.clone()));
        }
    }
    columns
}

#[derive(Default)]
struct CountingValidator {
    requests: usize,
}

impl Validator for CountingValidator {
    fn validate(&mut self, _column: Option<&ColumnRef>) {
        self.requests += 1;
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}
