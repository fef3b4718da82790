use gim_model::{Attribute, AttributeType, ImportTemplate, TranslatorConfig};

use gim_map::{
    BindingList, ColumnRef, GraphDestination, TranslatorRegistry, Validator,
};

#[derive(Default)]
struct RecordingValidator {
    requests: Vec<Option<String>>,
}

impl Validator for RecordingValidator {
    fn validate(&mut self, column: Option<&ColumnRef>) {
        self.requests.push(column.map(|c| c.name.clone()));
    }
}

fn sample_destination() -> GraphDestination {
    GraphDestination::new("Flight Graph")
        .with_attribute(
            Attribute::new("Identifier", AttributeType::Text).unwrap(),
            true,
        )
        .with_attribute(
            Attribute::new("geo.latitude", AttributeType::Float).unwrap(),
            false,
        )
}

fn columns() -> Vec<ColumnRef> {
    vec![
        ColumnRef::new(0, "id"),
        ColumnRef::new(1, "lat_dms"),
        ColumnRef::new(2, "notes"),
    ]
}

fn configured_list() -> BindingList {
    let registry = TranslatorRegistry::with_builtins();
    let mut validator = RecordingValidator::default();
    let destination = sample_destination();
    let mut list = BindingList::for_destination(&destination);

    let identifier = list.find_by_name("Identifier").unwrap().id();
    let latitude = list.find_by_name("geo.latitude").unwrap().id();
    let notes = list.add_placeholder(
        Attribute::new("Notes", AttributeType::Text).unwrap(),
        false,
    );

    list.attach_column(identifier, ColumnRef::new(0, "id"), &mut validator)
        .unwrap();
    list.attach_column(latitude, ColumnRef::new(1, "lat_dms"), &mut validator)
        .unwrap();
    list.set_translator(
        latitude,
        "degrees-minutes-seconds",
        Some(TranslatorConfig::new().with("separator", ",")),
        &registry,
        &mut validator,
    )
    .unwrap();
    list.set_default_value(latitude, Some("0.0".to_string()), &mut validator)
        .unwrap();
    list.attach_column(notes, ColumnRef::new(2, "notes"), &mut validator)
        .unwrap();
    list
}

#[test]
fn template_captures_display_order() {
    let list = configured_list();
    let template = list.to_template("flights");

    assert_eq!(template.destination, "Flight Graph");
    let names: Vec<&str> = template.bindings.iter().map(|b| b.attribute.as_str()).collect();
    // Key first, then alphabetical.
    assert_eq!(names, vec!["Identifier", "Notes", "geo.latitude"]);
}

#[test]
fn template_replay_reproduces_bindings() {
    let registry = TranslatorRegistry::with_builtins();
    let template = configured_list().to_template("flights");

    // Round-trip through JSON, as the repository stores it.
    let json = serde_json::to_string(&template).expect("serialize");
    let template: ImportTemplate = serde_json::from_str(&json).expect("deserialize");

    let destination = sample_destination();
    let mut list = BindingList::for_destination(&destination);
    let mut validator = RecordingValidator::default();
    list.apply_template(&template, &columns(), &registry, &mut validator)
        .expect("apply template");

    let identifier = list.find_by_name("Identifier").unwrap();
    assert!(identifier.is_key());
    assert_eq!(identifier.column(), Some(&ColumnRef::new(0, "id")));

    let latitude = list.find_by_name("geo.latitude").unwrap();
    let expected = TranslatorConfig::new().with("separator", ",");
    assert_eq!(
        latitude.selection().unwrap().translator_id,
        "degrees-minutes-seconds"
    );
    assert_eq!(latitude.selection().unwrap().config, Some(expected.clone()));
    assert_eq!(
        latitude.cached_config("degrees-minutes-seconds"),
        Some(&Some(expected))
    );
    assert_eq!(latitude.default_value(), Some("0.0"));
    assert_eq!(latitude.column(), Some(&ColumnRef::new(1, "lat_dms")));

    // The placeholder from the template is recreated.
    let notes = list.find_by_name("Notes").unwrap();
    assert!(notes.is_placeholder());
    assert_eq!(notes.column(), Some(&ColumnRef::new(2, "notes")));
}

#[test]
fn unknown_translator_aborts_before_mutation() {
    let registry = TranslatorRegistry::with_builtins();
    let mut template = configured_list().to_template("flights");
    for spec in &mut template.bindings {
        if let Some(translator) = &mut spec.translator {
            translator.id = "retired-translator".to_string();
        }
    }

    let destination = sample_destination();
    let mut list = BindingList::for_destination(&destination);
    let mut validator = RecordingValidator::default();
    let err = list
        .apply_template(&template, &columns(), &registry, &mut validator)
        .unwrap_err();
    assert!(err.to_string().contains("retired-translator"));

    // The binding the failing spec targeted was not touched.
    let latitude = list.find_by_name("geo.latitude").unwrap();
    assert!(latitude.selection().is_none());
    assert!(latitude.column().is_none());
}

#[test]
fn missing_columns_degrade_to_unattached_bindings() {
    let registry = TranslatorRegistry::with_builtins();
    let template = configured_list().to_template("flights");

    let destination = sample_destination();
    let mut list = BindingList::for_destination(&destination);
    let mut validator = RecordingValidator::default();
    // The import file no longer has the "lat_dms" column.
    let remaining = vec![ColumnRef::new(0, "id"), ColumnRef::new(1, "notes")];
    list.apply_template(&template, &remaining, &registry, &mut validator)
        .expect("apply template");

    let latitude = list.find_by_name("geo.latitude").unwrap();
    assert!(latitude.column().is_none());
    // The rest of the spec still applied.
    assert_eq!(
        latitude.selection().unwrap().translator_id,
        "degrees-minutes-seconds"
    );
    assert_eq!(latitude.default_value(), Some("0.0"));
}
