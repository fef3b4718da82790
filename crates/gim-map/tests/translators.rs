use gim_model::{AttrValue, AttributeType, TranslatorConfig};

use gim_map::{TranslateError, Translator, TranslatorRegistry};

fn float_of(value: &AttrValue) -> f64 {
    match value {
        AttrValue::Float(v) => *v,
        other => panic!("expected a float, got {other:?}"),
    }
}

fn text_of(value: &AttrValue) -> &str {
    match value {
        AttrValue::Text(v) => v,
        other => panic!("expected text, got {other:?}"),
    }
}

#[test]
fn registry_enumerates_in_declaration_order() {
    let registry = TranslatorRegistry::with_builtins();
    let ids: Vec<&str> = registry.iter().map(|t| t.id()).collect();
    assert_eq!(
        ids,
        vec![
            "identity",
            "uppercase",
            "lowercase",
            "find-replace",
            "datetime-format",
            "degrees-minutes-seconds",
        ]
    );
}

#[test]
fn applicability_filters_by_attribute_type() {
    let registry = TranslatorRegistry::with_builtins();

    let text: Vec<&str> = registry
        .list_applicable(AttributeType::Text)
        .iter()
        .map(|t| t.id())
        .collect();
    assert_eq!(text, vec!["identity", "uppercase", "lowercase", "find-replace"]);

    let float: Vec<&str> = registry
        .list_applicable(AttributeType::Float)
        .iter()
        .map(|t| t.id())
        .collect();
    assert_eq!(float, vec!["identity", "degrees-minutes-seconds"]);

    let datetime: Vec<&str> = registry
        .list_applicable(AttributeType::DateTime)
        .iter()
        .map(|t| t.id())
        .collect();
    assert_eq!(datetime, vec!["identity", "datetime-format"]);
}

#[test]
fn parameterless_translators_have_no_config() {
    let registry = TranslatorRegistry::with_builtins();
    assert!(registry.create_config("identity").is_none());
    assert!(registry.create_config("uppercase").is_none());
    assert!(registry.create_config("nonesuch").is_none());

    let dms = registry.create_config("degrees-minutes-seconds").unwrap();
    assert_eq!(dms.text("separator"), Some(":"));
}

#[test]
fn dms_parses_with_default_separator() {
    let registry = TranslatorRegistry::with_builtins();
    let dms = registry.get("degrees-minutes-seconds").unwrap();
    let config = dms.default_config().unwrap();

    let value = dms.translate("40:26:46.302", &config).expect("translate");
    let expected = 40.0 + 26.0 / 60.0 + 46.302 / 3600.0;
    assert!((float_of(&value) - expected).abs() < 1e-9);
}

#[test]
fn dms_honors_custom_separator_and_sign() {
    let registry = TranslatorRegistry::with_builtins();
    let dms = registry.get("degrees-minutes-seconds").unwrap();
    let config = TranslatorConfig::new().with("separator", ",");

    let value = dms.translate("-40,30", &config).expect("translate");
    assert!((float_of(&value) - (-40.5)).abs() < 1e-9);

    let value = dms.translate("12", &config).expect("translate");
    assert!((float_of(&value) - 12.0).abs() < 1e-9);
}

#[test]
fn dms_rejects_malformed_coordinates() {
    let registry = TranslatorRegistry::with_builtins();
    let dms = registry.get("degrees-minutes-seconds").unwrap();
    let config = dms.default_config().unwrap();

    assert!(dms.translate("north forty", &config).is_err());
    assert!(dms.translate("40:26:46:3", &config).is_err());
    assert!(dms.translate("40::46", &config).is_err());
    assert!(dms.translate("40:-26", &config).is_err());
}

#[test]
fn datetime_reformats_to_iso8601() {
    let registry = TranslatorRegistry::with_builtins();
    let datetime = registry.get("datetime-format").unwrap();

    let config = datetime.default_config().unwrap();
    let value = datetime
        .translate("2023-01-15 10:30:00", &config)
        .expect("translate");
    assert_eq!(text_of(&value), "2023-01-15T10:30:00");

    let config = TranslatorConfig::new().with("format", "%d/%m/%Y");
    let value = datetime.translate("15/01/2023", &config).expect("translate");
    assert_eq!(text_of(&value), "2023-01-15");

    assert!(datetime.translate("soon", &config).is_err());
}

#[test]
fn find_replace_substitutes_literally() {
    let registry = TranslatorRegistry::with_builtins();
    let translator = registry.get("find-replace").unwrap();

    let config = TranslatorConfig::new().with("find", "-").with("replace", " ");
    let value = translator.translate("a-b-c", &config).expect("translate");
    assert_eq!(text_of(&value), "a b c");

    // An empty find pattern passes the value through.
    let config = translator.default_config().unwrap();
    let value = translator.translate("a-b-c", &config).expect("translate");
    assert_eq!(text_of(&value), "a-b-c");

    let err = translator
        .translate("a-b-c", &TranslatorConfig::new())
        .unwrap_err();
    assert!(matches!(err, TranslateError::MissingParameter("find")));
}

#[test]
fn case_translators_fold_text() {
    let registry = TranslatorRegistry::with_builtins();
    let config = TranslatorConfig::new();

    let upper = registry.get("uppercase").unwrap();
    assert_eq!(
        text_of(&upper.translate("Sydney", &config).unwrap()),
        "SYDNEY"
    );

    let lower = registry.get("lowercase").unwrap();
    assert_eq!(
        text_of(&lower.translate("Sydney", &config).unwrap()),
        "sydney"
    );

    let identity = registry.get("identity").unwrap();
    assert_eq!(
        text_of(&identity.translate("Sydney", &config).unwrap()),
        "Sydney"
    );
}
