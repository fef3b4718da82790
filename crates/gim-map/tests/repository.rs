use std::fs;
use std::path::PathBuf;

use gim_map::{StoredTemplate, TemplateRepository};
use gim_model::{AttributeType, BindingSpec, ImportTemplate, TranslatorConfig, TranslatorSpec};

fn temp_repo_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("gim_map_repo_{stamp}"));
    dir
}

fn cleanup_dir(dir: &PathBuf) {
    let _ = fs::remove_dir_all(dir);
}

fn sample_template(name: &str) -> ImportTemplate {
    ImportTemplate {
        name: name.to_string(),
        destination: "New Graph".to_string(),
        bindings: vec![
            BindingSpec {
                attribute: "Identifier".to_string(),
                attribute_type: AttributeType::Text,
                is_key: true,
                default_value: None,
                translator: None,
                column: Some("id".to_string()),
            },
            BindingSpec {
                attribute: "geo.latitude".to_string(),
                attribute_type: AttributeType::Float,
                is_key: false,
                default_value: Some("0.0".to_string()),
                translator: Some(TranslatorSpec {
                    id: "degrees-minutes-seconds".to_string(),
                    params: TranslatorConfig::new().with("separator", ","),
                }),
                column: Some("lat_dms".to_string()),
            },
        ],
    }
}

#[test]
fn repository_save_and_load() {
    let dir = temp_repo_dir();
    let repo = TemplateRepository::new(&dir).expect("create repo");

    let template = sample_template("flights");
    let path = repo.save(&template).expect("save template");

    assert!(path.exists());
    assert!(path.to_string_lossy().contains("FLIGHTS.json"));

    let loaded = repo
        .load("flights")
        .expect("load template")
        .expect("template should exist");
    assert_eq!(loaded, template);

    cleanup_dir(&dir);
}

#[test]
fn repository_load_nonexistent() {
    let dir = temp_repo_dir();
    let repo = TemplateRepository::new(&dir).expect("create repo");

    let loaded = repo.load("noexist").expect("load attempt");
    assert!(loaded.is_none());

    cleanup_dir(&dir);
}

#[test]
fn repository_exists_and_delete() {
    let dir = temp_repo_dir();
    let repo = TemplateRepository::new(&dir).expect("create repo");

    assert!(!repo.exists("flights"));
    repo.save(&sample_template("flights")).expect("save");
    assert!(repo.exists("flights"));

    let deleted = repo.delete("flights").expect("delete");
    assert!(deleted);
    assert!(!repo.exists("flights"));

    let deleted_again = repo.delete("flights").expect("delete again");
    assert!(!deleted_again);

    cleanup_dir(&dir);
}

#[test]
fn repository_list_is_sorted_by_name() {
    let dir = temp_repo_dir();
    let repo = TemplateRepository::new(&dir).expect("create repo");

    repo.save(&sample_template("flights")).expect("save");
    repo.save(&sample_template("airports")).expect("save");

    let list = repo.list().expect("list templates");
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].name, "airports");
    assert_eq!(list[0].binding_count, 2);
    assert_eq!(list[1].name, "flights");
    assert_eq!(list[1].destination, "New Graph");

    cleanup_dir(&dir);
}

#[test]
fn stored_template_carries_metadata() {
    let dir = temp_repo_dir();
    let repo = TemplateRepository::new(&dir).expect("create repo");

    let stored = StoredTemplate::new(sample_template("flights"))
        .with_description("Nightly feed import");
    repo.save_stored(&stored).expect("save stored");

    let loaded = repo
        .load_stored("flights")
        .expect("load")
        .expect("exists");
    assert_eq!(loaded.description, Some("Nightly feed import".to_string()));
    assert!(loaded.saved_at.is_some());
    assert_eq!(loaded.version, "1.0");

    cleanup_dir(&dir);
}

#[test]
fn template_names_normalize_for_filenames() {
    let dir = temp_repo_dir();
    let repo = TemplateRepository::new(&dir).expect("create repo");

    let template = sample_template("nightly/feed-2024");
    repo.save(&template).expect("save");

    let loaded = repo
        .load("nightly/feed-2024")
        .expect("load")
        .expect("exists");
    assert_eq!(loaded.name, "nightly/feed-2024");

    cleanup_dir(&dir);
}
