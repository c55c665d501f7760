use std::fs;
use urania::ephemeris::default_natal_input;
use urania::profiles::{JsonFileProfileStore, ProfileRecord, ProfileRepository, StoreError};

fn record(name: &str) -> ProfileRecord {
    let mut input = default_natal_input();
    input.name = name.to_string();
    ProfileRecord::from_input(input)
}

#[test]
fn test_missing_file_seeds_sample_profile() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let store = JsonFileProfileStore::open(dir.path().join("profiles.v1.json"))?;

    assert_eq!(store.list().len(), 1);
    let current = store.current().unwrap();
    assert_eq!(current.label, "Sample Chart");
    assert_eq!(current.input, default_natal_input());
    assert!(store.path().exists());
    Ok(())
}

#[test]
fn test_seeded_profile_id_survives_reopen() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("profiles.v1.json");

    let seeded_id = JsonFileProfileStore::open(&path)?.current().unwrap().id.clone();

    let mut store = JsonFileProfileStore::open(&path)?;
    assert_eq!(store.list().len(), 1);
    assert_eq!(store.current().unwrap().id, seeded_id);
    store.set_current(&seeded_id)?;
    assert!(store.get(&seeded_id).is_some());
    Ok(())
}

#[test]
fn test_corrupt_file_is_replaced_by_seeded_state() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("profiles.v1.json");
    fs::write(&path, "{ not json")?;

    let seeded_id = JsonFileProfileStore::open(&path)?.current().unwrap().id.clone();
    let store = JsonFileProfileStore::open(&path)?;
    assert_eq!(store.current().unwrap().id, seeded_id);
    Ok(())
}

#[test]
fn test_changes_survive_reopen() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("nested").join("profiles.v1.json");

    let a = record("Ada");
    let b = record("Grace");
    {
        let mut store = JsonFileProfileStore::open(&path)?;
        let seeded = store.current().unwrap().id.clone();
        store.upsert(a.clone())?;
        store.upsert(b.clone())?;
        store.set_current(&b.id)?;
        store.delete(&seeded)?;
    }

    let store = JsonFileProfileStore::open(&path)?;
    let labels: Vec<&str> = store.list().iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["Ada", "Grace"]);
    assert_eq!(store.current().unwrap(), &b);
    assert_eq!(store.get(&a.id).unwrap(), &a);
    Ok(())
}

#[test]
fn test_corrupt_file_falls_back_to_sample() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("profiles.v1.json");
    fs::write(&path, "{ not json")?;

    let store = JsonFileProfileStore::open(&path)?;
    assert_eq!(store.list().len(), 1);
    assert_eq!(store.current().unwrap().label, "Sample Chart");
    Ok(())
}

#[test]
fn test_empty_profile_list_falls_back_to_sample() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("profiles.v1.json");
    fs::write(&path, r#"{"profiles": []}"#)?;

    let store = JsonFileProfileStore::open(&path)?;
    assert_eq!(store.list().len(), 1);
    Ok(())
}

#[test]
fn test_missing_selection_defaults_to_first_profile() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("profiles.v1.json");
    let a = record("Ada");
    let json = serde_json::json!({ "profiles": [a] });
    fs::write(&path, serde_json::to_string(&json)?)?;

    let store = JsonFileProfileStore::open(&path)?;
    assert_eq!(store.current().unwrap().id, a.id);
    Ok(())
}

#[test]
fn test_file_layout_is_camel_case() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("profiles.v1.json");
    let mut store = JsonFileProfileStore::open(&path)?;
    store.upsert(record("Ada"))?;

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
    assert!(json["currentProfileId"].is_string());
    assert_eq!(json["profiles"][1]["label"], "Ada");
    assert_eq!(json["profiles"][1]["input"]["houseSystem"], "Equal");
    assert!(json["profiles"][1]["createdAt"].is_string());
    Ok(())
}

#[test]
fn test_unknown_selection_is_rejected() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let mut store = JsonFileProfileStore::open(dir.path().join("profiles.v1.json"))?;
    let err = store.set_current("nope").unwrap_err();
    assert!(matches!(err, StoreError::UnknownProfile { .. }));
    Ok(())
}
