mod support;

use staff_directory::{
    sample_employees, Directory, DirectoryStore, InMemoryStore, JsonFileStore, SequentialIds,
};
use support::employees::draft;

#[test]
fn reload_over_a_shared_slot_restores_the_same_collection() {
    let store = InMemoryStore::new();
    let mut directory =
        Directory::with_seed(store.clone(), SequentialIds::new(), Vec::new());

    directory
        .create(draft("Ada", "Lovelace", "Engineering", 100_000.0))
        .unwrap();
    directory
        .create(draft("Grace", "Hopper", "Product", 150_000.0))
        .unwrap();
    let written = directory.employees().to_vec();

    // A second directory over the same slot stands in for a process
    // restart.
    let reloaded = Directory::with_seed(store, SequentialIds::new(), Vec::new());
    assert_eq!(reloaded.employees(), written);
}

#[test]
fn json_file_store_survives_reopening() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("employees.json");

    let written = {
        let mut directory = Directory::with_seed(
            JsonFileStore::new(&path),
            SequentialIds::new(),
            Vec::new(),
        );
        directory
            .create(draft("Ada", "Lovelace", "Engineering", 1_234_567.89))
            .unwrap();
        directory
            .create(draft("Grace", "Hopper", "Product", 150_000.0))
            .unwrap();
        directory.employees().to_vec()
    };

    let reloaded = Directory::with_seed(
        JsonFileStore::new(&path),
        SequentialIds::new(),
        Vec::new(),
    );
    assert_eq!(reloaded.employees(), written);
}

#[test]
fn corrupt_slot_falls_back_to_the_seed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("employees.json");
    std::fs::write(&path, "][ not json").unwrap();

    let directory = Directory::open(JsonFileStore::new(&path), SequentialIds::new());
    assert_eq!(directory.employees(), sample_employees());
}

#[test]
fn every_mutation_is_written_through() {
    let store = InMemoryStore::new();
    let mut directory =
        Directory::with_seed(store.clone(), SequentialIds::new(), Vec::new());

    let ada = directory
        .create(draft("Ada", "Lovelace", "Engineering", 100_000.0))
        .unwrap();
    assert_eq!(store.load(Vec::new()), [ada.clone()]);

    directory
        .update(&ada.id, draft("Ada", "King", "Engineering", 110_000.0))
        .unwrap();
    assert_eq!(store.load(Vec::new())[0].last_name, "King");

    directory.delete(&ada.id);
    assert!(store.load(Vec::new()).is_empty());
}

#[test]
fn written_document_uses_camel_case_keys_and_iso_dates() {
    let store = InMemoryStore::new();
    let mut directory =
        Directory::with_seed(store.clone(), SequentialIds::new(), Vec::new());
    directory
        .create(draft("Ada", "Lovelace", "Engineering", 100_000.0))
        .unwrap();

    let document = store.raw().expect("saved on create");
    let json: serde_json::Value = serde_json::from_str(&document).unwrap();
    let record = &json[0];

    assert_eq!(record["firstName"], "Ada");
    assert_eq!(record["hireDate"], "2020-01-15");
    assert_eq!(record["salary"], 100_000.0);
    assert!(record.get("first_name").is_none());
}

#[test]
fn salary_round_trips_without_precision_loss() {
    let store = InMemoryStore::new();
    let mut directory =
        Directory::with_seed(store.clone(), SequentialIds::new(), Vec::new());

    directory
        .create(draft("Ada", "Lovelace", "Engineering", 1_234_567.89))
        .unwrap();

    let reloaded = store.load(Vec::new());
    assert_eq!(reloaded[0].salary, 1_234_567.89);
}
