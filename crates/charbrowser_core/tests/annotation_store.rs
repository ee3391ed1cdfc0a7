use charbrowser_core::{
    effective_annotation, Annotation, AnnotationPatch, AnnotationStore, MemoryKeyValueStore,
    ANNOTATION_STORAGE_KEY,
};

fn seeded_storage() -> MemoryKeyValueStore {
    MemoryKeyValueStore::with_value(
        ANNOTATION_STORAGE_KEY,
        r#"{
            "1": {"favorite": false, "comment": "first", "deleted": true},
            "2": {"favorite": true, "comment": "second"},
            "3": {"comment": ""}
        }"#,
    )
}

#[test]
fn load_reads_persisted_map() {
    let storage = seeded_storage();
    let store = AnnotationStore::open(&storage);

    assert_eq!(store.snapshot().len(), 3);
    assert!(store.annotation("1").deleted);
    assert!(store.annotation("2").favorite);
    assert!(store.annotation("3").is_default());
}

#[test]
fn load_without_persisted_state_is_empty() {
    let storage = MemoryKeyValueStore::new();
    let store = AnnotationStore::open(&storage);
    assert!(store.snapshot().is_empty());
    assert_eq!(storage.write_count(), 0);
}

#[test]
fn favorite_update_keeps_other_fields_and_other_ids() {
    let storage = seeded_storage();
    let mut store = AnnotationStore::open(&storage);
    let before = store.snapshot();

    let after = store.update("1", AnnotationPatch::favorite(true)).unwrap();

    let updated = effective_annotation(&after, "1");
    assert!(updated.favorite);
    assert!(updated.deleted);
    assert_eq!(updated.comment, "first");
    for id in ["2", "3", "unknown"] {
        assert_eq!(before.get(id), after.get(id), "id {id} must be untouched");
    }
}

#[test]
fn every_mutation_writes_exactly_once() {
    let storage = MemoryKeyValueStore::new();
    let mut store = AnnotationStore::open(&storage);

    store.toggle_favorite("1").unwrap();
    store.toggle_deleted("1").unwrap();
    store.set_comment("1", "note").unwrap();
    store.update("2", AnnotationPatch::default()).unwrap();

    assert_eq!(storage.write_count(), 4);
}

#[test]
fn update_persists_full_map_under_fixed_key() {
    let storage = MemoryKeyValueStore::new();
    let mut store = AnnotationStore::open(&storage);
    store.toggle_favorite("1").unwrap();
    store.set_comment("2", "hello").unwrap();

    let raw = storage.raw(ANNOTATION_STORAGE_KEY).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["1"]["favorite"], true);
    assert_eq!(value["1"]["deleted"], false);
    assert_eq!(value["2"]["comment"], "hello");

    let reopened = AnnotationStore::open(&storage);
    assert_eq!(*reopened.snapshot(), *store.snapshot());
}

#[test]
fn toggle_favorite_twice_restores_original_value() {
    let storage = seeded_storage();
    let mut store = AnnotationStore::open(&storage);
    let original = store.snapshot();

    for id in ["1", "2", "absent"] {
        store.toggle_favorite(id).unwrap();
        store.toggle_favorite(id).unwrap();
        assert_eq!(
            effective_annotation(&store.snapshot(), id),
            effective_annotation(&original, id)
        );
    }
    assert!(store.snapshot().is_equivalent(&original));
}

#[test]
fn toggle_deleted_defaults_absent_to_false() {
    let storage = MemoryKeyValueStore::new();
    let mut store = AnnotationStore::open(&storage);

    let map = store.toggle_deleted("9").unwrap();
    assert_eq!(
        map.get("9"),
        Some(&Annotation {
            favorite: false,
            comment: String::new(),
            deleted: true,
        })
    );
}

#[test]
fn identical_updates_are_idempotent() {
    let storage = MemoryKeyValueStore::new();
    let mut store = AnnotationStore::open(&storage);

    let first = store.update("5", AnnotationPatch::comment("same")).unwrap();
    let second = store.update("5", AnnotationPatch::comment("same")).unwrap();
    assert_eq!(*first, *second);
}
