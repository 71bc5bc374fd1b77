use listdesk_core::db::{open_db, open_db_in_memory};
use listdesk_core::store::{decode_state, DEFAULT_STORAGE_KEY};
use listdesk_core::{
    Availability, FurnishingStatus, InquirySource, InquiryStatus, ManualClock,
    MemoryStateStorage, NewInquiry, PropertyDetails, PropertyMetric, PropertyStore,
    SqliteStateStorage, StateStorage, StorageError, StorageResult, StoreConfig, StoreError,
};
use std::cell::Cell;

fn populate<S: StateStorage>(store: &mut PropertyStore<S, ManualClock>) {
    let id = store
        .add_property(PropertyDetails {
            title: "Skyline 3BHK".to_string(),
            developer: "Lodha".to_string(),
            price: 750_000,
            rental_value: 45_000,
            security_deposit: 90_000,
            furnishing_status: FurnishingStatus::SemiFurnished,
            super_area: 1_450,
            availability: Availability::Within15Days,
            floor_number: 12,
            total_floors: 30,
            bathrooms: 3,
            construction_age: 2,
            address: "Worli, Mumbai".to_string(),
            landmarks: vec!["Sea Link".to_string(), "Atria Mall".to_string()],
            overlooking: vec!["Sea".to_string()],
            description: "Corner unit".to_string(),
            amenities: vec!["Gym".to_string(), "Pool".to_string()],
            images: vec!["a.jpg".to_string(), "b.jpg".to_string()],
            tenant_preferences: vec!["Family".to_string()],
        })
        .unwrap();
    store
        .increment_property_metric(id, PropertyMetric::LinkClicks)
        .unwrap();
    let snapshot = store.property(id).unwrap().clone();
    let list_id = store.create_list("Downtown").unwrap();
    store.add_property_to_list(list_id, &snapshot).unwrap();
    store.add_property_to_list(list_id, &snapshot).unwrap();
    store
        .add_inquiry(NewInquiry {
            property_id: id,
            name: "Ravi".to_string(),
            email: "ravi@example.com".to_string(),
            phone: "9000000000".to_string(),
            message: "Visit on Sunday?".to_string(),
            source: InquirySource::WhatsApp,
            status: InquiryStatus::Contacted,
        })
        .unwrap();
    store.record_traffic("Shared Link").unwrap();
    store.record_traffic("Shared Link").unwrap();
}

#[test]
fn reopening_a_database_file_restores_identical_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("listdesk.sqlite3");
    let clock = ManualClock::new(1_710_000_000_000);

    let expected = {
        let conn = open_db(&path).unwrap();
        let storage = SqliteStateStorage::try_new(&conn).unwrap();
        let mut store =
            PropertyStore::open_with(storage, clock.clone(), StoreConfig::default()).unwrap();
        populate(&mut store);
        store.state().clone()
    };

    let conn = open_db(&path).unwrap();
    let storage = SqliteStateStorage::try_new(&conn).unwrap();
    let reopened = PropertyStore::open_with(storage, clock, StoreConfig::default()).unwrap();

    assert_eq!(reopened.state(), &expected);
    assert_eq!(reopened.lists()[0].properties.len(), 2);
    assert_eq!(
        reopened.properties()[0].details.landmarks,
        vec!["Sea Link", "Atria Mall"]
    );
}

#[test]
fn every_mutation_rewrites_the_persisted_blob() {
    let storage = MemoryStateStorage::new();
    let mut store =
        PropertyStore::open_with(&storage, ManualClock::new(0), StoreConfig::default()).unwrap();
    assert!(storage.is_empty());

    let list_id = store.create_list("Weekend").unwrap();
    let raw = storage.read(DEFAULT_STORAGE_KEY).unwrap().unwrap();
    let persisted = decode_state(&raw).unwrap();
    assert_eq!(persisted.lists.len(), 1);
    assert_eq!(persisted.lists[0].id, list_id);

    store.record_traffic("Shared Link").unwrap();
    let raw = storage.read(DEFAULT_STORAGE_KEY).unwrap().unwrap();
    assert_eq!(&decode_state(&raw).unwrap(), store.state());
}

#[test]
fn persisted_layout_uses_display_values_and_iso_dates() {
    let storage = MemoryStateStorage::new();
    let mut store =
        PropertyStore::open_with(&storage, ManualClock::new(0), StoreConfig::default()).unwrap();
    populate(&mut store);

    let raw = storage.read(DEFAULT_STORAGE_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let state = &value["state"];
    assert_eq!(value["version"], 0);
    assert_eq!(state["properties"][0]["furnishingStatus"], "Semi-Furnished");
    assert_eq!(state["properties"][0]["availability"], "Within 15 Days");
    assert_eq!(state["properties"][0]["linkClicks"], 1);
    assert_eq!(state["inquiries"][0]["source"], "WhatsApp");
    assert_eq!(state["trafficSources"][0]["date"], "1970-01-01");
    assert_eq!(state["trafficSources"][0]["visits"], 2);
}

#[test]
fn custom_storage_key_is_respected() {
    let storage = MemoryStateStorage::new();
    let config = StoreConfig {
        storage_key: "listdesk-staging".to_string(),
    };
    let mut store = PropertyStore::open_with(&storage, ManualClock::new(0), config).unwrap();
    store.create_list("Staging").unwrap();

    assert!(storage.read("listdesk-staging").unwrap().is_some());
    assert!(storage.read(DEFAULT_STORAGE_KEY).unwrap().is_none());
}

#[test]
fn unreadable_snapshot_fails_open() {
    let storage = MemoryStateStorage::new();
    storage
        .write(DEFAULT_STORAGE_KEY, r#"{"state":{},"version":3}"#)
        .unwrap();
    let result = PropertyStore::open(&storage);
    assert!(matches!(
        result,
        Err(StoreError::UnsupportedStateVersion { found: 3, .. })
    ));

    storage.write(DEFAULT_STORAGE_KEY, "not json").unwrap();
    let result = PropertyStore::open(&storage);
    assert!(matches!(result, Err(StoreError::Serialization(_))));
}

/// Storage that starts refusing writes once `fail_writes` is set.
#[derive(Default)]
struct FlakyStorage {
    inner: MemoryStateStorage,
    fail_writes: Cell<bool>,
}

impl StateStorage for FlakyStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.read(key)
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.fail_writes.get() {
            return Err(StorageError::Unavailable("quota exceeded".to_string()));
        }
        self.inner.write(key, value)
    }
}

#[test]
fn failed_write_keeps_last_persisted_state_in_memory() {
    let storage = FlakyStorage::default();
    let mut store =
        PropertyStore::open_with(&storage, ManualClock::new(0), StoreConfig::default()).unwrap();
    store.create_list("Kept").unwrap();
    let before = store.state().clone();

    storage.fail_writes.set(true);
    let err = store.create_list("Lost").unwrap_err();

    assert!(matches!(
        err,
        StoreError::Storage(StorageError::Unavailable(_))
    ));
    assert_eq!(store.state(), &before);

    storage.fail_writes.set(false);
    store.create_list("Recovered").unwrap();
    let names: Vec<&str> = store.lists().iter().map(|list| list.name.as_str()).collect();
    assert_eq!(names, vec!["Kept", "Recovered"]);
}

#[test]
fn sqlite_storage_upserts_values() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStateStorage::try_new(&conn).unwrap();

    assert_eq!(storage.read("k").unwrap(), None);
    storage.write("k", "one").unwrap();
    storage.write("k", "two").unwrap();

    assert_eq!(storage.read("k").unwrap().as_deref(), Some("two"));
    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM kv_store;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}
