use listdesk_core::query::analytics::{metric_totals, property_performance, traffic_by_source};
use listdesk_core::query::inquiries::{
    filter_inquiries, inquiry_property_title, UNKNOWN_PROPERTY_TITLE,
};
use listdesk_core::query::properties::{filter_properties, similar_properties, PropertyFilter};
use listdesk_core::{
    FurnishingStatus, InquirySource, InquiryStatus, ManualClock, MemoryStateStorage, NewInquiry,
    PropertyDetails, PropertyId, PropertyMetric, PropertyStore, StoreConfig,
};

fn store() -> TestStore {
    PropertyStore::open_with(
        MemoryStateStorage::new(),
        ManualClock::new(0),
        StoreConfig::default(),
    )
    .unwrap()
}

type TestStore = PropertyStore<MemoryStateStorage, ManualClock>;

fn add(store: &mut TestStore, title: &str, price: u64) -> PropertyId {
    store
        .add_property(PropertyDetails {
            title: title.to_string(),
            price,
            ..PropertyDetails::default()
        })
        .unwrap()
}

fn inquiry(property_id: PropertyId, status: InquiryStatus) -> NewInquiry {
    NewInquiry {
        property_id,
        name: "Meera".to_string(),
        email: "meera@example.com".to_string(),
        phone: "9111111111".to_string(),
        message: "Details please".to_string(),
        source: InquirySource::Form,
        status,
    }
}

#[test]
fn inquiry_titles_fall_back_for_deleted_properties() {
    let mut store = store();
    let kept = add(&mut store, "Kept", 100);
    let gone = add(&mut store, "Gone", 100);
    store.add_inquiry(inquiry(kept, InquiryStatus::New)).unwrap();
    store.add_inquiry(inquiry(gone, InquiryStatus::Closed)).unwrap();
    store.delete_property(gone).unwrap();

    let titles: Vec<&str> = store
        .inquiries()
        .iter()
        .map(|item| inquiry_property_title(store.properties(), item))
        .collect();
    assert_eq!(titles, vec!["Kept", UNKNOWN_PROPERTY_TITLE]);
}

#[test]
fn inquiries_filter_by_status() {
    let mut store = store();
    let id = add(&mut store, "A", 100);
    store.add_inquiry(inquiry(id, InquiryStatus::New)).unwrap();
    store.add_inquiry(inquiry(id, InquiryStatus::Scheduled)).unwrap();
    store.add_inquiry(inquiry(id, InquiryStatus::New)).unwrap();

    assert_eq!(filter_inquiries(store.inquiries(), None).len(), 3);
    assert_eq!(
        filter_inquiries(store.inquiries(), Some(InquiryStatus::New)).len(),
        2
    );
    assert!(filter_inquiries(store.inquiries(), Some(InquiryStatus::Closed)).is_empty());
}

#[test]
fn analytics_reflect_store_counters_and_traffic() {
    let mut store = store();
    let a = add(&mut store, "A", 100);
    let b = add(&mut store, "B", 200);
    store.increment_property_metric(a, PropertyMetric::Views).unwrap();
    store.increment_property_metric(b, PropertyMetric::Views).unwrap();
    store.increment_property_metric(b, PropertyMetric::LinkClicks).unwrap();
    store.record_traffic("Shared Link").unwrap();
    store.clock().advance_days(1);
    store.record_traffic("Shared Link").unwrap();

    let totals = metric_totals(store.properties());
    assert_eq!(totals.views, 2);
    assert_eq!(totals.link_clicks, 1);
    assert_eq!(totals.qr_code_scans, 0);

    let performance = property_performance(store.properties());
    assert_eq!(performance[1].name, "B");
    assert_eq!(performance[1].clicks, 1);

    let traffic = traffic_by_source(store.traffic_sources());
    assert_eq!(store.traffic_sources().len(), 2);
    assert_eq!(traffic.len(), 1);
    assert_eq!(traffic[0].visits, 2);
}

#[test]
fn browsing_queries_work_over_store_snapshot() {
    let mut store = store();
    let target = add(&mut store, "Target", 1_000);
    add(&mut store, "Close", 1_100);
    add(&mut store, "Far", 5_000);

    let mut filter = PropertyFilter {
        max_price: 2_000,
        ..PropertyFilter::default()
    };
    assert_eq!(filter_properties(store.properties(), &filter).len(), 2);
    filter.toggle_furnishing(FurnishingStatus::Unfurnished);
    assert!(filter_properties(store.properties(), &filter).is_empty());

    let target = store.property(target).unwrap();
    let similar = similar_properties(store.properties(), target, 3);
    assert_eq!(similar.len(), 1);
    assert_eq!(similar[0].title(), "Close");
}
