//! Property domain model.
//!
//! # Responsibility
//! - Define the canonical property record and its caller-supplied details.
//! - Provide patch semantics for partial updates.
//! - Own the engagement counters (`views`, `qr_code_scans`, `link_clicks`).
//!
//! # Invariants
//! - `id` is generated once and never reused for another property.
//! - Counters start at zero and only ever increase.
//! - `updated_at` is never earlier than `created_at`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a property.
pub type PropertyId = Uuid;

/// Furnishing level advertised for a property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FurnishingStatus {
    #[default]
    Furnished,
    #[serde(rename = "Semi-Furnished")]
    SemiFurnished,
    Unfurnished,
}

impl FurnishingStatus {
    pub const ALL: [Self; 3] = [Self::Furnished, Self::SemiFurnished, Self::Unfurnished];

    /// Display label, identical to the persisted value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Furnished => "Furnished",
            Self::SemiFurnished => "Semi-Furnished",
            Self::Unfurnished => "Unfurnished",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

/// Move-in window advertised for a property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    #[default]
    Immediate,
    #[serde(rename = "Within 15 Days")]
    Within15Days,
    #[serde(rename = "Within 30 Days")]
    Within30Days,
    #[serde(rename = "After 30 Days")]
    After30Days,
}

impl Availability {
    pub const ALL: [Self; 4] = [
        Self::Immediate,
        Self::Within15Days,
        Self::Within30Days,
        Self::After30Days,
    ];

    /// Display label, identical to the persisted value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Immediate => "Immediate",
            Self::Within15Days => "Within 15 Days",
            Self::Within30Days => "Within 30 Days",
            Self::After30Days => "After 30 Days",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|availability| availability.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

/// Engagement counter carried by every property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyMetric {
    Views,
    QrCodeScans,
    LinkClicks,
}

impl PropertyMetric {
    pub const ALL: [Self; 3] = [Self::Views, Self::QrCodeScans, Self::LinkClicks];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Views => "views",
            Self::QrCodeScans => "qrCodeScans",
            Self::LinkClicks => "linkClicks",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|metric| metric.as_str() == value.trim())
    }
}

/// Caller-supplied property fields.
///
/// Everything a property carries except identity, timestamps and counters,
/// which the store assigns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDetails {
    pub title: String,
    pub developer: String,
    pub price: u64,
    pub rental_value: u64,
    pub security_deposit: u64,
    pub furnishing_status: FurnishingStatus,
    /// Super built-up area in square feet.
    pub super_area: u64,
    pub availability: Availability,
    pub floor_number: u32,
    pub total_floors: u32,
    pub bathrooms: u32,
    /// Age of the building in years.
    pub construction_age: u32,
    pub address: String,
    pub landmarks: Vec<String>,
    pub overlooking: Vec<String>,
    pub description: String,
    pub amenities: Vec<String>,
    /// Image URLs in display order.
    pub images: Vec<String>,
    pub tenant_preferences: Vec<String>,
}

/// Canonical property record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: PropertyId,
    #[serde(flatten)]
    pub details: PropertyDetails,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Unix epoch milliseconds. Refreshed on every update.
    pub updated_at: i64,
    pub views: u64,
    pub qr_code_scans: u64,
    pub link_clicks: u64,
}

impl Property {
    /// Creates a property with a generated id and zeroed counters.
    pub fn new(details: PropertyDetails, now_epoch_ms: i64) -> Self {
        Self::with_id(Uuid::new_v4(), details, now_epoch_ms)
    }

    /// Creates a property with a caller-provided id.
    ///
    /// Used by import paths and tests where identity already exists.
    pub fn with_id(id: PropertyId, details: PropertyDetails, now_epoch_ms: i64) -> Self {
        Self {
            id,
            details,
            created_at: now_epoch_ms,
            updated_at: now_epoch_ms,
            views: 0,
            qr_code_scans: 0,
            link_clicks: 0,
        }
    }

    pub fn title(&self) -> &str {
        self.details.title.as_str()
    }

    /// Returns the current value of one counter.
    pub fn metric(&self, metric: PropertyMetric) -> u64 {
        match metric {
            PropertyMetric::Views => self.views,
            PropertyMetric::QrCodeScans => self.qr_code_scans,
            PropertyMetric::LinkClicks => self.link_clicks,
        }
    }

    /// Adds exactly one to the named counter.
    pub fn increment_metric(&mut self, metric: PropertyMetric) {
        let counter = match metric {
            PropertyMetric::Views => &mut self.views,
            PropertyMetric::QrCodeScans => &mut self.qr_code_scans,
            PropertyMetric::LinkClicks => &mut self.link_clicks,
        };
        *counter = counter.saturating_add(1);
    }

    /// Merges `patch` into the details and moves `updated_at` forward.
    ///
    /// `updated_at` always ends strictly greater than its previous value, even
    /// when `now_epoch_ms` has not advanced past it.
    pub fn apply_patch(&mut self, patch: &PropertyPatch, now_epoch_ms: i64) {
        patch.apply_to(&mut self.details);
        self.updated_at = now_epoch_ms.max(self.updated_at.saturating_add(1));
    }
}

/// Partial update for [`PropertyDetails`]. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyPatch {
    pub title: Option<String>,
    pub developer: Option<String>,
    pub price: Option<u64>,
    pub rental_value: Option<u64>,
    pub security_deposit: Option<u64>,
    pub furnishing_status: Option<FurnishingStatus>,
    pub super_area: Option<u64>,
    pub availability: Option<Availability>,
    pub floor_number: Option<u32>,
    pub total_floors: Option<u32>,
    pub bathrooms: Option<u32>,
    pub construction_age: Option<u32>,
    pub address: Option<String>,
    pub landmarks: Option<Vec<String>>,
    pub overlooking: Option<Vec<String>>,
    pub description: Option<String>,
    pub amenities: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub tenant_preferences: Option<Vec<String>>,
}

impl PropertyPatch {
    /// Returns whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn apply_to(&self, details: &mut PropertyDetails) {
        fn merge<T: Clone>(target: &mut T, value: &Option<T>) {
            if let Some(value) = value {
                *target = value.clone();
            }
        }

        merge(&mut details.title, &self.title);
        merge(&mut details.developer, &self.developer);
        merge(&mut details.price, &self.price);
        merge(&mut details.rental_value, &self.rental_value);
        merge(&mut details.security_deposit, &self.security_deposit);
        merge(&mut details.furnishing_status, &self.furnishing_status);
        merge(&mut details.super_area, &self.super_area);
        merge(&mut details.availability, &self.availability);
        merge(&mut details.floor_number, &self.floor_number);
        merge(&mut details.total_floors, &self.total_floors);
        merge(&mut details.bathrooms, &self.bathrooms);
        merge(&mut details.construction_age, &self.construction_age);
        merge(&mut details.address, &self.address);
        merge(&mut details.landmarks, &self.landmarks);
        merge(&mut details.overlooking, &self.overlooking);
        merge(&mut details.description, &self.description);
        merge(&mut details.amenities, &self.amenities);
        merge(&mut details.images, &self.images);
        merge(&mut details.tenant_preferences, &self.tenant_preferences);
    }
}

/// Splits comma-separated form input into trimmed, non-empty entries.
///
/// Entry order is preserved because list fields are rendered in order.
pub fn split_list_field(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{
        split_list_field, Availability, FurnishingStatus, Property, PropertyDetails,
        PropertyMetric, PropertyPatch,
    };

    #[test]
    fn categorical_values_round_trip_through_labels() {
        for status in FurnishingStatus::ALL {
            assert_eq!(FurnishingStatus::parse(status.as_str()), Some(status));
        }
        for availability in Availability::ALL {
            assert_eq!(Availability::parse(availability.as_str()), Some(availability));
        }
        assert_eq!(Availability::parse("someday"), None);
    }

    #[test]
    fn categorical_values_serialize_as_display_labels() {
        let json = serde_json::to_string(&FurnishingStatus::SemiFurnished).unwrap();
        assert_eq!(json, "\"Semi-Furnished\"");
        let json = serde_json::to_string(&Availability::Within15Days).unwrap();
        assert_eq!(json, "\"Within 15 Days\"");
    }

    #[test]
    fn metric_names_match_persisted_field_names() {
        assert_eq!(PropertyMetric::parse("qrCodeScans"), Some(PropertyMetric::QrCodeScans));
        assert_eq!(PropertyMetric::parse("clicks"), None);
    }

    #[test]
    fn new_property_starts_with_zero_counters() {
        let property = Property::new(PropertyDetails::default(), 1_000);
        assert_eq!(property.created_at, 1_000);
        assert_eq!(property.updated_at, 1_000);
        for metric in PropertyMetric::ALL {
            assert_eq!(property.metric(metric), 0);
        }
    }

    #[test]
    fn increment_touches_only_the_named_counter() {
        let mut property = Property::new(PropertyDetails::default(), 0);
        property.increment_metric(PropertyMetric::LinkClicks);
        property.increment_metric(PropertyMetric::LinkClicks);
        assert_eq!(property.link_clicks, 2);
        assert_eq!(property.views, 0);
        assert_eq!(property.qr_code_scans, 0);
    }

    #[test]
    fn patch_merges_only_present_fields_and_bumps_updated_at() {
        let details = PropertyDetails {
            title: "Old".to_string(),
            price: 500,
            ..PropertyDetails::default()
        };
        let mut property = Property::new(details, 10);
        let patch = PropertyPatch {
            title: Some("New".to_string()),
            ..PropertyPatch::default()
        };

        property.apply_patch(&patch, 10);

        assert_eq!(property.title(), "New");
        assert_eq!(property.details.price, 500);
        assert_eq!(property.updated_at, 11);
        assert!(PropertyPatch::default().is_empty());
        assert!(!patch.is_empty());
    }

    #[test]
    fn property_serializes_with_flat_camel_case_fields() {
        let property = Property::new(PropertyDetails::default(), 5);
        let value = serde_json::to_value(&property).unwrap();
        assert!(value.get("rentalValue").is_some());
        assert!(value.get("qrCodeScans").is_some());
        assert!(value.get("details").is_none());
    }

    #[test]
    fn split_list_field_trims_and_drops_empty_entries() {
        assert_eq!(
            split_list_field(" Gym, Pool ,, Parking "),
            vec!["Gym", "Pool", "Parking"]
        );
        assert!(split_list_field("").is_empty());
    }
}
