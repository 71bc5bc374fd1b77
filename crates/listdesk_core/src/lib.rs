//! Core domain logic for ListDesk, a single-operator property listing manager.
//! This crate owns the listing state, its persistence and every invariant on it.

pub mod db;
pub mod logging;
pub mod model;
pub mod query;
pub mod share;
pub mod storage;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::inquiry::{CustomerInquiry, InquiryId, InquirySource, InquiryStatus, NewInquiry};
pub use model::property::{
    split_list_field, Availability, FurnishingStatus, Property, PropertyDetails, PropertyId,
    PropertyMetric, PropertyPatch,
};
pub use model::property_list::{ListId, PropertyList};
pub use model::traffic::{TrafficSource, TrafficSourceId, SHARED_LINK_SOURCE};
pub use storage::{
    MemoryStateStorage, SqliteStateStorage, StateStorage, StorageError, StorageResult,
};
pub use store::{
    Clock, ManualClock, PropertyStore, StoreConfig, StoreError, StoreResult, StoreState,
    SystemClock,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
