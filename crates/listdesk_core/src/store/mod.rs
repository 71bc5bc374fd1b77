//! Listing state store.
//!
//! # Responsibility
//! - Own the four collections (properties, lists, inquiries, traffic).
//! - Route every mutation through a named operation.
//! - Persist the full aggregate after each successful mutation.
//!
//! # Invariants
//! - Ids are unique within their collection.
//! - Property counters never decrease.
//! - At most one traffic record exists per `(name, date)`.
//! - In-memory state only changes after the new snapshot is persisted.
//! - Unknown ids yield a not-found error and change nothing.

mod clock;
mod config;
mod error;
mod snapshot;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{StoreConfig, DEFAULT_STORAGE_KEY};
pub use error::{StoreError, StoreResult};
pub use snapshot::{decode_state, encode_state, StoreState, STATE_FORMAT_VERSION};

use crate::model::inquiry::{CustomerInquiry, InquiryId, InquiryStatus, NewInquiry};
use crate::model::property::{
    Property, PropertyDetails, PropertyId, PropertyMetric, PropertyPatch,
};
use crate::model::property_list::{ListId, PropertyList};
use crate::model::traffic::{TrafficSource, TrafficSourceId, SHARED_LINK_SOURCE};
use crate::storage::StateStorage;
use log::{debug, error, info, warn};
use std::time::Instant;

/// Single source of truth for listing state.
///
/// Mutations take `&mut self`; reads borrow the current snapshot.
pub struct PropertyStore<S: StateStorage, C: Clock = SystemClock> {
    storage: S,
    clock: C,
    config: StoreConfig,
    state: StoreState,
}

impl<S: StateStorage> PropertyStore<S, SystemClock> {
    /// Opens a store on the wall clock with default configuration.
    pub fn open(storage: S) -> StoreResult<Self> {
        Self::open_with(storage, SystemClock, StoreConfig::default())
    }
}

impl<S: StateStorage, C: Clock> PropertyStore<S, C> {
    /// Loads the persisted snapshot under `config.storage_key`, or starts
    /// empty when nothing has been persisted yet.
    ///
    /// # Errors
    /// - `Storage` when the substrate cannot be read.
    /// - `Serialization` / `UnsupportedStateVersion` for unreadable snapshots.
    pub fn open_with(storage: S, clock: C, config: StoreConfig) -> StoreResult<Self> {
        let started_at = Instant::now();
        let state = match storage.read(&config.storage_key) {
            Ok(Some(raw)) => decode_state(&raw).inspect_err(|err| {
                error!(
                    "event=store_open module=store status=error key={} error_code=state_decode_failed error={err}",
                    config.storage_key
                );
            })?,
            Ok(None) => StoreState::default(),
            Err(err) => {
                error!(
                    "event=store_open module=store status=error key={} error_code=storage_read_failed error={err}",
                    config.storage_key
                );
                return Err(err.into());
            }
        };

        info!(
            "event=store_open module=store status=ok key={} properties={} lists={} inquiries={} traffic_sources={} duration_ms={}",
            config.storage_key,
            state.properties.len(),
            state.lists.len(),
            state.inquiries.len(),
            state.traffic_sources.len(),
            started_at.elapsed().as_millis()
        );

        Ok(Self {
            storage,
            clock,
            config,
            state,
        })
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    pub fn properties(&self) -> &[Property] {
        &self.state.properties
    }

    pub fn lists(&self) -> &[PropertyList] {
        &self.state.lists
    }

    pub fn inquiries(&self) -> &[CustomerInquiry] {
        &self.state.inquiries
    }

    pub fn traffic_sources(&self) -> &[TrafficSource] {
        &self.state.traffic_sources
    }

    pub fn property(&self, id: PropertyId) -> Option<&Property> {
        self.state.properties.iter().find(|property| property.id == id)
    }

    pub fn list(&self, id: ListId) -> Option<&PropertyList> {
        self.state.lists.iter().find(|list| list.id == id)
    }

    pub fn inquiry(&self, id: InquiryId) -> Option<&CustomerInquiry> {
        self.state.inquiries.iter().find(|inquiry| inquiry.id == id)
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Releases the storage substrate.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Appends an empty list. Names need not be unique.
    pub fn create_list(&mut self, name: impl Into<String>) -> StoreResult<ListId> {
        let list = PropertyList::new(name, self.clock.now_epoch_ms());
        let list_id = list.id;

        let mut next = self.state.clone();
        next.lists.push(list);
        self.commit(next, "list_create")?;

        info!("event=list_create module=store status=ok list_id={list_id}");
        Ok(list_id)
    }

    /// Appends a copy of `property` to the list's membership.
    ///
    /// The same property may be added repeatedly; each call appends.
    pub fn add_property_to_list(
        &mut self,
        list_id: ListId,
        property: &Property,
    ) -> StoreResult<()> {
        let Some(index) = self.list_index(list_id) else {
            warn!("event=list_add_property module=store status=not_found list_id={list_id}");
            return Err(StoreError::ListNotFound(list_id));
        };

        let mut next = self.state.clone();
        next.lists[index].push_snapshot(property);
        self.commit(next, "list_add_property")?;

        info!(
            "event=list_add_property module=store status=ok list_id={list_id} property_id={}",
            property.id
        );
        Ok(())
    }

    /// Creates a property with a new id, current timestamps and zero counters.
    pub fn add_property(&mut self, details: PropertyDetails) -> StoreResult<PropertyId> {
        let property = Property::new(details, self.clock.now_epoch_ms());
        let property_id = property.id;

        let mut next = self.state.clone();
        next.properties.push(property);
        self.commit(next, "property_add")?;

        info!("event=property_add module=store status=ok property_id={property_id}");
        Ok(property_id)
    }

    /// Merges `patch` into the property and refreshes `updated_at`.
    pub fn update_property(&mut self, id: PropertyId, patch: &PropertyPatch) -> StoreResult<()> {
        let index = self.property_index(id, "property_update")?;

        let mut next = self.state.clone();
        next.properties[index].apply_patch(patch, self.clock.now_epoch_ms());
        self.commit(next, "property_update")?;

        info!("event=property_update module=store status=ok property_id={id}");
        Ok(())
    }

    /// Removes the property from the top-level collection.
    ///
    /// List snapshots and inquiry references to it are left in place.
    pub fn delete_property(&mut self, id: PropertyId) -> StoreResult<()> {
        let index = self.property_index(id, "property_delete")?;

        let mut next = self.state.clone();
        next.properties.remove(index);
        self.commit(next, "property_delete")?;

        info!("event=property_delete module=store status=ok property_id={id}");
        Ok(())
    }

    /// Records an inquiry. `source` and `status` come from the caller as-is.
    pub fn add_inquiry(&mut self, request: NewInquiry) -> StoreResult<InquiryId> {
        let inquiry = CustomerInquiry::new(request, self.clock.now_epoch_ms());
        let inquiry_id = inquiry.id;

        let mut next = self.state.clone();
        next.inquiries.push(inquiry);
        self.commit(next, "inquiry_add")?;

        info!("event=inquiry_add module=store status=ok inquiry_id={inquiry_id}");
        Ok(inquiry_id)
    }

    /// Sets the inquiry status. Any status may follow any other.
    pub fn update_inquiry_status(
        &mut self,
        id: InquiryId,
        status: InquiryStatus,
    ) -> StoreResult<()> {
        let position = self.state.inquiries.iter().position(|inquiry| inquiry.id == id);
        let Some(index) = position else {
            warn!("event=inquiry_update_status module=store status=not_found inquiry_id={id}");
            return Err(StoreError::InquiryNotFound(id));
        };

        let mut next = self.state.clone();
        next.inquiries[index].status = status;
        self.commit(next, "inquiry_update_status")?;

        info!(
            "event=inquiry_update_status module=store status=ok inquiry_id={id} inquiry_status={}",
            status.as_str()
        );
        Ok(())
    }

    /// Counts one visit from `source_name` on the current UTC day.
    ///
    /// Returns the id of the record that holds the visit.
    pub fn record_traffic(&mut self, source_name: &str) -> StoreResult<TrafficSourceId> {
        let today = self.clock.today();

        let mut next = self.state.clone();
        let record_id = match next
            .traffic_sources
            .iter_mut()
            .find(|source| source.matches(source_name, today))
        {
            Some(existing) => {
                existing.visits = existing.visits.saturating_add(1);
                existing.id
            }
            None => {
                let created = TrafficSource::first_visit(source_name, today);
                let id = created.id;
                next.traffic_sources.push(created);
                id
            }
        };
        self.commit(next, "traffic_record")?;

        debug!("event=traffic_record module=store status=ok source={source_name} date={today}");
        Ok(record_id)
    }

    /// Adds exactly one to the named counter of the property.
    pub fn increment_property_metric(
        &mut self,
        id: PropertyId,
        metric: PropertyMetric,
    ) -> StoreResult<()> {
        let index = self.property_index(id, "property_metric")?;

        let mut next = self.state.clone();
        next.properties[index].increment_metric(metric);
        self.commit(next, "property_metric")?;

        debug!(
            "event=property_metric module=store status=ok property_id={id} metric={}",
            metric.as_str()
        );
        Ok(())
    }

    /// Handles an opened public tracking link.
    ///
    /// The visit is counted under `"Shared Link"` even when the list no longer
    /// exists; the list is returned when found.
    pub fn visit_tracking_link(&mut self, list_id: ListId) -> StoreResult<Option<&PropertyList>> {
        self.record_traffic(SHARED_LINK_SOURCE)?;
        let list = self.list(list_id);
        if list.is_none() {
            warn!("event=tracking_visit module=store status=not_found list_id={list_id}");
        }
        Ok(list)
    }

    fn property_index(&self, id: PropertyId, event: &'static str) -> StoreResult<usize> {
        self.state
            .properties
            .iter()
            .position(|property| property.id == id)
            .ok_or_else(|| {
                warn!("event={event} module=store status=not_found property_id={id}");
                StoreError::PropertyNotFound(id)
            })
    }

    fn list_index(&self, id: ListId) -> Option<usize> {
        self.state.lists.iter().position(|list| list.id == id)
    }

    /// Persists `next` and makes it the current snapshot.
    fn commit(&mut self, next: StoreState, event: &'static str) -> StoreResult<()> {
        let started_at = Instant::now();
        let encoded = encode_state(&next)?;
        if let Err(err) = self.storage.write(&self.config.storage_key, &encoded) {
            error!(
                "event={event} module=store status=error error_code=persist_failed bytes={} duration_ms={} error={err}",
                encoded.len(),
                started_at.elapsed().as_millis()
            );
            return Err(err.into());
        }

        debug!(
            "event=store_persist module=store status=ok trigger={event} bytes={} duration_ms={}",
            encoded.len(),
            started_at.elapsed().as_millis()
        );
        self.state = next;
        Ok(())
    }
}
