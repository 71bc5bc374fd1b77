//! Aggregate state and its persisted envelope.
//!
//! # Invariants
//! - The whole aggregate is encoded as one JSON document.
//! - Collection order survives encode/decode unchanged.

use crate::model::inquiry::CustomerInquiry;
use crate::model::property::Property;
use crate::model::property_list::PropertyList;
use crate::model::traffic::TrafficSource;
use crate::store::error::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};

/// Envelope version written by this crate.
pub const STATE_FORMAT_VERSION: u32 = 0;

/// The four collections owned by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreState {
    pub properties: Vec<Property>,
    pub lists: Vec<PropertyList>,
    pub inquiries: Vec<CustomerInquiry>,
    pub traffic_sources: Vec<TrafficSource>,
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    state: &'a StoreState,
    version: u32,
}

#[derive(Deserialize)]
struct Envelope {
    state: StoreState,
    #[serde(default)]
    version: u32,
}

/// Serializes `state` into the persisted envelope.
pub fn encode_state(state: &StoreState) -> StoreResult<String> {
    let envelope = EnvelopeRef {
        state,
        version: STATE_FORMAT_VERSION,
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// Parses a persisted envelope.
///
/// # Errors
/// - `Serialization` for malformed JSON or mismatched field types.
/// - `UnsupportedStateVersion` for envelopes written by another format version.
pub fn decode_state(raw: &str) -> StoreResult<StoreState> {
    let envelope: Envelope = serde_json::from_str(raw)?;
    if envelope.version != STATE_FORMAT_VERSION {
        return Err(StoreError::UnsupportedStateVersion {
            found: envelope.version,
            supported: STATE_FORMAT_VERSION,
        });
    }
    Ok(envelope.state)
}
