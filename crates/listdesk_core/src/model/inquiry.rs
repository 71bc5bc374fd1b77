//! Customer inquiry model.
//!
//! # Invariants
//! - `property_id` is a soft reference; the property may no longer exist.
//! - `created_at` never changes after creation.
//! - Any status may follow any other status.

use crate::model::property::PropertyId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an inquiry.
pub type InquiryId = Uuid;

/// Channel the inquiry arrived through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InquirySource {
    Form,
    WhatsApp,
}

/// Follow-up state of an inquiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InquiryStatus {
    New,
    Contacted,
    Scheduled,
    Closed,
}

impl InquiryStatus {
    pub const ALL: [Self; 4] = [Self::New, Self::Contacted, Self::Scheduled, Self::Closed];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Contacted => "Contacted",
            Self::Scheduled => "Scheduled",
            Self::Closed => "Closed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

/// Caller-supplied inquiry fields. `source` and `status` are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInquiry {
    pub property_id: PropertyId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub source: InquirySource,
    pub status: InquiryStatus,
}

/// Persisted inquiry record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInquiry {
    pub id: InquiryId,
    pub property_id: PropertyId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub source: InquirySource,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    pub status: InquiryStatus,
}

impl CustomerInquiry {
    /// Creates an inquiry record with a generated id.
    pub fn new(request: NewInquiry, now_epoch_ms: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            property_id: request.property_id,
            name: request.name,
            email: request.email,
            phone: request.phone,
            message: request.message,
            source: request.source,
            created_at: now_epoch_ms,
            status: request.status,
        }
    }
}
