//! Store error taxonomy.

use crate::model::inquiry::InquiryId;
use crate::model::property::PropertyId;
use crate::model::property_list::ListId;
use crate::storage::StorageError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors returned by `PropertyStore` operations.
///
/// Not-found variants leave state and storage untouched.
#[derive(Debug)]
pub enum StoreError {
    PropertyNotFound(PropertyId),
    ListNotFound(ListId),
    InquiryNotFound(InquiryId),
    Storage(StorageError),
    Serialization(serde_json::Error),
    UnsupportedStateVersion { found: u32, supported: u32 },
}

impl StoreError {
    /// Returns whether the error only reports an unknown id.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::PropertyNotFound(_) | Self::ListNotFound(_) | Self::InquiryNotFound(_)
        )
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PropertyNotFound(id) => write!(f, "property not found: {id}"),
            Self::ListNotFound(id) => write!(f, "property list not found: {id}"),
            Self::InquiryNotFound(id) => write!(f, "inquiry not found: {id}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::Serialization(err) => write!(f, "invalid persisted state: {err}"),
            Self::UnsupportedStateVersion { found, supported } => write!(
                f,
                "persisted state version {found} is not supported (expected {supported})"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Serialization(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}
