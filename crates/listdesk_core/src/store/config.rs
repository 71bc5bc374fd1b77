//! Store configuration.

/// Storage key the aggregate snapshot is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "property-store";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub storage_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}
