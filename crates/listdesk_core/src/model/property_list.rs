//! Shareable property list model.
//!
//! # Responsibility
//! - Hold a named, ordered sequence of property snapshots.
//!
//! # Invariants
//! - Members are copies taken when added; later property edits do not
//!   propagate into the list.
//! - The same property may appear more than once.

use crate::model::property::{Property, PropertyId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Stable identifier for a property list.
pub type ListId = Uuid;

/// Named collection of property snapshots behind one tracking link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyList {
    pub id: ListId,
    pub name: String,
    pub properties: Vec<Property>,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl PropertyList {
    /// Creates an empty list with a generated id.
    pub fn new(name: impl Into<String>, now_epoch_ms: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            properties: Vec::new(),
            created_at: now_epoch_ms,
        }
    }

    /// Appends a copy of `property` to the membership.
    pub fn push_snapshot(&mut self, property: &Property) {
        self.properties.push(property.clone());
    }

    pub fn contains(&self, property_id: PropertyId) -> bool {
        self.properties.iter().any(|member| member.id == property_id)
    }

    /// Membership de-duplicated by property id for display.
    ///
    /// Each id keeps the position of its first occurrence and the snapshot of
    /// its last occurrence.
    pub fn unique_properties(&self) -> Vec<&Property> {
        let mut positions: HashMap<PropertyId, usize> = HashMap::new();
        let mut unique: Vec<&Property> = Vec::new();
        for member in &self.properties {
            match positions.get(&member.id) {
                Some(&index) => unique[index] = member,
                None => {
                    positions.insert(member.id, unique.len());
                    unique.push(member);
                }
            }
        }
        unique
    }
}
