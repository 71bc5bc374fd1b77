//! Property browsing queries.

use crate::model::property::{Availability, FurnishingStatus, Property};

/// Upper bound of the default price window.
pub const DEFAULT_MAX_PRICE: u64 = 1_000_000;
/// Number of similar properties shown next to a property.
pub const SIMILAR_DEFAULT_LIMIT: usize = 3;
/// Similar properties differ in price by at most `1 / SIMILAR_PRICE_DIVISOR`
/// of the reference price (20%).
const SIMILAR_PRICE_DIVISOR: u64 = 5;

/// Browse filter over price, furnishing and availability.
///
/// Empty category sets match every value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyFilter {
    pub min_price: u64,
    pub max_price: u64,
    pub furnishing: Vec<FurnishingStatus>,
    pub availability: Vec<Availability>,
}

impl Default for PropertyFilter {
    fn default() -> Self {
        Self {
            min_price: 0,
            max_price: DEFAULT_MAX_PRICE,
            furnishing: Vec::new(),
            availability: Vec::new(),
        }
    }
}

impl PropertyFilter {
    pub fn matches(&self, property: &Property) -> bool {
        let details = &property.details;
        details.price >= self.min_price
            && details.price <= self.max_price
            && (self.furnishing.is_empty()
                || self.furnishing.contains(&details.furnishing_status))
            && (self.availability.is_empty()
                || self.availability.contains(&details.availability))
    }

    /// Adds `status` to the furnishing set, or removes it when present.
    pub fn toggle_furnishing(&mut self, status: FurnishingStatus) {
        toggle(&mut self.furnishing, status);
    }

    /// Adds `availability` to the availability set, or removes it when present.
    pub fn toggle_availability(&mut self, availability: Availability) {
        toggle(&mut self.availability, availability);
    }
}

fn toggle<T: PartialEq>(values: &mut Vec<T>, value: T) {
    if let Some(index) = values.iter().position(|current| *current == value) {
        values.remove(index);
    } else {
        values.push(value);
    }
}

/// Returns properties accepted by `filter`, in input order.
pub fn filter_properties<'a>(
    properties: &'a [Property],
    filter: &PropertyFilter,
) -> Vec<&'a Property> {
    properties
        .iter()
        .filter(|property| filter.matches(property))
        .collect()
}

/// Returns up to `limit` other properties priced within 20% of `target`.
///
/// A zero-priced target has no similar properties.
pub fn similar_properties<'a>(
    properties: &'a [Property],
    target: &Property,
    limit: usize,
) -> Vec<&'a Property> {
    let reference = target.details.price;
    if reference == 0 {
        return Vec::new();
    }

    properties
        .iter()
        .filter(|candidate| candidate.id != target.id)
        .filter(|candidate| {
            candidate.details.price.abs_diff(reference).saturating_mul(SIMILAR_PRICE_DIVISOR)
                <= reference
        })
        .take(limit)
        .collect()
}
