//! Engagement and traffic aggregates for the analytics screen.

use crate::model::property::{Property, PropertyId};
use crate::model::traffic::TrafficSource;
use serde::Serialize;

/// Sum of every property's counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricTotals {
    pub views: u64,
    pub link_clicks: u64,
    pub qr_code_scans: u64,
}

/// Counters of one property, labelled by title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPerformance {
    pub property_id: PropertyId,
    pub name: String,
    pub views: u64,
    pub clicks: u64,
    pub scans: u64,
}

/// Visits of one source name across all days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrafficSummary {
    pub name: String,
    pub visits: u64,
}

pub fn metric_totals(properties: &[Property]) -> MetricTotals {
    properties
        .iter()
        .fold(MetricTotals::default(), |totals, property| MetricTotals {
            views: totals.views.saturating_add(property.views),
            link_clicks: totals.link_clicks.saturating_add(property.link_clicks),
            qr_code_scans: totals.qr_code_scans.saturating_add(property.qr_code_scans),
        })
}

pub fn property_performance(properties: &[Property]) -> Vec<PropertyPerformance> {
    properties
        .iter()
        .map(|property| PropertyPerformance {
            property_id: property.id,
            name: property.details.title.clone(),
            views: property.views,
            clicks: property.link_clicks,
            scans: property.qr_code_scans,
        })
        .collect()
}

/// Sums visits per source name, ordered by first appearance.
pub fn traffic_by_source(sources: &[TrafficSource]) -> Vec<TrafficSummary> {
    let mut summaries: Vec<TrafficSummary> = Vec::new();
    for source in sources {
        match summaries.iter_mut().find(|summary| summary.name == source.name) {
            Some(summary) => summary.visits = summary.visits.saturating_add(source.visits),
            None => summaries.push(TrafficSummary {
                name: source.name.clone(),
                visits: source.visits,
            }),
        }
    }
    summaries
}
