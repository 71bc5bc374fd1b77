//! Read-side projections over store snapshots.
//!
//! # Responsibility
//! - Filter and rank properties for browsing screens.
//! - Aggregate engagement and traffic counters for analytics.
//! - Resolve inquiry references for display.
//!
//! # Invariants
//! - Queries never mutate their inputs.
//! - Results preserve input order unless documented otherwise.

pub mod analytics;
pub mod inquiries;
pub mod properties;
