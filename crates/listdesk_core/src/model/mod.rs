//! Domain model for listings, shareable lists, inquiries and traffic.
//!
//! # Responsibility
//! - Define canonical records persisted by the store.
//! - Keep field naming aligned with the persisted JSON layout.
//!
//! # Invariants
//! - Every record is identified by a stable, generated `Uuid`.
//! - List membership holds property snapshots, not references.

pub mod inquiry;
pub mod property;
pub mod property_list;
pub mod traffic;
