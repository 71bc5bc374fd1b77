//! Outbound link builders for sharing lists and properties.
//!
//! # Responsibility
//! - Build public tracking paths/links for lists and resolve them back.
//! - Build WhatsApp deep links with property-specific messages.
//!
//! # Invariants
//! - Builders are pure; opening links and clipboard access belong to callers.

mod links;

pub use links::{
    encode_uri_component, normalize_phone_number, parse_tracking_path, property_inquiry_message,
    property_link, tracking_link, tracking_path, whatsapp_link, ShareConfig,
    DEFAULT_WHATSAPP_NUMBER,
};
