//! Tracking and messaging link construction.

use crate::model::property::{Property, PropertyId};
use crate::model::property_list::ListId;
use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

/// Agent number used for WhatsApp contact links.
pub const DEFAULT_WHATSAPP_NUMBER: &str = "+917620277729";

static TRACKING_PATH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/track/([0-9A-Fa-f-]{32,36})/?$").expect("valid tracking path regex")
});
static PHONE_NOISE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9]+").expect("valid phone noise regex"));

/// Where shared links point and who receives WhatsApp messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareConfig {
    /// Scheme and host of the public site, e.g. `https://listings.example`.
    pub origin: String,
    pub whatsapp_number: String,
}

impl ShareConfig {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
        }
    }

    fn origin(&self) -> &str {
        self.origin.trim_end_matches('/')
    }
}

/// Path of the public view for a list.
pub fn tracking_path(list_id: ListId) -> String {
    format!("/track/{list_id}")
}

/// Extracts the list id from a `/track/{id}` path.
pub fn parse_tracking_path(path: &str) -> Option<ListId> {
    let captures = TRACKING_PATH_RE.captures(path.trim())?;
    Uuid::parse_str(captures.get(1)?.as_str()).ok()
}

/// Absolute public link for a list.
pub fn tracking_link(config: &ShareConfig, list_id: ListId) -> String {
    format!("{}{}", config.origin(), tracking_path(list_id))
}

/// Absolute link to a property's detail page.
pub fn property_link(config: &ShareConfig, property_id: PropertyId) -> String {
    format!("{}/properties/{property_id}", config.origin())
}

/// Pre-filled interest message for a property.
pub fn property_inquiry_message(property: &Property, page_url: Option<&str>) -> String {
    match page_url {
        Some(url) => format!("Hi, I'm interested in {} ({url})", property.title()),
        None => format!("Hi, I'm interested in {}", property.title()),
    }
}

/// WhatsApp deep link carrying `message` to the configured number.
pub fn whatsapp_link(config: &ShareConfig, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        normalize_phone_number(&config.whatsapp_number),
        encode_uri_component(message)
    )
}

/// Reduces a phone number to `+` followed by digits.
pub fn normalize_phone_number(raw: &str) -> String {
    let digits = PHONE_NOISE_RE.replace_all(raw, "");
    format!("+{digits}")
}

/// Percent-encodes everything outside the `encodeURIComponent` unreserved set.
pub fn encode_uri_component(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => encoded.push(char::from(byte)),
            other => encoded.push_str(&format!("%{other:02X}")),
        }
    }
    encoded
}
