//! Inquiry inbox queries.

use crate::model::inquiry::{CustomerInquiry, InquiryStatus};
use crate::model::property::Property;

/// Title shown for inquiries whose property was deleted.
pub const UNKNOWN_PROPERTY_TITLE: &str = "Unknown Property";

/// Returns inquiries with `status`, or all of them when `status` is `None`.
pub fn filter_inquiries(
    inquiries: &[CustomerInquiry],
    status: Option<InquiryStatus>,
) -> Vec<&CustomerInquiry> {
    inquiries
        .iter()
        .filter(|inquiry| status.map_or(true, |wanted| inquiry.status == wanted))
        .collect()
}

/// Resolves the title of the property an inquiry refers to.
pub fn inquiry_property_title<'a>(
    properties: &'a [Property],
    inquiry: &CustomerInquiry,
) -> &'a str {
    properties
        .iter()
        .find(|property| property.id == inquiry.property_id)
        .map_or(UNKNOWN_PROPERTY_TITLE, Property::title)
}
