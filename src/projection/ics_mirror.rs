use super::{lookup, RowProjection, PLACEHOLDER};
use crate::model::description::flatten;
use crate::model::property_map::PropertyMap;

/// ICS property names, in column order
pub const ICS_FIELDS: [&str; 12] = [
    "BEGIN",
    "DTSTAMP",
    "DTSTART",
    "DTEND",
    "SUMMARY",
    "LOCATION",
    "DESCRIPTION",
    "UID",
    "CREATED",
    "LAST-MODIFIED",
    "SEQUENCE",
    "END",
];

const COMPONENT_NAME: &str = "VEVENT";

/// Mirrors the ICS properties of each event verbatim
///
/// Only DESCRIPTION is touched: its escaped newlines become spaces.
#[derive(Debug, Default, Clone, Copy)]
pub struct IcsMirror;

impl RowProjection for IcsMirror {
    fn header(&self) -> &[&'static str] {
        &ICS_FIELDS
    }

    fn project(&self, event: &PropertyMap) -> Vec<String> {
        ICS_FIELDS
            .iter()
            .map(|&field| match field {
                "BEGIN" | "END" => COMPONENT_NAME.to_owned(),
                "DESCRIPTION" => event
                    .get(field)
                    .map(flatten)
                    .unwrap_or_else(|| PLACEHOLDER.to_owned()),
                _ => lookup(event, field),
            })
            .collect()
    }
}
