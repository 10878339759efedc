use clap::ValueEnum;
use doku::Document;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::property_map::PropertyMap;
use crate::model::timestamp::TargetZone;

pub mod ics_mirror;
pub mod pseudo_schedule;

pub use ics_mirror::IcsMirror;
pub use pseudo_schedule::PseudoSchedule;

/// Written in place of any missing or unreadable value
pub const PLACEHOLDER: &str = "vide";

/// Turns the properties of one event into a row of a fixed table layout
///
/// Every row returned by [`RowProjection::project`] has exactly as many fields as the header.
pub trait RowProjection {
    fn header(&self) -> &[&'static str];

    fn project(&self, event: &PropertyMap) -> Vec<String>;
}

/// The table layouts available to the command line
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, Document, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One column per ICS property, values copied as they are
    #[default]
    Ics,
    /// Timetable columns: local date, time, duration, session type, groups and teachers
    Pseudo,
}

impl OutputFormat {
    /// The file written when no output path is given
    pub fn default_file_name(&self) -> &'static str {
        match self {
            OutputFormat::Ics => "evenements_ics.csv",
            OutputFormat::Pseudo => "evenements_pseudo.csv",
        }
    }

    pub fn projection(&self, zone: TargetZone) -> Box<dyn RowProjection> {
        match self {
            OutputFormat::Ics => Box::new(IcsMirror),
            OutputFormat::Pseudo => Box::new(PseudoSchedule::new(zone)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Ics => write!(f, "ics"),
            OutputFormat::Pseudo => write!(f, "pseudo"),
        }
    }
}

/// The value of `name`, or the placeholder
fn lookup(event: &PropertyMap, name: &str) -> String {
    event.get(name).unwrap_or(PLACEHOLDER).to_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_format_keeps_rows_as_wide_as_the_header() {
        let events = [
            PropertyMap::default(),
            PropertyMap::parse("UID:1\nDTSTART:garbage\nDTEND:20240115T103000Z\n"),
            PropertyMap::parse("SUMMARY:CM\nDESCRIPTION:a\\nb\\nc\\nd\nLOCATION:A,B,C\n"),
        ];

        for format in [OutputFormat::Ics, OutputFormat::Pseudo] {
            let projection = format.projection(TargetZone::default());
            for event in &events {
                assert_eq!(
                    projection.project(event).len(),
                    projection.header().len(),
                    "{} row width",
                    format
                );
            }
        }
    }

    #[test]
    fn default_file_names() {
        assert_eq!(OutputFormat::Ics.default_file_name(), "evenements_ics.csv");
        assert_eq!(OutputFormat::Pseudo.default_file_name(), "evenements_pseudo.csv");
    }

    #[test]
    fn lookup_substitutes_placeholder() {
        let event: PropertyMap = [("UID", "7")].into_iter().collect();
        assert_eq!(lookup(&event, "UID"), "7");
        assert_eq!(lookup(&event, "LOCATION"), PLACEHOLDER);
    }
}
