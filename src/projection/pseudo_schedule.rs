use log::warn;

use super::{lookup, RowProjection, PLACEHOLDER};
use crate::model::description::{DescriptionLayout, PositionalLayout};
use crate::model::modality::ModalityClassifier;
use crate::model::property_map::PropertyMap;
use crate::model::timestamp::{format_duration, NormalizedTimestamp, TargetZone};

/// Timetable column names, in column order
pub const PSEUDO_FIELDS: [&str; 9] = [
    "uid", "date", "heure", "duree", "modalite", "intitule", "salles", "profs", "groupes",
];

/// Separates rooms in the `salles` column
const ROOM_SEPARATOR: &str = "|";

/// Derives a timetable row from each event
///
/// Start and end are converted to local date, time and duration in the target zone,
/// the session type is guessed from the summary and description, and groups and teachers
/// are read from the description with a [`DescriptionLayout`].
/// Unreadable timestamps only blank the fields derived from them.
#[derive(Debug, Clone)]
pub struct PseudoSchedule<L = PositionalLayout> {
    zone: TargetZone,
    classifier: ModalityClassifier,
    layout: L,
}

impl PseudoSchedule<PositionalLayout> {
    pub fn new(zone: TargetZone) -> PseudoSchedule<PositionalLayout> {
        PseudoSchedule::with_layout(zone, PositionalLayout)
    }
}

impl<L: DescriptionLayout> PseudoSchedule<L> {
    pub fn with_layout(zone: TargetZone, layout: L) -> PseudoSchedule<L> {
        PseudoSchedule {
            zone,
            classifier: ModalityClassifier::new(),
            layout,
        }
    }

    /// Normalize a timestamp property, logging and swallowing format errors
    fn timestamp(&self, event: &PropertyMap, name: &str) -> Option<NormalizedTimestamp> {
        let value = event.get(name)?;
        match NormalizedTimestamp::parse(value, &self.zone) {
            Ok(timestamp) => Some(timestamp),
            Err(e) => {
                warn!(
                    "event {}: ignoring {}: {}",
                    event.get("UID").unwrap_or(PLACEHOLDER),
                    name,
                    e
                );
                None
            }
        }
    }
}

impl<L: DescriptionLayout> RowProjection for PseudoSchedule<L> {
    fn header(&self) -> &[&'static str] {
        &PSEUDO_FIELDS
    }

    fn project(&self, event: &PropertyMap) -> Vec<String> {
        let placeholder = || PLACEHOLDER.to_owned();

        let start = self.timestamp(event, "DTSTART");
        let end = self.timestamp(event, "DTEND");

        let date = start.map(|s| s.date_string()).unwrap_or_else(placeholder);
        let time = start.map(|s| s.time_string()).unwrap_or_else(placeholder);
        let duration = start
            .zip(end)
            .and_then(|(s, e)| s.duration_until(&e))
            .and_then(format_duration)
            .unwrap_or_else(placeholder);

        let summary = event.get("SUMMARY");
        let description = event.get("DESCRIPTION");

        let modality = self
            .classifier
            .classify(summary, description)
            .map(str::to_owned)
            .unwrap_or_else(placeholder);

        let rooms = event
            .get("LOCATION")
            .map(|location| location.replace(',', ROOM_SEPARATOR))
            .unwrap_or_else(placeholder);

        let fields = description
            .map(|d| self.layout.split(d))
            .unwrap_or_default();

        vec![
            lookup(event, "UID"),
            date,
            time,
            duration,
            modality,
            lookup(event, "SUMMARY"),
            rooms,
            fields.teachers.unwrap_or_else(placeholder),
            fields.groups.unwrap_or_else(placeholder),
        ]
    }
}
