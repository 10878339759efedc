use log::{debug, info};
use std::fs;
use std::io::BufWriter;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::error::{ConversionError, ConversionResult, SinkError};
use crate::model::event_block::event_blocks;
use crate::model::property_map::PropertyMap;
use crate::projection::RowProjection;
use crate::sink::{CsvSink, RowSink};

/// A converted calendar: the projection's header and one row per event, in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Send the header then every row to `sink`
    pub fn write_to(&self, sink: &mut impl RowSink) -> Result<(), SinkError> {
        sink.write_header(&self.header)?;
        for row in &self.rows {
            sink.write_row(row)?;
        }
        sink.finish()
    }
}

/// The property maps of every VEVENT in `content`, in file order
pub fn parse_events(content: &str) -> impl Iterator<Item = PropertyMap> + '_ {
    event_blocks(content).map(PropertyMap::parse)
}

/// Convert ICS text into a table
///
/// This cannot fail: missing or unreadable values end up as placeholders in the rows.
pub fn convert_str(content: &str, projection: &dyn RowProjection) -> Table {
    let rows: Vec<Vec<String>> = parse_events(content)
        .map(|event| projection.project(&event))
        .collect();
    debug!("converted {} events", rows.len());

    Table {
        header: projection.header().to_vec(),
        rows,
    }
}

/// Convert the ICS file at `input` and write the table to `output`
///
/// The whole table is built before anything is written, so a calendar that cannot be read
/// leaves any previous output untouched. Rows go to a temporary file next to `output` which
/// replaces it only once every row is written; a failed write leaves no partial file behind.
/// Returns the number of events written.
pub fn convert_file(
    input: &Path,
    output: &Path,
    projection: &dyn RowProjection,
) -> ConversionResult<usize> {
    debug!("reading calendar file: {:?}", input);
    let content = fs::read_to_string(input).map_err(|source| ConversionError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let table = convert_str(&content, projection);

    let output_dir = match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let write_error = |source: SinkError| ConversionError::Write {
        path: output.to_path_buf(),
        source,
    };

    let mut staged =
        NamedTempFile::new_in(output_dir).map_err(|source| ConversionError::Create {
            path: output.to_path_buf(),
            source,
        })?;
    debug!("writing table to temporary file: {:?}", staged.path());
    {
        let mut sink = CsvSink::new(BufWriter::new(staged.as_file_mut()));
        table.write_to(&mut sink).map_err(write_error)?;
    }

    debug!("moving table into place: {:?}", output);
    staged
        .persist(output)
        .map_err(|e| write_error(SinkError::Io(e.error)))?;

    info!("wrote {} events from {:?} to {:?}", table.len(), input, output);
    Ok(table.len())
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::timestamp::TargetZone;
    use crate::projection::{IcsMirror, PseudoSchedule};

    const CALENDAR: &str = indoc! {r"
        BEGIN:VCALENDAR
        PRODID:-//Université//Emploi du temps//FR
        VERSION:2.0
        BEGIN:VEVENT
        DTSTAMP:20240101T000000Z
        DTSTART:20240115T090000Z
        DTEND:20240115T103000Z
        SUMMARY:TD Algèbre
        LOCATION:B12
        DESCRIPTION:\nGroupe A\nM. Dupont\n(Exporté le 01/01/2024)
        UID:123
        END:VEVENT
        BEGIN:VEVENT
        DTSTART:20240116T130000Z
        DTEND:20240116T150000Z
        SUMMARY:Chimie organique
        LOCATION:Amphi A,Amphi B
        DESCRIPTION:Promo L2\nMme Curie\nCM
        UID:124
        END:VEVENT
        END:VCALENDAR
    "};

    #[test]
    fn converts_to_ics_mirror() {
        let table = convert_str(CALENDAR, &IcsMirror);
        assert_eq!(table.len(), 2);
        assert_eq!(table.header.len(), 12);
        assert_eq!(table.rows[0][6], "Groupe A M. Dupont (Exporté le 01/01/2024)");
        assert_eq!(table.rows[1][5], "Amphi A,Amphi B");
        assert_eq!(table.rows[1][1], "vide");
    }

    #[test]
    fn converts_to_pseudo_schedule() {
        let table = convert_str(CALENDAR, &PseudoSchedule::new(TargetZone::default()));
        assert_eq!(
            table.rows,
            vec![
                vec!["123", "15-01-2024", "10:00", "01:30", "TD", "TD Algèbre", "B12", "M. Dupont", "Groupe A"],
                vec![
                    "124",
                    "16-01-2024",
                    "14:00",
                    "02:00",
                    "CM",
                    "Chimie organique",
                    "Amphi A|Amphi B",
                    "Mme Curie",
                    "Promo L2",
                ],
            ]
        );
    }

    #[test]
    fn calendar_without_events_has_only_a_header() {
        let content = "BEGIN:VCALENDAR\nVERSION:2.0\nEND:VCALENDAR\n";
        let table = convert_str(content, &IcsMirror);
        assert!(table.is_empty());

        let mut sink = CsvSink::new(Vec::new());
        table.write_to(&mut sink).unwrap();
        let written = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        assert_eq!(
            written,
            "BEGIN;DTSTAMP;DTSTART;DTEND;SUMMARY;LOCATION;DESCRIPTION;UID;CREATED;LAST-MODIFIED;SEQUENCE;END\n"
        );
    }

    #[test]
    fn folded_lines_are_joined() {
        let content = "BEGIN:VEVENT\r\nUID:1\r\nSUMMARY:Long t\r\n itle\r\nEND:VEVENT\r\n";
        let events: Vec<_> = parse_events(content).collect();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].get("SUMMARY"), Some("Long title"));
    }

    #[test]
    fn unfolding_the_whole_document_first_changes_nothing() {
        let content = "BEGIN:VEVENT\nUID:1\nDESCRIPTION:Groupe A\\n\n M. Dupont\nEND:VEVENT\n";
        let unfolded = crate::model::unfold::unfold(content);
        let projection = PseudoSchedule::new(TargetZone::default());
        assert_eq!(convert_str(content, &projection), convert_str(&unfolded, &projection));
    }
}
