use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};
use std::io::{self, Write};

use crate::error::SinkError;

/// Field separator of the output tables
pub const DELIMITER: u8 = b';';

/// Receives a converted table: one header, then rows in event order
pub trait RowSink {
    fn write_header(&mut self, header: &[&str]) -> Result<(), SinkError>;

    fn write_row(&mut self, row: &[String]) -> Result<(), SinkError>;

    /// Flush anything still buffered
    fn finish(&mut self) -> Result<(), SinkError>;
}

/// Writes `;` separated lines
///
/// Fields are written as they are: a value holding a `;` or a line break is not quoted and
/// will shift or split its row. Rows must be as wide as the header.
pub struct CsvSink<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> CsvSink<W> {
    pub fn new(output: W) -> CsvSink<W> {
        let writer = WriterBuilder::new()
            .delimiter(DELIMITER)
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .flexible(false)
            .has_headers(false)
            .from_writer(output);

        CsvSink { writer }
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(self) -> Result<W, SinkError> {
        self.writer
            .into_inner()
            .map_err(|e| SinkError::Io(io::Error::new(e.error().kind(), e.to_string())))
    }
}

impl<W: Write> RowSink for CsvSink<W> {
    fn write_header(&mut self, header: &[&str]) -> Result<(), SinkError> {
        Ok(self.writer.write_record(header)?)
    }

    fn write_row(&mut self, row: &[String]) -> Result<(), SinkError> {
        Ok(self.writer.write_record(row)?)
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        Ok(self.writer.flush()?)
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    use super::*;

    fn written(sink: CsvSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn writes_semicolon_separated_lines() {
        let mut sink = CsvSink::new(Vec::new());
        sink.write_header(&["uid", "intitule"]).unwrap();
        sink.write_row(&["1".into(), "TD Algèbre".into()]).unwrap();
        sink.write_row(&["2".into(), "vide".into()]).unwrap();
        sink.finish().unwrap();

        assert_eq!(
            written(sink),
            indoc! {"
                uid;intitule
                1;TD Algèbre
                2;vide
            "}
        );
    }

    #[test]
    fn does_not_quote_separators() {
        let mut sink = CsvSink::new(Vec::new());
        sink.write_header(&["a", "b"]).unwrap();
        sink.write_row(&["x;y".into(), "\"quoted\"".into()]).unwrap();
        assert_eq!(written(sink), "a;b\nx;y;\"quoted\"\n");
    }

    #[test]
    fn rejects_rows_narrower_than_the_header() {
        let mut sink = CsvSink::new(Vec::new());
        sink.write_header(&["a", "b", "c"]).unwrap();
        assert!(sink.write_row(&["1".into(), "2".into()]).is_err());
    }
}
