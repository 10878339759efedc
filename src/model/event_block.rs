use log::{debug, trace};

const BEGIN_MARKER: &str = "BEGIN:VEVENT";
const END_MARKER: &str = "END:VEVENT";

/// Iterator over the bodies of the `VEVENT` components found in raw ICS text
///
/// Each item is the text between a `BEGIN:VEVENT` marker and the first `END:VEVENT` that follows it,
/// markers excluded. VEVENTs never nest, so the shortest span is always the right one.
/// A `BEGIN:VEVENT` without a closing marker ends the iteration.
///
/// The iterator borrows the text and is cheap to clone, so a clone taken before iterating
/// starts over from the same position.
#[derive(Debug, Clone, Copy)]
pub struct EventBlocks<'a> {
    rest: &'a str,
}

impl<'a> EventBlocks<'a> {
    pub fn new(content: &'a str) -> EventBlocks<'a> {
        EventBlocks { rest: content }
    }
}

impl<'a> Iterator for EventBlocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.rest.find(BEGIN_MARKER)? + BEGIN_MARKER.len();
        let body = &self.rest[start..];
        match body.find(END_MARKER) {
            Some(end) => {
                self.rest = &body[end + END_MARKER.len()..];
                trace!("found VEVENT block of {} bytes", end);
                Some(&body[..end])
            }
            None => {
                debug!("unterminated VEVENT block, ignoring the rest of the input");
                self.rest = "";
                None
            }
        }
    }
}

/// Shorthand for [`EventBlocks::new`]
pub fn event_blocks(content: &str) -> EventBlocks<'_> {
    EventBlocks::new(content)
}
