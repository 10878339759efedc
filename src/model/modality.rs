use regex::Regex;

use super::description::segments;

/// Session types, in the order they are tried
pub const MODALITY_CANDIDATES: [&str; 5] = ["CM", "TD", "TP", "Proj", "DS"];

/// Classifies an event by the session type mentioned in its summary or description
///
/// Candidates are tried in order. For each one the summary is searched first, then the
/// description, for the candidate as a whole word, ignoring case. Escaped newlines in the
/// description separate words like any other line break. The first candidate found
/// anywhere wins, so a summary mentioning `TP` loses to a description mentioning `CM`.
#[derive(Debug, Clone)]
pub struct ModalityClassifier {
    candidates: Vec<(&'static str, Regex)>,
}

impl ModalityClassifier {
    pub fn new() -> ModalityClassifier {
        let candidates = MODALITY_CANDIDATES
            .iter()
            .map(|&candidate| {
                let pattern = format!(r"(?i)\b{}\b", regex::escape(candidate));
                let regex = Regex::new(&pattern).expect("candidate patterns are valid");
                (candidate, regex)
            })
            .collect();

        ModalityClassifier { candidates }
    }

    /// The first matching candidate, `None` when neither text mentions any of them
    pub fn classify(&self, summary: Option<&str>, description: Option<&str>) -> Option<&'static str> {
        self.candidates
            .iter()
            .find(|(_, regex)| {
                summary.is_some_and(|s| regex.is_match(s))
                    || description.is_some_and(|d| segments(d).any(|line| regex.is_match(line)))
            })
            .map(|(candidate, _)| *candidate)
    }
}

impl Default for ModalityClassifier {
    fn default() -> Self {
        ModalityClassifier::new()
    }
}
