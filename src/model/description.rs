/// The two-character escaped newline (`\` followed by `n`) found in raw DESCRIPTION values
pub const ESCAPED_NEWLINE: &str = "\\n";

/// Sub-fields recovered from a free text DESCRIPTION
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DescriptionFields {
    pub groups: Option<String>,
    pub teachers: Option<String>,
}

/// A convention for reading student groups and teachers out of a DESCRIPTION
///
/// Timetable exports do not agree on a layout, so the reading is a strategy the
/// schedule projection can be given.
pub trait DescriptionLayout {
    fn split(&self, description: &str) -> DescriptionFields;
}

/// The non-empty, trimmed segments of a DESCRIPTION, in order
pub fn segments(description: &str) -> impl Iterator<Item = &str> {
    description
        .split(ESCAPED_NEWLINE)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
}

/// Positional layout: the first segment holds the groups, the second the teachers
///
/// Nothing checks that the segments really hold what their position says they do.
#[derive(Debug, Default, Clone, Copy)]
pub struct PositionalLayout;

impl DescriptionLayout for PositionalLayout {
    fn split(&self, description: &str) -> DescriptionFields {
        let mut segments = segments(description);
        DescriptionFields {
            groups: segments.next().map(str::to_owned),
            teachers: segments.next().map(str::to_owned),
        }
    }
}

/// Flatten a DESCRIPTION onto one line, replacing each escaped newline with a space
pub fn flatten(description: &str) -> String {
    description.replace(ESCAPED_NEWLINE, " ").trim().to_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn splits_groups_then_teachers() {
        let fields = PositionalLayout.split("Groupe A\\nM. Dupont");
        assert_eq!(
            fields,
            DescriptionFields {
                groups: Some("Groupe A".into()),
                teachers: Some("M. Dupont".into()),
            }
        );
    }

    #[test]
    fn skips_empty_segments() {
        let fields = PositionalLayout.split("\\n\\n  Groupe B \\n \\nMme Martin\\nExporté le 01/09");
        assert_eq!(fields.groups.as_deref(), Some("Groupe B"));
        assert_eq!(fields.teachers.as_deref(), Some("Mme Martin"));
    }

    #[test]
    fn single_segment_has_no_teacher() {
        let fields = PositionalLayout.split("Groupe A");
        assert_eq!(fields.groups.as_deref(), Some("Groupe A"));
        assert_eq!(fields.teachers, None);
    }

    #[test]
    fn blank_description_has_nothing() {
        assert_eq!(PositionalLayout.split("  \\n "), DescriptionFields::default());
    }

    #[test]
    fn real_newlines_are_not_separators() {
        let fields = PositionalLayout.split("Groupe A\nM. Dupont");
        assert_eq!(fields.groups.as_deref(), Some("Groupe A\nM. Dupont"));
    }

    #[test]
    fn flattens_escaped_newlines() {
        assert_eq!(flatten("\\nGroupe A\\nM. Dupont\\n"), "Groupe A M. Dupont");
        assert_eq!(flatten("  sans saut  "), "sans saut");
    }
}
