use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Matches a line break (either `\n` or `\r\n`) followed by the whitespace that marks a folded line
fn fold_regex() -> &'static Regex {
    static FOLD: OnceLock<Regex> = OnceLock::new();
    FOLD.get_or_init(|| Regex::new(r"\r?\n[ \t]+").expect("fold pattern is valid"))
}

/// Join folded continuation lines back onto the logical line they belong to
///
/// Every line break followed by spaces or tabs is removed, so `"SUMMARY:Long t\r\n itle"`
/// becomes `"SUMMARY:Long title"`. Applying this twice gives the same text as applying it once.
///
/// Text without any folds is returned borrowed.
pub fn unfold(content: &str) -> Cow<'_, str> {
    fold_regex().replace_all(content, "")
}
