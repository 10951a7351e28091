//! Bold / unbold / export operations on the plain-text buffer.
//!
//! The `__…__` marker pair is the one wire format of the crate: produced
//! by [`bold_word`], removed by [`strip_markers`], and rendered to HTML
//! by [`export_html`] when the sentence is handed to a flashcard target.

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

/// Non-greedy marked-span matcher for export. `.` does not cross
/// newlines, so a stray `__` pair split over lines stays untouched.
static EXPORT_SPAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"__(.*?)__").expect("export pattern is valid"));

/// Wrap every whole-word, case-sensitive occurrence of `word` in marker
/// delimiters.
///
/// Returns the rewritten text plus the char offset just past the last
/// `__word` (the spot the edit cursor should land on), or `None` when
/// `word` does not occur as a whole word (the buffer is left alone).
/// Occurrences that are already marked are skipped: the adjacent
/// underscores are word characters, so no word boundary exists there.
pub fn bold_word(text: &str, word: &str) -> Option<(String, usize)> {
    if word.is_empty() {
        return None;
    }
    let pattern = format!(r"\b{}\b", regex::escape(word));
    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(e) => {
            tracing::warn!("unusable bold pattern for {:?}: {}", word, e);
            return None;
        }
    };
    if !re.is_match(text) {
        return None;
    }

    let replacement = format!("__{}__", word);
    let bolded = re.replace_all(text, NoExpand(&replacement)).into_owned();

    let opened = format!("__{}", word);
    let byte_idx = bolded.rfind(&opened)?;
    let cursor = bolded[..byte_idx].chars().count() + opened.chars().count();
    Some((bolded, cursor))
}

/// Strip every marker delimiter pair from the text
pub fn strip_markers(text: &str) -> String {
    text.replace("__", "")
}

/// Render the buffer for export: marked spans become `<b>…</b>` and
/// newlines become `<br>`. Pure, the buffer is not modified.
pub fn export_html(text: &str) -> String {
    EXPORT_SPAN_RE
        .replace_all(text, "<b>$1</b>")
        .replace('\n', "<br>")
}
