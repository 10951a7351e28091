//! Host text-widget capability trait and implementations.
//!
//! The navigation core does not subclass a widget; it drives one through
//! `TextHost`: plain/rich text set, selection set/clear, cursor placement,
//! and read-only toggling. All offsets are char offsets.
//!
//! Two implementations are provided:
//!
//! - [`StringHost`]: a plain `String`-backed host that records what was
//!   pushed to it. Suitable for simple embedders and the test double for
//!   the whole crate.
//! - [`RopeHost`]: a `ropey::Rope`-backed host for embedders that keep
//!   book-length source text in the same widget.
//!
//! Real GUI embedders implement the trait as a bridge to their widget
//! toolkit's text edit.

use std::ops::Range;

use ropey::Rope;

/// Capability surface of the host text widget.
pub trait TextHost {
    /// Current plain-text content
    fn plain_text(&self) -> String;

    /// Replace content through the plain-text path
    fn set_plain_text(&mut self, text: &str);

    /// Replace content through the rich-text path. Hosts that do not
    /// interpret markup treat this as plain text.
    fn set_text(&mut self, text: &str) {
        self.set_plain_text(text);
    }

    /// Replace the rendered display markup without touching the
    /// plain-text buffer
    fn set_rich_text(&mut self, html: &str);

    /// Select the given char range
    fn set_selection(&mut self, range: Range<usize>);

    /// Clear any selection, leaving the cursor in place
    fn clear_selection(&mut self);

    /// Place the cursor at a char offset (collapses any selection)
    fn set_cursor(&mut self, offset: usize);

    /// Toggle the widget's read-only state
    fn set_read_only(&mut self, read_only: bool);
}

// =============================================================================
// StringHost - plain String backend, records pushed display state
// =============================================================================

/// String-backed host. Remembers the last rendered markup, selection,
/// cursor, and read-only state it was handed, so embedders (and tests)
/// can inspect exactly what the core pushed.
#[derive(Debug, Clone, Default)]
pub struct StringHost {
    text: String,
    rich_text: String,
    selection: Option<Range<usize>>,
    cursor: usize,
    read_only: bool,
}

impl StringHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a host with initial content
    pub fn from_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Self::default()
        }
    }

    /// Last markup pushed via `set_rich_text`
    pub fn rich_text(&self) -> &str {
        &self.rich_text
    }

    /// Current selection, if any
    pub fn selection(&self) -> Option<Range<usize>> {
        self.selection.clone()
    }

    /// Current cursor offset
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }
}

impl TextHost for StringHost {
    fn plain_text(&self) -> String {
        self.text.clone()
    }

    fn set_plain_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.rich_text.clear();
        self.selection = None;
    }

    fn set_rich_text(&mut self, html: &str) {
        self.rich_text = html.to_string();
    }

    fn set_selection(&mut self, range: Range<usize>) {
        self.cursor = range.end;
        self.selection = Some(range);
    }

    fn clear_selection(&mut self) {
        self.selection = None;
    }

    fn set_cursor(&mut self, offset: usize) {
        self.cursor = offset;
        self.selection = None;
    }

    fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }
}

// =============================================================================
// RopeHost - ropey backend for large source texts
// =============================================================================

/// Rope-backed host for embedders holding long texts.
#[derive(Debug, Clone, Default)]
pub struct RopeHost {
    rope: Rope,
    rich_text: String,
    selection: Option<Range<usize>>,
    cursor: usize,
    read_only: bool,
}

impl RopeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            ..Self::default()
        }
    }

    /// Access the underlying rope for rope-specific operations
    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn rich_text(&self) -> &str {
        &self.rich_text
    }

    pub fn selection(&self) -> Option<Range<usize>> {
        self.selection.clone()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }
}

impl TextHost for RopeHost {
    fn plain_text(&self) -> String {
        self.rope.to_string()
    }

    fn set_plain_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.rich_text.clear();
        self.selection = None;
    }

    fn set_rich_text(&mut self, html: &str) {
        self.rich_text = html.to_string();
    }

    fn set_selection(&mut self, range: Range<usize>) {
        let len = self.rope.len_chars();
        let start = range.start.min(len);
        let end = range.end.min(len);
        self.cursor = end;
        self.selection = Some(start..end);
    }

    fn clear_selection(&mut self) {
        self.selection = None;
    }

    fn set_cursor(&mut self, offset: usize) {
        self.cursor = offset.min(self.rope.len_chars());
        self.selection = None;
    }

    fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }
}
