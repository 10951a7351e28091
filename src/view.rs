//! SentenceView - the word-navigation model over a host text widget.
//!
//! Owns the authoritative plain-text buffer, the derived token state,
//! the current-word pointer, and the simple-view mode flag. Generic over
//! the host widget capability `H` so the same core drives any toolkit's
//! text edit (composition instead of widget subclassing).
//!
//! The token state, word indices, and pointer are recomputed together,
//! via [`SentenceView::rederive`], whenever the buffer is
//! replaced while simple view is active, and discarded when it is not.

use crate::config::ViewerConfig;
use crate::host::TextHost;
use crate::markup;
use crate::render;
use crate::tokenize::{Token, TokenState};

/// State container for the word-navigable sentence widget.
#[derive(Debug, Clone)]
pub struct SentenceView<H: TextHost> {
    /// The host text widget this view drives
    host: H,
    config: ViewerConfig,
    /// Authoritative plain-text buffer (marker delimiters included)
    text: String,
    /// Simple view: read-only word navigation with highlight + lookup
    simple_view: bool,
    /// Derived token state; empty outside simple view
    state: TokenState,
    /// Pointer into `state.word_indices`, None when no word is selected
    current_word: Option<usize>,
    /// Bumped on every derived-state change; guards the lookup debounce
    /// against firings scheduled for state that is no longer current
    revision: u64,
}

impl<H: TextHost> SentenceView<H> {
    /// Create a view over `host` with default configuration
    pub fn new(host: H) -> Self {
        Self::with_config(host, ViewerConfig::default())
    }

    pub fn with_config(host: H, config: ViewerConfig) -> Self {
        Self {
            host,
            config,
            text: String::new(),
            simple_view: false,
            state: TokenState::default(),
            current_word: None,
            revision: 0,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// The authoritative buffer content. Outside simple view the host is
    /// the live editing surface, so its text wins.
    pub fn text(&self) -> String {
        if self.simple_view {
            self.text.clone()
        } else {
            self.host.plain_text()
        }
    }

    pub fn is_simple_view(&self) -> bool {
        self.simple_view
    }

    /// Current pointer into the word list
    pub fn current_word(&self) -> Option<usize> {
        self.current_word
    }

    /// Component index of the current word in the token list
    pub fn current_component(&self) -> Option<usize> {
        self.current_word
            .and_then(|sel| self.state.component_index(sel))
    }

    /// The token under the pointer
    pub fn current_token(&self) -> Option<&Token> {
        self.current_word.and_then(|sel| self.state.word_at(sel))
    }

    pub fn word_count(&self) -> usize {
        self.state.word_count()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Render the buffer for export: marked spans become `<b>…</b>`,
    /// newlines become `<br>`. Does not mutate anything.
    pub fn export_markup(&self) -> String {
        markup::export_html(&self.text())
    }

    // =========================================================================
    // Internals shared by the update handlers
    // =========================================================================

    pub(crate) fn set_simple_view_flag(&mut self, enabled: bool) {
        self.simple_view = enabled;
    }

    pub(crate) fn set_buffer(&mut self, text: String) {
        self.text = text;
    }

    pub(crate) fn buffer(&self) -> &str {
        &self.text
    }

    /// Refresh the buffer from the host. Called before operations in
    /// free-edit mode, where the user may have typed into the host.
    pub(crate) fn sync_from_host(&mut self) {
        self.text = self.host.plain_text();
    }

    pub(crate) fn bump_revision(&mut self) -> u64 {
        self.revision += 1;
        self.revision
    }

    pub(crate) fn clear_derived_state(&mut self) {
        self.state = TokenState::default();
        self.current_word = None;
    }

    /// Recompute token state, word indices, and pointer from the buffer,
    /// then push display and selection to the host. Returns whether a
    /// current word exists afterwards.
    pub(crate) fn rederive(&mut self) -> bool {
        self.state = TokenState::derive(&self.text);
        self.current_word = self.state.initial_selection();
        self.apply_display();
        self.current_word.is_some()
    }

    pub(crate) fn set_current_word(&mut self, selection: usize) {
        debug_assert!(selection < self.state.word_count());
        self.current_word = Some(selection);
    }

    /// Push the rendered markup to the host and mirror the current word
    /// into the host's real selection (or clear it). The HTML highlight
    /// and the selection always move together.
    pub(crate) fn apply_display(&mut self) {
        let component = self.current_component();
        let html = render::render_html(&self.state.tokens, component, &self.config.highlight_color);
        self.host.set_rich_text(&html);
        match render::selection_range(&self.state.tokens, component) {
            Some(range) => self.host.set_selection(range),
            None => self.host.clear_selection(),
        }
    }
}
