//! Message types for the sentence-view update loop.
//!
//! All state changes flow through these message types.

/// Direction for word stepping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Key presses delivered to the interception hook before the host
/// widget's default handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    ArrowLeft,
    ArrowRight,
    /// Any other key
    Other,
}

/// Outcome of key interception.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyDisposition {
    /// Deliver the key to the host widget's default handling
    PassThrough,
    /// The key is consumed; feed the message to `update`
    Consumed(Msg),
}

/// Messages the embedder feeds into [`crate::update::update`].
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Enable or disable simple view (read-only word navigation)
    SetSimpleView(bool),
    /// Replace the buffer through the rich-text path
    SetText(String),
    /// Replace the buffer through the plain-text path
    SetPlainText(String),
    /// Step the current word left or right (from key interception)
    Step(Direction),
    /// Wrap every whole-word occurrence in `__…__` markers
    Bold(String),
    /// Strip all `__` marker delimiters from the buffer
    Unbold,
    /// The single-shot lookup timer scheduled with this revision expired
    LookupElapsed { revision: u64 },
}
