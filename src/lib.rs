//! lexiview - word-navigable sentence widget core
//!
//! A sentence buffer with `__bold__` vocabulary markers, tokenized into
//! words and separators, plus a read-only "simple view" mode that steps
//! word-by-word with arrow keys: the current word is highlighted in the
//! rendered markup, mirrored into the host widget's selection, and
//! emitted after a debounce delay as a lookup notification for
//! dictionary code downstream.
//!
//! The crate follows an Elm-style split: [`SentenceView`] holds state,
//! [`update`] handles [`Msg`] values and returns [`Cmd`] side effects,
//! and the host widget is reached through the [`TextHost`] capability
//! trait rather than by subclassing.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod host;
pub mod markup;
pub mod messages;
pub mod render;
pub mod tokenize;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::ViewerConfig;
pub use host::{RopeHost, StringHost, TextHost};
pub use messages::{Direction, KeyDisposition, KeyPress, Msg};
pub use tokenize::{Token, TokenKind};
pub use update::{intercept_key, update};
pub use view::SentenceView;
