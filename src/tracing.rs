//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging for debugging navigation and display-sync
//! issues.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=lexiview::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/lexiview/logs/lexiview.log` with daily
//! rotation. File logging uses debug level by default for more verbose
//! troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::host::TextHost;
use crate::view::SentenceView;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG env var for filtering. File logging
/// writes to `~/.config/lexiview/logs/lexiview.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "lexiview.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of navigation state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSnapshot {
    pub simple_view: bool,
    pub word_count: usize,
    pub current_word: Option<usize>,
    pub revision: u64,
}

impl NavSnapshot {
    pub fn from_view<H: TextHost>(view: &SentenceView<H>) -> Self {
        Self {
            simple_view: view.is_simple_view(),
            word_count: view.word_count(),
            current_word: view.current_word(),
            revision: view.revision(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &NavSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.simple_view != other.simple_view {
            changes.push(format!(
                "simple view: {} -> {}",
                self.simple_view, other.simple_view
            ));
        }
        if self.word_count != other.word_count {
            changes.push(format!(
                "words: {} -> {}",
                self.word_count, other.word_count
            ));
        }
        if self.current_word != other.current_word {
            changes.push(format!(
                "current: {:?} -> {:?}",
                self.current_word, other.current_word
            ));
        }
        if self.revision != other.revision {
            changes.push(format!("rev: {} -> {}", self.revision, other.revision));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
