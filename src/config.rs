//! Viewer configuration persistence
//!
//! Stores user preferences in `~/.config/lexiview/config.yaml`

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Debounce delay between landing on a word and emitting the lookup
pub const DEFAULT_LOOKUP_DELAY_MS: u64 = 1000;

fn default_lookup_delay_ms() -> u64 {
    DEFAULT_LOOKUP_DELAY_MS
}

fn default_highlight_color() -> String {
    "yellow".to_string()
}

/// Viewer configuration that persists across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Milliseconds between landing on a word and the lookup notification
    #[serde(default = "default_lookup_delay_ms")]
    pub lookup_delay_ms: u64,

    /// CSS color of the current-word highlight span
    #[serde(default = "default_highlight_color")]
    pub highlight_color: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            lookup_delay_ms: default_lookup_delay_ms(),
            highlight_color: default_highlight_color(),
        }
    }
}

impl ViewerConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = crate::config_paths::config_file()
            .context("no config directory available")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let content = serde_yaml::to_string(self).context("failed to serialize config")?;

        std::fs::write(&path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
