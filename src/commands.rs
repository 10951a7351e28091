//! Command types returned from update functions.
//!
//! Commands represent side effects the embedder performs after an
//! update: managing the single-shot lookup timer and delivering the
//! word-chosen notification. The core itself never blocks or spawns.

/// Side effects returned by [`crate::update::update`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No side effect
    #[default]
    None,
    /// Start (or restart, replacing any pending schedule) the single-shot
    /// lookup timer. After `delay_ms`, send `Msg::LookupElapsed` back with
    /// the same `revision`. A firing whose revision is no longer current
    /// is discarded by `update`, so a lapsed embedder timer cannot emit a
    /// stale lookup.
    ScheduleLookup { revision: u64, delay_ms: u64 },
    /// Stop the lookup timer if one is pending
    CancelLookup,
    /// The word-chosen notification: hand `word` to the lookup consumer
    EmitLookup(String),
    /// Execute multiple commands in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command carries no effect at all
    pub fn is_none(&self) -> bool {
        match self {
            Cmd::None => true,
            Cmd::Batch(cmds) => cmds.iter().all(|c| c.is_none()),
            _ => false,
        }
    }

    /// The revision of a scheduled lookup, if this command starts one
    pub fn scheduled_revision(&self) -> Option<u64> {
        match self {
            Cmd::ScheduleLookup { revision, .. } => Some(*revision),
            Cmd::Batch(cmds) => cmds.iter().find_map(|c| c.scheduled_revision()),
            _ => None,
        }
    }

    /// The emitted word, if this command delivers a notification
    pub fn emitted_word(&self) -> Option<&str> {
        match self {
            Cmd::EmitLookup(word) => Some(word),
            Cmd::Batch(cmds) => cmds.iter().find_map(|c| c.emitted_word()),
            _ => None,
        }
    }
}
