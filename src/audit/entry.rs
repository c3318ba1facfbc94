//! Audit entry data structures
//!
//! Defines the structure of audit log entries: which operation ran, on which
//! slot and archive, and when.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::GameTime;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// An archive was written
    Backup,
    /// An archive was extracted into a save directory
    Restore,
    /// An archive was removed
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Backup => write!(f, "BACKUP"),
            Operation::Restore => write!(f, "RESTORE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Full directory name of the slot, e.g. `Abby_42`
    pub slot: String,

    /// Archive file name the operation touched
    pub archive: String,

    /// In-game date of the archived state, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_time: Option<GameTime>,
}

impl AuditEntry {
    /// Create a new audit entry stamped with the current time
    pub fn new(
        operation: Operation,
        slot: impl Into<String>,
        archive: impl Into<String>,
        game_time: Option<GameTime>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            slot: slot.into(),
            archive: archive.into(),
            game_time,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.slot,
            self.archive
        );

        if let Some(time) = &self.game_time {
            output.push_str(&format!(" ({})", time.human()));
        }

        output
    }
}
