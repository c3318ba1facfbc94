//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the backup engine.

pub mod backup;
pub mod config;
pub mod restore;
pub mod slot;

pub use backup::{handle_backup_command, handle_delete_command, handle_list_command};
pub use config::{handle_config_command, handle_history_command};
pub use restore::handle_restore_command;
pub use slot::{handle_info_command, handle_slots_command};

use crate::audit::AuditLogger;
use crate::backup::{BackupManager, RestoreManager};
use crate::config::{GamePaths, SdsmPaths, Settings};

/// Everything a command needs, resolved once at startup
pub struct Context {
    pub paths: SdsmPaths,
    pub settings: Settings,
    pub game: GamePaths,
}

impl Context {
    pub fn new(paths: SdsmPaths, settings: Settings, game: GamePaths) -> Self {
        Self {
            paths,
            settings,
            game,
        }
    }

    /// The audit logger, unless auditing is disabled in the settings
    pub fn audit_logger(&self) -> Option<AuditLogger> {
        self.settings
            .audit_enabled
            .then(|| AuditLogger::new(self.paths.audit_log()))
    }

    pub fn backup_manager(&self) -> BackupManager {
        let manager = BackupManager::new(self.game.clone());
        match self.audit_logger() {
            Some(logger) => manager.with_audit(logger),
            None => manager,
        }
    }

    pub fn restore_manager(&self) -> RestoreManager {
        let manager = RestoreManager::new(self.game.clone());
        match self.audit_logger() {
            Some(logger) => manager.with_audit(logger),
            None => manager,
        }
    }
}
