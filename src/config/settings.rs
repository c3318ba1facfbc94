//! User settings for sdsm
//!
//! Manages user preferences: the game-data location, which archive a restore
//! picks when none is named, and whether operations are audited.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::SdsmPaths;
use crate::error::SdsmError;

/// Which archive a restore picks when no file name is given
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DefaultRestore {
    /// The lexicographically first archive (oldest creation date)
    Earliest,
    /// The lexicographically last archive (newest creation date)
    #[default]
    Latest,
}

/// User settings for sdsm
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Game-data root containing `Saves/` and `Backup/`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_dir: Option<PathBuf>,

    /// Archive picked by `restore` without `--file`
    #[serde(default)]
    pub default_restore: DefaultRestore,

    /// Whether backup, restore and delete are written to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            game_dir: None,
            default_restore: DefaultRestore::default(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &SdsmPaths) -> Result<Self, SdsmError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SdsmError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SdsmError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SdsmPaths) -> Result<(), SdsmError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SdsmError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SdsmError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
