//! Path management for sdsm
//!
//! Two sets of paths are resolved here:
//!
//! - `SdsmPaths`: where the tool keeps its own settings and audit log
//! - `GamePaths`: the game-data root holding `Saves/` and `Backup/`
//!
//! ## Tool path resolution order
//!
//! 1. `SDSM_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory joined with `sdsm`
//!
//! ## Game path resolution order
//!
//! 1. Explicit override (the `--game-dir` flag or `SDSM_GAME_DIR`)
//! 2. `game_dir` from the persisted settings
//! 3. The platform config directory joined with `StardewValley`
//!    (`%APPDATA%\StardewValley` on Windows, `~/.config/StardewValley` on Linux)

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use super::settings::Settings;
use crate::error::{SdsmError, SdsmResult};

/// Directory name of the game inside the platform config directory
const GAME_DIR_NAME: &str = "StardewValley";

/// Manages the paths sdsm uses for its own state
#[derive(Debug, Clone)]
pub struct SdsmPaths {
    /// Base directory for settings and the audit log
    base_dir: PathBuf,
}

impl SdsmPaths {
    /// Create a new SdsmPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the platform config directory cannot be determined.
    pub fn new() -> SdsmResult<Self> {
        let base_dir = if let Ok(custom) = std::env::var("SDSM_CONFIG_DIR") {
            PathBuf::from(custom)
        } else {
            platform_config_dir()?.join("sdsm")
        };

        Ok(Self { base_dir })
    }

    /// Create SdsmPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> SdsmResult<()> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SdsmError::Io(format!("Failed to create config directory: {}", e)))
    }
}

/// The game-data root and the directories derived from it
///
/// Resolved once at startup and handed to the locator and the engines;
/// never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GamePaths {
    game_dir: PathBuf,
}

impl GamePaths {
    /// Use the given directory as the game-data root
    pub fn new(game_dir: impl Into<PathBuf>) -> Self {
        Self {
            game_dir: game_dir.into(),
        }
    }

    /// Resolve the game-data root from an explicit override, the settings,
    /// or the platform default, in that order
    pub fn resolve(override_dir: Option<&Path>, settings: &Settings) -> SdsmResult<Self> {
        if let Some(dir) = override_dir {
            return Ok(Self::new(dir));
        }
        if let Some(dir) = &settings.game_dir {
            return Ok(Self::new(dir));
        }
        Ok(Self::new(platform_config_dir()?.join(GAME_DIR_NAME)))
    }

    /// Get the game-data root
    pub fn game_dir(&self) -> &Path {
        &self.game_dir
    }

    /// Get the Saves root (`<game>/Saves`)
    pub fn saves_dir(&self) -> PathBuf {
        self.game_dir.join("Saves")
    }

    /// Get the Backup root (`<game>/Backup`)
    pub fn backup_dir(&self) -> PathBuf {
        self.game_dir.join("Backup")
    }

    /// Fail unless the Saves root exists
    pub fn ensure_saves_dir(&self) -> SdsmResult<()> {
        let saves = self.saves_dir();
        if saves.is_dir() {
            Ok(())
        } else {
            Err(SdsmError::Config(format!(
                "No Saves directory found at {}",
                saves.display()
            )))
        }
    }
}

fn platform_config_dir() -> SdsmResult<PathBuf> {
    BaseDirs::new()
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| SdsmError::Config("Could not determine the home directory".into()))
}
