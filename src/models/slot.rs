//! Save slot model
//!
//! A slot is one save game. On disk it is a directory `Saves/<name>_<id>`
//! holding a save-state file named like the directory and a `SaveGameInfo`
//! metadata file. Its backups live under `Backup/<name>_<id>`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{SdsmError, SdsmResult};
use crate::metadata::{self, MetadataDialect};

use super::GameTime;

/// File name of the metadata document inside every slot directory
pub const METADATA_FILE_NAME: &str = "SaveGameInfo";

/// Separator between the logical name and the unique id in a slot directory name
pub const SLOT_ID_SEPARATOR: char = '_';

/// A discovered save slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// Logical (farm) name, e.g. `Abby`
    pub name: String,
    /// Full directory name including the unique id, e.g. `Abby_42`
    pub full_name: String,
    /// The slot directory under the Saves root
    pub save_dir: PathBuf,
    /// The save-state file, named identically to the directory
    pub save_file: PathBuf,
    /// The `SaveGameInfo` metadata file
    pub metadata_file: PathBuf,
    /// The slot's directory under the Backup root (may not exist yet)
    pub backup_dir: PathBuf,
}

impl Slot {
    /// Build a slot from its save directory and the Backup root
    pub fn new(save_dir: impl Into<PathBuf>, backup_root: &Path) -> SdsmResult<Self> {
        let save_dir = save_dir.into();
        let full_name = save_dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| SdsmError::slot_not_found(save_dir.display().to_string()))?;

        Ok(Self {
            name: logical_name(&full_name).to_string(),
            save_file: save_dir.join(&full_name),
            metadata_file: save_dir.join(METADATA_FILE_NAME),
            backup_dir: backup_root.join(&full_name),
            full_name,
            save_dir,
        })
    }

    /// Whether both the save-state file and the metadata file exist
    pub fn is_consistent(&self) -> bool {
        self.save_file.is_file() && self.metadata_file.is_file()
    }

    /// In-game date recorded in the metadata file
    pub fn game_time(&self) -> SdsmResult<GameTime> {
        metadata::read_game_time(&self.metadata_file, &MetadataDialect::SAVE_GAME_INFO)
    }

    /// Total played time recorded in the metadata file
    pub fn play_time(&self) -> SdsmResult<Duration> {
        metadata::read_play_time(&self.metadata_file)
    }
}

/// Strip the trailing `_<id>` from a slot directory name
///
/// Names without a separator are returned unchanged.
pub fn logical_name(full_name: &str) -> &str {
    full_name
        .rsplit_once(SLOT_ID_SEPARATOR)
        .map_or(full_name, |(name, _)| name)
}
