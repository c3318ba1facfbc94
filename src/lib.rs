//! sdsm - Stardew Valley save manager
//!
//! This library backs up and restores Stardew Valley save slots. A slot is a
//! directory under the game's `Saves/` folder holding a save-state file and a
//! `SaveGameInfo` metadata file. A backup is a zip of those two files, named
//! after the real-world date it was taken and the in-game date it captures,
//! stored under `Backup/<slot dir>/`.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration, settings, and path management
//! - `error`: Custom error types
//! - `models`: In-game dates, slots, and archives
//! - `metadata`: Readers for the game's XML metadata
//! - `storage`: Slot and archive discovery on disk
//! - `backup`: Archive creation and restoration
//! - `audit`: Audit logging of backup, restore and delete operations
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use sdsm::backup::{ArchiveSelection, BackupManager, RestoreManager};
//! use sdsm::config::GamePaths;
//!
//! let game = GamePaths::new("/home/me/.config/StardewValley");
//! let backups = BackupManager::new(game.clone());
//! backups.backup_slot("Abby")?;
//!
//! let restores = RestoreManager::new(game);
//! restores.restore_slot("Abby", &ArchiveSelection::Latest)?;
//! ```

pub mod audit;
pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod metadata;
pub mod models;
pub mod storage;

#[cfg(test)]
mod testing;

pub use backup::{ArchiveSelection, BackupManager, RestoreManager};
pub use error::{SdsmError, SdsmResult};
pub use models::{Archive, GameTime, Season, Slot};
pub use storage::SlotLocator;
