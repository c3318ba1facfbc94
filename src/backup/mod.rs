//! Backup system for sdsm
//!
//! Archives save slots and restores them.
//!
//! # Architecture
//!
//! - `archive_name`: derives `YYYY-MM-DD YY-S-DD.zip` from today's date and
//!   the slot's in-game date
//! - `BackupManager`: writes, lists and deletes archives
//! - `RestoreManager`: selects an archive and extracts it into a slot
//!
//! # Archive Format
//!
//! A deflate-compressed zip with exactly two entries:
//! - `<name>_<id>`: the save-state file
//! - `SaveGameInfo`: the metadata file
//!
//! # Example
//!
//! ```rust,ignore
//! use sdsm::backup::{ArchiveSelection, BackupManager, RestoreManager};
//! use sdsm::config::GamePaths;
//!
//! let paths = GamePaths::new("/home/me/.config/StardewValley");
//! let archive = BackupManager::new(paths.clone()).backup_slot("Abby")?;
//!
//! // Later, bring the newest backup back
//! let result = RestoreManager::new(paths).restore_slot("Abby", &ArchiveSelection::Latest)?;
//! println!("{}", result.summary());
//! ```

mod manager;
mod namer;
mod restore;

pub use manager::BackupManager;
pub use namer::archive_name;
pub use restore::{ArchiveSelection, RestoreManager, RestoreResult};
