//! On-disk layout of the game-data root
//!
//! ```text
//! <game dir>/
//! ├── Saves/
//! │   └── <name>_<id>/
//! │       ├── <name>_<id>      save-state file
//! │       └── SaveGameInfo     metadata file
//! └── Backup/
//!     └── <name>_<id>/
//!         └── YYYY-MM-DD YY-S-DD.zip
//! ```

pub mod locator;

pub use locator::{find_slot_dir, list_archives, SlotLocator};
