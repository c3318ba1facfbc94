//! Core data models for sdsm
//!
//! This module contains the data structures of the save-management domain:
//! in-game dates, save slots, and backup archives.

pub mod archive;
pub mod game_time;
pub mod slot;

pub use archive::{Archive, ARCHIVE_EXTENSION};
pub use game_time::{GameTime, Season};
pub use slot::{logical_name, Slot, METADATA_FILE_NAME, SLOT_ID_SEPARATOR};
