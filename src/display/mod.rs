//! Display formatting for terminal output
//!
//! Provides utilities for formatting slots and backup archives for terminal
//! display.

pub mod archive;
pub mod slot;

pub use archive::{format_archive_list, format_size};
pub use slot::{format_play_time, format_slot_details, format_slot_list, SlotSummary};
