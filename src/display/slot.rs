//! Slot display formatting
//!
//! Formats save slots for terminal output in table and detail views.

use std::time::Duration;

use crate::models::{GameTime, Slot};

/// A slot together with the values shown next to it
#[derive(Debug, Clone)]
pub struct SlotSummary {
    pub slot: Slot,
    pub game_time: Option<GameTime>,
    pub play_time: Option<Duration>,
    pub backup_count: usize,
}

impl SlotSummary {
    /// Read the slot's metadata; unreadable values are shown as unknown
    pub fn load(slot: Slot, backup_count: usize) -> Self {
        Self {
            game_time: slot.game_time().ok(),
            play_time: slot.play_time().ok(),
            slot,
            backup_count,
        }
    }
}

/// Format played time like `1:02:03`, or `2 days, 1:02:03` past a day
pub fn format_play_time(duration: Duration) -> String {
    let total = duration.as_secs();
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;

    let clock = format!("{}:{:02}:{:02}", hours, minutes, seconds);
    match days {
        0 => clock,
        1 => format!("1 day, {}", clock),
        n => format!("{} days, {}", n, clock),
    }
}

/// Format a list of slots as a table
pub fn format_slot_list(summaries: &[SlotSummary]) -> String {
    if summaries.is_empty() {
        return "No save slots found.".to_string();
    }

    let name_width = summaries
        .iter()
        .map(|s| s.slot.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let dir_width = summaries
        .iter()
        .map(|s| s.slot.full_name.len())
        .max()
        .unwrap_or(9)
        .max(9);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<dir_width$}  {:<26}  {:>12}  {:>7}\n",
        "Name",
        "Directory",
        "In-Game Date",
        "Played",
        "Backups",
        name_width = name_width,
        dir_width = dir_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<dir_width$}  {:-<26}  {:->12}  {:->7}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
        dir_width = dir_width,
    ));

    for summary in summaries {
        output.push_str(&format!(
            "{:<name_width$}  {:<dir_width$}  {:<26}  {:>12}  {:>7}\n",
            summary.slot.name,
            summary.slot.full_name,
            summary.game_time.map_or_else(|| "?".to_string(), |t| t.human()),
            summary.play_time.map_or_else(|| "?".to_string(), format_play_time),
            summary.backup_count,
            name_width = name_width,
            dir_width = dir_width,
        ));
    }

    output
}

/// Format detailed information about one slot
pub fn format_slot_details(summary: &SlotSummary) -> String {
    let slot = &summary.slot;
    let mut output = String::new();

    output.push_str(&format!("Slot: {}\n", slot.name));
    output.push_str(&format!("  Directory:    {}\n", slot.save_dir.display()));
    output.push_str(&format!("  Backups in:   {}\n", slot.backup_dir.display()));
    output.push_str(&format!(
        "  In-game date: {}\n",
        summary
            .game_time
            .map_or_else(|| "unknown".to_string(), |t| t.human())
    ));
    output.push_str(&format!(
        "  Played time:  {}\n",
        summary
            .play_time
            .map_or_else(|| "unknown".to_string(), format_play_time)
    ));
    output.push_str(&format!("  Backups:      {}\n", summary.backup_count));

    if !slot.is_consistent() {
        output.push_str("  Warning: save file or SaveGameInfo is missing\n");
    }

    output
}
