//! Fixtures shared by unit tests

use std::fs;
use std::path::Path;

use crate::config::paths::GamePaths;
use crate::models::Slot;

/// Contents of a minimal save-state file
pub fn save_file_xml(year: u32, season: &str, day: u32) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\
         <SaveGame><player><name>Farmer</name></player>\
         <year>{}</year><currentSeason>{}</currentSeason><dayOfMonth>{}</dayOfMonth>\
         <millisecondsPlayed>3723600</millisecondsPlayed></SaveGame>",
        year, season, day
    )
}

/// Contents of a minimal `SaveGameInfo` file
pub fn save_game_info_xml(year: u32, season_index: u32, day: u32) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\
         <Farmer><name>Farmer</name>\
         <yearForSaveGame>{}</yearForSaveGame>\
         <seasonForSaveGame>{}</seasonForSaveGame>\
         <dayOfMonthForSaveGame>{}</dayOfMonthForSaveGame>\
         <millisecondsPlayed>3723600</millisecondsPlayed></Farmer>",
        year, season_index, day
    )
}

/// Create `Saves/<full_name>/` with both files under `game_dir`
pub fn create_slot(game_dir: &Path, full_name: &str, year: u32, season_index: u32, day: u32) -> Slot {
    const SEASONS: [&str; 4] = ["spring", "summer", "fall", "winter"];

    let paths = GamePaths::new(game_dir);
    let save_dir = paths.saves_dir().join(full_name);
    fs::create_dir_all(&save_dir).unwrap();

    let slot = Slot::new(&save_dir, &paths.backup_dir()).unwrap();
    fs::write(
        &slot.save_file,
        save_file_xml(year, SEASONS[season_index as usize], day),
    )
    .unwrap();
    fs::write(&slot.metadata_file, save_game_info_xml(year, season_index, day)).unwrap();
    slot
}
