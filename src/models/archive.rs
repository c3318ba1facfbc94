//! Backup archive model
//!
//! Archives are named `YYYY-MM-DD YY-S-DD.zip`: the real-world creation date
//! followed by the compact in-game date. Both halves are zero-padded, so
//! ordering archives by file name orders them chronologically.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::GameTime;

/// Extension of backup archives
pub const ARCHIVE_EXTENSION: &str = "zip";

/// A backup archive on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archive {
    /// Full path to the archive
    pub path: PathBuf,
    /// Real-world date the backup was taken, when the name follows the scheme
    pub creation_date: Option<NaiveDate>,
    /// In-game date of the backed-up state, when the name follows the scheme
    pub game_time: Option<GameTime>,
}

impl Archive {
    /// Describe the archive at `path`, reading dates out of its file name
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (creation_date, game_time) = path
            .file_stem()
            .map(|stem| parse_stem(&stem.to_string_lossy()))
            .unwrap_or((None, None));

        Self {
            path,
            creation_date,
            game_time,
        }
    }

    /// The archive's file name, e.g. `2024-03-01 01-2-05.zip`
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// The file name without the `.zip` extension
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// Name of the containing directory, which mirrors the slot's full name
    pub fn slot_dir_name(&self) -> Option<String> {
        self.path
            .parent()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().to_string())
    }

    /// Size on disk, if the archive still exists
    pub fn size_bytes(&self) -> Option<u64> {
        std::fs::metadata(&self.path).ok().map(|m| m.len())
    }
}

impl Ord for Archive {
    fn cmp(&self, other: &Self) -> Ordering {
        self.file_name()
            .cmp(&other.file_name())
            .then_with(|| self.path.cmp(&other.path))
    }
}

impl PartialOrd for Archive {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Split `YYYY-MM-DD YY-S-DD` into its two dates
fn parse_stem(stem: &str) -> (Option<NaiveDate>, Option<GameTime>) {
    let Some((date, game)) = stem.split_once(' ') else {
        return (None, None);
    };
    let creation_date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok();
    let game_time = GameTime::parse_compact(game);
    match (creation_date, game_time) {
        (Some(date), Some(time)) => (Some(date), Some(time)),
        _ => (None, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Season;

    #[test]
    fn test_parse_conforming_name() {
        let archive = Archive::from_path("/game/Backup/Abby_42/2024-03-01 01-2-05.zip");

        assert_eq!(
            archive.creation_date,
            Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        );
        assert_eq!(archive.game_time, Some(GameTime::new(1, Season::Summer, 5)));
        assert_eq!(archive.file_name(), "2024-03-01 01-2-05.zip");
        assert_eq!(archive.stem(), "2024-03-01 01-2-05");
        assert_eq!(archive.slot_dir_name().as_deref(), Some("Abby_42"));
    }

    #[test]
    fn test_custom_name_has_no_dates() {
        let archive = Archive::from_path("/game/Backup/Abby_42/before-boss.zip");
        assert!(archive.creation_date.is_none());
        assert!(archive.game_time.is_none());
    }

    #[test]
    fn test_archives_order_by_file_name() {
        let mut archives = vec![
            Archive::from_path("/b/Abby_42/2024-03-02 01-1-01.zip"),
            Archive::from_path("/b/Abby_42/2024-03-01 01-2-05.zip"),
            Archive::from_path("/b/Abby_42/2024-03-01 01-1-28.zip"),
        ];
        archives.sort();

        let names: Vec<String> = archives.iter().map(Archive::file_name).collect();
        assert_eq!(
            names,
            vec![
                "2024-03-01 01-1-28.zip",
                "2024-03-01 01-2-05.zip",
                "2024-03-02 01-1-01.zip",
            ]
        );
    }
}
