//! Archive file naming
//!
//! `YYYY-MM-DD YY-S-DD.zip`: the real-world date the backup was taken, a
//! space, and the compact in-game date. Every numeric field is zero-padded,
//! so sorting file names as strings sorts backups chronologically by
//! (creation date, in-game date) for in-game years below 100. "Latest
//! backup" relies on this.
//!
//! Two backups of the same in-game moment on the same day get the same
//! name; the second replaces the first.

use chrono::NaiveDate;

use crate::models::{GameTime, ARCHIVE_EXTENSION};

/// Build the archive file name for a backup taken on `today` of a save at `game_time`
///
/// The in-game year is padded to two digits, not truncated. Ordering by
/// name is chronological only for in-game years 0..=99; from year 100 on a
/// same-day backup sorts before those of years 11..=99.
pub fn archive_name(today: NaiveDate, game_time: &GameTime) -> String {
    format!(
        "{} {}.{}",
        today.format("%Y-%m-%d"),
        game_time.compact(),
        ARCHIVE_EXTENSION
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Archive, Season};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_archive_name() {
        let name = archive_name(date(2024, 3, 1), &GameTime::new(1, Season::Summer, 5));
        assert_eq!(name, "2024-03-01 01-2-05.zip");
    }

    #[test]
    fn test_archive_name_is_deterministic() {
        let time = GameTime::new(3, Season::Fall, 17);
        assert_eq!(
            archive_name(date(2025, 12, 31), &time),
            archive_name(date(2025, 12, 31), &time)
        );
    }

    #[test]
    fn test_string_order_matches_chronological_order() {
        let mut pairs = Vec::new();
        for day in [date(2023, 12, 31), date(2024, 1, 2), date(2024, 10, 1)] {
            for year in [1, 2, 11] {
                for season in Season::ALL {
                    for d in [1, 9, 10, 28] {
                        pairs.push((day, GameTime::new(year, season, d)));
                    }
                }
            }
        }

        let mut chronological = pairs.clone();
        chronological.sort();
        let expected: Vec<String> = chronological
            .iter()
            .map(|(day, time)| archive_name(*day, time))
            .collect();

        let mut by_name: Vec<String> = pairs
            .iter()
            .map(|(day, time)| archive_name(*day, time))
            .collect();
        by_name.sort();

        assert_eq!(by_name, expected);
    }

    #[test]
    fn test_three_digit_year_breaks_name_order() {
        let today = date(2024, 1, 1);
        let year_99 = archive_name(today, &GameTime::new(99, Season::Winter, 28));
        let year_100 = archive_name(today, &GameTime::new(100, Season::Spring, 1));

        assert_eq!(year_100, "2024-01-01 100-1-01.zip");
        assert!(year_100 < year_99);
        assert_eq!(
            Archive::from_path(&year_100).game_time,
            Some(GameTime::new(100, Season::Spring, 1))
        );
    }

    #[test]
    fn test_name_parses_back() {
        let time = GameTime::new(2, Season::Winter, 9);
        let name = archive_name(date(2024, 3, 1), &time);
        let archive = Archive::from_path(name);

        assert_eq!(archive.creation_date, Some(date(2024, 3, 1)));
        assert_eq!(archive.game_time, Some(time));
    }
}
