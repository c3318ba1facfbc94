//! Played-time reader

use std::path::Path;
use std::time::Duration;

use super::{numeric_field, read_document};
use crate::error::SdsmResult;

const PLAYED_FIELD: &str = "millisecondsPlayed";

/// Read the total played time from the metadata document at `path`,
/// rounded to the nearest whole second (ties to even)
pub fn read_play_time(path: &Path) -> SdsmResult<Duration> {
    read_document(path, |root| {
        let millis: u64 = numeric_field(root, path, PLAYED_FIELD)?;
        Ok(Duration::from_secs(round_millis(millis)))
    })
}

fn round_millis(millis: u64) -> u64 {
    let (secs, rem) = (millis / 1000, millis % 1000);
    match rem {
        0..=499 => secs,
        500 if secs % 2 == 0 => secs,
        _ => secs + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_round_millis() {
        assert_eq!(round_millis(0), 0);
        assert_eq!(round_millis(1_499), 1);
        assert_eq!(round_millis(1_501), 2);
        assert_eq!(round_millis(2_500), 2);
        assert_eq!(round_millis(3_500), 4);
    }

    #[test]
    fn test_read_play_time() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("SaveGameInfo");
        std::fs::write(
            &path,
            "<Farmer><millisecondsPlayed>3723600</millisecondsPlayed></Farmer>",
        )
        .unwrap();

        assert_eq!(read_play_time(&path).unwrap(), Duration::from_secs(3724));
    }

    #[test]
    fn test_missing_field() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("SaveGameInfo");
        std::fs::write(&path, "<Farmer><name>Abby</name></Farmer>").unwrap();

        assert!(read_play_time(&path).unwrap_err().is_metadata());
    }
}
