//! In-game date reader

use std::path::Path;

use super::{field, numeric_field, read_document, MetadataDialect, SeasonEncoding};
use crate::error::{SdsmError, SdsmResult};
use crate::models::{GameTime, Season};

/// Read the in-game date from the metadata document at `path`
///
/// # Errors
///
/// - `Metadata` if the document is missing, malformed, or lacks a field,
///   or if year/day are not non-negative/positive integers
/// - `InvalidSeason` if the season name or index is outside the four seasons
pub fn read_game_time(path: &Path, dialect: &MetadataDialect) -> SdsmResult<GameTime> {
    read_document(path, |root| {
        let year: u32 = numeric_field(root, path, dialect.year)?;
        let season = match dialect.season_encoding {
            SeasonEncoding::Name => Season::from_name(field(root, path, dialect.season)?)?,
            SeasonEncoding::Index => Season::from_index(numeric_field(root, path, dialect.season)?)?,
        };
        let day: u32 = numeric_field(root, path, dialect.day)?;
        if day == 0 {
            return Err(SdsmError::metadata(
                path,
                format!("element '{}' must be positive", dialect.day),
            ));
        }

        Ok(GameTime::new(year, season, day))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_doc(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("doc.xml");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_save_game_info_dialect() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(
            &dir,
            "<Farmer><yearForSaveGame>1</yearForSaveGame>\
             <seasonForSaveGame>1</seasonForSaveGame>\
             <dayOfMonthForSaveGame>5</dayOfMonthForSaveGame></Farmer>",
        );

        let time = read_game_time(&path, &MetadataDialect::SAVE_GAME_INFO).unwrap();
        assert_eq!(time, GameTime::new(1, Season::Summer, 5));
    }

    #[test]
    fn test_save_file_dialect() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(
            &dir,
            "<SaveGame><year>2</year><currentSeason>winter</currentSeason>\
             <dayOfMonth>28</dayOfMonth></SaveGame>",
        );

        let time = read_game_time(&path, &MetadataDialect::SAVE_FILE).unwrap();
        assert_eq!(time, GameTime::new(2, Season::Winter, 28));
    }

    #[test]
    fn test_both_dialects_agree() {
        let dir = TempDir::new().unwrap();
        let by_name = dir.path().join("by_name.xml");
        let by_index = dir.path().join("by_index.xml");
        std::fs::write(
            &by_name,
            "<SaveGame><year>4</year><currentSeason>Fall</currentSeason><dayOfMonth>13</dayOfMonth></SaveGame>",
        )
        .unwrap();
        std::fs::write(
            &by_index,
            "<Farmer><yearForSaveGame>4</yearForSaveGame><seasonForSaveGame>2</seasonForSaveGame>\
             <dayOfMonthForSaveGame>13</dayOfMonthForSaveGame></Farmer>",
        )
        .unwrap();

        assert_eq!(
            read_game_time(&by_name, &MetadataDialect::SAVE_FILE).unwrap(),
            read_game_time(&by_index, &MetadataDialect::SAVE_GAME_INFO).unwrap()
        );
    }

    #[test]
    fn test_unknown_season_name() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(
            &dir,
            "<SaveGame><year>1</year><currentSeason>Autumn</currentSeason><dayOfMonth>1</dayOfMonth></SaveGame>",
        );

        let err = read_game_time(&path, &MetadataDialect::SAVE_FILE).unwrap_err();
        assert!(matches!(err, SdsmError::InvalidSeason(ref s) if s == "Autumn"));
    }

    #[test]
    fn test_season_index_out_of_range() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(
            &dir,
            "<Farmer><yearForSaveGame>1</yearForSaveGame><seasonForSaveGame>4</seasonForSaveGame>\
             <dayOfMonthForSaveGame>1</dayOfMonthForSaveGame></Farmer>",
        );

        let err = read_game_time(&path, &MetadataDialect::SAVE_GAME_INFO).unwrap_err();
        assert!(matches!(err, SdsmError::InvalidSeason(_)));
    }

    #[test]
    fn test_missing_and_non_numeric_fields() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(
            &dir,
            "<Farmer><yearForSaveGame>1</yearForSaveGame><seasonForSaveGame>0</seasonForSaveGame></Farmer>",
        );
        let err = read_game_time(&path, &MetadataDialect::SAVE_GAME_INFO).unwrap_err();
        assert!(err.is_metadata());

        let path = write_doc(
            &dir,
            "<Farmer><yearForSaveGame>one</yearForSaveGame><seasonForSaveGame>0</seasonForSaveGame>\
             <dayOfMonthForSaveGame>1</dayOfMonthForSaveGame></Farmer>",
        );
        let err = read_game_time(&path, &MetadataDialect::SAVE_GAME_INFO).unwrap_err();
        assert!(err.is_metadata());

        let path = write_doc(
            &dir,
            "<Farmer><yearForSaveGame>1</yearForSaveGame><seasonForSaveGame>0</seasonForSaveGame>\
             <dayOfMonthForSaveGame>0</dayOfMonthForSaveGame></Farmer>",
        );
        let err = read_game_time(&path, &MetadataDialect::SAVE_GAME_INFO).unwrap_err();
        assert!(err.is_metadata());
        assert!(err.to_string().contains("must be positive"));
    }
}
