//! Slot and archive discovery
//!
//! Slot directories are named `<logical name>_<id>`. The same directory name
//! is mirrored under the Backup root, so one lookup serves both roots.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::paths::GamePaths;
use crate::error::{SdsmError, SdsmResult};
use crate::models::{logical_name, Archive, Slot, ARCHIVE_EXTENSION, SLOT_ID_SEPARATOR};

/// Find the directory under `root` belonging to the slot `logical_name`
///
/// Candidates are the immediate subdirectories whose name starts with
/// `logical_name` followed by the id separator. They are examined in name
/// order and one whose logical name matches exactly wins over a mere prefix
/// match (`Farm` finds `Farm_1` before `Farm_Two_2`).
///
/// # Errors
///
/// - `SlotNotFound` if no subdirectory matches or `root` does not exist
/// - `Io` if `root` exists but cannot be listed
pub fn find_slot_dir(root: &Path, logical: &str) -> SdsmResult<PathBuf> {
    let prefix = format!("{}{}", logical, SLOT_ID_SEPARATOR);
    let dirs = match subdirectories(root) {
        Ok(dirs) => dirs,
        Err(_) if !root.exists() => return Err(SdsmError::slot_not_found(logical)),
        Err(e) => return Err(e),
    };
    let mut candidates: Vec<(String, PathBuf)> = dirs
        .into_iter()
        .filter(|(name, _)| name.starts_with(&prefix))
        .collect();
    candidates.sort();

    let exact = candidates
        .iter()
        .position(|(name, _)| logical_name(name) == logical);
    match exact {
        Some(index) => Ok(candidates.swap_remove(index).1),
        None => candidates
            .into_iter()
            .next()
            .map(|(_, path)| path)
            .ok_or_else(|| SdsmError::slot_not_found(logical)),
    }
}

/// Every `*.zip` file directly inside `backup_slot_dir`
///
/// No order is imposed; callers sort when they need "earliest"/"latest".
/// A directory that does not exist yet has no archives.
pub fn list_archives(backup_slot_dir: &Path) -> SdsmResult<Vec<Archive>> {
    if !backup_slot_dir.exists() {
        return Ok(Vec::new());
    }

    let mut archives = Vec::new();
    for entry in fs::read_dir(backup_slot_dir)
        .map_err(|e| SdsmError::Io(format!("Failed to read backup directory: {}", e)))?
    {
        let entry =
            entry.map_err(|e| SdsmError::Io(format!("Failed to read directory entry: {}", e)))?;

        let path = entry.path();
        if path.is_file() && path.extension().map_or(false, |ext| ext == ARCHIVE_EXTENSION) {
            archives.push(Archive::from_path(path));
        }
    }

    Ok(archives)
}

/// Resolves slots and their backup directories against one game-data root
#[derive(Debug, Clone)]
pub struct SlotLocator {
    paths: GamePaths,
}

impl SlotLocator {
    pub fn new(paths: GamePaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &GamePaths {
        &self.paths
    }

    /// All slots under the Saves root, sorted by directory name
    ///
    /// Only directories carrying an id separator count as slots.
    pub fn slots(&self) -> SdsmResult<Vec<Slot>> {
        let saves = self.paths.saves_dir();
        if !saves.exists() {
            return Ok(Vec::new());
        }

        let mut dirs = subdirectories(&saves)?;
        dirs.sort();

        let backup_root = self.paths.backup_dir();
        dirs.into_iter()
            .filter(|(name, _)| name.contains(SLOT_ID_SEPARATOR))
            .map(|(_, path)| Slot::new(path, &backup_root))
            .collect()
    }

    /// Find the slot `logical` under the Saves root
    pub fn find_slot(&self, logical: &str) -> SdsmResult<Slot> {
        let dir = find_slot_dir(&self.paths.saves_dir(), logical)?;
        Slot::new(dir, &self.paths.backup_dir())
    }

    /// Find the backup directory of slot `logical` under the Backup root
    ///
    /// Works even when the slot itself no longer exists under Saves.
    pub fn find_backup_dir(&self, logical: &str) -> SdsmResult<PathBuf> {
        find_slot_dir(&self.paths.backup_dir(), logical)
    }

    /// The Saves directory a backup directory restores into
    pub fn save_dir_for(&self, backup_slot_dir: &Path) -> SdsmResult<PathBuf> {
        backup_slot_dir
            .file_name()
            .map(|name| self.paths.saves_dir().join(name))
            .ok_or_else(|| SdsmError::slot_not_found(backup_slot_dir.display().to_string()))
    }
}

/// Immediate subdirectories of `root` as (name, path) pairs
fn subdirectories(root: &Path) -> SdsmResult<Vec<(String, PathBuf)>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(root)
        .map_err(|e| SdsmError::Io(format!("Failed to read {}: {}", root.display(), e)))?
    {
        let entry =
            entry.map_err(|e| SdsmError::Io(format!("Failed to read directory entry: {}", e)))?;
        let path = entry.path();
        if path.is_dir() {
            dirs.push((entry.file_name().to_string_lossy().to_string(), path));
        }
    }
    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn mkdirs(root: &Path, names: &[&str]) {
        for name in names {
            fs::create_dir_all(root.join(name)).unwrap();
        }
    }

    #[test]
    fn test_find_single_match() {
        let temp = TempDir::new().unwrap();
        mkdirs(temp.path(), &["Farmer_123456"]);

        let found = find_slot_dir(temp.path(), "Farmer").unwrap();
        assert_eq!(found, temp.path().join("Farmer_123456"));
    }

    #[test]
    fn test_no_match_is_slot_not_found() {
        let temp = TempDir::new().unwrap();
        mkdirs(temp.path(), &["Other_1"]);

        let err = find_slot_dir(temp.path(), "Farmer").unwrap_err();
        assert!(matches!(err, SdsmError::SlotNotFound { ref name } if name == "Farmer"));

        let err = find_slot_dir(&temp.path().join("missing"), "Farmer").unwrap_err();
        assert!(matches!(err, SdsmError::SlotNotFound { .. }));
    }

    #[test]
    fn test_unreadable_root_is_io_error() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("Saves");
        fs::write(&root, "not a directory").unwrap();

        let err = find_slot_dir(&root, "Farmer").unwrap_err();
        assert!(matches!(err, SdsmError::Io(_)));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_files_and_bare_prefixes_are_ignored() {
        let temp = TempDir::new().unwrap();
        mkdirs(temp.path(), &["Farmer"]);
        fs::write(temp.path().join("Farmer_1"), "not a dir").unwrap();

        assert!(find_slot_dir(temp.path(), "Farmer").is_err());
    }

    #[test]
    fn test_exact_logical_name_wins() {
        let temp = TempDir::new().unwrap();
        mkdirs(temp.path(), &["Farm_Two_2", "Farm_9"]);

        let found = find_slot_dir(temp.path(), "Farm").unwrap();
        assert_eq!(found, temp.path().join("Farm_9"));

        let found = find_slot_dir(temp.path(), "Farm_Two").unwrap();
        assert_eq!(found, temp.path().join("Farm_Two_2"));
    }

    #[test]
    fn test_list_archives_only_zip_files() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("Abby_42");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("2024-03-01 01-2-05.zip"), b"").unwrap();
        fs::write(dir.join("2024-03-02 01-2-06.zip"), b"").unwrap();
        fs::write(dir.join("notes.txt"), b"").unwrap();

        let mut archives = list_archives(&dir).unwrap();
        archives.sort();
        assert_eq!(archives.len(), 2);
        assert_eq!(archives[0].file_name(), "2024-03-01 01-2-05.zip");
    }

    #[test]
    fn test_list_archives_missing_dir() {
        let temp = TempDir::new().unwrap();
        assert!(list_archives(&temp.path().join("nope")).unwrap().is_empty());
    }

    #[test]
    fn test_locator_slots() {
        let temp = TempDir::new().unwrap();
        let paths = GamePaths::new(temp.path());
        mkdirs(&paths.saves_dir(), &["Zed_2", "Abby_42", "stray"]);

        let locator = SlotLocator::new(paths.clone());
        let slots = locator.slots().unwrap();
        let names: Vec<&str> = slots.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Abby", "Zed"]);
        assert_eq!(slots[0].backup_dir, paths.backup_dir().join("Abby_42"));
    }

    #[test]
    fn test_locator_backup_dir_and_save_dir() {
        let temp = TempDir::new().unwrap();
        let paths = GamePaths::new(temp.path());
        mkdirs(&paths.backup_dir(), &["Abby_42"]);

        let locator = SlotLocator::new(paths.clone());
        let backup = locator.find_backup_dir("Abby").unwrap();
        assert_eq!(backup, paths.backup_dir().join("Abby_42"));
        assert_eq!(
            locator.save_dir_for(&backup).unwrap(),
            paths.saves_dir().join("Abby_42")
        );
        assert!(locator.find_slot("Abby").is_err());
    }
}
