//! Backup manager for sdsm
//!
//! Writes a slot's save-state file and `SaveGameInfo` into a deflate-compressed
//! zip archive under the slot's backup directory. Entries are stored under
//! their bare file names so extracting into a slot directory restores them in
//! place.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::audit::{AuditEntry, AuditLogger, Operation};
use crate::config::paths::GamePaths;
use crate::error::{SdsmError, SdsmResult};
use crate::models::{Archive, GameTime, Slot, METADATA_FILE_NAME};
use crate::storage::locator::{self, SlotLocator};

use super::namer::archive_name;

/// Creates, lists and deletes backup archives
pub struct BackupManager {
    locator: SlotLocator,
    audit: Option<AuditLogger>,
}

impl BackupManager {
    /// Create a new BackupManager for the given game-data root
    pub fn new(paths: GamePaths) -> Self {
        Self {
            locator: SlotLocator::new(paths),
            audit: None,
        }
    }

    /// Record every backup and deletion in `logger`
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn locator(&self) -> &SlotLocator {
        &self.locator
    }

    /// Back up `slot`
    ///
    /// `target_dir` defaults to the slot's backup directory and is created if
    /// absent. `file_name` defaults to today's date plus the in-game date read
    /// from `SaveGameInfo`. An existing archive of the same name is replaced.
    ///
    /// Returns the path to the created archive.
    ///
    /// # Errors
    ///
    /// - `SlotNotFound` if the save-state or metadata file is missing
    /// - `Metadata`/`InvalidSeason` if the default name cannot be derived
    /// - `Io` on any filesystem or compression failure; a partially written
    ///   archive may remain and is replaced by the next successful backup
    pub fn backup(
        &self,
        slot: &Slot,
        target_dir: Option<&Path>,
        file_name: Option<&str>,
    ) -> SdsmResult<PathBuf> {
        if !slot.is_consistent() {
            return Err(SdsmError::slot_not_found(&slot.full_name));
        }

        let target_dir = target_dir.unwrap_or(slot.backup_dir.as_path());
        fs::create_dir_all(target_dir)
            .map_err(|e| SdsmError::Io(format!("Failed to create backup directory: {}", e)))?;

        let (file_name, game_time) = match file_name {
            Some(name) => (name.to_string(), None),
            None => {
                let game_time = slot.game_time()?;
                let today = chrono::Local::now().date_naive();
                (archive_name(today, &game_time), Some(game_time))
            }
        };

        let archive_path = target_dir.join(&file_name);
        write_archive(slot, &archive_path)?;

        self.record(Operation::Backup, &slot.full_name, &file_name, game_time)?;

        Ok(archive_path)
    }

    /// Find the slot `logical` under Saves and back it up with default naming
    pub fn backup_slot(&self, logical: &str) -> SdsmResult<PathBuf> {
        let slot = self.locator.find_slot(logical)?;
        self.backup(&slot, None, None)
    }

    /// Back up every slot under Saves, stopping at the first failure
    pub fn backup_all(&self) -> SdsmResult<Vec<PathBuf>> {
        self.locator
            .slots()?
            .iter()
            .map(|slot| self.backup(slot, None, None))
            .collect()
    }

    /// Archives of `slot`, newest first
    pub fn list_archives(&self, slot: &Slot) -> SdsmResult<Vec<Archive>> {
        Ok(newest_first(locator::list_archives(&slot.backup_dir)?))
    }

    /// Archives of the slot `logical`, newest first, looked up under the
    /// Backup root so archives of removed slots are still listed
    pub fn list_archives_for(&self, logical: &str) -> SdsmResult<Vec<Archive>> {
        let dir = self.locator.find_backup_dir(logical)?;
        Ok(newest_first(locator::list_archives(&dir)?))
    }

    /// Delete an archive
    ///
    /// # Errors
    ///
    /// `ArchiveNotFound` if it disappeared since it was listed.
    pub fn delete_archive(&self, archive: &Archive) -> SdsmResult<()> {
        if !archive.path.is_file() {
            return Err(SdsmError::ArchiveNotFound(archive.path.clone()));
        }

        fs::remove_file(&archive.path)
            .map_err(|e| SdsmError::Io(format!("Failed to delete backup: {}", e)))?;

        let slot = archive.slot_dir_name().unwrap_or_default();
        self.record(Operation::Delete, &slot, &archive.file_name(), archive.game_time)
    }

    fn record(
        &self,
        operation: Operation,
        slot: &str,
        archive: &str,
        game_time: Option<GameTime>,
    ) -> SdsmResult<()> {
        match &self.audit {
            Some(logger) => logger.log(&AuditEntry::new(operation, slot, archive, game_time)),
            None => Ok(()),
        }
    }
}

fn newest_first(mut archives: Vec<Archive>) -> Vec<Archive> {
    archives.sort_by(|a, b| b.cmp(a));
    archives
}

/// Write the slot's two files into a fresh archive at `archive_path`
fn write_archive(slot: &Slot, archive_path: &Path) -> SdsmResult<()> {
    let file = File::create(archive_path)
        .map_err(|e| SdsmError::Io(format!("Failed to create backup file: {}", e)))?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    add_file(&mut zip, &slot.save_file, &slot.full_name, options)?;
    add_file(&mut zip, &slot.metadata_file, METADATA_FILE_NAME, options)?;

    let mut writer = zip
        .finish()
        .map_err(|e| SdsmError::Io(format!("Failed to finalize backup archive: {}", e)))?;
    writer
        .flush()
        .map_err(|e| SdsmError::Io(format!("Failed to write backup archive: {}", e)))?;

    Ok(())
}

fn add_file<W: Write + io::Seek>(
    zip: &mut ZipWriter<W>,
    source: &Path,
    entry_name: &str,
    options: SimpleFileOptions,
) -> SdsmResult<()> {
    let mut input = File::open(source)
        .map_err(|e| SdsmError::Io(format!("Failed to open {}: {}", source.display(), e)))?;

    zip.start_file(entry_name, options)
        .map_err(|e| SdsmError::Io(format!("Failed to add {} to archive: {}", entry_name, e)))?;
    io::copy(&mut input, zip)
        .map_err(|e| SdsmError::Io(format!("Failed to write {}: {}", entry_name, e)))?;

    Ok(())
}
