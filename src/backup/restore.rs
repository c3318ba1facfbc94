//! Backup restoration for sdsm
//!
//! Extracts an archive into a slot's save directory. Existing files of the
//! same name are overwritten without confirmation; a failure part-way leaves
//! whatever was already extracted in place.

use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use zip::ZipArchive;

use crate::audit::{AuditEntry, AuditLogger, Operation};
use crate::config::paths::GamePaths;
use crate::config::settings::DefaultRestore;
use crate::error::{SdsmError, SdsmResult};
use crate::models::{Archive, ARCHIVE_EXTENSION};
use crate::storage::locator::{self, SlotLocator};

/// Which archive of a slot to restore
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveSelection {
    /// The archive whose file name sorts first (oldest)
    Earliest,
    /// The archive whose file name sorts last (newest)
    Latest,
    /// A specific archive file name, with or without the `.zip` extension
    Named(String),
}

impl From<DefaultRestore> for ArchiveSelection {
    fn from(default: DefaultRestore) -> Self {
        match default {
            DefaultRestore::Earliest => ArchiveSelection::Earliest,
            DefaultRestore::Latest => ArchiveSelection::Latest,
        }
    }
}

/// Result of a restore operation
#[derive(Debug)]
pub struct RestoreResult {
    /// The archive that was extracted
    pub archive: Archive,
    /// Directory the entries were written into
    pub destination: PathBuf,
    /// Files written, in archive order
    pub files: Vec<PathBuf>,
}

impl RestoreResult {
    /// Get a summary of what was restored
    pub fn summary(&self) -> String {
        let names: Vec<String> = self
            .files
            .iter()
            .filter_map(|f| f.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .collect();
        format!("Restored: {}", names.join(", "))
    }
}

/// Handles restoring from backups
pub struct RestoreManager {
    locator: SlotLocator,
    audit: Option<AuditLogger>,
}

impl RestoreManager {
    /// Create a new RestoreManager for the given game-data root
    pub fn new(paths: GamePaths) -> Self {
        Self {
            locator: SlotLocator::new(paths),
            audit: None,
        }
    }

    /// Record every restore in `logger`
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Extract every entry of `archive` into `destination`, creating it if absent
    ///
    /// # Errors
    ///
    /// - `ArchiveNotFound` if the archive no longer exists
    /// - `Io` if the archive is unreadable, holds an entry that would escape
    ///   `destination`, or a file cannot be written
    pub fn restore(&self, archive: &Archive, destination: &Path) -> SdsmResult<RestoreResult> {
        let file = File::open(&archive.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SdsmError::ArchiveNotFound(archive.path.clone()),
            _ => SdsmError::Io(format!("Failed to open backup file: {}", e)),
        })?;
        let mut zip = ZipArchive::new(BufReader::new(file))
            .map_err(|e| SdsmError::Io(format!("Failed to read backup archive: {}", e)))?;

        fs::create_dir_all(destination)
            .map_err(|e| SdsmError::Io(format!("Failed to create save directory: {}", e)))?;

        let mut files = Vec::with_capacity(zip.len());
        for index in 0..zip.len() {
            let mut entry = zip.by_index(index)?;
            let relative = entry.enclosed_name().ok_or_else(|| {
                SdsmError::Io(format!("Unsafe path in backup archive: {}", entry.name()))
            })?;
            let out_path = destination.join(relative);

            if entry.is_dir() {
                fs::create_dir_all(&out_path)?;
                continue;
            }
            if let Some(parent) = out_path.parent() {
                fs::create_dir_all(parent)?;
            }

            let mut out = File::create(&out_path).map_err(|e| {
                SdsmError::Io(format!("Failed to write {}: {}", out_path.display(), e))
            })?;
            io::copy(&mut entry, &mut out).map_err(|e| {
                SdsmError::Io(format!("Failed to extract {}: {}", out_path.display(), e))
            })?;
            files.push(out_path);
        }

        if let Some(logger) = &self.audit {
            let slot = destination
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            logger.log(&AuditEntry::new(
                Operation::Restore,
                slot,
                archive.file_name(),
                archive.game_time,
            ))?;
        }

        Ok(RestoreResult {
            archive: archive.clone(),
            destination: destination.to_path_buf(),
            files,
        })
    }

    /// Restore `archive` into the Saves directory mirroring its backup directory
    pub fn restore_in_place(&self, archive: &Archive) -> SdsmResult<RestoreResult> {
        let backup_dir = archive
            .path
            .parent()
            .ok_or_else(|| SdsmError::ArchiveNotFound(archive.path.clone()))?;
        let destination = self.locator.save_dir_for(backup_dir)?;
        self.restore(archive, &destination)
    }

    /// Pick one archive of the slot `logical` from its backup directory
    ///
    /// # Errors
    ///
    /// - `SlotNotFound` if the slot has no backup directory
    /// - `ArchiveNotFound` if the directory holds no archives or the named
    ///   one does not exist
    pub fn select_archive(&self, logical: &str, selection: &ArchiveSelection) -> SdsmResult<Archive> {
        let backup_dir = self.locator.find_backup_dir(logical)?;

        match selection {
            // Only archives listed in this slot's directory are eligible
            ArchiveSelection::Named(name) => {
                let with_ext = format!("{}.{}", name, ARCHIVE_EXTENSION);
                locator::list_archives(&backup_dir)?
                    .into_iter()
                    .find(|a| a.file_name() == *name || a.file_name() == with_ext)
                    .ok_or_else(|| SdsmError::ArchiveNotFound(backup_dir.join(name)))
            }
            ArchiveSelection::Earliest | ArchiveSelection::Latest => {
                let archives = locator::list_archives(&backup_dir)?.into_iter();
                let picked = if *selection == ArchiveSelection::Earliest {
                    archives.min()
                } else {
                    archives.max()
                };
                picked.ok_or(SdsmError::ArchiveNotFound(backup_dir))
            }
        }
    }

    /// Select an archive of the slot `logical` and restore it in place
    pub fn restore_slot(&self, logical: &str, selection: &ArchiveSelection) -> SdsmResult<RestoreResult> {
        let archive = self.select_archive(logical, selection)?;
        self.restore_in_place(&archive)
    }

    /// Restore the newest archive of the slot `logical`
    pub fn restore_latest(&self, logical: &str) -> SdsmResult<RestoreResult> {
        self.restore_slot(logical, &ArchiveSelection::Latest)
    }
}
