//! Append-only operation log
//!
//! One JSON object per line. Lines are only ever appended, so the file reads
//! back in the order operations happened.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{SdsmError, SdsmResult};

use super::entry::AuditEntry;

/// Writes and reads the JSONL audit log
#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append `entry` as one line, creating the log and its directory on first use
    ///
    /// The line is serialized before the file is touched and written with a
    /// single call, so a failed serialization leaves the log unchanged.
    pub fn log(&self, entry: &AuditEntry) -> SdsmResult<()> {
        let mut line = serde_json::to_vec(entry)
            .map_err(|e| SdsmError::Json(format!("Cannot encode audit entry: {}", e)))?;
        line.push(b'\n');

        if let Some(dir) = self.log_path.parent() {
            fs::create_dir_all(dir).map_err(|e| {
                SdsmError::Io(format!("Cannot create {}: {}", dir.display(), e))
            })?;
        }

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .and_then(|mut file| {
                file.write_all(&line)?;
                file.flush()
            })
            .map_err(|e| SdsmError::Io(format!("Cannot append to audit log: {}", e)))
    }

    /// Every entry, oldest first; a log that was never written is empty
    ///
    /// Blank lines are skipped. Any other line that does not decode is a
    /// `Json` error naming its 1-based line number.
    pub fn read_all(&self) -> SdsmResult<Vec<AuditEntry>> {
        let contents = match fs::read_to_string(&self.log_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(SdsmError::Io(format!("Cannot read audit log: {}", e))),
        };

        contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                serde_json::from_str(line).map_err(|e| {
                    SdsmError::Json(format!("Bad audit entry on line {}: {}", index + 1, e))
                })
            })
            .collect()
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> SdsmResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let keep_from = entries.len().saturating_sub(count);
        Ok(entries.split_off(keep_from))
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::Operation;
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("sdsm").join("audit.log");
        let logger = AuditLogger::new(log_path);
        (logger, temp_dir)
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();
        let entry = AuditEntry::new(Operation::Backup, "Abby_42", "a.zip", None);

        logger.log(&entry).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Backup);
        assert_eq!(entries[0].archive, "a.zip");
    }

    #[test]
    fn test_read_recent() {
        let (logger, _temp) = create_test_logger();

        for i in 0..10 {
            let entry = AuditEntry::new(Operation::Backup, "Abby_42", format!("{}.zip", i), None);
            logger.log(&entry).unwrap();
        }

        let recent = logger.read_recent(3).unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].archive, "7.zip");
        assert_eq!(recent[2].archive, "9.zip");
    }

    #[test]
    fn test_empty_log() {
        let (logger, _temp) = create_test_logger();
        assert!(logger.read_all().unwrap().is_empty());
        assert!(logger.read_recent(5).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_line_is_error() {
        let (logger, _temp) = create_test_logger();
        logger
            .log(&AuditEntry::new(Operation::Delete, "Abby_42", "a.zip", None))
            .unwrap();

        let mut file = OpenOptions::new().append(true).open(logger.path()).unwrap();
        writeln!(file, "{{not json").unwrap();

        let err = logger.read_all().unwrap_err();
        assert!(matches!(err, SdsmError::Json(ref msg) if msg.contains("line 2")));
    }
}
