//! Audit logging system for sdsm
//!
//! Records every backup, restore and archive deletion in an append-only
//! audit log.
//!
//! # Architecture
//!
//! - `AuditEntry`: one operation with timestamp, slot, archive and the
//!   in-game date of the archived state when known.
//! - `AuditLogger`: writes entries to the audit log file using a
//!   line-delimited JSON format (JSONL).
//!
//! # Example
//!
//! ```rust,ignore
//! use sdsm::audit::{AuditEntry, AuditLogger, Operation};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! logger.log(&AuditEntry::new(Operation::Backup, "Abby_42", "2024-03-01 01-2-05.zip", None))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
