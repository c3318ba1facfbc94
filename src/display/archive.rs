//! Archive display formatting

use crate::models::Archive;

/// Format a list of archives, numbered in the given order
pub fn format_archive_list(archives: &[Archive]) -> String {
    if archives.is_empty() {
        return "No backups found.".to_string();
    }

    let mut output = String::new();
    for (i, archive) in archives.iter().enumerate() {
        let detail = match (archive.creation_date, archive.game_time) {
            (Some(date), Some(time)) => {
                format!("taken {}, {}", date.format("%Y-%m-%d"), time.human())
            }
            _ => "custom name".to_string(),
        };
        let size = archive
            .size_bytes()
            .map_or_else(|| "?".to_string(), format_size);

        output.push_str(&format!(
            "  {:>2}. {} ({}, {})\n",
            i + 1,
            archive.file_name(),
            detail,
            size
        ));
    }

    output.push_str(&format!("\nTotal: {} backup(s)", archives.len()));
    output
}

/// Format a file size in human-readable form
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
    }

    #[test]
    fn test_format_archive_list() {
        let archives = vec![
            Archive::from_path("/b/Abby_42/2024-03-01 01-2-05.zip"),
            Archive::from_path("/b/Abby_42/before-boss.zip"),
        ];

        let output = format_archive_list(&archives);
        assert!(output.contains(" 1. 2024-03-01 01-2-05.zip (taken 2024-03-01, Day 5 of Summer, Year 1, ?)"));
        assert!(output.contains(" 2. before-boss.zip (custom name, ?)"));
        assert!(output.ends_with("Total: 2 backup(s)"));
    }

    #[test]
    fn test_empty_archive_list() {
        assert_eq!(format_archive_list(&[]), "No backups found.");
    }
}
