//! Backup CLI commands
//!
//! Implements CLI commands for creating, listing and deleting backups.

use std::path::Path;

use crate::display::format_archive_list;
use crate::error::{SdsmError, SdsmResult};
use crate::models::Archive;

use super::Context;

/// Back up one slot, or every slot when `slot` is `None`
pub fn handle_backup_command(
    ctx: &Context,
    slot: Option<&str>,
    output_dir: Option<&Path>,
    name: Option<&str>,
) -> SdsmResult<()> {
    ctx.game.ensure_saves_dir()?;
    let manager = ctx.backup_manager();

    let created = match slot {
        Some(logical) => {
            let slot = manager.locator().find_slot(logical)?;
            vec![manager.backup(&slot, output_dir, name)?]
        }
        None => match output_dir {
            Some(dir) => {
                let mut created = Vec::new();
                for slot in manager.locator().slots()? {
                    let target = dir.join(&slot.full_name);
                    created.push(manager.backup(&slot, Some(target.as_path()), None)?);
                }
                created
            }
            None => manager.backup_all()?,
        },
    };

    if created.is_empty() {
        println!("No save slots found.");
        return Ok(());
    }

    for path in &created {
        let archive = Archive::from_path(path);
        println!(
            "Backed up {} for slot {}",
            archive.file_name(),
            archive.slot_dir_name().unwrap_or_default()
        );
        println!("  Location: {}", path.display());
    }

    Ok(())
}

/// List the backups of a slot, newest first
pub fn handle_list_command(ctx: &Context, slot: &str) -> SdsmResult<()> {
    let archives = ctx.backup_manager().list_archives_for(slot)?;

    println!("Backups for {}", slot);
    println!("{}", "=".repeat(12 + slot.len()));
    println!("{}", format_archive_list(&archives));
    Ok(())
}

/// Delete one backup of a slot
pub fn handle_delete_command(ctx: &Context, slot: &str, file: &str, force: bool) -> SdsmResult<()> {
    let manager = ctx.backup_manager();
    let archive = manager
        .list_archives_for(slot)?
        .into_iter()
        .find(|a| a.file_name() == file || a.stem() == file)
        .ok_or_else(|| SdsmError::ArchiveNotFound(file.into()))?;

    if !force {
        println!("This will permanently delete {}", archive.path.display());
        println!("To proceed, run again with --force flag:");
        println!("  sdsm delete {} \"{}\" --force", slot, file);
        return Ok(());
    }

    manager.delete_archive(&archive)?;
    println!("Deleted backup {}", archive.file_name());
    Ok(())
}
