//! Restore CLI command

use crate::backup::ArchiveSelection;
use crate::config::DefaultRestore;
use crate::error::SdsmResult;

use super::Context;

/// Restore a backup of `slot`
///
/// `file` names a specific archive; otherwise `pick` (or the configured
/// default) chooses the earliest or latest one. Without `force` only the
/// chosen archive is shown.
pub fn handle_restore_command(
    ctx: &Context,
    slot: &str,
    file: Option<String>,
    pick: Option<DefaultRestore>,
    force: bool,
) -> SdsmResult<()> {
    let selection = match file {
        Some(name) => ArchiveSelection::Named(name),
        None => pick.unwrap_or(ctx.settings.default_restore).into(),
    };

    let manager = ctx.restore_manager();
    let archive = manager.select_archive(slot, &selection)?;

    if !force {
        println!("Would restore {}", archive.file_name());
        if let Some(time) = archive.game_time {
            println!("  In-game date: {}", time.human());
        }
        println!();
        println!("WARNING: This will overwrite the current save of {}!", slot);
        println!("To proceed, run again with --force flag.");
        return Ok(());
    }

    let result = manager.restore_in_place(&archive)?;
    println!(
        "Restored backup {} into {}",
        result.archive.stem(),
        result.destination.display()
    );
    println!("{}", result.summary());
    Ok(())
}
