//! Configuration and history CLI commands

use std::path::PathBuf;

use crate::audit::AuditLogger;
use crate::config::DefaultRestore;
use crate::error::SdsmResult;

use super::Context;

/// Apply any requested setting changes, then print the effective configuration
pub fn handle_config_command(
    ctx: &mut Context,
    game_dir: Option<PathBuf>,
    default_restore: Option<DefaultRestore>,
    audit: Option<bool>,
) -> SdsmResult<()> {
    let changed = game_dir.is_some() || default_restore.is_some() || audit.is_some();
    if let Some(dir) = game_dir {
        ctx.settings.game_dir = Some(dir);
    }
    if let Some(default) = default_restore {
        ctx.settings.default_restore = default;
    }
    if let Some(enabled) = audit {
        ctx.settings.audit_enabled = enabled;
    }
    if changed {
        ctx.settings.save(&ctx.paths)?;
        println!("Settings saved to {}", ctx.paths.settings_file().display());
        println!();
    }

    println!("sdsm Configuration");
    println!("==================");
    println!("Config directory: {}", ctx.paths.base_dir().display());
    println!("Game directory:   {}", ctx.game.game_dir().display());
    println!("Saves directory:  {}", ctx.game.saves_dir().display());
    println!("Backup directory: {}", ctx.game.backup_dir().display());
    println!();
    println!("Settings:");
    println!("  Default restore: {:?}", ctx.settings.default_restore);
    println!("  Audit log:       {}", ctx.settings.audit_enabled);
    Ok(())
}

/// Print the most recent audit entries, oldest first
pub fn handle_history_command(ctx: &Context, limit: usize) -> SdsmResult<()> {
    let entries = AuditLogger::new(ctx.paths.audit_log()).read_recent(limit)?;
    if entries.is_empty() {
        println!("No operations recorded.");
    }
    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
