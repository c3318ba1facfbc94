//! Slot CLI commands

use crate::display::{format_slot_details, format_slot_list, SlotSummary};
use crate::error::SdsmResult;
use crate::storage::{list_archives, SlotLocator};

use super::Context;

/// List every save slot with its in-game date and backup count
pub fn handle_slots_command(ctx: &Context) -> SdsmResult<()> {
    ctx.game.ensure_saves_dir()?;

    let locator = SlotLocator::new(ctx.game.clone());
    let mut summaries = Vec::new();
    for slot in locator.slots()? {
        let backups = list_archives(&slot.backup_dir)?.len();
        summaries.push(SlotSummary::load(slot, backups));
    }

    println!("{}", format_slot_list(&summaries));
    Ok(())
}

/// Show details of one slot
pub fn handle_info_command(ctx: &Context, name: &str) -> SdsmResult<()> {
    let manager = ctx.backup_manager();
    let slot = manager.locator().find_slot(name)?;
    let backups = manager.list_archives(&slot)?.len();

    print!("{}", format_slot_details(&SlotSummary::load(slot, backups)));
    Ok(())
}
