use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use sdsm::cli::{
    handle_backup_command, handle_config_command, handle_delete_command, handle_history_command,
    handle_info_command, handle_list_command, handle_restore_command, handle_slots_command, Context,
};
use sdsm::config::{DefaultRestore, GamePaths, SdsmPaths, Settings};

#[derive(Parser)]
#[command(
    name = "sdsm",
    version,
    about = "Back up and restore Stardew Valley save slots",
    long_about = "sdsm archives a save slot's save file and SaveGameInfo into a dated \
                  zip under the game's Backup folder, and restores a chosen archive \
                  back into the Saves folder."
)]
struct Cli {
    /// Game data directory containing Saves/ and Backup/
    #[arg(long, global = true, env = "SDSM_GAME_DIR")]
    game_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all save slots
    Slots,

    /// Show in-game date, played time and backup count of a slot
    Info {
        /// Slot (farm) name
        slot: String,
    },

    /// Back up a slot, or every slot when none is given
    Backup {
        /// Slot (farm) name
        slot: Option<String>,
        /// Write archives here instead of the game's Backup folder
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
        /// Archive file name (defaults to "<today> <in-game date>.zip")
        #[arg(short, long, requires = "slot")]
        name: Option<String>,
    },

    /// List the backups of a slot, newest first
    #[command(alias = "ls")]
    List {
        /// Slot (farm) name
        slot: String,
    },

    /// Restore a backup into the Saves folder
    Restore {
        /// Slot (farm) name
        slot: String,
        /// Specific backup file to restore
        #[arg(short, long)]
        file: Option<String>,
        /// Which backup to restore when no file is given
        #[arg(short, long, value_enum, conflicts_with = "file")]
        pick: Option<DefaultRestore>,
        /// Overwrite the current save without asking
        #[arg(long)]
        force: bool,
    },

    /// Delete a backup
    #[command(alias = "rm")]
    Delete {
        /// Slot (farm) name
        slot: String,
        /// Backup file name
        file: String,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },

    /// Show recent backup, restore and delete operations
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Show or change configuration
    Config {
        /// Remember this game data directory
        #[arg(long)]
        set_game_dir: Option<PathBuf>,
        /// Backup restored when none is named
        #[arg(long, value_enum)]
        default_restore: Option<DefaultRestore>,
        /// Enable or disable the audit log
        #[arg(long)]
        audit: Option<bool>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Resolve paths and settings once; everything below receives them explicitly
    let paths = SdsmPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let game = GamePaths::resolve(cli.game_dir.as_deref(), &settings)?;

    let mut ctx = Context::new(paths, settings, game);

    match cli.command {
        Some(Commands::Slots) => handle_slots_command(&ctx)?,
        Some(Commands::Info { slot }) => handle_info_command(&ctx, &slot)?,
        Some(Commands::Backup {
            slot,
            output_dir,
            name,
        }) => handle_backup_command(
            &ctx,
            slot.as_deref(),
            output_dir.as_deref(),
            name.as_deref(),
        )?,
        Some(Commands::List { slot }) => handle_list_command(&ctx, &slot)?,
        Some(Commands::Restore {
            slot,
            file,
            pick,
            force,
        }) => handle_restore_command(&ctx, &slot, file, pick, force)?,
        Some(Commands::Delete { slot, file, force }) => {
            handle_delete_command(&ctx, &slot, &file, force)?
        }
        Some(Commands::History { limit }) => handle_history_command(&ctx, limit)?,
        Some(Commands::Config {
            set_game_dir,
            default_restore,
            audit,
        }) => handle_config_command(&mut ctx, set_game_dir, default_restore, audit)?,
        None => {
            println!("sdsm - Stardew Valley save manager");
            println!();
            println!("Run 'sdsm --help' for usage information.");
            println!("Run 'sdsm slots' to see your save slots.");
        }
    }

    Ok(())
}
