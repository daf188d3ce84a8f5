use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "decktune",
    version,
    about = "Keep Proton prefixes and shader caches in sync across Steam Deck storage"
)]
pub struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file (defaults to ~/.config/decktune/settings.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List storage locations and how many installed games each holds
    Devices,

    /// List games with compat or shader data on any storage location
    List {
        /// Only games that are no longer installed
        #[arg(long)]
        uninstalled: bool,
    },

    /// Show what a sync between two locations would move
    Diff {
        /// Defaults to the internal storage
        left: Option<PathBuf>,
        /// Defaults to the first other storage location
        right: Option<PathBuf>,
    },

    /// Copy missing game data across so both locations hold everything
    Sync {
        left: Option<PathBuf>,
        right: Option<PathBuf>,
        /// Do not ask before moving
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete compat and shader data for games on every location
    Clean {
        /// Steam app IDs to remove
        #[arg(required_unless_present = "uninstalled")]
        ids: Vec<u32>,
        /// Remove data for every game that is not installed
        #[arg(long, conflicts_with = "ids")]
        uninstalled: bool,
    },

    /// Kernel memory tunables
    Tune {
        #[command(subcommand)]
        action: TuneAction,
    },

    /// Swap file size and swappiness
    Swap {
        #[command(subcommand)]
        action: SwapAction,
    },

    /// Dedicated video memory
    Gpu {
        #[command(subcommand)]
        action: GpuAction,
    },

    /// Show or write the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective settings
    Show,
    /// Write the effective settings to the settings file
    Init,
}

#[derive(Subcommand)]
pub enum TuneAction {
    /// Show current values
    Status,
    /// Apply every recommended value
    Recommended,
    /// Restore every stock value
    Stock,
    /// Flip one tunable between recommended and stock
    Toggle {
        /// hugepages, shmem_enabled, defrag, compaction_proactiveness,
        /// page_lock_unfairness or swappiness
        tunable: String,
    },
}

#[derive(Subcommand)]
pub enum GpuAction {
    /// Show the dedicated video memory and the recommended size
    Status,
}

#[derive(Subcommand)]
pub enum SwapAction {
    /// Show the swap file, its size and the sizes that fit
    Status,
    /// Recreate the swap file at the given size in GiB
    Resize { gb: u32 },
    /// Set vm.swappiness
    Swappiness {
        #[arg(value_parser = clap::value_parser!(u8).range(0..=200))]
        value: u8,
    },
}
