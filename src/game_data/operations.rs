//! Game data operations - atomic filesystem side effects

mod free_space;
mod inventory;
mod remove;
mod scan;
mod transfer;

pub use free_space::free_space;
pub use inventory::{SteamLibraries, collect_endpoints, list_endpoints};
pub use remove::remove_game_dirs;
pub use scan::{game_size, scan};
pub use transfer::{FsTransfer, Transfer};
