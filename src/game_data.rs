//! Cross-device game data reconciliation
//!
//! Proton compatibility prefixes and shader caches live in per-game
//! directories named after the Steam app ID, under each library's
//! `steamapps/compatdata` and `steamapps/shadercache`. When a library spans
//! internal storage and an SD card, these drift apart from where the game is
//! installed. This module finds every per-game directory on two storage
//! locations, works out which side is missing what, copies it across, and
//! checks the result.
//!
//! ## Module Structure
//! - `types.rs`: StorageEndpoint, MovePlan, MoveOutcome, MoveReport, CancelToken
//! - `error.rs`: SyncError, MoveError, MismatchError
//! - `pure/`: ID classification, set differences, space budget
//! - `operations/`: scanning, sizing, free space, transfer, inventory, removal
//! - `pipelines/`: diff, execute, confirm, listing, cleanup

mod error;
mod operations;
mod pipelines;
mod pure;
#[cfg(test)]
mod tests;
mod types;

// Re-export types
pub use error::SyncError;
pub use types::{
    CancelToken, GameId, InventoryEntry, MovePlan, MoveProgress, MoveReport, MoveStatus,
    StorageEndpoint,
};

// Re-export operations
pub use operations::{FsTransfer, SteamLibraries, collect_endpoints, free_space, list_endpoints};

// Re-export pipelines
pub use pipelines::{confirm, diff, execute, list_game_records, remove_game_data, uninstalled_ids};

// Re-export pure functions
pub use pure::check_space;

#[cfg(test)]
pub(crate) use error::MoveError;
#[cfg(test)]
pub(crate) use types::{Direction, MoveOutcome};
