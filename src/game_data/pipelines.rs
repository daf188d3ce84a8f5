//! Game data pipelines - high-level orchestration
//!
//! Composes pure functions and operations into complete workflows.

mod cleanup;
mod confirm;
mod diff;
mod execute;
mod listing;

pub use cleanup::remove_game_data;
pub use confirm::confirm;
pub use diff::diff;
pub use execute::execute;
pub use listing::{list_game_records, uninstalled_ids};
