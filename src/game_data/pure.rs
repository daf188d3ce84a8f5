//! Pure functions for game data module
//!
//! These functions have no side effects and are deterministic.

mod classify;
mod diff;
mod manifest;
mod space;

pub use classify::{is_game_directory, is_game_id, parse_game_id};
pub use diff::set_differences;
pub use manifest::parse_manifest_id;
pub use space::check_space;
