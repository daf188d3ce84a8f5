//! Game data cleanup pipeline

use crate::game_data::operations::remove_game_dirs;
use crate::game_data::pure::is_game_id;
use crate::game_data::types::{GameId, RemovalOutcome, StorageEndpoint};

use tracing::{info, warn};

/// Remove compat and shader data for each ID from every endpoint.
///
/// IDs outside the game range are skipped without touching the disk, so the
/// tool-internal `0` prefix can never be deleted through here.
pub fn remove_game_data(ids: &[GameId], endpoints: &[StorageEndpoint]) -> Vec<RemovalOutcome> {
    let mut outcomes = Vec::with_capacity(ids.len());

    for id in ids {
        if !is_game_id(u64::from(*id)) {
            warn!("cleanup - Refusing to remove non-game ID {}", id);
            continue;
        }
        outcomes.push(remove_game_dirs(*id, endpoints));
    }

    let removed: usize = outcomes.iter().map(|o| o.removed.len()).sum();
    info!(
        "cleanup - Removed {} director(ies) for {} game(s)",
        removed,
        outcomes.len()
    );

    outcomes
}
