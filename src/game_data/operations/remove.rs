//! Game data removal

use crate::game_data::types::{DataKind, GameId, RemovalOutcome, StorageEndpoint};

use std::fs;
use std::io;
use tracing::{info, warn};

/// Remove the compat and shader directories for `id` on every endpoint.
///
/// Best effort: a failing path is recorded and the rest are still removed.
pub fn remove_game_dirs(id: GameId, endpoints: &[StorageEndpoint]) -> RemovalOutcome {
    let mut outcome = RemovalOutcome {
        id,
        removed: Vec::new(),
        failures: Vec::new(),
    };

    for endpoint in endpoints {
        for kind in DataKind::ALL {
            let dir = endpoint.game_dir(kind, id);
            match fs::remove_dir_all(&dir) {
                Ok(()) => {
                    info!("cleanup - Removed {}", dir.display());
                    outcome.removed.push(dir);
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => {
                    warn!("cleanup - Failed to remove {}: {}", dir.display(), e);
                    outcome.failures.push((dir, e));
                }
            }
        }
    }

    outcome
}
