//! Location scanning and size measurement

use crate::game_data::error::SyncError;
use crate::game_data::pure::{is_game_directory, parse_game_id};
use crate::game_data::types::{DataKind, GameId, ScanResult, StorageEndpoint};

use std::collections::BTreeSet;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// List the game directories directly under one tree.
///
/// A missing tree is an empty tree. Entries that are not directories or whose
/// names are not game IDs are skipped.
pub fn scan_tree(tree: &Path) -> io::Result<ScanResult> {
    let mut ids = BTreeSet::new();

    let entries = match std::fs::read_dir(tree) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(ids),
        Err(e) => return Err(e),
    };

    for entry in entries.flatten() {
        if !entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            continue;
        }
        let name = entry.file_name();
        let Some(id) = name
            .to_str()
            .filter(|name| is_game_directory(name))
            .and_then(parse_game_id)
        else {
            debug!("game_data - Skipping {}", entry.path().display());
            continue;
        };
        ids.insert(id);
    }

    Ok(ids)
}

/// IDs present under the endpoint's compat and shader trees combined.
///
/// One unreadable tree is logged and tolerated; both unreadable is a
/// [`SyncError::Scan`].
pub fn scan(endpoint: &StorageEndpoint) -> Result<ScanResult, SyncError> {
    let compat = scan_tree(endpoint.compat());
    let shader = scan_tree(endpoint.shader());

    let ids = match (compat, shader) {
        (Ok(mut ids), Ok(shader_ids)) => {
            ids.extend(shader_ids);
            ids
        }
        (Ok(ids), Err(e)) => {
            warn!(
                "game_data - Skipping unreadable {}: {}",
                endpoint.shader().display(),
                e
            );
            ids
        }
        (Err(e), Ok(ids)) => {
            warn!(
                "game_data - Skipping unreadable {}: {}",
                endpoint.compat().display(),
                e
            );
            ids
        }
        (Err(compat), Err(shader)) => {
            return Err(SyncError::Scan {
                root: endpoint.root().to_path_buf(),
                compat,
                shader,
            });
        }
    };

    debug!("game_data - {} holds {} game(s)", endpoint, ids.len());
    Ok(ids)
}

/// Total size of regular files below `path`, symlinks not followed.
/// Missing paths measure 0.
pub fn directory_size(path: &Path) -> u64 {
    walkdir::WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.metadata().ok())
        .map(|meta| meta.len())
        .sum()
}

/// Size of everything stored for `id` on an endpoint (compat + shader)
pub fn game_size(endpoint: &StorageEndpoint, id: GameId) -> u64 {
    DataKind::ALL
        .iter()
        .map(|kind| directory_size(&endpoint.game_dir(*kind, id)))
        .sum()
}
