//! Per-ID relocation between endpoints

use crate::game_data::error::MoveError;
use crate::game_data::types::{DataKind, GameId, StorageEndpoint};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Moves one game's data from one endpoint to another
pub trait Transfer {
    fn transfer(
        &self,
        id: GameId,
        from: &StorageEndpoint,
        to: &StorageEndpoint,
    ) -> Result<(), MoveError>;
}

/// Filesystem transfer.
///
/// Each tree is copied into a hidden staging directory next to its final
/// location and renamed into place once complete, so `<tree>/<id>` only ever
/// appears fully populated. If the shader copy fails after the compat copy
/// landed, the compat copy is removed again. An ID with neither tree at the
/// source fails with [`MoveError::NothingToMove`].
pub struct FsTransfer;

impl Transfer for FsTransfer {
    fn transfer(
        &self,
        id: GameId,
        from: &StorageEndpoint,
        to: &StorageEndpoint,
    ) -> Result<(), MoveError> {
        let mut placed: Vec<PathBuf> = Vec::new();

        for kind in DataKind::ALL {
            let src = from.game_dir(kind, id);
            if !src.is_dir() {
                continue;
            }

            match copy_into_place(&src, to.tree(kind), id) {
                Ok(dest) => {
                    debug!(
                        "game_data - Copied {} for {} to {}",
                        kind.name(),
                        id,
                        dest.display()
                    );
                    placed.push(dest);
                }
                Err(e) => {
                    for dest in &placed {
                        if let Err(cleanup) = fs::remove_dir_all(dest) {
                            warn!(
                                "game_data - Failed to roll back {}: {}",
                                dest.display(),
                                cleanup
                            );
                        }
                    }
                    return Err(e);
                }
            }
        }

        if placed.is_empty() {
            return Err(MoveError::NothingToMove {
                id,
                root: from.root().to_path_buf(),
            });
        }
        Ok(())
    }
}

fn staging_dir(dest_tree: &Path, id: GameId) -> PathBuf {
    dest_tree.join(format!(".{id}.partial"))
}

/// Copy `src` to `<dest_tree>/<id>` through a staging directory
fn copy_into_place(src: &Path, dest_tree: &Path, id: GameId) -> Result<PathBuf, MoveError> {
    let dest = dest_tree.join(id.to_string());
    if fs::symlink_metadata(&dest).is_ok() {
        return Err(MoveError::AlreadyExists { path: dest });
    }

    let staging = staging_dir(dest_tree, id);
    if staging.exists() {
        // Leftover from an interrupted run
        let _ = fs::remove_dir_all(&staging);
    }

    if let Err(source) = copy_dir_recursive(src, &staging) {
        let _ = fs::remove_dir_all(&staging);
        return Err(MoveError::Copy {
            path: src.to_path_buf(),
            source,
        });
    }

    if let Err(source) = fs::rename(&staging, &dest) {
        let _ = fs::remove_dir_all(&staging);
        return Err(MoveError::Finalize { path: dest, source });
    }

    Ok(dest)
}

/// Recursively copy a directory, recreating symlinks rather than following them
pub fn copy_dir_recursive(src: &Path, dest: &Path) -> io::Result<()> {
    fs::create_dir_all(dest)?;

    let walk_path = walkdir::WalkDir::new(src).min_depth(1).follow_links(false);

    for entry in walk_path {
        let entry = entry.map_err(io::Error::from)?;
        let rel_path = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let new_path = dest.join(rel_path);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&new_path)?;
        } else if entry.file_type().is_symlink() {
            let symlink_src = fs::read_link(entry.path())?;
            std::os::unix::fs::symlink(symlink_src, new_path)?;
        } else {
            if let Some(parent) = new_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), new_path)?;
        }
    }

    Ok(())
}
