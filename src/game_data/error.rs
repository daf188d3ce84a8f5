//! Reconciliation error taxonomy

use crate::game_data::types::GameId;

use std::collections::BTreeSet;
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a reconciliation run
#[derive(Debug, Error)]
pub enum SyncError {
    #[error(
        "cannot read game data under {}: compat tree: {compat}; shader tree: {shader}",
        .root.display()
    )]
    Scan {
        root: PathBuf,
        compat: io::Error,
        shader: io::Error,
    },

    #[error("reconciliation needs two storage locations, found {found}")]
    NoDevice { found: usize },

    #[error(
        "not enough free space on {}: {needed} bytes needed, {available} bytes available",
        .destination.display()
    )]
    InsufficientSpace {
        destination: PathBuf,
        needed: u64,
        available: u64,
    },

    #[error("failed to query free space on {}: {source}", .path.display())]
    FreeSpace { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Mismatch(#[from] MismatchError),
}

/// Failure relocating one ID. Recorded in its outcome, never raised.
#[derive(Debug, Error)]
pub enum MoveError {
    #[error("no data for {id} under {}", .root.display())]
    NothingToMove { id: GameId, root: PathBuf },

    #[error("{} already exists", .path.display())]
    AlreadyExists { path: PathBuf },

    #[error("failed to copy {}: {source}", .path.display())]
    Copy { path: PathBuf, source: io::Error },

    #[error("failed to move {} into place: {source}", .path.display())]
    Finalize { path: PathBuf, source: io::Error },
}

/// Post-move verification found IDs missing from their destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MismatchError {
    pub right: PathBuf,
    pub left: PathBuf,
    /// Expected at right after the move, not found
    pub missing_on_right: BTreeSet<GameId>,
    /// Expected at left after the move, not found
    pub missing_on_left: BTreeSet<GameId>,
}

impl MismatchError {
    pub fn is_empty(&self) -> bool {
        self.missing_on_right.is_empty() && self.missing_on_left.is_empty()
    }
}

fn join_ids(ids: &BTreeSet<GameId>) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for MismatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "game data out of sync after move")?;
        if !self.missing_on_right.is_empty() {
            write!(
                f,
                "; missing on {}: {}",
                self.right.display(),
                join_ids(&self.missing_on_right)
            )?;
        }
        if !self.missing_on_left.is_empty() {
            write!(
                f,
                "; missing on {}: {}",
                self.left.display(),
                join_ids(&self.missing_on_left)
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for MismatchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_names_every_missing_id() {
        let err = MismatchError {
            right: PathBuf::from("/run/media/sd"),
            left: PathBuf::from("/home"),
            missing_on_right: BTreeSet::from([10, 20]),
            missing_on_left: BTreeSet::from([30]),
        };

        assert_eq!(
            err.to_string(),
            "game data out of sync after move; missing on /run/media/sd: 10, 20; missing on /home: 30"
        );
    }
}
