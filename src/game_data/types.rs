//! Game data module type definitions

use crate::game_data::error::MoveError;
use crate::paths::{COMPAT_SUBDIR, SHADER_SUBDIR};

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Numeric Steam app ID, used as the directory name on disk
pub type GameId = u32;

/// IDs found under an endpoint's compat and shader trees combined
pub type ScanResult = BTreeSet<GameId>;

/// One title as presented in listings
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub id: GameId,
    pub display_name: String,
    /// Whether any library reports the title as installed
    pub installed: bool,
}

/// Which of the two per-game trees a directory lives in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataKind {
    /// Proton compatibility prefix (`compatdata/<id>`)
    Compat,
    /// Precompiled shader cache (`shadercache/<id>`)
    Shader,
}

impl DataKind {
    pub const ALL: [DataKind; 2] = [DataKind::Compat, DataKind::Shader];

    pub fn name(&self) -> &'static str {
        match self {
            DataKind::Compat => "compat prefix",
            DataKind::Shader => "shader cache",
        }
    }
}

/// A storage location taking part in reconciliation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageEndpoint {
    root: PathBuf,
    compat: PathBuf,
    shader: PathBuf,
}

impl StorageEndpoint {
    /// Derive the trees for `root`.
    ///
    /// The internal mount and the Steam data root both map onto the Steam data
    /// root's `steamapps` trees. Any other root (SD card, external drive) keeps
    /// its own `steamapps` directory.
    pub fn new(root: impl Into<PathBuf>, internal_root: &Path, steam_root: &Path) -> Self {
        let root = root.into();
        let base = if root == internal_root || root == steam_root {
            steam_root.to_path_buf()
        } else {
            root.clone()
        };

        Self {
            compat: base.join(COMPAT_SUBDIR),
            shader: base.join(SHADER_SUBDIR),
            root,
        }
    }

    /// Endpoint with explicit trees
    pub fn with_trees(
        root: impl Into<PathBuf>,
        compat: impl Into<PathBuf>,
        shader: impl Into<PathBuf>,
    ) -> Self {
        Self {
            root: root.into(),
            compat: compat.into(),
            shader: shader.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn compat(&self) -> &Path {
        &self.compat
    }

    pub fn shader(&self) -> &Path {
        &self.shader
    }

    pub fn tree(&self, kind: DataKind) -> &Path {
        match kind {
            DataKind::Compat => &self.compat,
            DataKind::Shader => &self.shader,
        }
    }

    /// Directory holding `kind` data for `id` on this endpoint
    pub fn game_dir(&self, kind: DataKind, id: GameId) -> PathBuf {
        self.tree(kind).join(id.to_string())
    }
}

impl fmt::Display for StorageEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root.display())
    }
}

/// A storage location plus the titles the platform installed there
#[derive(Clone, Debug)]
pub struct InventoryEntry {
    pub endpoint: StorageEndpoint,
    pub installed: BTreeSet<GameId>,
}

/// Computed, not yet executed, description of what must move
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MovePlan {
    /// Present at left, absent at right
    pub only_on_left: BTreeSet<GameId>,
    /// Present at right, absent at left
    pub only_on_right: BTreeSet<GameId>,
    /// Bytes to copy left -> right (required free space at right)
    pub left_extra_bytes: u64,
    /// Bytes to copy right -> left (required free space at left)
    pub right_extra_bytes: u64,
}

impl MovePlan {
    pub fn is_empty(&self) -> bool {
        self.only_on_left.is_empty() && self.only_on_right.is_empty()
    }

    pub fn total_items(&self) -> usize {
        self.only_on_left.len() + self.only_on_right.len()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
}

impl Direction {
    /// Pick (source, destination) out of the pair
    pub fn endpoints<'a>(
        &self,
        left: &'a StorageEndpoint,
        right: &'a StorageEndpoint,
    ) -> (&'a StorageEndpoint, &'a StorageEndpoint) {
        match self {
            Direction::LeftToRight => (left, right),
            Direction::RightToLeft => (right, left),
        }
    }
}

/// Result of relocating a single ID
#[derive(Debug)]
pub struct MoveOutcome {
    pub id: GameId,
    pub direction: Direction,
    pub error: Option<MoveError>,
}

impl MoveOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Progress after each processed ID
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveProgress {
    pub completed: usize,
    pub total: usize,
}

impl MoveProgress {
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.completed as f64 / self.total as f64
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveStatus {
    /// Every planned ID moved
    Succeeded,
    /// Some IDs moved, some failed
    CompletedWithIssues,
    /// Nothing moved
    Failed,
    /// Stopped before every ID was attempted
    Cancelled,
}

/// Outcomes of one Mover run
#[derive(Debug, Default)]
pub struct MoveReport {
    pub outcomes: Vec<MoveOutcome>,
    pub planned: usize,
    pub cancelled: bool,
}

impl MoveReport {
    pub fn failures(&self) -> impl Iterator<Item = &MoveOutcome> {
        self.outcomes.iter().filter(|o| !o.succeeded())
    }

    pub fn succeeded_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded()).count()
    }

    pub fn status(&self) -> MoveStatus {
        let failed = self.failures().count();
        if self.cancelled {
            MoveStatus::Cancelled
        } else if failed == 0 {
            MoveStatus::Succeeded
        } else if failed < self.outcomes.len() {
            MoveStatus::CompletedWithIssues
        } else {
            MoveStatus::Failed
        }
    }
}

/// Cooperative cancellation flag, checked by the Mover between IDs
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Per-ID result of a cleanup run
#[derive(Debug)]
pub struct RemovalOutcome {
    pub id: GameId,
    pub removed: Vec<PathBuf>,
    pub failures: Vec<(PathBuf, std::io::Error)>,
}

impl RemovalOutcome {
    pub fn succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}
