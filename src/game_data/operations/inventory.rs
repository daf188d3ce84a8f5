//! Library inventory - which storage locations exist and what is installed there

use crate::game_data::error::SyncError;
use crate::game_data::pure::parse_manifest_id;
use crate::game_data::types::{GameId, InventoryEntry, StorageEndpoint};

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A library folder as reported by the platform
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LibraryFolder {
    pub path: PathBuf,
    pub installed: BTreeSet<GameId>,
}

/// Where library folders come from
pub trait LibrarySource {
    /// Source name for logging
    fn name(&self) -> &str;

    /// Library folders in discovery order
    fn libraries(&self) -> Vec<LibraryFolder>;
}

/// Steam libraries plus any mounted removable media carrying a `steamapps`
/// directory that Steam has not registered yet
pub struct SteamLibraries {
    pub steam_root: PathBuf,
    pub removable_media_root: PathBuf,
}

impl SteamLibraries {
    pub fn new(steam_root: impl Into<PathBuf>, removable_media_root: impl Into<PathBuf>) -> Self {
        Self {
            steam_root: steam_root.into(),
            removable_media_root: removable_media_root.into(),
        }
    }

    fn registered_libraries(&self) -> Vec<LibraryFolder> {
        let steam_dir = match steamlocate::SteamDir::from_dir(&self.steam_root) {
            Ok(dir) => dir,
            Err(e) => {
                warn!(
                    "inventory - Steam not found at {}: {}",
                    self.steam_root.display(),
                    e
                );
                return Vec::new();
            }
        };

        let libraries = match steam_dir.libraries() {
            Ok(libraries) => libraries,
            Err(e) => {
                warn!("inventory - Failed to read Steam library folders: {}", e);
                return Vec::new();
            }
        };

        let mut folders = Vec::new();
        for library in libraries {
            let library = match library {
                Ok(lib) => lib,
                Err(e) => {
                    warn!("inventory - Skipping unreadable library: {}", e);
                    continue;
                }
            };

            folders.push(LibraryFolder {
                path: library.path().to_path_buf(),
                installed: library.app_ids().iter().copied().filter(|id| *id != 0).collect(),
            });
        }
        folders
    }

    /// Mount points up to two levels below the media root
    /// (`/run/media/<label>` and `/run/media/<user>/<label>`)
    fn removable_mounts(&self) -> Vec<PathBuf> {
        let mut mounts = Vec::new();
        let Ok(entries) = std::fs::read_dir(&self.removable_media_root) else {
            return mounts;
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            if path.join("steamapps").is_dir() {
                mounts.push(path);
                continue;
            }
            if let Ok(nested) = std::fs::read_dir(&path) {
                for child in nested.flatten() {
                    let child = child.path();
                    if child.join("steamapps").is_dir() {
                        mounts.push(child);
                    }
                }
            }
        }

        mounts.sort();
        mounts
    }
}

impl LibrarySource for SteamLibraries {
    fn name(&self) -> &str {
        "steam"
    }

    fn libraries(&self) -> Vec<LibraryFolder> {
        let mut folders = self.registered_libraries();

        if !folders.iter().any(|f| same_path(&f.path, &self.steam_root)) {
            folders.insert(
                0,
                LibraryFolder {
                    path: self.steam_root.clone(),
                    installed: manifest_ids(&self.steam_root.join("steamapps")),
                },
            );
        }

        for mount in self.removable_mounts() {
            if folders.iter().any(|f| same_path(&f.path, &mount)) {
                continue;
            }
            debug!("inventory - Found unregistered library on {}", mount.display());
            folders.push(LibraryFolder {
                installed: manifest_ids(&mount.join("steamapps")),
                path: mount,
            });
        }

        folders
    }
}

fn same_path(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// IDs of every `appmanifest_<id>.acf` in a `steamapps` directory
fn manifest_ids(steamapps: &Path) -> BTreeSet<GameId> {
    let Ok(entries) = std::fs::read_dir(steamapps) else {
        return BTreeSet::new();
    };

    entries
        .flatten()
        .filter_map(|entry| entry.file_name().to_str().and_then(parse_manifest_id))
        .collect()
}

/// Storage endpoints with their installed titles.
///
/// The Steam data root is presented under `internal_root`. Libraries sharing
/// the same trees are merged.
pub fn collect_endpoints(
    source: &dyn LibrarySource,
    internal_root: &Path,
    steam_root: &Path,
) -> Vec<InventoryEntry> {
    let mut entries: Vec<InventoryEntry> = Vec::new();

    for folder in source.libraries() {
        let root = if same_path(&folder.path, steam_root) {
            internal_root.to_path_buf()
        } else {
            folder.path
        };
        let endpoint = StorageEndpoint::new(root, internal_root, steam_root);

        if let Some(existing) = entries
            .iter_mut()
            .find(|e| e.endpoint.compat() == endpoint.compat())
        {
            existing.installed.extend(folder.installed);
            continue;
        }

        entries.push(InventoryEntry {
            endpoint,
            installed: folder.installed,
        });
    }

    debug!(
        "inventory - {} endpoint(s) from {}",
        entries.len(),
        source.name()
    );

    entries
}

/// [`collect_endpoints`], requiring at least two endpoints to reconcile
pub fn list_endpoints(
    source: &dyn LibrarySource,
    internal_root: &Path,
    steam_root: &Path,
) -> Result<Vec<InventoryEntry>, SyncError> {
    let entries = collect_endpoints(source, internal_root, steam_root);
    if entries.len() < 2 {
        return Err(SyncError::NoDevice {
            found: entries.len(),
        });
    }
    Ok(entries)
}
