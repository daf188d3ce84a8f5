use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CATALOG_URL: &str = "https://api.steampowered.com/ISteamApps/GetAppList/v2/";

/// Free space kept in reserve on a destination beyond the bytes a plan needs
pub const DEFAULT_SPACE_MARGIN_BYTES: u64 = 100 * 1024 * 1024;

/// Main application configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DecktuneConfig {
    /// Mount that holds the internal Steam install. Maps onto the Steam data
    /// root rather than `<root>/steamapps`.
    #[serde(default = "default_internal_root")]
    pub internal_root: PathBuf,
    /// Override for the Steam data root (None = auto-detect)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steam_root: Option<PathBuf>,
    /// Parent directory of removable media mounts (SD cards, USB drives)
    #[serde(default = "default_removable_media_root")]
    pub removable_media_root: PathBuf,
    #[serde(default = "default_space_margin")]
    pub space_margin_bytes: u64,
    #[serde(default = "default_catalog_url")]
    pub catalog_url: String,
    #[serde(default = "default_catalog_timeout")]
    pub catalog_timeout_secs: u64,
    /// Prefix applied to /sys and /proc tunable paths
    #[serde(default = "default_sysfs_root")]
    pub sysfs_root: PathBuf,
    /// Where persisted tunables are written as systemd-tmpfiles entries
    #[serde(default = "default_tmpfiles_dir")]
    pub tmpfiles_dir: PathBuf,
    /// Swap file used when /proc/swaps lists none
    #[serde(default = "default_swap_file")]
    pub swap_file: PathBuf,
}

fn default_internal_root() -> PathBuf {
    PathBuf::from("/home")
}

fn default_removable_media_root() -> PathBuf {
    PathBuf::from("/run/media")
}

fn default_space_margin() -> u64 {
    DEFAULT_SPACE_MARGIN_BYTES
}

fn default_catalog_url() -> String {
    DEFAULT_CATALOG_URL.to_string()
}

fn default_catalog_timeout() -> u64 {
    30
}

fn default_sysfs_root() -> PathBuf {
    PathBuf::from("/")
}

fn default_tmpfiles_dir() -> PathBuf {
    PathBuf::from("/etc/tmpfiles.d")
}

fn default_swap_file() -> PathBuf {
    PathBuf::from("/home/swapfile")
}

impl Default for DecktuneConfig {
    fn default() -> Self {
        DecktuneConfig {
            internal_root: default_internal_root(),
            steam_root: None,
            removable_media_root: default_removable_media_root(),
            space_margin_bytes: default_space_margin(),
            catalog_url: default_catalog_url(),
            catalog_timeout_secs: default_catalog_timeout(),
            sysfs_root: default_sysfs_root(),
            tmpfiles_dir: default_tmpfiles_dir(),
            swap_file: default_swap_file(),
        }
    }
}

impl DecktuneConfig {
    /// Steam data root, honouring the override
    pub fn steam_root(&self) -> PathBuf {
        self.steam_root
            .clone()
            .unwrap_or_else(|| crate::paths::PATH_STEAM.clone())
    }
}
