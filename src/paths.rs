use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;

pub static PATH_HOME: LazyLock<PathBuf> = LazyLock::new(|| {
    env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("/root"))
});

pub static PATH_LOCAL_SHARE: LazyLock<PathBuf> = LazyLock::new(|| PATH_HOME.join(".local/share"));

pub static PATH_CONFIG: LazyLock<PathBuf> = LazyLock::new(|| {
    if let Ok(xdg_config_home) = env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg_config_home).join("decktune");
    }
    PATH_HOME.join(".config/decktune")
});

pub static PATH_STEAM: LazyLock<PathBuf> = LazyLock::new(|| {
    // Check for native Steam installation first
    if PATH_LOCAL_SHARE.join("Steam").exists() {
        PATH_LOCAL_SHARE.join("Steam")
    } else if PATH_HOME.join(".steam/steam").exists() {
        // Follow the symlink at ~/.steam/steam
        PATH_HOME.join(".steam/steam")
    } else if PATH_HOME
        .join(".var/app/com.valvesoftware.Steam/.local/share/Steam")
        .exists()
    {
        // Flatpak Steam
        PATH_HOME.join(".var/app/com.valvesoftware.Steam/.local/share/Steam")
    } else {
        PATH_LOCAL_SHARE.join("Steam")
    }
});

/// Compat-prefix tree relative to a Steam library root
pub const COMPAT_SUBDIR: &str = "steamapps/compatdata";

/// Shader-cache tree relative to a Steam library root
pub const SHADER_SUBDIR: &str = "steamapps/shadercache";
