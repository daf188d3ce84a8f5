//! Swap file status

use crate::config::DecktuneConfig;
use crate::game_data::free_space;
use crate::swap::operations::{swap_file_location, swap_file_size};
use crate::swap::pure::{available_swap_sizes, recommended_swap_size};
use crate::swap::types::{SwapError, SwapStatus};

use tracing::warn;

/// Locate the swap file and work out which sizes fit next to it
pub fn swap_status(config: &DecktuneConfig) -> Result<SwapStatus, SwapError> {
    let proc_swaps = config.sysfs_root.join("proc/swaps");
    let location = match swap_file_location(&proc_swaps, &config.swap_file) {
        Ok(location) => Some(location),
        Err(SwapError::NoSwapFile) => None,
        Err(e) => return Err(e),
    };

    let size_bytes = match &location {
        Some(path) => swap_file_size(path).unwrap_or_else(|e| {
            warn!("swap - {}", e);
            0
        }),
        None => 0,
    };

    let target = location.as_deref().unwrap_or(config.swap_file.as_path());
    let volume = target.parent().unwrap_or(target);
    let free_bytes = free_space(volume).map_err(|source| SwapError::Io {
        path: volume.to_path_buf(),
        source,
    })?;

    Ok(SwapStatus {
        available_sizes: available_swap_sizes(free_bytes, size_bytes),
        recommended_size: recommended_swap_size(free_bytes, size_bytes),
        location,
        size_bytes,
        free_bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    #[test]
    fn status_from_fake_system() {
        let dir = tempfile::tempdir().unwrap();
        let swap_file = dir.path().join("swapfile");
        fs::create_dir_all(dir.path().join("proc")).unwrap();
        fs::write(
            dir.path().join("proc/swaps"),
            format!(
                "Filename Type Size Used Priority\n{} file 4 0 -2\n",
                swap_file.display()
            ),
        )
        .unwrap();
        fs::write(&swap_file, vec![0u8; 8192]).unwrap();

        let config = DecktuneConfig {
            sysfs_root: dir.path().to_path_buf(),
            swap_file: dir.path().join("unused"),
            ..DecktuneConfig::default()
        };

        let status = swap_status(&config).unwrap();
        assert_eq!(status.location.as_deref(), Some(swap_file.as_path()));
        assert_eq!(status.size_bytes, 8192);
        assert_eq!(status.available_sizes[0], 1);
        assert!(status.available_sizes.contains(&status.recommended_size));
    }
}
