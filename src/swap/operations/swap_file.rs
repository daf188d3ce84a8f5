//! Swap file discovery

use crate::swap::pure::parse_swap_location;
use crate::swap::types::SwapError;

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Active swap file, falling back to `default_file` when `/proc/swaps` lists
/// none and the default exists. A swap partition is not a swap file.
pub fn swap_file_location(proc_swaps: &Path, default_file: &Path) -> Result<PathBuf, SwapError> {
    let text = fs::read_to_string(proc_swaps).map_err(|source| SwapError::Io {
        path: proc_swaps.to_path_buf(),
        source,
    })?;

    let has_entries = text.lines().skip(1).any(|line| !line.trim().is_empty());
    if let Some(location) = parse_swap_location(&text) {
        debug!("swap - Active swap file {}", location.display());
        return Ok(location);
    }
    if !has_entries && default_file.is_file() {
        return Ok(default_file.to_path_buf());
    }

    Err(SwapError::NoSwapFile)
}

pub fn swap_file_size(location: &Path) -> Result<u64, SwapError> {
    fs::metadata(location)
        .map(|meta| meta.len())
        .map_err(|source| SwapError::Io {
            path: location.to_path_buf(),
            source,
        })
}
