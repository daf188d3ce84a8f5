//! Pure swap helpers

use crate::swap::types::{CANDIDATE_SIZES_GB, GIB, RECOMMENDED_SIZE_GB, SPACE_OVERHEAD};

use std::path::PathBuf;

/// Swap file named by `/proc/swaps`.
///
/// Only the first entry counts. A `/dev/...` entry is a partition, which
/// means there is no file to resize.
pub fn parse_swap_location(proc_swaps: &str) -> Option<PathBuf> {
    let entry = proc_swaps
        .lines()
        .map(str::split_whitespace)
        .map(|fields| fields.collect::<Vec<_>>())
        .find(|fields| fields.len() >= 3 && fields[0] != "Filename")?;

    if entry[0].starts_with("/dev/") {
        return None;
    }
    Some(PathBuf::from(entry[0]))
}

/// Swap sizes in GiB that fit into `free` bytes plus the space the current
/// file already takes. 1 GiB is always offered.
pub fn available_swap_sizes(free: u64, current: u64) -> Vec<u32> {
    let budget = free.saturating_add(current);
    let mut sizes = vec![1];
    sizes.extend(
        CANDIDATE_SIZES_GB
            .into_iter()
            .filter(|gb| u64::from(*gb) * GIB + SPACE_OVERHEAD < budget),
    );
    sizes
}

pub fn recommended_swap_size(free: u64, current: u64) -> u32 {
    available_swap_sizes(free, current)
        .into_iter()
        .filter(|gb| *gb <= RECOMMENDED_SIZE_GB)
        .max()
        .unwrap_or(1)
}
