//! Reconciliation pipeline

use crate::game_data::error::SyncError;
use crate::game_data::operations::{game_size, scan};
use crate::game_data::pure::set_differences;
use crate::game_data::types::{MovePlan, StorageEndpoint};

use tracing::info;

/// Compute what must move between two endpoints.
///
/// Both endpoints are scanned concurrently; sizes are measured only after both
/// scans succeed. A failed scan fails the whole diff.
pub fn diff(left: &StorageEndpoint, right: &StorageEndpoint) -> Result<MovePlan, SyncError> {
    let (left_ids, right_ids) = rayon::join(|| scan(left), || scan(right));
    let (left_ids, right_ids) = (left_ids?, right_ids?);

    let (only_on_left, only_on_right) = set_differences(&left_ids, &right_ids);

    let (left_extra_bytes, right_extra_bytes) = rayon::join(
        || only_on_left.iter().map(|id| game_size(left, *id)).sum::<u64>(),
        || only_on_right.iter().map(|id| game_size(right, *id)).sum::<u64>(),
    );

    info!(
        "sync - {} -> {}: {} game(s), {} bytes; {} -> {}: {} game(s), {} bytes",
        left,
        right,
        only_on_left.len(),
        left_extra_bytes,
        right,
        left,
        only_on_right.len(),
        right_extra_bytes
    );

    Ok(MovePlan {
        only_on_left,
        only_on_right,
        left_extra_bytes,
        right_extra_bytes,
    })
}
