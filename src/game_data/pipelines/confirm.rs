//! Post-move verification

use crate::game_data::error::{MismatchError, SyncError};
use crate::game_data::operations::scan;
use crate::game_data::types::{MovePlan, StorageEndpoint};

use tracing::{info, warn};

/// Re-scan both endpoints and check the plan landed.
///
/// Every `only_on_left` ID must now be present at right and every
/// `only_on_right` ID at left. Nothing is repaired; run the diff again to pick
/// up whatever is still missing.
pub fn confirm(
    plan: &MovePlan,
    left: &StorageEndpoint,
    right: &StorageEndpoint,
) -> Result<(), SyncError> {
    let (left_ids, right_ids) = rayon::join(|| scan(left), || scan(right));
    let (left_ids, right_ids) = (left_ids?, right_ids?);

    let mismatch = MismatchError {
        right: right.root().to_path_buf(),
        left: left.root().to_path_buf(),
        missing_on_right: plan.only_on_left.difference(&right_ids).copied().collect(),
        missing_on_left: plan.only_on_right.difference(&left_ids).copied().collect(),
    };

    if mismatch.is_empty() {
        info!("sync - Verified {} game(s) on both sides", plan.total_items());
        return Ok(());
    }

    warn!("sync - {}", mismatch);
    Err(mismatch.into())
}
