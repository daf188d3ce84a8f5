// Directory-set differencing

use crate::game_data::types::{GameId, ScanResult};

use std::collections::BTreeSet;

/// Split two scans into (only on left, only on right).
///
/// IDs present on both sides land in neither set.
pub fn set_differences(
    left: &ScanResult,
    right: &ScanResult,
) -> (BTreeSet<GameId>, BTreeSet<GameId>) {
    let only_on_left = left.difference(right).copied().collect();
    let only_on_right = right.difference(left).copied().collect();
    (only_on_left, only_on_right)
}
