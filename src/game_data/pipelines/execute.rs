//! Move plan execution

use crate::game_data::operations::Transfer;
use crate::game_data::types::{
    CancelToken, Direction, MoveOutcome, MovePlan, MoveProgress, MoveReport, StorageEndpoint,
};

use tracing::{info, warn};

/// Execute a move plan.
///
/// IDs are processed one at a time, left -> right first, then right -> left.
/// A failing ID is recorded and the batch carries on. `progress` is called
/// after every ID. Cancellation is checked before each ID, so the ID in flight
/// always finishes and no new one starts afterwards.
pub fn execute<T, F>(
    plan: &MovePlan,
    left: &StorageEndpoint,
    right: &StorageEndpoint,
    transfer: &T,
    cancel: &CancelToken,
    mut progress: F,
) -> MoveReport
where
    T: Transfer + ?Sized,
    F: FnMut(MoveProgress),
{
    let total = plan.total_items();
    let jobs = plan
        .only_on_left
        .iter()
        .map(|id| (*id, Direction::LeftToRight))
        .chain(
            plan.only_on_right
                .iter()
                .map(|id| (*id, Direction::RightToLeft)),
        );

    let mut report = MoveReport {
        outcomes: Vec::with_capacity(total),
        planned: total,
        cancelled: false,
    };

    for (id, direction) in jobs {
        if cancel.is_cancelled() {
            info!(
                "sync - Cancelled after {} of {} game(s)",
                report.outcomes.len(),
                total
            );
            report.cancelled = true;
            break;
        }

        let (from, to) = direction.endpoints(left, right);
        let error = match transfer.transfer(id, from, to) {
            Ok(()) => {
                info!("sync - Moved {} from {} to {}", id, from, to);
                None
            }
            Err(e) => {
                warn!("sync - Failed to move {} from {} to {}: {}", id, from, to, e);
                Some(e)
            }
        };

        report.outcomes.push(MoveOutcome {
            id,
            direction,
            error,
        });
        progress(MoveProgress {
            completed: report.outcomes.len(),
            total,
        });
    }

    report
}
