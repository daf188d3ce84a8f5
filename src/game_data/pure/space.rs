// Space-budget validation

use crate::game_data::error::SyncError;
use crate::game_data::types::{MovePlan, StorageEndpoint};

/// Check that both destinations can take what the plan copies onto them.
///
/// Each side must have more free space than the incoming bytes plus `margin`.
/// A direction with nothing to copy always passes.
pub fn check_space(
    plan: &MovePlan,
    left: &StorageEndpoint,
    left_free: u64,
    right: &StorageEndpoint,
    right_free: u64,
    margin: u64,
) -> Result<(), SyncError> {
    let checks = [
        (right, right_free, plan.left_extra_bytes),
        (left, left_free, plan.right_extra_bytes),
    ];

    for (destination, available, incoming) in checks {
        if incoming == 0 {
            continue;
        }
        let needed = incoming.saturating_add(margin);
        if available <= needed {
            return Err(SyncError::InsufficientSpace {
                destination: destination.root().to_path_buf(),
                needed,
                available,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn endpoint(root: &str) -> StorageEndpoint {
        StorageEndpoint::with_trees(
            root,
            Path::new(root).join("compat"),
            Path::new(root).join("shader"),
        )
    }

    #[test]
    fn oversized_plan_is_rejected_before_moving() {
        let plan = MovePlan {
            left_extra_bytes: 5_000_000_000,
            ..Default::default()
        };

        let err = check_space(
            &plan,
            &endpoint("/left"),
            u64::MAX,
            &endpoint("/right"),
            4_000_000_000,
            0,
        )
        .unwrap_err();

        match err {
            SyncError::InsufficientSpace {
                destination,
                needed,
                available,
            } => {
                assert_eq!(destination, Path::new("/right"));
                assert_eq!(needed, 5_000_000_000);
                assert_eq!(available, 4_000_000_000);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn margin_is_required_on_top_of_payload() {
        let plan = MovePlan {
            right_extra_bytes: 1_000,
            ..Default::default()
        };

        assert!(check_space(&plan, &endpoint("/l"), 1_100, &endpoint("/r"), 0, 100).is_err());
        assert!(check_space(&plan, &endpoint("/l"), 1_101, &endpoint("/r"), 0, 100).is_ok());
    }

    #[test]
    fn empty_direction_needs_no_space() {
        let plan = MovePlan::default();
        assert!(check_space(&plan, &endpoint("/l"), 0, &endpoint("/r"), 0, 100).is_ok());
    }
}
