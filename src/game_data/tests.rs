// End-to-end reconciliation scenarios

#[cfg(test)]
mod tests {
    use crate::catalog::Catalog;
    use crate::game_data::error::MoveError;
    use crate::game_data::operations::Transfer;
    use crate::game_data::types::DataKind;
    use crate::game_data::{
        CancelToken, FsTransfer, GameId, InventoryEntry, MoveStatus, StorageEndpoint, SyncError,
        check_space, confirm, diff, execute, list_game_records, remove_game_data,
        uninstalled_ids,
    };

    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    struct Side {
        _dir: TempDir,
        endpoint: StorageEndpoint,
    }

    fn side() -> Side {
        let dir = tempfile::tempdir().unwrap();
        let endpoint = StorageEndpoint::new(dir.path(), Path::new("/nonexistent"), Path::new("/nonexistent"));
        Side {
            _dir: dir,
            endpoint,
        }
    }

    /// Give `id` a compat prefix and a shader cache of `bytes` each
    fn seed(endpoint: &StorageEndpoint, id: GameId, bytes: usize) {
        let compat = endpoint.game_dir(DataKind::Compat, id);
        let shader = endpoint.game_dir(DataKind::Shader, id);
        fs::create_dir_all(compat.join("pfx/drive_c")).unwrap();
        fs::create_dir_all(&shader).unwrap();
        fs::write(compat.join("pfx/drive_c/save.dat"), vec![1u8; bytes]).unwrap();
        fs::write(shader.join("fozpipelinesv6.foz"), vec![2u8; bytes]).unwrap();
    }

    fn ids(values: &[GameId]) -> BTreeSet<GameId> {
        values.iter().copied().collect()
    }

    /// Fails every ID in `failing`, delegates the rest to the filesystem
    struct FlakyTransfer {
        failing: BTreeSet<GameId>,
    }

    impl Transfer for FlakyTransfer {
        fn transfer(
            &self,
            id: GameId,
            from: &StorageEndpoint,
            to: &StorageEndpoint,
        ) -> Result<(), MoveError> {
            if self.failing.contains(&id) {
                return Err(MoveError::Copy {
                    path: from.game_dir(DataKind::Compat, id),
                    source: io::Error::from(io::ErrorKind::PermissionDenied),
                });
            }
            FsTransfer.transfer(id, from, to)
        }
    }

    #[test]
    fn diff_splits_ids_and_sizes_each_direction() {
        let (left, right) = (side(), side());
        seed(&left.endpoint, 10, 100);
        seed(&left.endpoint, 20, 50);
        seed(&left.endpoint, 30, 7);
        seed(&right.endpoint, 30, 7);
        seed(&right.endpoint, 40, 25);

        let plan = diff(&left.endpoint, &right.endpoint).unwrap();

        assert_eq!(plan.only_on_left, ids(&[10, 20]));
        assert_eq!(plan.only_on_right, ids(&[40]));
        assert_eq!(plan.left_extra_bytes, 300);
        assert_eq!(plan.right_extra_bytes, 50);

        let swapped = diff(&right.endpoint, &left.endpoint).unwrap();
        assert_eq!(swapped.only_on_right, plan.only_on_left);
        assert_eq!(swapped.only_on_left, plan.only_on_right);
    }

    #[test]
    fn diff_counts_ids_split_across_trees_as_present() {
        let (left, right) = (side(), side());
        fs::create_dir_all(left.endpoint.game_dir(DataKind::Compat, 70)).unwrap();
        fs::create_dir_all(right.endpoint.game_dir(DataKind::Shader, 70)).unwrap();

        let plan = diff(&left.endpoint, &right.endpoint).unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn diff_fails_without_partial_plan_when_a_side_is_unreadable() {
        let (left, right) = (side(), side());
        seed(&left.endpoint, 10, 1);
        fs::create_dir_all(right.endpoint.compat().parent().unwrap()).unwrap();
        fs::write(right.endpoint.compat(), b"").unwrap();
        fs::write(right.endpoint.shader(), b"").unwrap();

        let err = diff(&left.endpoint, &right.endpoint).unwrap_err();
        assert!(matches!(err, SyncError::Scan { .. }));
    }

    #[test]
    fn zero_padded_names_are_not_game_data() {
        let (left, right) = (side(), side());
        let padded = left.endpoint.compat().join("0070");
        fs::create_dir_all(&padded).unwrap();
        fs::write(padded.join("save.dat"), vec![1u8; 500]).unwrap();

        let plan = diff(&left.endpoint, &right.endpoint).unwrap();
        assert!(plan.is_empty());

        // "0070" on the left does not stand in for "70" on the right
        seed(&right.endpoint, 70, 5);
        let plan = diff(&left.endpoint, &right.endpoint).unwrap();
        assert_eq!(plan.only_on_right, ids(&[70]));
        assert!(plan.only_on_left.is_empty());

        let report = execute(
            &plan,
            &left.endpoint,
            &right.endpoint,
            &FsTransfer,
            &CancelToken::new(),
            |_| {},
        );
        assert_eq!(report.status(), MoveStatus::Succeeded);
        assert!(left.endpoint.game_dir(DataKind::Compat, 70).is_dir());
        assert!(padded.join("save.dat").exists());
        assert!(diff(&left.endpoint, &right.endpoint).unwrap().is_empty());
    }

    #[test]
    fn id_gone_from_source_after_diff_is_a_failure() {
        let (left, right) = (side(), side());
        seed(&left.endpoint, 10, 4);
        seed(&left.endpoint, 20, 4);

        let plan = diff(&left.endpoint, &right.endpoint).unwrap();
        for kind in DataKind::ALL {
            fs::remove_dir_all(left.endpoint.game_dir(kind, 20)).unwrap();
        }

        let report = execute(
            &plan,
            &left.endpoint,
            &right.endpoint,
            &FsTransfer,
            &CancelToken::new(),
            |_| {},
        );

        assert_eq!(report.status(), MoveStatus::CompletedWithIssues);
        let failed: Vec<GameId> = report.failures().map(|o| o.id).collect();
        assert_eq!(failed, vec![20]);
        assert!(matches!(
            report.outcomes[1].error,
            Some(MoveError::NothingToMove { id: 20, .. })
        ));
    }

    #[test]
    fn successful_execute_leaves_nothing_to_diff() {
        let (left, right) = (side(), side());
        seed(&left.endpoint, 10, 10);
        seed(&left.endpoint, 20, 10);
        seed(&right.endpoint, 30, 10);
        seed(&right.endpoint, 40, 10);

        let plan = diff(&left.endpoint, &right.endpoint).unwrap();
        let mut seen = Vec::new();
        let report = execute(
            &plan,
            &left.endpoint,
            &right.endpoint,
            &FsTransfer,
            &CancelToken::new(),
            |p| seen.push(p.completed),
        );

        assert_eq!(report.status(), MoveStatus::Succeeded);
        assert_eq!(report.outcomes.len(), 4);
        assert_eq!(seen, vec![1, 2, 3, 4]);

        confirm(&plan, &left.endpoint, &right.endpoint).unwrap();
        let again = diff(&left.endpoint, &right.endpoint).unwrap();
        assert!(again.only_on_left.is_empty());
        assert!(again.only_on_right.is_empty());
        assert_eq!(
            fs::read(right.endpoint.game_dir(DataKind::Compat, 10).join("pfx/drive_c/save.dat"))
                .unwrap()
                .len(),
            10
        );
    }

    #[test]
    fn one_failing_id_does_not_stop_the_batch() {
        let (left, right) = (side(), side());
        for id in [10, 20, 30] {
            seed(&left.endpoint, id, 4);
        }

        let plan = diff(&left.endpoint, &right.endpoint).unwrap();
        let transfer = FlakyTransfer {
            failing: ids(&[20]),
        };
        let report = execute(
            &plan,
            &left.endpoint,
            &right.endpoint,
            &transfer,
            &CancelToken::new(),
            |_| {},
        );

        assert_eq!(report.outcomes.len(), 3);
        assert!(report.outcomes[0].succeeded());
        assert!(!report.outcomes[1].succeeded());
        assert_eq!(report.outcomes[1].id, 20);
        assert!(report.outcomes[2].succeeded());
        assert_eq!(report.status(), MoveStatus::CompletedWithIssues);

        match confirm(&plan, &left.endpoint, &right.endpoint).unwrap_err() {
            SyncError::Mismatch(mismatch) => {
                assert_eq!(mismatch.missing_on_right, ids(&[20]));
                assert!(mismatch.missing_on_left.is_empty());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn occupied_destination_fails_only_that_id() {
        let (left, right) = (side(), side());
        for id in [10, 20, 30] {
            seed(&left.endpoint, id, 4);
        }
        // A stray file named like the game blocks the copy but is not scanned
        fs::create_dir_all(right.endpoint.compat()).unwrap();
        fs::write(right.endpoint.game_dir(DataKind::Compat, 20), b"").unwrap();

        let plan = diff(&left.endpoint, &right.endpoint).unwrap();
        assert_eq!(plan.only_on_left, ids(&[10, 20, 30]));

        let report = execute(
            &plan,
            &left.endpoint,
            &right.endpoint,
            &FsTransfer,
            &CancelToken::new(),
            |_| {},
        );

        let failed: Vec<GameId> = report.failures().map(|o| o.id).collect();
        assert_eq!(failed, vec![20]);
        assert!(!right.endpoint.game_dir(DataKind::Shader, 20).exists());
    }

    #[test]
    fn cancelling_after_first_id_stops_cleanly() {
        let (left, right) = (side(), side());
        for id in [10, 20, 30, 40] {
            seed(&left.endpoint, id, 4);
        }

        let plan = diff(&left.endpoint, &right.endpoint).unwrap();
        let cancel = CancelToken::new();
        let report = execute(
            &plan,
            &left.endpoint,
            &right.endpoint,
            &FsTransfer,
            &cancel,
            |p| {
                if p.completed == 1 {
                    cancel.cancel();
                }
            },
        );

        assert_eq!(report.outcomes.len(), 1);
        assert!(report.cancelled);
        assert_eq!(report.status(), MoveStatus::Cancelled);
        assert!(right.endpoint.game_dir(DataKind::Compat, 10).is_dir());

        for id in [20, 30, 40] {
            for kind in DataKind::ALL {
                assert!(!right.endpoint.game_dir(kind, id).exists());
            }
        }
        let leftovers: Vec<PathBuf> = DataKind::ALL
            .iter()
            .flat_map(|kind| fs::read_dir(right.endpoint.tree(*kind)).unwrap())
            .map(|entry| entry.unwrap().path())
            .filter(|path| !path.ends_with("10"))
            .collect();
        assert!(leftovers.is_empty(), "unexpected entries: {leftovers:?}");
    }

    #[test]
    fn confirm_is_idempotent() {
        let (left, right) = (side(), side());
        seed(&left.endpoint, 10, 1);

        let plan = diff(&left.endpoint, &right.endpoint).unwrap();
        let first = confirm(&plan, &left.endpoint, &right.endpoint).map_err(|e| e.to_string());
        let second = confirm(&plan, &left.endpoint, &right.endpoint).map_err(|e| e.to_string());
        assert!(first.is_err());
        assert_eq!(first, second);
    }

    #[test]
    fn plan_larger_than_destination_is_not_executed() {
        let (left, right) = (side(), side());
        seed(&left.endpoint, 10, 1);

        let mut plan = diff(&left.endpoint, &right.endpoint).unwrap();
        plan.left_extra_bytes = 5_000_000_000;

        let err = check_space(
            &plan,
            &left.endpoint,
            u64::MAX,
            &right.endpoint,
            4_000_000_000,
            0,
        )
        .unwrap_err();
        assert!(matches!(err, SyncError::InsufficientSpace { .. }));
    }

    #[test]
    fn listing_marks_installed_and_resolves_names() {
        let (left, right) = (side(), side());
        seed(&left.endpoint, 228980, 1);
        seed(&left.endpoint, 10, 1);
        seed(&right.endpoint, 10, 1);
        seed(&right.endpoint, 1086940, 1);
        fs::create_dir_all(left.endpoint.game_dir(DataKind::Compat, 0)).unwrap();

        let inventory = vec![
            InventoryEntry {
                endpoint: left.endpoint.clone(),
                installed: ids(&[228980]),
            },
            InventoryEntry {
                endpoint: right.endpoint.clone(),
                installed: ids(&[1086940, 555]),
            },
        ];
        let catalog = Catalog::from_entries([(1086940, "Baldur's Gate 3")]);

        let records = list_game_records(&inventory, &catalog);
        let listed: Vec<GameId> = records.iter().map(|r| r.id).collect();
        assert_eq!(listed, vec![10, 228980, 1086940]);
        assert_eq!(records[2].display_name, "Baldur's Gate 3");
        assert_eq!(records[0].display_name, "???");
        assert_eq!(uninstalled_ids(&records), vec![10]);
    }

    #[test]
    fn cleanup_removes_selected_games_everywhere() {
        let (left, right) = (side(), side());
        seed(&left.endpoint, 10, 1);
        seed(&right.endpoint, 10, 1);
        seed(&right.endpoint, 20, 1);
        fs::create_dir_all(left.endpoint.game_dir(DataKind::Compat, 0)).unwrap();

        let endpoints = [left.endpoint.clone(), right.endpoint.clone()];
        let outcomes = remove_game_data(&[10, 0], &endpoints);

        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].removed.len(), 4);
        assert!(left.endpoint.game_dir(DataKind::Compat, 0).exists());
        assert!(right.endpoint.game_dir(DataKind::Shader, 20).exists());
    }
}
