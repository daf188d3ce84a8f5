//! Game data listing across every storage location

use crate::catalog::Catalog;
use crate::game_data::operations::scan;
use crate::game_data::types::{GameId, GameRecord, InventoryEntry};

use std::collections::BTreeMap;
use tracing::warn;

/// Every game with data on any endpoint, sorted by ID.
///
/// An endpoint that cannot be scanned is skipped. `installed` is set when any
/// endpoint's inventory lists the ID.
pub fn list_game_records(inventory: &[InventoryEntry], catalog: &Catalog) -> Vec<GameRecord> {
    let mut records: BTreeMap<GameId, GameRecord> = BTreeMap::new();

    for entry in inventory {
        let ids = match scan(&entry.endpoint) {
            Ok(ids) => ids,
            Err(e) => {
                warn!("listing - {}", e);
                continue;
            }
        };

        for id in ids {
            records.entry(id).or_insert_with(|| GameRecord {
                id,
                display_name: catalog.name(id).to_string(),
                installed: false,
            });
        }
    }

    for entry in inventory {
        for id in &entry.installed {
            if let Some(record) = records.get_mut(id) {
                record.installed = true;
            }
        }
    }

    records.into_values().collect()
}

/// IDs with data on disk but no installed title
pub fn uninstalled_ids(records: &[GameRecord]) -> Vec<GameId> {
    records
        .iter()
        .filter(|record| !record.installed)
        .map(|record| record.id)
        .collect()
}
