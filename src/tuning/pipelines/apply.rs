//! Single-tunable pipelines

use crate::tuning::operations::SysTunables;
use crate::tuning::types::{Tunable, TunableStatus, TuningError};

use tracing::{info, warn};

/// Apply the recommended value now and persist it
pub fn set(tunables: &SysTunables, tunable: Tunable) -> Result<(), TuningError> {
    info!("tuning - Setting {} to {}", tunable, tunable.recommended());
    tunables.set_unit_value(tunable, tunable.recommended())?;
    tunables.write_unit_file(tunable, tunable.recommended())
}

/// Restore the stock value now and drop the persisted one
pub fn revert(tunables: &SysTunables, tunable: Tunable) -> Result<(), TuningError> {
    info!("tuning - Reverting {} to {}", tunable, tunable.stock());
    tunables.set_unit_value(tunable, tunable.stock())?;
    tunables.remove_unit_file(tunable)
}

/// Apply an arbitrary value. Setting the stock value removes the unit file
/// so the system default takes over again on the next boot.
pub fn set_custom(tunables: &SysTunables, tunable: Tunable, value: &str) -> Result<(), TuningError> {
    info!("tuning - Setting {} to {}", tunable, value);
    tunables.set_unit_value(tunable, value)?;
    if value == tunable.stock() {
        tunables.remove_unit_file(tunable)
    } else {
        tunables.write_unit_file(tunable, value)
    }
}

/// Whether the live value is the recommended one. Unreadable counts as no.
pub fn is_recommended(tunables: &SysTunables, tunable: Tunable) -> bool {
    match tunables.get_unit_value(tunable) {
        Ok(current) => current == tunable.recommended(),
        Err(e) => {
            warn!("tuning - {}", e);
            false
        }
    }
}

/// Flip between recommended and stock
pub fn toggle(tunables: &SysTunables, tunable: Tunable) -> Result<(), TuningError> {
    if is_recommended(tunables, tunable) {
        revert(tunables, tunable)
    } else {
        set(tunables, tunable)
    }
}

pub fn status(tunables: &SysTunables) -> Vec<TunableStatus> {
    Tunable::ALL
        .into_iter()
        .map(|tunable| TunableStatus {
            tunable,
            current: tunables.get_unit_value(tunable).ok(),
            persisted: tunables.has_unit_file(tunable),
        })
        .collect()
}
