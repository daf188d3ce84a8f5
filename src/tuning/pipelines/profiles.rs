//! Whole-system tuning profiles

use crate::runner::CommandRunner;
use crate::swap::{DEFAULT_SIZE_GB, SwapStatus, ensure_swap_size};
use crate::tuning::operations::SysTunables;
use crate::tuning::pipelines::apply::{revert, set};
use crate::tuning::types::{Tunable, TuningError};

use tracing::{info, warn};

/// Apply every recommended value, stopping at the first failure
pub fn apply_recommended(tunables: &SysTunables) -> Result<(), TuningError> {
    for tunable in Tunable::ALL {
        set(tunables, tunable)?;
    }
    info!("tuning - Recommended settings applied");
    Ok(())
}

/// Restore every stock value. Each tunable is attempted; failures are
/// collected into one [`TuningError::Stock`].
pub fn apply_stock(tunables: &SysTunables) -> Result<(), TuningError> {
    let mut failures = Vec::new();

    for tunable in Tunable::ALL {
        if let Err(e) = revert(tunables, tunable) {
            warn!("tuning - Failed to revert {}: {}", tunable, e);
            failures.push((tunable, e));
        }
    }

    if failures.is_empty() {
        info!("tuning - Stock settings restored");
        Ok(())
    } else {
        Err(TuningError::Stock(failures))
    }
}

/// Full recommended profile: swap file at its recommended size, then every
/// recommended knob. A failed resize leaves the knobs untouched.
pub fn use_recommended(
    tunables: &SysTunables,
    runner: &dyn CommandRunner,
    swap: &SwapStatus,
) -> Result<(), TuningError> {
    ensure_swap_size(runner, swap, swap.recommended_size)?;
    apply_recommended(tunables)
}

/// Full stock profile: swap file back to 1 GiB, then every stock knob.
/// A failed resize leaves the knobs untouched.
pub fn use_stock(
    tunables: &SysTunables,
    runner: &dyn CommandRunner,
    swap: &SwapStatus,
) -> Result<(), TuningError> {
    ensure_swap_size(runner, swap, DEFAULT_SIZE_GB)?;
    apply_stock(tunables)
}
