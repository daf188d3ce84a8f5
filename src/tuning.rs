//! Kernel memory tunables
//!
//! Transparent hugepage, compaction, page lock and swappiness knobs exposed
//! under `/sys` and `/proc`. A value is applied live by writing the knob and
//! persisted across reboots as a systemd-tmpfiles line.
//!
//! ## Module Structure
//! - `types.rs`: Tunable, TunableStatus, TuningError
//! - `pure.rs`: value parsing and tmpfiles rendering
//! - `operations/`: knob and unit file I/O
//! - `pipelines/`: set, revert, toggle, recommended and stock profiles (swap
//!   file included)

mod operations;
mod pipelines;
mod pure;
mod types;

// Re-export types
pub use types::Tunable;

// Re-export operations
pub use operations::SysTunables;

// Re-export pipelines
pub use pipelines::{is_recommended, set_custom, status, toggle, use_recommended, use_stock};
