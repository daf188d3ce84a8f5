//! Swap file sizing
//!
//! ## Module Structure
//! - `types.rs`: SwapStatus, SwapError, size constants
//! - `pure.rs`: /proc/swaps parsing, size selection
//! - `operations/`: swap file discovery
//! - `pipelines/`: status, resize

mod operations;
mod pipelines;
mod pure;
mod types;

// Re-export types
pub use types::{DEFAULT_SIZE_GB, GIB, SwapError, SwapStatus};

// Re-export pipelines
pub use pipelines::{ensure_swap_size, resize_swap, swap_status};
