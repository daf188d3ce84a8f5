//! GPU video memory readout
//!
//! The minimum VRAM carve-out (UMA frame buffer size) is a firmware setting
//! and cannot be changed from the OS; this module only reports it.
//!
//! ## Module Structure
//! - `types.rs`: GpuError, recommended size
//! - `pure.rs`: `glxinfo -B` parsing
//! - `operations.rs`: query through a command runner

mod operations;
mod pure;
mod types;

// Re-export types
pub use types::RECOMMENDED_VRAM_MB;

// Re-export operations
pub use operations::video_memory_mb;
