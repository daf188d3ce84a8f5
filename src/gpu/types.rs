use crate::runner::CommandError;

use thiserror::Error;

/// Frame buffer size suggested for most games
pub const RECOMMENDED_VRAM_MB: u32 = 4096;

#[derive(Debug, Error)]
pub enum GpuError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("glxinfo reported no video memory")]
    NotReported,
}
