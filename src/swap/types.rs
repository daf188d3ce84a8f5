//! Swap module type definitions

use crate::runner::CommandError;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub const GIB: u64 = 1024 * 1024 * 1024;

/// Free space kept back when sizing a swap file
pub const SPACE_OVERHEAD: u64 = 100 * 1024 * 1024;

/// Sizes offered on top of the always-available 1 GiB
pub const CANDIDATE_SIZES_GB: [u32; 9] = [2, 4, 6, 8, 12, 16, 20, 24, 32];

pub const RECOMMENDED_SIZE_GB: u32 = 16;

/// SteamOS stock swap file size
pub const DEFAULT_SIZE_GB: u32 = 1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwapStatus {
    /// `None` when swap lives on a partition or no swap file exists
    pub location: Option<PathBuf>,
    pub size_bytes: u64,
    pub free_bytes: u64,
    pub available_sizes: Vec<u32>,
    pub recommended_size: u32,
}

#[derive(Debug, Error)]
pub enum SwapError {
    #[error("no swap file found")]
    NoSwapFile,

    #[error("{requested} GiB swap file does not fit, available sizes: {available:?}")]
    InvalidSize { requested: u32, available: Vec<u32> },

    #[error("failed to inspect {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Command(#[from] CommandError),
}
