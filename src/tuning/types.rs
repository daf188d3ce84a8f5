//! Tuning module type definitions

use crate::swap::SwapError;

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tunable {
    HugePages,
    ShmemEnabled,
    Defrag,
    CompactionProactiveness,
    PageLockUnfairness,
    Swappiness,
}

impl Tunable {
    pub const ALL: [Tunable; 6] = [
        Tunable::HugePages,
        Tunable::ShmemEnabled,
        Tunable::Defrag,
        Tunable::CompactionProactiveness,
        Tunable::PageLockUnfairness,
        Tunable::Swappiness,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tunable::HugePages => "hugepages",
            Tunable::ShmemEnabled => "shmem_enabled",
            Tunable::Defrag => "defrag",
            Tunable::CompactionProactiveness => "compaction_proactiveness",
            Tunable::PageLockUnfairness => "page_lock_unfairness",
            Tunable::Swappiness => "swappiness",
        }
    }

    /// Absolute kernel path of the knob
    pub fn path(&self) -> &'static str {
        match self {
            Tunable::HugePages => "/sys/kernel/mm/transparent_hugepage/enabled",
            Tunable::ShmemEnabled => "/sys/kernel/mm/transparent_hugepage/shmem_enabled",
            Tunable::Defrag => "/sys/kernel/mm/transparent_hugepage/khugepaged/defrag",
            Tunable::CompactionProactiveness => "/proc/sys/vm/compaction_proactiveness",
            Tunable::PageLockUnfairness => "/proc/sys/vm/page_lock_unfairness",
            Tunable::Swappiness => "/proc/sys/vm/swappiness",
        }
    }

    pub fn recommended(&self) -> &'static str {
        match self {
            Tunable::HugePages => "always",
            Tunable::ShmemEnabled => "advise",
            Tunable::Defrag => "0",
            Tunable::CompactionProactiveness => "0",
            Tunable::PageLockUnfairness => "1",
            Tunable::Swappiness => "1",
        }
    }

    /// SteamOS default
    pub fn stock(&self) -> &'static str {
        match self {
            Tunable::HugePages => "madvise",
            Tunable::ShmemEnabled => "never",
            Tunable::Defrag => "1",
            Tunable::CompactionProactiveness => "20",
            Tunable::PageLockUnfairness => "5",
            Tunable::Swappiness => "100",
        }
    }
}

impl fmt::Display for Tunable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tunable {
    type Err = TuningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tunable::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| TuningError::Unknown(s.to_string()))
    }
}

/// Live value of one tunable
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TunableStatus {
    pub tunable: Tunable,
    /// `None` when the knob could not be read
    pub current: Option<String>,
    pub persisted: bool,
}

impl TunableStatus {
    pub fn is_recommended(&self) -> bool {
        self.current.as_deref() == Some(self.tunable.recommended())
    }
}

#[derive(Debug, Error)]
pub enum TuningError {
    #[error("unknown tunable '{0}'")]
    Unknown(String),

    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to update unit file {}: {source}", .path.display())]
    UnitFile { path: PathBuf, source: io::Error },

    #[error("failed to restore stock values: {}", join_failures(.0))]
    Stock(Vec<(Tunable, TuningError)>),

    #[error(transparent)]
    Swap(#[from] SwapError),
}

fn join_failures(failures: &[(Tunable, TuningError)]) -> String {
    failures
        .iter()
        .map(|(tunable, e)| format!("{tunable}: {e}"))
        .collect::<Vec<_>>()
        .join("; ")
}
