//! Knob and unit file I/O

use crate::config::DecktuneConfig;
use crate::tuning::pure::{parse_unit_value, render_tmpfiles_line, unit_file_name};
use crate::tuning::types::{Tunable, TuningError};

use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::debug;

/// Tunable knobs below `sysfs_root`, persisted into `tmpfiles_dir`
#[derive(Clone, Debug)]
pub struct SysTunables {
    sysfs_root: PathBuf,
    tmpfiles_dir: PathBuf,
}

impl SysTunables {
    pub fn new(sysfs_root: impl Into<PathBuf>, tmpfiles_dir: impl Into<PathBuf>) -> Self {
        Self {
            sysfs_root: sysfs_root.into(),
            tmpfiles_dir: tmpfiles_dir.into(),
        }
    }

    pub fn from_config(config: &DecktuneConfig) -> Self {
        Self::new(&config.sysfs_root, &config.tmpfiles_dir)
    }

    /// Knob location on this system
    pub fn knob_path(&self, tunable: Tunable) -> PathBuf {
        self.sysfs_root
            .join(tunable.path().trim_start_matches('/'))
    }

    pub fn unit_file_path(&self, tunable: Tunable) -> PathBuf {
        self.tmpfiles_dir.join(unit_file_name(tunable))
    }

    pub fn get_unit_value(&self, tunable: Tunable) -> Result<String, TuningError> {
        let path = self.knob_path(tunable);
        let raw = fs::read_to_string(&path).map_err(|source| TuningError::Read { path, source })?;
        Ok(parse_unit_value(&raw))
    }

    pub fn set_unit_value(&self, tunable: Tunable, value: &str) -> Result<(), TuningError> {
        let path = self.knob_path(tunable);
        debug!("tuning - Writing '{}' to {}", value, path.display());
        fs::write(&path, value).map_err(|source| TuningError::Write { path, source })
    }

    /// Persist `value` for the next boot
    pub fn write_unit_file(&self, tunable: Tunable, value: &str) -> Result<(), TuningError> {
        let path = self.unit_file_path(tunable);
        let line = render_tmpfiles_line(tunable.path(), value);

        let result = fs::create_dir_all(&self.tmpfiles_dir).and_then(|_| fs::write(&path, line));
        result.map_err(|source| TuningError::UnitFile { path, source })
    }

    /// Drop the persisted value. A missing unit file is not an error.
    pub fn remove_unit_file(&self, tunable: Tunable) -> Result<(), TuningError> {
        let path = self.unit_file_path(tunable);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(TuningError::UnitFile { path, source }),
        }
    }

    pub fn has_unit_file(&self, tunable: Tunable) -> bool {
        self.unit_file_path(tunable).is_file()
    }
}
