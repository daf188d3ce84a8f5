mod apply;
mod profiles;

pub use apply::{is_recommended, set_custom, status, toggle};
pub use profiles::{use_recommended, use_stock};

#[cfg(test)]
pub(crate) mod fixture {
    use crate::tuning::{SysTunables, Tunable};

    use std::fs;
    use tempfile::TempDir;

    /// Fake knob tree seeded with stock values, plus a tmpfiles dir
    pub fn stock_system() -> (TempDir, SysTunables) {
        let dir = tempfile::tempdir().unwrap();
        let tunables = SysTunables::new(dir.path().join("root"), dir.path().join("tmpfiles.d"));
        for tunable in Tunable::ALL {
            let knob = tunables.knob_path(tunable);
            fs::create_dir_all(knob.parent().unwrap()).unwrap();
            let contents = match tunable {
                Tunable::HugePages => "always [madvise] never\n".to_string(),
                Tunable::ShmemEnabled => {
                    "always within_size advise [never] deny force\n".to_string()
                }
                other => format!("{}\n", other.stock()),
            };
            fs::write(knob, contents).unwrap();
        }
        (dir, tunables)
    }
}
