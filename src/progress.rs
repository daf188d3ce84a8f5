use crate::game_data::MoveProgress;

use indicatif::{ProgressBar, ProgressStyle};

/// Terminal progress bar for a sync run
pub struct SyncProgress {
    bar: ProgressBar,
}

impl SyncProgress {
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        let style = ProgressStyle::with_template(
            "  {spinner:.cyan} Moving [{bar:30.cyan/dim}] {pos}/{len} games {msg} ({elapsed})",
        )
        .map(|style| style.progress_chars("━╸─"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        bar.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { bar }
    }

    pub fn update(&self, progress: MoveProgress) {
        self.bar.set_length(progress.total as u64);
        self.bar.set_position(progress.completed as u64);
        self.bar
            .set_message(format!("{:.0}%", progress.fraction() * 100.0));
    }

    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}
