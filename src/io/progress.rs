//! Progress display for panel batches and the simulated training loop

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PANEL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static TRAINING_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Training: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates console output for one pipeline run
///
/// Notices are routed through the underlying [`MultiProgress`] so they never
/// tear an active bar.
pub struct ProgressReporter {
    multi_progress: MultiProgress,
    panel_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    /// Create a new reporter with no active bars
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            panel_bar: None,
        }
    }

    /// Print a line above any active bars
    pub fn notice(&self, message: &str) {
        let _ = self.multi_progress.println(message);
    }

    /// Start the panel generation bar for a run of `total` panels
    pub fn start_panels(&mut self, total: usize) {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(PANEL_STYLE.clone());
        self.panel_bar = Some(self.multi_progress.add(bar));
    }

    /// Label the bar with the panel currently being generated
    pub fn start_panel(&self, id: usize, dialogue: &str) {
        if let Some(ref bar) = self.panel_bar {
            bar.set_message(format!("Panel {id}: {dialogue}"));
        }
    }

    /// Record one finished panel, successful or not
    pub fn complete_panel(&self, generated: bool) {
        if let Some(ref bar) = self.panel_bar {
            bar.inc(1);
            if !generated {
                bar.set_message("generation failed, continuing".to_string());
            }
        }
    }

    /// Add a bar for the simulated training loop
    pub fn training_bar(&self, steps: u64) -> ProgressBar {
        let bar = ProgressBar::new(steps);
        bar.set_style(TRAINING_STYLE.clone());
        self.multi_progress.add(bar)
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref bar) = self.panel_bar {
            bar.finish_with_message("All panels processed");
        }
        let _ = self.multi_progress.clear();
    }
}
