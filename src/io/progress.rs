//! Batch progress display for multi-input runs

use crate::io::configuration::{MIN_BATCH_FOR_PROGRESS, PROGRESS_BAR_WIDTH};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template =
        format!("[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}");
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many inputs of a batch have been rendered
///
/// Single inputs finish too quickly for a bar to be useful, so the bar only
/// appears for batches of at least two inputs.
#[derive(Default)]
pub struct ProgressManager {
    batch_bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create a progress manager with no bar attached
    pub const fn new() -> Self {
        Self { batch_bar: None }
    }

    /// Prepare the display for `input_count` inputs
    pub fn initialize(&mut self, input_count: usize) {
        if input_count >= MIN_BATCH_FOR_PROGRESS {
            let bar = ProgressBar::new(input_count as u64);
            bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(bar);
        }
    }

    /// Show which input is being rendered
    pub fn start_input(&self, input: &str) {
        if let Some(ref bar) = self.batch_bar {
            bar.set_message(input.to_string());
        }
    }

    /// Advance the bar after an input is written
    pub fn complete_input(&self) {
        if let Some(ref bar) = self.batch_bar {
            bar.inc(1);
        }
    }

    /// Clean up the display
    pub fn finish(&self) {
        if let Some(ref bar) = self.batch_bar {
            bar.finish_with_message("all identicons written");
        }
    }
}
