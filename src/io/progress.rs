//! Terminal progress display for animation rendering

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static FRAME_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} frames"
        ))
        .map_or_else(
            |_| ProgressStyle::default_bar(),
            |style| style.progress_chars("█▉▊▋▌▍▎▏ "),
        )
});

/// Progress bar over the frames of one export
///
/// A hidden manager accepts every call and draws nothing, so callers never
/// branch on quiet mode.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Visible progress bar on standard error
    pub fn new() -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::stderr());
        bar.set_style(FRAME_STYLE.clone());
        Self { bar }
    }

    /// Progress manager that never draws
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Visible unless `quiet`
    pub fn for_mode(quiet: bool) -> Self {
        if quiet { Self::hidden() } else { Self::new() }
    }

    /// Begin a stage of `total` frames labelled `label`
    pub fn start(&self, label: &str, total: usize) {
        self.bar.set_prefix(label.to_string());
        self.bar.set_length(total as u64);
        self.bar.set_position(0);
    }

    /// Advance by one frame
    pub fn advance(&self) {
        self.bar.inc(1);
    }

    /// Frames completed in the current stage
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}
