//! Progress bar display for the install loop

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display over pip invocations
pub struct InstallProgress {
    wheel_pb: ProgressBar,
}

/// Keep the tail of long paths, cutting on char boundaries so multibyte
/// path components never split.
fn truncate_path(wheel_name: &str) -> String {
    if wheel_name.chars().count() <= 50 {
        return wheel_name.to_string();
    }
    let cut = wheel_name
        .char_indices()
        .nth_back(46)
        .map(|(idx, _)| idx)
        .unwrap_or(0);
    format!("...{}", &wheel_name[cut..])
}

impl InstallProgress {
    /// Create a new progress display with total wheel count
    pub fn new(total_wheels: u64) -> Self {
        let wheel_style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let wheel_pb = ProgressBar::new(total_wheels);
        wheel_pb.set_style(wheel_style);

        Self { wheel_pb }
    }

    /// Update to show the wheel currently being installed
    pub fn update_wheel(&self, wheel_name: &str) {
        self.wheel_pb.set_message(truncate_path(wheel_name));
    }

    /// Increment wheel progress
    pub fn inc_wheel(&self) {
        self.wheel_pb.inc(1);
    }

    /// Finish the bar once the loop completes
    pub fn finish(&self) {
        self.wheel_pb.finish_and_clear();
    }
}
