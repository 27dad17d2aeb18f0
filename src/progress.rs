//! Progress reporting infrastructure

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::{borrow::Cow, time::Duration};

/// CLI progress report of ongoing downloads
///
/// To avoid corrupted terminal output, you should not write anything to stderr
/// yourself while an operation is being tracked. Please use logs for debug
/// messages.
#[derive(Clone, Debug, Default)]
pub struct ProgressReport(MultiProgress);
//
impl ProgressReport {
    /// Prepare to report progress on the cli
    pub fn new() -> Self {
        Self::default()
    }

    /// Report that does not display anything
    pub fn hidden() -> Self {
        Self(MultiProgress::with_draw_target(ProgressDrawTarget::hidden()))
    }

    /// Prepare to report on an operation of unknown length
    pub fn spinner(&self, what: impl Into<Cow<'static, str>>) -> ProgressTracker {
        let bar = ProgressBar::new_spinner().with_prefix(what).with_style(
            ProgressStyle::with_template("{spinner} {prefix} {msg} [{elapsed}]")
                .expect("the style above should be a valid indicatif style"),
        );
        let bar = self.0.add(bar);
        bar.enable_steady_tick(Duration::from_millis(100));
        ProgressTracker {
            bar,
            report: self.0.clone(),
        }
    }
}

/// Mechanism to track an operation's progress
///
/// The progress display goes away once this is dropped.
#[derive(Debug)]
pub struct ProgressTracker {
    /// Progress bar for this specific operation
    bar: ProgressBar,

    /// Underlying process report
    report: MultiProgress,
}
//
impl ProgressTracker {
    /// Describe what is currently going on
    pub fn set_message(&self, message: impl Into<Cow<'static, str>>) {
        self.bar.set_message(message);
    }
}
//
impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
        self.report.remove(&self.bar);
    }
}
