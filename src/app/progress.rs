//! Progress UI (spinner) for fan fetches.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use luster_core::FanKind;

/// Spinner on stderr showing how many fans each listing has produced.
///
/// A disabled spinner is a hidden bar, so callers never branch on it.
pub(crate) struct FetchProgress {
    spinner: ProgressBar,
}

impl FetchProgress {
    pub(crate) fn new(use_spinner: bool) -> Self {
        if !use_spinner {
            return Self {
                spinner: ProgressBar::hidden(),
            };
        }
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.enable_steady_tick(Duration::from_millis(100));
        Self { spinner }
    }

    pub(crate) fn stage(&self, message: impl Into<String>) {
        self.spinner.set_message(message.into());
    }

    pub(crate) fn batch(&self, kind: FanKind, fetched: usize) {
        self.spinner.set_message(batch_message(kind, fetched));
    }

    pub(crate) fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}

impl Drop for FetchProgress {
    fn drop(&mut self) {
        if !self.spinner.is_finished() {
            self.spinner.finish_and_clear();
        }
    }
}

fn batch_message(kind: FanKind, fetched: usize) -> String {
    let listing = match kind {
        FanKind::Like => "likers",
        FanKind::Follow => "followers",
    };
    format!("Fetching {listing}... {fetched} so far")
}
