//! Spinner shown while a classification request is in flight.

use indicatif::{ProgressBar, ProgressStyle};

pub struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    /// A steady-tick spinner. Disabled (no-op) in quiet mode.
    #[must_use]
    pub fn spinner(enabled: bool, message: &str) -> Self {
        if !enabled {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(std::time::Duration::from_millis(100));
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        Self { bar: Some(bar) }
    }

    /// Stop the spinner and erase its line so rendered output stays clean.
    pub fn finish_and_clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_spinner_is_inert() {
        let progress = Progress::spinner(false, "working");
        progress.finish_and_clear();
        assert!(progress.bar.is_none());
    }
}
