use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// ActivitySpinner - shows a busy control's label on stderr while a request runs
///
/// Cleared when dropped. Disabled spinners draw nothing, which keeps JSON
/// output and piped stderr clean.
pub struct ActivitySpinner {
    bar: ProgressBar,
}

impl ActivitySpinner {
    const TICK_MS: u64 = 100;

    pub fn start(label: &str, enabled: bool) -> Self {
        if !enabled {
            return Self {
                bar: ProgressBar::hidden(),
            };
        }

        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template("   {spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        bar.set_message(label.to_string());
        bar.enable_steady_tick(Duration::from_millis(Self::TICK_MS));
        Self { bar }
    }
}

impl Drop for ActivitySpinner {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}
