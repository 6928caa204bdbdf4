use crate::algorithms::{PassDescriptor, GUTMANN_PASSES};
use crate::wipe_orchestrator::PassObserver;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

const TEMPLATE: &str =
    "{prefix:.bold} [{elapsed_precise}] {bar:40.green/240} {pos:>2}/{len} {msg:.cyan}";

/// Terminal progress for one file, advanced once per completed pass
pub struct PassProgress {
    bar: ProgressBar,
}

impl PassProgress {
    pub fn new(label: &str) -> Self {
        Self::with_bar(ProgressBar::new(GUTMANN_PASSES as u64), label)
    }

    /// Progress that tracks state but never draws, for `--no-progress` and tests
    pub fn hidden(label: &str) -> Self {
        let bar = ProgressBar::with_draw_target(
            Some(GUTMANN_PASSES as u64),
            ProgressDrawTarget::hidden(),
        );
        Self::with_bar(bar, label)
    }

    fn with_bar(bar: ProgressBar, label: &str) -> Self {
        let style = ProgressStyle::with_template(TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░");
        bar.set_style(style);
        bar.set_prefix(label.to_string());
        Self { bar }
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn message(&self) -> String {
        self.bar.message()
    }

    pub fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }

    pub fn abandon(&self, message: &str) {
        self.bar.abandon_with_message(message.to_string());
    }
}

impl PassObserver for PassProgress {
    fn on_pass_start(&mut self, pass: usize, total: usize, descriptor: &PassDescriptor) {
        self.bar
            .set_message(format!("pass {}/{}: {}", pass, total, descriptor));
    }

    fn on_pass_complete(&mut self, _pass: usize, _total: usize, _bytes: u64) {
        self.bar.inc(1);
    }
}

impl PassObserver for &mut PassProgress {
    fn on_pass_start(&mut self, pass: usize, total: usize, descriptor: &PassDescriptor) {
        (**self).on_pass_start(pass, total, descriptor);
    }

    fn on_pass_complete(&mut self, pass: usize, total: usize, bytes: u64) {
        (**self).on_pass_complete(pass, total, bytes);
    }
}

/// Convert a byte count to a readable string
pub fn human_bytes(bytes: u64) -> String {
    let units = ["B", "KB", "MB", "GB", "TB"];
    if bytes == 0 {
        return "0B".to_string();
    }
    let mut val = bytes as f64;
    let mut i = 0usize;
    while val >= 1024.0 && i + 1 < units.len() {
        val /= 1024.0;
        i += 1;
    }
    if i == 0 {
        format!("{}B", bytes)
    } else {
        format!("{:.2}{}", val, units[i])
    }
}
