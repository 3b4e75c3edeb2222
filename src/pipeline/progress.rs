// file: src/pipeline/progress.rs
// description: download progress bars and run statistics reporting
// reference: uses indicatif for progress bars and tracks parsing metrics

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunStats {
    pub sentences: usize,
    pub tokens: usize,
    pub triples: usize,
    pub duration: Duration,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_sentence(&mut self, tokens: usize, triples: usize) {
        self.sentences += 1;
        self.tokens += tokens;
        self.triples += triples;
    }

    pub fn sentences_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        self.sentences as f64 / secs
    }

    pub fn average_tokens(&self) -> f64 {
        if self.sentences == 0 {
            return 0.0;
        }
        self.tokens as f64 / self.sentences as f64
    }
}

/// Byte progress for one asset download, drawn on stderr.
pub struct DownloadProgress {
    bar: ProgressBar,
    start_time: Instant,
}

impl DownloadProgress {
    pub fn new(name: &str, total_bytes: Option<u64>, colored: bool) -> Self {
        let bar = match total_bytes {
            Some(total) => ProgressBar::new(total),
            None => ProgressBar::new_spinner(),
        };
        bar.set_draw_target(ProgressDrawTarget::stderr());
        bar.set_style(download_style(total_bytes.is_some(), colored));
        bar.set_message(name.to_string());

        Self {
            bar,
            start_time: Instant::now(),
        }
    }

    /// Progress that is never drawn; used when output is not a terminal.
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            start_time: Instant::now(),
        }
    }

    pub fn advance(&self, bytes: u64) {
        self.bar.inc(bytes);
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for DownloadProgress {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.abandon();
        }
    }
}

fn download_style(sized: bool, colored: bool) -> ProgressStyle {
    let template = match (sized, colored) {
        (true, true) => {
            "{spinner:.green} {msg} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta})"
        }
        (true, false) => "{spinner} {msg} [{bar:40}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta})",
        (false, _) => "{spinner} {msg} {bytes} ({bytes_per_sec})",
    };
    let chars = if colored { "█▓▒░" } else { "=>-" };
    ProgressStyle::default_bar()
        .template(template)
        .expect("Failed to create progress bar template")
        .progress_chars(chars)
}
