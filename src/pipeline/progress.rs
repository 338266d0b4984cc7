// file: src/pipeline/progress.rs
// description: progress display and statistics for a screening batch
// reference: uses indicatif for progress bars and tracks processing counts

use indicatif::{ProgressBar, ProgressStyle};
use std::cell::Cell;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchStats {
    pub documents_scanned: usize,
    pub documents_matched: usize,
    pub extraction_failures: usize,
    pub copy_failures: usize,
    pub duration: Duration,
}

impl BatchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn match_rate(&self) -> f64 {
        if self.documents_scanned == 0 {
            return 0.0;
        }
        (self.documents_matched as f64 / self.documents_scanned as f64) * 100.0
    }
}

/// Progress bar plus counters for one batch. Not `Sync`: a batch runs on one thread.
pub struct ProgressTracker {
    bar: ProgressBar,
    scanned: Cell<usize>,
    matched: Cell<usize>,
    extraction_failures: Cell<usize>,
    copy_failures: Cell<usize>,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn new(total_documents: usize) -> Self {
        Self::with_bar(create_progress_bar(total_documents as u64))
    }

    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::hidden())
    }

    fn with_bar(bar: ProgressBar) -> Self {
        Self {
            bar,
            scanned: Cell::new(0),
            matched: Cell::new(0),
            extraction_failures: Cell::new(0),
            copy_failures: Cell::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn start_document(&self, name: &str) {
        self.bar.set_message(format!("OCR {}", name));
    }

    pub fn inc_scanned(&self) {
        bump(&self.scanned);
        self.bar.inc(1);
    }

    pub fn inc_matched(&self) {
        bump(&self.matched);
    }

    pub fn inc_extraction_failures(&self) {
        bump(&self.extraction_failures);
    }

    pub fn inc_copy_failures(&self) {
        bump(&self.copy_failures);
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    pub fn get_stats(&self) -> BatchStats {
        BatchStats {
            documents_scanned: self.scanned.get(),
            documents_matched: self.matched.get(),
            extraction_failures: self.extraction_failures.get(),
            copy_failures: self.copy_failures.get(),
            duration: self.start_time.elapsed(),
        }
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.finish();
    }
}

fn bump(counter: &Cell<usize>) {
    counter.set(counter.get() + 1);
}

fn create_progress_bar(total: u64) -> ProgressBar {
    let bar = ProgressBar::new(total);
    match ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        Ok(style) => bar.set_style(style.progress_chars("█▓▒░")),
        Err(_) => bar.set_style(ProgressStyle::default_bar()),
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_rate() {
        let stats = BatchStats {
            documents_scanned: 8,
            documents_matched: 2,
            ..BatchStats::new()
        };
        assert_eq!(stats.match_rate(), 25.0);
        assert_eq!(BatchStats::new().match_rate(), 0.0);
    }

    #[test]
    fn test_tracker_counts() {
        let tracker = ProgressTracker::hidden();

        tracker.start_document("a.pdf");
        tracker.inc_scanned();
        tracker.inc_matched();
        tracker.inc_scanned();
        tracker.inc_extraction_failures();
        tracker.inc_copy_failures();

        let stats = tracker.get_stats();
        assert_eq!(stats.documents_scanned, 2);
        assert_eq!(stats.documents_matched, 1);
        assert_eq!(stats.extraction_failures, 1);
        assert_eq!(stats.copy_failures, 1);
    }
}
