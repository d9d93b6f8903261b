// file: src/pipeline/progress.rs
// description: progress reporting for batch runs through an injected observer
// reference: uses indicatif for progress bars and tracks processing metrics

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

/// Receives per-document progress from a pipeline run. Implementations must
/// tolerate calls from several worker tasks at once.
pub trait PipelineObserver: Send + Sync {
    fn document_started(&self, _name: &str) {}

    fn document_finished(&self, name: &str);

    fn document_failed(&self, name: &str, reason: &str);

    fn headings_found(&self, _count: usize) {}

    fn sections_found(&self, _count: usize) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {
    fn document_finished(&self, _name: &str) {}

    fn document_failed(&self, _name: &str, _reason: &str) {}
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineStats {
    pub documents_processed: usize,
    pub documents_failed: usize,
    pub headings_found: usize,
    pub sections_found: usize,
    pub duration_secs: f64,
}

impl PipelineStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_documents(&self) -> usize {
        self.documents_processed + self.documents_failed
    }

    pub fn documents_per_second(&self) -> f64 {
        if self.duration_secs <= 0.0 {
            return 0.0;
        }
        self.total_documents() as f64 / self.duration_secs
    }

    pub fn success_rate(&self) -> f64 {
        let total = self.total_documents();
        if total == 0 {
            return 0.0;
        }
        (self.documents_processed as f64 / total as f64) * 100.0
    }
}

pub struct ProgressTracker {
    main_bar: ProgressBar,
    detail_bar: ProgressBar,
    documents_processed: AtomicUsize,
    documents_failed: AtomicUsize,
    headings_found: AtomicUsize,
    sections_found: AtomicUsize,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn with_color(total_documents: usize, colored: bool) -> Self {
        let multi_progress = MultiProgress::new();
        Self::attach(multi_progress, total_documents, colored)
    }

    /// Tracker that counts without drawing anything.
    pub fn hidden(total_documents: usize) -> Self {
        let multi_progress = MultiProgress::with_draw_target(ProgressDrawTarget::hidden());
        Self::attach(multi_progress, total_documents, false)
    }

    fn attach(multi_progress: MultiProgress, total_documents: usize, colored: bool) -> Self {
        let main_bar = create_progress_bar(&multi_progress, total_documents as u64, colored);
        let detail_bar = create_detail_bar(&multi_progress);

        Self {
            main_bar,
            detail_bar,
            documents_processed: AtomicUsize::new(0),
            documents_failed: AtomicUsize::new(0),
            headings_found: AtomicUsize::new(0),
            sections_found: AtomicUsize::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn finish(&self) {
        self.main_bar.finish_with_message("Processing complete");
        self.detail_bar.finish_and_clear();
    }

    pub fn get_stats(&self) -> PipelineStats {
        PipelineStats {
            documents_processed: self.documents_processed.load(Ordering::SeqCst),
            documents_failed: self.documents_failed.load(Ordering::SeqCst),
            headings_found: self.headings_found.load(Ordering::SeqCst),
            sections_found: self.sections_found.load(Ordering::SeqCst),
            duration_secs: self.start_time.elapsed().as_secs_f64(),
        }
    }

    fn update_detail_bar(&self) {
        let message = format!(
            "Headings: {} | Sections: {} | Failed: {}",
            self.headings_found.load(Ordering::SeqCst),
            self.sections_found.load(Ordering::SeqCst),
            self.documents_failed.load(Ordering::SeqCst)
        );
        self.detail_bar.set_message(message);
    }
}

impl PipelineObserver for ProgressTracker {
    fn document_started(&self, name: &str) {
        self.main_bar.set_message(name.to_string());
    }

    fn document_finished(&self, _name: &str) {
        self.documents_processed.fetch_add(1, Ordering::SeqCst);
        self.main_bar.inc(1);
        self.update_detail_bar();
    }

    fn document_failed(&self, name: &str, _reason: &str) {
        self.documents_failed.fetch_add(1, Ordering::SeqCst);
        self.main_bar.inc(1);
        self.main_bar.set_message(format!("failed: {}", name));
        self.update_detail_bar();
    }

    fn headings_found(&self, count: usize) {
        self.headings_found.fetch_add(count, Ordering::SeqCst);
    }

    fn sections_found(&self, count: usize) {
        self.sections_found.fetch_add(count, Ordering::SeqCst);
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.finish();
    }
}

fn create_progress_bar(multi_progress: &MultiProgress, total: u64, colored: bool) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(total));
    let (template, chars) = if colored {
        (
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
            "█▓▒░",
        )
    } else {
        ("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} {msg}", "=>-")
    };

    if let Ok(style) = ProgressStyle::default_bar().template(template) {
        bar.set_style(style.progress_chars(chars));
    }
    bar
}

fn create_detail_bar(multi_progress: &MultiProgress) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(0));
    if let Ok(style) = ProgressStyle::default_bar().template("{msg}") {
        bar.set_style(style);
    }
    bar
}
