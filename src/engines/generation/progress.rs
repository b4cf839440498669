use indicatif::{ProgressBar, ProgressStyle};

use super::evolution_engine::ProgressCallback;

/// Plain-text percent ticker, one line per class.
pub struct ConsoleProgress;

impl ProgressCallback for ConsoleProgress {
    fn on_class_start(&mut self, class_name: &str, _generations: usize) {
        println!("Training expressions for {class_name}...");
    }

    fn on_generation_complete(&mut self, generation: usize, total: usize, best_goodness: f64) {
        let percent = 100 * (generation + 1) / total.max(1);
        if percent % 10 == 0 || generation + 1 == total {
            println!("  {percent}% (best goodness {best_goodness:.6})");
        }
    }

    fn on_class_complete(&mut self, class_name: &str, survivors: usize) {
        println!("Finished {class_name}: kept {survivors} expressions");
    }
}

/// Progress bar per class, driven through the same callback the engine uses
/// for console output.
pub struct BarProgress {
    bar: Option<ProgressBar>,
}

impl BarProgress {
    pub fn new() -> Self {
        Self { bar: None }
    }
}

impl Default for BarProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressCallback for BarProgress {
    fn on_class_start(&mut self, class_name: &str, generations: usize) {
        let bar = ProgressBar::new(generations as u64);
        bar.set_style(
            ProgressStyle::with_template(
                "{msg:20} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar.set_message(class_name.to_string());
        self.bar = Some(bar);
    }

    fn on_generation_complete(&mut self, _generation: usize, _total: usize, _best_goodness: f64) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    fn on_class_complete(&mut self, class_name: &str, survivors: usize) {
        if let Some(bar) = self.bar.take() {
            bar.finish_with_message(format!("{class_name}: {survivors} expressions"));
        }
    }
}

/// Discards all progress events. Used by tests and library callers that do
/// their own reporting.
pub struct SilentProgress;

impl ProgressCallback for SilentProgress {
    fn on_class_start(&mut self, _class_name: &str, _generations: usize) {}
    fn on_generation_complete(&mut self, _generation: usize, _total: usize, _best_goodness: f64) {}
    fn on_class_complete(&mut self, _class_name: &str, _survivors: usize) {}
}
