//! Progress display for the copy phase

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};

/// Per-run progress display.
///
/// Interactive terminals get an in-place bar; everything else gets one
/// plain line per job so piped output stays readable.
pub struct ProgressReporter {
    renderer: Renderer,
    total: usize,
}

enum Renderer {
    Interactive(ProgressBar),
    Plain,
}

impl ProgressReporter {
    pub fn new(total: usize) -> Self {
        Self::with_interactivity(total, Term::stderr().is_term())
    }

    fn with_interactivity(total: usize, interactive: bool) -> Self {
        let renderer = if interactive {
            let bar = ProgressBar::new(total as u64);
            if let Ok(style) = ProgressStyle::with_template("[{bar:50}] {percent}% ...{msg}") {
                bar.set_style(style.progress_chars("==-"));
            }
            Renderer::Interactive(bar)
        } else {
            Renderer::Plain
        };

        Self { renderer, total }
    }

    /// Show that the job at `index` is being worked on
    pub fn tick(&self, index: usize, label: &str) {
        match &self.renderer {
            Renderer::Interactive(bar) => {
                bar.set_position(index as u64);
                bar.set_message(label.to_string());
            }
            Renderer::Plain => {
                eprintln!("[{}/{}] {label}", index + 1, self.total);
            }
        }
    }

    /// Wipe the bar once the copy phase is over
    pub fn finish(&self) {
        if let Renderer::Interactive(bar) = &self.renderer {
            bar.finish_and_clear();
        }
    }

    /// Handle for routing log lines above the bar
    pub fn bar(&self) -> Option<ProgressBar> {
        match &self.renderer {
            Renderer::Interactive(bar) => Some(bar.clone()),
            Renderer::Plain => None,
        }
    }
}
