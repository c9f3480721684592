//! Progress rendering on stderr.

use std::io::{self, Write};

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use vstats_core::{ProgressSink, percent};

/// Progress bar drawn on stderr; hidden when stderr is not a terminal.
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::with_draw_target(Some(100), ProgressDrawTarget::stderr());
        if let Ok(style) = ProgressStyle::default_bar().template("{msg} [{bar:40.cyan/blue}] {pos:>3}%")
        {
            bar.set_style(style.progress_chars("=> "));
        }
        bar.set_message(message.to_string());
        Self { bar }
    }
}

impl ProgressSink for BarProgress {
    fn advance(&mut self, completed: usize, total: usize) {
        self.bar.set_position(u64::from(percent(completed, total)));
    }

    fn finish(&mut self) {
        self.bar.set_position(100);
        self.bar.finish_and_clear();
    }
}

/// Writes one `NN%` line per change in whole percentage.
pub struct PlainProgress<W: Write> {
    writer: W,
    last: Option<u8>,
}

impl PlainProgress<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> PlainProgress<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last: None }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, value: u8) {
        if self.last == Some(value) {
            return;
        }
        self.last = Some(value);
        // Write errors are ignored; progress never fails the batch.
        let _ = writeln!(self.writer, "{value:>3}%");
    }
}

impl<W: Write> ProgressSink for PlainProgress<W> {
    fn advance(&mut self, completed: usize, total: usize) {
        self.emit(percent(completed, total));
    }

    fn finish(&mut self) {
        self.emit(100);
        let _ = self.writer.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(steps: &[(usize, usize)]) -> String {
        let mut progress = PlainProgress::new(Vec::new());
        for (completed, total) in steps {
            progress.advance(*completed, *total);
        }
        progress.finish();
        String::from_utf8(progress.into_inner()).unwrap()
    }

    #[test]
    fn writes_percentages_and_final_hundred_once() {
        assert_eq!(render(&[(1, 4), (2, 4), (3, 4), (4, 4)]), " 25%\n 50%\n 75%\n100%\n");
    }

    #[test]
    fn empty_batch_reports_completion() {
        assert_eq!(render(&[]), "100%\n");
    }

    #[test]
    fn repeated_percentages_are_collapsed() {
        let steps: Vec<(usize, usize)> = (1..=300).map(|i| (i, 300)).collect();
        let output = render(&steps);
        assert_eq!(output.lines().count(), 101);
        assert_eq!(output.lines().next(), Some("  0%"));
        assert_eq!(output.lines().last(), Some("100%"));
    }
}
