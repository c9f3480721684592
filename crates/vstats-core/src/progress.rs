//! Progress reporting seam for batch dispatch.

/// Receives progress signals while a batch runs.
pub trait ProgressSink {
    /// Called after each successful job with the number of completed jobs.
    fn advance(&mut self, completed: usize, total: usize);

    /// Called once after the last job, even for an empty batch.
    fn finish(&mut self);
}

impl<T: ProgressSink + ?Sized> ProgressSink for &mut T {
    fn advance(&mut self, completed: usize, total: usize) {
        (**self).advance(completed, total);
    }

    fn finish(&mut self) {
        (**self).finish();
    }
}

impl<T: ProgressSink + ?Sized> ProgressSink for Box<T> {
    fn advance(&mut self, completed: usize, total: usize) {
        (**self).advance(completed, total);
    }

    fn finish(&mut self) {
        (**self).finish();
    }
}

/// Discards all progress signals.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn advance(&mut self, _completed: usize, _total: usize) {}

    fn finish(&mut self) {}
}

/// Whole percentage for `completed` out of `total`; an empty total is complete.
pub fn percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    let value = completed.min(total) * 100 / total;
    u8::try_from(value).unwrap_or(100)
}
