//! Progress reporting with monotonic values and cancellation.

use crate::error::GenerateError;

/// Caller-supplied progress hook: `(current, total) -> keep_going`.
pub type ProgressCallback = Box<dyn FnMut(u32, u32) -> bool>;

/// Denominator passed with every report.
pub(crate) const PROGRESS_TOTAL: u32 = 100;

/// Forwards checkpoints to the callback, clamped so reported values never
/// decrease and never exceed [`PROGRESS_TOTAL`].
pub(crate) struct ProgressTracker<'a> {
    callback: Option<&'a mut ProgressCallback>,
    last: u32,
}

impl<'a> ProgressTracker<'a> {
    pub(crate) fn new(callback: Option<&'a mut ProgressCallback>) -> Self {
        Self { callback, last: 0 }
    }

    /// Report `value`; returns the callback's verdict (`true` without one).
    pub(crate) fn report(&mut self, value: u32) -> bool {
        let value = value.clamp(self.last, PROGRESS_TOTAL);
        self.last = value;
        match self.callback.as_deref_mut() {
            Some(callback) => callback(value, PROGRESS_TOTAL),
            None => true,
        }
    }

    /// Report `value`, turning a refusal into [`GenerateError::Cancelled`].
    pub(crate) fn checkpoint(&mut self, value: u32) -> Result<(), GenerateError> {
        if self.report(value) {
            Ok(())
        } else {
            let progress = self.last();
            tracing::info!(progress, "Generation cancelled");
            Err(GenerateError::Cancelled { progress })
        }
    }

    /// Final report at 100. The verdict is ignored.
    pub(crate) fn finish(&mut self) {
        let _ = self.report(PROGRESS_TOTAL);
    }

    pub(crate) fn last(&self) -> u32 {
        self.last
    }
}
