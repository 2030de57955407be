//! Cooperative cancellation for in-progress step sequences.

use core::sync::atomic::{AtomicBool, Ordering};

/// Externally settable abort flag polled by the step loop.
///
/// Share a token with the driver via
/// [`StepperDriverBuilder::cancel_token`](super::StepperDriverBuilder::cancel_token),
/// typically as a `static` so a signal handler or second thread can reach it.
/// [`cancel`](Self::cancel) is a single atomic store and is safe to call from
/// any context; the step loop observes it at the next iteration boundary,
/// forces the outputs low, and returns
/// [`DriveError::Interrupted`](crate::error::DriveError::Interrupted).
#[derive(Debug, Default)]
pub struct CancelToken {
    cancelled: AtomicBool,
}

impl CancelToken {
    /// Create a token in the armed (not cancelled) state.
    pub const fn new() -> Self {
        Self {
            cancelled: AtomicBool::new(false),
        }
    }

    /// Request cancellation of the current step sequence.
    #[inline]
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Re-arm the token for another run.
    #[inline]
    pub fn reset(&self) {
        self.cancelled.store(false, Ordering::Release);
    }
}
