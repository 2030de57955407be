//! Motor module for halfstep-drive.
//!
//! Provides the blocking stepper driver, the coil output set it owns, and
//! the cancellation token for aborting step sequences safely.

mod builder;
mod cancel;
mod coils;
mod driver;

pub use builder::{StepperDriverBuilder, DEFAULT_STEPS_PER_REVOLUTION, DEFAULT_STEP_INTERVAL_US};
pub use cancel::CancelToken;
pub use coils::CoilOutputs;
pub use driver::StepperDriver;
