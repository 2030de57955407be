//! # halfstep-drive
//!
//! Half-step commutation driver for 4-phase stepper motors with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Fixed half-step commutation**: 8-state sequence for unipolar/bipolar
//!   4-phase motors (28BYJ-48 class hardware behind a ULN2003 board)
//! - **embedded-hal 1.0**: Uses `OutputPin` for the four coil outputs,
//!   `DelayNs` for inter-step timing
//! - **no_std compatible**: Core library works without standard library
//! - **Resumable phase state**: The phase index persists across calls, so
//!   rotations compose without re-homing
//! - **Safe cancellation**: A [`CancelToken`] polled at every step boundary
//!   forces all outputs low before the error surfaces
//! - **Configuration-driven**: Define motors in TOML files (std only)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use halfstep_drive::{CoilOutputs, Degrees, StepperDriver};
//!
//! // Wrap the four winding outputs (embedded-hal OutputPin impls)
//! let coils = CoilOutputs::new(in1, in2, in3, in4);
//!
//! let mut motor = StepperDriver::builder()
//!     .coils(coils)
//!     .delay(delay)
//!     .build()?;
//!
//! // Half a revolution clockwise, then back
//! motor.rotate(Degrees(180.0))?;
//! motor.rotate(Degrees(-180.0))?;
//! motor.stop();
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt formatting for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod commutation;
pub mod config;
pub mod error;
pub mod motor;

// Re-exports for ergonomic API
pub use commutation::{CommutationTable, Direction, PhaseIndex, COIL_COUNT, PHASE_COUNT};
pub use config::{validate_config, MotorConfig, SystemConfig};
pub use error::{ConfigError, DriveError, Error, Result};
pub use motor::{CancelToken, CoilOutputs, StepperDriver, StepperDriverBuilder};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Degrees, Radians, Steps};
