//! Configuration module for halfstep-drive.
//!
//! Provides types for loading and validating motor configurations from TOML
//! files (with `std` feature) or pre-parsed data. The driver itself takes all
//! parameters in-process; this layer is an optional convenience above it.

#[cfg(feature = "std")]
mod loader;
mod motor;
mod system;
pub mod units;
mod validation;

pub use motor::MotorConfig;
pub use system::SystemConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Degrees, Radians, Steps, UnitExt};
