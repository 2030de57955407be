//! Commutation module for halfstep-drive.
//!
//! Provides the fixed half-step commutation table, phase index arithmetic,
//! and the direction-to-traversal mapping. Pure data and arithmetic; all
//! pin I/O lives in [`crate::motor`].

mod phase;
mod table;

pub use phase::{Direction, PhaseIndex};
pub use table::{CommutationTable, PhasePattern, COIL_COUNT, PHASE_COUNT};
