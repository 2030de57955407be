//! Stepper motor driver.
//!
//! Owns the commutation table, current phase index and timing parameters;
//! generic over embedded-hal 1.0 pin and delay types.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::commutation::{CommutationTable, Direction, PhaseIndex};
use crate::config::units::{Degrees, Radians, Steps};
use crate::error::{DriveError, Result};

use super::cancel::CancelToken;
use super::coils::CoilOutputs;

/// Half-step driver for a 4-phase stepper motor.
///
/// Stepping is a blocking loop: each transition advances the phase index one
/// position (modulo 8, direction-dependent), writes the corresponding
/// commutation pattern to the four coil outputs, and suspends the calling
/// context for the configured interval. The phase index persists across
/// calls, so successive rotations continue the sequence where the previous
/// one left off.
///
/// After every completed transition the energized pattern equals the table
/// entry at the current phase index; the only other state the outputs take
/// is all-off (at rest before the first step, or after [`stop`](Self::stop)).
pub struct StepperDriver<'c, IN1, IN2, IN3, IN4, DELAY>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
    DELAY: DelayNs,
{
    /// The four coil outputs, exclusively owned.
    coils: CoilOutputs<IN1, IN2, IN3, IN4>,

    /// Delay provider for step timing.
    delay: DELAY,

    /// The active commutation table.
    table: CommutationTable,

    /// Current position in the commutation cycle.
    phase: PhaseIndex,

    /// Time each phase is held, in microseconds.
    step_interval_us: u32,

    /// Phase transitions per output revolution.
    steps_per_revolution: u32,

    /// Motor name for logging/debugging.
    name: heapless::String<32>,

    /// Cancellation flag polled once per step (never cancelled if absent).
    cancel: Option<&'c CancelToken>,
}

impl<'c, IN1, IN2, IN3, IN4, DELAY> StepperDriver<'c, IN1, IN2, IN3, IN4, DELAY>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
    DELAY: DelayNs,
{
    pub(crate) fn new(
        coils: CoilOutputs<IN1, IN2, IN3, IN4>,
        delay: DELAY,
        step_interval_us: u32,
        steps_per_revolution: u32,
        name: heapless::String<32>,
        cancel: Option<&'c CancelToken>,
    ) -> Self {
        Self {
            coils,
            delay,
            table: CommutationTable::half_step(),
            phase: PhaseIndex::ZERO,
            step_interval_us,
            steps_per_revolution,
            name,
            cancel,
        }
    }

    /// Create a builder for a new driver.
    pub fn builder() -> super::StepperDriverBuilder<'c, IN1, IN2, IN3, IN4, DELAY> {
        super::StepperDriverBuilder::new()
    }

    /// Get the motor name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get the current position in the commutation cycle.
    #[inline]
    pub fn phase(&self) -> PhaseIndex {
        self.phase
    }

    /// Get the configured step interval in microseconds.
    #[inline]
    pub fn step_interval_us(&self) -> u32 {
        self.step_interval_us
    }

    /// Get the configured steps per revolution.
    #[inline]
    pub fn steps_per_revolution(&self) -> u32 {
        self.steps_per_revolution
    }

    /// Steps this driver would issue for the given angle, without moving.
    #[inline]
    pub fn steps_for(&self, angle: Degrees) -> Steps {
        angle.to_steps(self.steps_per_revolution)
    }

    /// Force all four outputs low, de-energizing the windings.
    ///
    /// Best-effort: pin failures are discarded, so this never fails and is
    /// idempotent. The phase index is untouched; the next step resumes the
    /// sequence.
    pub fn stop(&mut self) {
        self.coils.all_off();
    }

    /// Perform `count` phase transitions in the given direction.
    ///
    /// Each transition advances the phase index one position (wrapping
    /// modulo 8), writes the pattern at the new position to the outputs, and
    /// holds it for the step interval. No hold follows the final transition.
    /// `count` of zero returns immediately without touching the outputs.
    ///
    /// # Errors
    ///
    /// - [`DriveError::Interrupted`] if the attached [`CancelToken`] fires;
    ///   the outputs are forced low first and the phase index keeps the value
    ///   it had when cancellation was observed.
    /// - [`DriveError::Pin`] if a coil write fails. The write is not retried
    ///   and the outputs may be left mid-pattern; callers that need a safe
    ///   state afterwards should call [`stop`](Self::stop) themselves.
    pub fn step(&mut self, count: u32, direction: Direction) -> Result<()> {
        for remaining in (0..count).rev() {
            if self.cancel.map_or(false, |token| token.is_cancelled()) {
                self.stop();
                return Err(DriveError::Interrupted.into());
            }

            self.phase.advance(direction);
            self.coils
                .write(self.table.pattern(self.phase))
                .map_err(|_| DriveError::Pin)?;

            if remaining > 0 {
                self.delay.delay_us(self.step_interval_us);
            }
        }

        Ok(())
    }

    /// Rotate by a signed angle in degrees.
    ///
    /// The step count is `round(|angle| / 360 * steps_per_revolution)`,
    /// rounding half away from zero. Positive angles rotate clockwise; zero
    /// and negative angles counter-clockwise (zero issues no steps). Returns
    /// the number of steps issued.
    pub fn rotate(&mut self, angle: Degrees) -> Result<Steps> {
        let steps = self.steps_for(angle);
        self.step(steps.0, Direction::from_angle(angle))?;
        Ok(steps)
    }

    /// Rotate by a signed angle in radians.
    ///
    /// A unit-conversion convenience: the angle is converted to degrees and
    /// handed to [`rotate`](Self::rotate), so the resulting step count and
    /// direction match the pre-converted degree call within float rounding.
    pub fn rotate_radians(&mut self, angle: Radians) -> Result<Steps> {
        self.rotate(Degrees::from(angle))
    }

    /// De-energize the windings and release the outputs and delay provider.
    pub fn release(self) -> (CoilOutputs<IN1, IN2, IN3, IN4>, DELAY) {
        let mut coils = self.coils;
        coils.all_off();
        (coils, self.delay)
    }
}
