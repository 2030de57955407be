//! Builder pattern for StepperDriver.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::{MotorConfig, SystemConfig};
use crate::error::{ConfigError, Error, Result};

use super::cancel::CancelToken;
use super::coils::CoilOutputs;
use super::driver::StepperDriver;

/// Default hold time per phase, in microseconds.
pub const DEFAULT_STEP_INTERVAL_US: u32 = 2_000;

/// Default phase transitions per output revolution (half-stepped 28BYJ-48).
pub const DEFAULT_STEPS_PER_REVOLUTION: u32 = 4_096;

/// Builder for creating StepperDriver instances.
pub struct StepperDriverBuilder<'c, IN1, IN2, IN3, IN4, DELAY>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
    DELAY: DelayNs,
{
    coils: Option<CoilOutputs<IN1, IN2, IN3, IN4>>,
    delay: Option<DELAY>,
    step_interval_us: u32,
    steps_per_revolution: u32,
    name: Option<heapless::String<32>>,
    cancel: Option<&'c CancelToken>,
}

impl<'c, IN1, IN2, IN3, IN4, DELAY> Default for StepperDriverBuilder<'c, IN1, IN2, IN3, IN4, DELAY>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
    DELAY: DelayNs,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'c, IN1, IN2, IN3, IN4, DELAY> StepperDriverBuilder<'c, IN1, IN2, IN3, IN4, DELAY>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
    DELAY: DelayNs,
{
    /// Create a new builder with default timing (2 ms interval, 4096
    /// steps/rev).
    pub fn new() -> Self {
        Self {
            coils: None,
            delay: None,
            step_interval_us: DEFAULT_STEP_INTERVAL_US,
            steps_per_revolution: DEFAULT_STEPS_PER_REVOLUTION,
            name: None,
            cancel: None,
        }
    }

    /// Set the four coil outputs.
    pub fn coils(mut self, coils: CoilOutputs<IN1, IN2, IN3, IN4>) -> Self {
        self.coils = Some(coils);
        self
    }

    /// Set the delay provider.
    pub fn delay(mut self, delay: DELAY) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the motor name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = heapless::String::try_from(name).ok();
        self
    }

    /// Set the hold time per phase in microseconds.
    ///
    /// Too small an interval outruns the motor mechanically; the library
    /// does not enforce a lower bound beyond zero.
    pub fn step_interval_us(mut self, interval_us: u32) -> Self {
        self.step_interval_us = interval_us;
        self
    }

    /// Set the phase transitions per output revolution.
    pub fn steps_per_revolution(mut self, steps: u32) -> Self {
        self.steps_per_revolution = steps;
        self
    }

    /// Attach a cancellation token polled once per step.
    pub fn cancel_token(mut self, token: &'c CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Configure timing and name from a MotorConfig.
    pub fn from_motor_config(mut self, config: &MotorConfig) -> Self {
        self.name = Some(config.name.clone());
        self.step_interval_us = config.step_interval_us;
        self.steps_per_revolution = config.steps_per_revolution;
        self
    }

    /// Configure from SystemConfig by motor name.
    pub fn from_config(self, config: &SystemConfig, motor_name: &str) -> Result<Self> {
        let motor_config = config.motor(motor_name).ok_or_else(|| {
            Error::Config(ConfigError::MotorNotFound(
                heapless::String::try_from(motor_name).unwrap_or_default(),
            ))
        })?;

        Ok(self.from_motor_config(motor_config))
    }

    /// Build the StepperDriver.
    ///
    /// # Errors
    ///
    /// Returns an error if the coils or delay are missing, or if the step
    /// interval or steps-per-revolution is zero.
    pub fn build(self) -> Result<StepperDriver<'c, IN1, IN2, IN3, IN4, DELAY>> {
        let coils = self.coils.ok_or_else(|| {
            Error::Config(ConfigError::ParseError(
                heapless::String::try_from("coils are required").unwrap(),
            ))
        })?;

        let delay = self.delay.ok_or_else(|| {
            Error::Config(ConfigError::ParseError(
                heapless::String::try_from("delay is required").unwrap(),
            ))
        })?;

        if self.step_interval_us == 0 {
            return Err(Error::Config(ConfigError::InvalidStepInterval(
                self.step_interval_us,
            )));
        }

        if self.steps_per_revolution == 0 {
            return Err(Error::Config(ConfigError::InvalidStepsPerRevolution(
                self.steps_per_revolution,
            )));
        }

        let name = self
            .name
            .unwrap_or_else(|| heapless::String::try_from("motor").unwrap());

        Ok(StepperDriver::new(
            coils,
            delay,
            self.step_interval_us,
            self.steps_per_revolution,
            name,
            self.cancel,
        ))
    }
}
