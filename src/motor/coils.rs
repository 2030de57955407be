//! The four coil outputs of a 4-phase motor.

use embedded_hal::digital::OutputPin;

use crate::commutation::PhasePattern;

/// Exclusive owner of the four digital outputs wired to the motor windings.
///
/// Holding the outputs by value means a driver can never share them with
/// another writer, and the exactly-four requirement is part of the type
/// rather than a runtime check. The driver only ever writes levels; output
/// state is never read back.
pub struct CoilOutputs<IN1, IN2, IN3, IN4>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
{
    in1: IN1,
    in2: IN2,
    in3: IN3,
    in4: IN4,
}

impl<IN1, IN2, IN3, IN4> CoilOutputs<IN1, IN2, IN3, IN4>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
{
    /// Take ownership of the four outputs, in winding order IN1..IN4.
    pub fn new(in1: IN1, in2: IN2, in3: IN3, in4: IN4) -> Self {
        Self { in1, in2, in3, in4 }
    }

    /// Write one commutation pattern, output\[i\] <- pattern\[i\].
    ///
    /// The first failing pin aborts the write; remaining outputs keep their
    /// previous level.
    pub(crate) fn write(&mut self, pattern: PhasePattern) -> core::result::Result<(), ()> {
        Self::set(&mut self.in1, pattern[0])?;
        Self::set(&mut self.in2, pattern[1])?;
        Self::set(&mut self.in3, pattern[2])?;
        Self::set(&mut self.in4, pattern[3])?;
        Ok(())
    }

    /// Drive every output low.
    ///
    /// Attempts all four pins even if one fails; failures are discarded.
    pub(crate) fn all_off(&mut self) {
        let _ = self.in1.set_low();
        let _ = self.in2.set_low();
        let _ = self.in3.set_low();
        let _ = self.in4.set_low();
    }

    /// Release the outputs back to the caller.
    pub fn release(self) -> (IN1, IN2, IN3, IN4) {
        (self.in1, self.in2, self.in3, self.in4)
    }

    fn set<P: OutputPin>(pin: &mut P, level: bool) -> core::result::Result<(), ()> {
        if level {
            pin.set_high().map_err(|_| ())
        } else {
            pin.set_low().map_err(|_| ())
        }
    }
}
