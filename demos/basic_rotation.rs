//! Basic rotation example.
//!
//! Demonstrates building a driver around four outputs and issuing half a
//! revolution in each direction, mirroring the classic 28BYJ-48 smoke test.
//!
//! This example uses hand-rolled mocks so it runs without real hardware;
//! on a board, the four pins come from your HAL's GPIO API.

use halfstep_drive::{CoilOutputs, Degrees, StepperDriver};

/// Mock delay provider for demonstration.
struct MockDelay;

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        // In real code, this would use a hardware timer
        std::thread::sleep(std::time::Duration::from_nanos(ns as u64));
    }
}

/// Mock output pin for demonstration.
struct MockPin {
    state: bool,
}

impl MockPin {
    fn new() -> Self {
        Self { state: false }
    }
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.state = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.state = false;
        Ok(())
    }
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

fn main() {
    println!("=== Basic Rotation Example ===\n");

    let coils = CoilOutputs::new(
        MockPin::new(),
        MockPin::new(),
        MockPin::new(),
        MockPin::new(),
    );

    let mut motor = StepperDriver::builder()
        .coils(coils)
        .delay(MockDelay)
        .name("demo_motor")
        .step_interval_us(100) // fast interval so the demo finishes quickly
        .build()
        .expect("Failed to build driver");

    println!("Motor created: {}", motor.name());
    println!(
        "Timing: {} us/step, {} steps/rev",
        motor.step_interval_us(),
        motor.steps_per_revolution()
    );
    println!("Initial phase: {:?}", motor.phase());

    println!("\nRotating 180 degrees clockwise...");
    let steps = motor.rotate(Degrees(180.0)).expect("rotation failed");
    println!("Issued {} steps, phase now {:?}", steps.value(), motor.phase());

    println!("Rotating 180 degrees back...");
    let steps = motor.rotate(Degrees(-180.0)).expect("rotation failed");
    println!("Issued {} steps, phase now {:?}", steps.value(), motor.phase());

    motor.stop();
    println!("\nOutputs released. Done.");
}
