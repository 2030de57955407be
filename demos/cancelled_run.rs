//! Cancellation example.
//!
//! A second thread aborts a long rotation partway through. The driver
//! forces every output low before the error surfaces, and the process
//! exits non-zero — the motor is never left energized mid-cycle.
//!
//! On real hardware the canceller is typically a ctrl-c or signal handler
//! writing to the same static token.

use std::thread;
use std::time::Duration;

use halfstep_drive::{CancelToken, CoilOutputs, Degrees, DriveError, Error, StepperDriver};

static CANCEL: CancelToken = CancelToken::new();

struct ThreadDelay;

impl embedded_hal::delay::DelayNs for ThreadDelay {
    fn delay_ns(&mut self, ns: u32) {
        thread::sleep(Duration::from_nanos(ns as u64));
    }
}

struct MockPin;

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

fn main() {
    println!("=== Cancelled Run Example ===\n");

    let coils = CoilOutputs::new(MockPin, MockPin, MockPin, MockPin);
    let mut motor = StepperDriver::builder()
        .coils(coils)
        .delay(ThreadDelay)
        .name("demo_motor")
        .step_interval_us(500)
        .cancel_token(&CANCEL)
        .build()
        .expect("Failed to build driver");

    thread::spawn(|| {
        thread::sleep(Duration::from_millis(100));
        println!("[canceller] requesting abort");
        CANCEL.cancel();
    });

    println!("Rotating a full revolution (~2 s at this interval)...");
    match motor.rotate(Degrees(360.0)) {
        Ok(steps) => {
            println!("Unexpectedly completed {} steps", steps.value());
        }
        Err(Error::Drive(DriveError::Interrupted)) => {
            println!(
                "Rotation interrupted at phase {:?}; outputs are off",
                motor.phase()
            );
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Rotation failed: {}", e);
            std::process::exit(1);
        }
    }
}
