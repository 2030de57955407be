//! Configuration-driven example.
//!
//! Parses a TOML motor definition, validates it, and builds a driver from
//! the named entry. With the `std` feature, `load_config("motors.toml")`
//! does the same from a file.

use halfstep_drive::{parse_config, CoilOutputs, Degrees, StepperDriverBuilder};

struct MockDelay;

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(std::time::Duration::from_nanos(ns as u64));
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

const CONFIG_TOML: &str = r#"
[motors.curtain]
name = "Curtain"
step_interval_us = 100
steps_per_revolution = 4096

[motors.turntable]
name = "Turntable"
step_interval_us = 150
steps_per_revolution = 2048
"#;

fn main() {
    println!("=== Configuration-Driven Example ===\n");

    let config = parse_config(CONFIG_TOML).expect("Failed to parse config");
    println!(
        "Loaded {} motor definition(s): {}",
        config.motor_names().count(),
        config.motor_names().collect::<Vec<_>>().join(", ")
    );

    let coils = CoilOutputs::new(MockPin, MockPin, MockPin, MockPin);
    let mut motor = StepperDriverBuilder::new()
        .coils(coils)
        .delay(MockDelay)
        .from_config(&config, "turntable")
        .expect("Motor not found in config")
        .build()
        .expect("Failed to build driver");

    println!(
        "\nBuilt '{}': {} us/step, {} steps/rev",
        motor.name(),
        motor.step_interval_us(),
        motor.steps_per_revolution()
    );

    println!("Rotating a quarter turn...");
    let steps = motor.rotate(Degrees(90.0)).expect("rotation failed");
    println!("Issued {} steps, phase now {:?}", steps.value(), motor.phase());

    motor.stop();
    println!("\nDone.");
}
