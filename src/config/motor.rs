//! Motor configuration from TOML.

use heapless::String;
use serde::Deserialize;

use super::units::{Degrees, Steps};

/// Complete motor configuration from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct MotorConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Time each phase is held before the next transition, in microseconds.
    ///
    /// Values below the motor's mechanical limit cause missed steps; picking
    /// a safe interval is the caller's responsibility.
    #[serde(default = "default_step_interval_us")]
    pub step_interval_us: u32,

    /// Phase transitions per output shaft revolution (4096 for a half-stepped
    /// 28BYJ-48 with its internal gearbox).
    #[serde(default = "default_steps_per_revolution")]
    pub steps_per_revolution: u32,
}

fn default_step_interval_us() -> u32 {
    2_000
}

fn default_steps_per_revolution() -> u32 {
    4_096
}

impl MotorConfig {
    /// Steps this motor needs to traverse the given angle.
    pub fn steps_for(&self, angle: Degrees) -> Steps {
        angle.to_steps(self.steps_per_revolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_for_quarter_turn() {
        let config = MotorConfig {
            name: String::try_from("test").unwrap(),
            step_interval_us: 2_000,
            steps_per_revolution: 4_096,
        };

        assert_eq!(config.steps_for(Degrees(90.0)), Steps(1024));
    }
}
