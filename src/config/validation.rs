//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Validate a system configuration.
///
/// Checks:
/// - Step intervals are positive
/// - Steps-per-revolution values are positive
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    for (name, motor) in config.motors.iter() {
        validate_motor(name.as_str(), motor)?;
    }

    Ok(())
}

fn validate_motor(_name: &str, config: &super::MotorConfig) -> Result<()> {
    if config.step_interval_us == 0 {
        return Err(Error::Config(ConfigError::InvalidStepInterval(
            config.step_interval_us,
        )));
    }

    if config.steps_per_revolution == 0 {
        return Err(Error::Config(ConfigError::InvalidStepsPerRevolution(
            config.steps_per_revolution,
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MotorConfig;

    fn make_config(step_interval_us: u32, steps_per_revolution: u32) -> MotorConfig {
        MotorConfig {
            name: heapless::String::try_from("test").unwrap(),
            step_interval_us,
            steps_per_revolution,
        }
    }

    #[test]
    fn test_zero_interval_rejected() {
        let result = validate_motor("test", &make_config(0, 4_096));
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidStepInterval(0)))
        ));
    }

    #[test]
    fn test_zero_steps_per_revolution_rejected() {
        let result = validate_motor("test", &make_config(2_000, 0));
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidStepsPerRevolution(0)))
        ));
    }

    #[test]
    fn test_defaults_pass() {
        assert!(validate_motor("test", &make_config(2_000, 4_096)).is_ok());
    }
}
