//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
///
/// ```rust,ignore
/// use halfstep_drive::load_config;
///
/// let config = load_config("motors.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = heapless::String::try_from(e.to_string().as_str()).unwrap_or_default();
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SystemConfig> {
    let config: SystemConfig = toml::from_str(content).map_err(|e| {
        let msg = heapless::String::try_from(e.message()).unwrap_or_default();
        Error::Config(ConfigError::ParseError(msg))
    })?;

    // Validate the configuration
    super::validation::validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
[motors.curtain]
name = "Curtain"
"#;

        let config = parse_config(toml).unwrap();
        let motor = config.motor("curtain").unwrap();
        // Omitted fields take the 28BYJ-48 defaults
        assert_eq!(motor.step_interval_us, 2_000);
        assert_eq!(motor.steps_per_revolution, 4_096);
    }

    #[test]
    fn test_parse_explicit_config() {
        let toml = r#"
[motors.turntable]
name = "Turntable"
step_interval_us = 1500
steps_per_revolution = 2048
"#;

        let config = parse_config(toml).unwrap();
        let motor = config.motor("turntable").unwrap();
        assert_eq!(motor.step_interval_us, 1_500);
        assert_eq!(motor.steps_per_revolution, 2_048);
    }

    #[test]
    fn test_parse_rejects_zero_interval() {
        let toml = r#"
[motors.bad]
name = "Bad"
step_interval_us = 0
"#;

        assert!(parse_config(toml).is_err());
    }
}
