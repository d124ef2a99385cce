//! # Configuration Module
//!
//! Handles loading and validating configuration from TOML files.
//!
//! The SBUS line settings (100 000 baud, 8 data bits, even parity, 2 stop
//! bits) are fixed by the protocol and are not configurable; only the device
//! path and the frame cadence are.

use serde::Deserialize;
use serde::de::Error;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub serial: SerialConfig,

    #[serde(default)]
    pub transmitter: TransmitterConfig,
}

/// Serial port configuration
#[derive(Debug, Deserialize, Clone)]
pub struct SerialConfig {
    #[serde(default = "default_serial_port")]
    pub port: String,
}

/// Transmission scheduler configuration
#[derive(Debug, Deserialize, Clone)]
pub struct TransmitterConfig {
    /// Target spacing between frame transmissions, in milliseconds.
    #[serde(default = "default_update_rate_ms")]
    pub update_rate_ms: u64,
}

// Default value functions
fn default_serial_port() -> String { "/dev/serial0".to_string() }
fn default_update_rate_ms() -> u64 { 10 }

impl Default for SerialConfig {
    fn default() -> Self {
        Self { port: default_serial_port() }
    }
}

impl Default for TransmitterConfig {
    fn default() -> Self {
        Self { update_rate_ms: default_update_rate_ms() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            serial: SerialConfig::default(),
            transmitter: TransmitterConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    ///
    /// * `Result<Config>` - Loaded and validated configuration
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - TOML parsing fails
    /// - Validation fails
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use sbus_bridge::config::Config;
    ///
    /// let config = Config::load("config/default.toml")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns error if any configuration value is out of valid range
    pub fn validate(&self) -> Result<()> {
        if self.serial.port.is_empty() {
            return Err(crate::error::SbusBridgeError::Config(
                toml::de::Error::custom("serial port cannot be empty")
            ));
        }

        if self.transmitter.update_rate_ms == 0 || self.transmitter.update_rate_ms > 1000 {
            return Err(crate::error::SbusBridgeError::Config(
                toml::de::Error::custom("update_rate_ms must be between 1 and 1000")
            ));
        }

        Ok(())
    }
}
