//! Runtime configuration for the notification pipeline
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | PRINTER_PORT | /dev/ttyUSB0 | Serial device path |
//! | PRINTER_BAUD | 9600 | Serial baud rate |
//! | PRINTER_WIDTH | 32 | Paper width in characters |
//! | PRINTER_WRITE_TIMEOUT_MS | 5000 | Write-and-flush budget |
//! | ENVIRONMENT | development | development \| staging \| production |
//!
//! # Example
//!
//! ```ignore
//! PRINTER_PORT=/dev/ttyS0 ENVIRONMENT=production cargo run
//! ```

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    /// Serial device path for the thermal printer
    pub printer_port: String,
    /// Serial baud rate
    pub printer_baud: u32,
    /// Paper width in characters (32 for 58mm, 48 for 80mm)
    pub printer_width: usize,
    /// Budget for a single write-and-flush
    pub write_timeout: Duration,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load .env, then read configuration from the environment
    pub fn load() -> Self {
        dotenv::dotenv().ok();
        Self::from_env()
    }

    /// Read configuration from environment variables
    ///
    /// Unset variables fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            printer_port: std::env::var("PRINTER_PORT")
                .unwrap_or_else(|_| "/dev/ttyUSB0".into()),
            printer_baud: std::env::var("PRINTER_BAUD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(9600),
            printer_width: std::env::var("PRINTER_WIDTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(32),
            write_timeout: Duration::from_millis(
                std::env::var("PRINTER_WRITE_TIMEOUT_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(5000),
            ),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Whether this is a production deployment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Whether this is a development deployment
    ///
    /// Development mode forces print simulation regardless of hardware
    /// presence.
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Candidate serial device paths for the current platform
///
/// Purely advisory, for setup diagnostics and error messages.
pub fn suggested_ports() -> &'static [&'static str] {
    if cfg!(windows) {
        &["COM1", "COM2", "COM3", "COM4", "COM5"]
    } else if cfg!(target_os = "macos") {
        &["/dev/cu.usbserial", "/dev/cu.usbmodem", "/dev/tty.usbserial"]
    } else {
        &["/dev/ttyUSB0", "/dev/ttyUSB1", "/dev/ttyS0", "/dev/ttyS1"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggested_ports_not_empty() {
        assert!(!suggested_ports().is_empty());
    }
}

