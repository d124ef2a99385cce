//! # Serial Communication Module
//!
//! Opens the serial device carrying SBUS frames to the actuator bus.
//!
//! SBUS runs over an unusual UART configuration that is fixed by the
//! protocol and not exposed in configuration:
//! - 100 000 baud
//! - 8 data bits
//! - even parity
//! - 2 stop bits

pub mod port_trait;

pub use port_trait::{SerialPortIO, TokioSerialPort};

use crate::error::{Result, SbusBridgeError};
use tokio_serial::SerialPortBuilderExt;
use tracing::{debug, info};

/// SBUS baud rate (fixed by the protocol)
pub const SBUS_BAUD_RATE: u32 = 100_000;

/// Open the SBUS serial device at `path` with the protocol line settings.
///
/// # Arguments
///
/// * `path` - Device path (e.g., "/dev/serial0")
///
/// # Returns
///
/// * `Result<TokioSerialPort>` - Opened port ready for frame writes
///
/// # Errors
///
/// Returns [`SbusBridgeError::Serial`] if the device cannot be opened —
/// a configuration-level failure the caller must surface, not retry.
pub fn open_sbus_port(path: &str) -> Result<TokioSerialPort> {
    debug!("Opening SBUS serial port: {}", path);

    let port = tokio_serial::new(path, SBUS_BAUD_RATE)
        .data_bits(tokio_serial::DataBits::Eight)
        .parity(tokio_serial::Parity::Even)
        .stop_bits(tokio_serial::StopBits::Two)
        .flow_control(tokio_serial::FlowControl::None)
        .open_native_async()
        .map_err(|e| SbusBridgeError::Serial(format!("Failed to open {}: {}", path, e)))?;

    info!("Opened SBUS device at {} ({} baud, 8E2)", path, SBUS_BAUD_RATE);
    Ok(TokioSerialPort::new(port))
}
