//! # SBUS Bridge Library
//!
//! Stream normalized control-axis values to an SBUS actuator bus.
//!
//! This library converts roll/pitch/yaw/throttle inputs in [-1.0, 1.0] into
//! 25-byte SBUS frames and transmits them over a serial device at a fixed
//! cadence. Input capture (gamepad, network) is the caller's concern: feed
//! axis values into the [`channels::ChannelStore`] from any task and the
//! running [`transmitter::SbusTransmitter`] picks them up on its next tick.

pub mod config;
pub mod error;
pub mod sbus;
pub mod channels;
pub mod serial;
pub mod transmitter;
