//! # SBUS Protocol Module
//!
//! Implementation of the SBUS serial protocol transmit path.
//!
//! This module handles:
//! - Calibration of normalized control inputs to 11-bit channel values
//! - RC channel frame encoding (16 channels, 11-bit resolution, 25-byte frame)
//! - Protocol constants and the flags-byte bit field

pub mod protocol;
pub mod calibration;
pub mod encoder;
