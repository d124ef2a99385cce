//! # SBUS Protocol Constants and Types
//!
//! Core wire-format definitions for the SBUS serial protocol.
//!
//! An SBUS frame is exactly 25 bytes:
//!
//! ```text
//! Byte 0      Start marker (0x0F)
//! Bytes 1-22  16 channels x 11 bits, packed LSB-first
//! Byte 23     Flags (failsafe, frame-lost, digital channels 17/18)
//! Byte 24     End marker (0x00)
//! ```

/// SBUS frame start marker (always 0x0F)
pub const SBUS_START_BYTE: u8 = 0x0F;

/// SBUS frame end marker (always 0x00)
pub const SBUS_END_BYTE: u8 = 0x00;

/// Total SBUS frame size in bytes
pub const SBUS_FRAME_SIZE: usize = 25;

/// Channel payload size (22 bytes for 16 channels × 11 bits)
pub const SBUS_PAYLOAD_SIZE: usize = 22;

/// Number of RC channels carried per frame
pub const SBUS_NUM_CHANNELS: usize = 16;

/// Channel value range (11-bit: 0-2047)
pub const SBUS_CHANNEL_VALUE_MIN: u16 = 0;
pub const SBUS_CHANNEL_VALUE_MAX: u16 = 2047;

/// Channel value for a centered (zero) input
pub const SBUS_CHANNEL_VALUE_NEUTRAL: u16 = 1024;

/// Byte offset of the channel payload within a frame
pub const SBUS_PAYLOAD_OFFSET: usize = 1;

/// Byte offset of the flags byte within a frame
pub const SBUS_FLAGS_OFFSET: usize = 23;

/// Byte offset of the end marker within a frame
pub const SBUS_END_OFFSET: usize = 24;

/// Flags byte: digital channel 17 state
pub const SBUS_FLAG_CHANNEL_17: u8 = 0x01;

/// Flags byte: digital channel 18 state
pub const SBUS_FLAG_CHANNEL_18: u8 = 0x02;

/// Flags byte: frame lost (receiver-side signal quality indicator)
pub const SBUS_FLAG_FRAME_LOST: u8 = 0x04;

/// Flags byte: failsafe activated
pub const SBUS_FLAG_FAILSAFE: u8 = 0x08;

/// Ordered set of 16 channel values (11-bit each)
///
/// Positions 0-3 carry roll, pitch, yaw and throttle in that fixed order;
/// positions 4-15 are held at [`SBUS_CHANNEL_VALUE_NEUTRAL`] until a future
/// axis binding assigns them. The position is the wire position.
pub type SbusChannels = [u16; SBUS_NUM_CHANNELS];

/// Channel indices for the named control axes
pub mod channels {
    /// Roll axis
    pub const ROLL: usize = 0;
    /// Pitch axis
    pub const PITCH: usize = 1;
    /// Yaw axis
    pub const YAW: usize = 2;
    /// Throttle axis
    pub const THROTTLE: usize = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_markers() {
        assert_eq!(SBUS_START_BYTE, 0x0F);
        assert_eq!(SBUS_END_BYTE, 0x00);
    }

    #[test]
    fn test_frame_geometry() {
        assert_eq!(SBUS_FRAME_SIZE, 25);
        assert_eq!(SBUS_PAYLOAD_SIZE, 22);
        assert_eq!(SBUS_NUM_CHANNELS, 16);

        // 16 channels x 11 bits fill the payload exactly
        assert_eq!(SBUS_NUM_CHANNELS * 11, SBUS_PAYLOAD_SIZE * 8);

        // Start + payload + flags + end account for the whole frame
        assert_eq!(SBUS_PAYLOAD_OFFSET + SBUS_PAYLOAD_SIZE, SBUS_FLAGS_OFFSET);
        assert_eq!(SBUS_END_OFFSET, SBUS_FRAME_SIZE - 1);
    }

    #[test]
    fn test_channel_value_ranges() {
        assert_eq!(SBUS_CHANNEL_VALUE_MIN, 0);
        assert_eq!(SBUS_CHANNEL_VALUE_MAX, 2047);
        assert_eq!(SBUS_CHANNEL_VALUE_NEUTRAL, 1024);
    }

    #[test]
    fn test_flag_bits_are_distinct() {
        let flags = [
            SBUS_FLAG_CHANNEL_17,
            SBUS_FLAG_CHANNEL_18,
            SBUS_FLAG_FRAME_LOST,
            SBUS_FLAG_FAILSAFE,
        ];
        for (i, &a) in flags.iter().enumerate() {
            assert_eq!(a.count_ones(), 1);
            for &b in &flags[i + 1..] {
                assert_eq!(a & b, 0);
            }
        }
    }

    #[test]
    fn test_axis_wire_positions() {
        assert_eq!(channels::ROLL, 0);
        assert_eq!(channels::PITCH, 1);
        assert_eq!(channels::YAW, 2);
        assert_eq!(channels::THROTTLE, 3);
    }
}
