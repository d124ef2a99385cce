//! # SBUS Frame Encoder
//!
//! Encodes RC channels into 25-byte SBUS frames.

use super::protocol::*;

/// Encode RC channels into a complete SBUS frame
///
/// # Arguments
///
/// * `channels` - Array of 16 channel values (11-bit: 0-2047)
/// * `flags` - Flags byte (failsafe / frame-lost bits; 0 for normal operation)
///
/// # Returns
///
/// * `[u8; 25]` - Complete SBUS frame (start + 22-byte payload + flags + end)
///
/// Encoding is deterministic: identical input always yields an identical
/// frame.
///
/// # Examples
///
/// ```
/// use sbus_bridge::sbus::encoder::encode_sbus_frame;
/// use sbus_bridge::sbus::protocol::SBUS_CHANNEL_VALUE_NEUTRAL;
///
/// let channels = [SBUS_CHANNEL_VALUE_NEUTRAL; 16];
/// let frame = encode_sbus_frame(&channels, 0);
/// assert_eq!(frame.len(), 25);
/// assert_eq!(frame[0], 0x0F);
/// assert_eq!(frame[24], 0x00);
/// ```
#[must_use]
pub fn encode_sbus_frame(channels: &SbusChannels, flags: u8) -> [u8; SBUS_FRAME_SIZE] {
    let payload = encode_channel_payload(channels);

    let mut frame = [0u8; SBUS_FRAME_SIZE];
    frame[0] = SBUS_START_BYTE;
    frame[SBUS_PAYLOAD_OFFSET..SBUS_PAYLOAD_OFFSET + SBUS_PAYLOAD_SIZE].copy_from_slice(&payload);
    frame[SBUS_FLAGS_OFFSET] = flags;
    frame[SBUS_END_OFFSET] = SBUS_END_BYTE;

    frame
}

/// Encode RC channels into the 22-byte channel payload
///
/// Packs 16 channels (11 bits each) into 22 bytes as a continuous bitstream,
/// LSB first: channel *k* occupies bitstream bits `[11k, 11k+11)`, and byte
/// *i* of the payload holds bitstream bits `[8i, 8i+8)`.
///
/// Each value is masked to 11 bits before packing, so an out-of-range value
/// can never spill into a neighboring channel's bits.
///
/// # Arguments
///
/// * `channels` - Array of 16 channel values (11-bit: 0-2047)
///
/// # Returns
///
/// * `[u8; 22]` - Packed channel payload
pub fn encode_channel_payload(channels: &SbusChannels) -> [u8; SBUS_PAYLOAD_SIZE] {
    let mut payload = [0u8; SBUS_PAYLOAD_SIZE];
    let mut bit_index = 0;

    for &channel in channels.iter() {
        let value = channel & 0x7FF;

        for bit in 0..11 {
            if (value >> bit) & 1 == 1 {
                payload[bit_index / 8] |= 1 << (bit_index % 8);
            }
            bit_index += 1;
        }
    }

    payload
}
