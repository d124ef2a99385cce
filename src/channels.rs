//! # Channel State Store
//!
//! Shared store of the named control-axis values feeding the transmitter.
//!
//! Input sources (gamepad handlers, network clients) call [`ChannelStore::update`]
//! at arbitrary times from any number of tasks or threads; the transmission
//! scheduler calls [`ChannelStore::snapshot`] once per tick. A single mutex
//! guards the axis state, so every `update` is applied atomically — a
//! snapshot can never observe half of one update mixed with stale fields
//! from another.
//!
//! ## Usage
//!
//! ```
//! use sbus_bridge::channels::ChannelStore;
//!
//! let store = ChannelStore::new();
//! store.update([("throttle", 0.5), ("yaw", -0.25)]);
//!
//! let channels = store.snapshot();
//! assert_eq!(channels[3], 1535); // throttle, calibrated
//! assert_eq!(channels[0], 1024); // roll untouched, neutral
//! ```

use std::sync::Mutex;

use crate::sbus::calibration::calibrate;
use crate::sbus::protocol::{channels, SbusChannels, SBUS_CHANNEL_VALUE_NEUTRAL, SBUS_NUM_CHANNELS};

/// Axis name for roll (wire channel 0)
pub const AXIS_ROLL: &str = "roll";

/// Axis name for pitch (wire channel 1)
pub const AXIS_PITCH: &str = "pitch";

/// Axis name for yaw (wire channel 2)
pub const AXIS_YAW: &str = "yaw";

/// Axis name for throttle (wire channel 3)
pub const AXIS_THROTTLE: &str = "throttle";

/// Normalized values of the four named axes.
#[derive(Debug, Clone, Copy, PartialEq)]
struct AxisState {
    roll: f32,
    pitch: f32,
    yaw: f32,
    throttle: f32,
}

impl Default for AxisState {
    fn default() -> Self {
        Self {
            roll: 0.0,
            pitch: 0.0,
            yaw: 0.0,
            throttle: 0.0,
        }
    }
}

/// Concurrently-updatable store of named control-axis values.
///
/// Created with all axes at neutral (0.0). Values are stored as given;
/// clamping to [-1.0, 1.0] happens during calibration at snapshot time.
#[derive(Debug, Default)]
pub struct ChannelStore {
    state: Mutex<AxisState>,
}

impl ChannelStore {
    /// Creates a store with all axes at neutral (0.0).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges the given axis values into the current state.
    ///
    /// Axes not named in `partial` keep their current value. Unknown axis
    /// names are silently ignored, leaving room for future axis bindings
    /// without breaking existing callers.
    ///
    /// All pairs of a single call are applied under one lock acquisition,
    /// so a concurrent [`snapshot`](Self::snapshot) sees either none or all
    /// of them.
    ///
    /// # Arguments
    ///
    /// * `partial` - `(axis_name, value)` pairs; values are normalized inputs
    ///   in [-1.0, 1.0] (out-of-range values are clamped at calibration time)
    ///
    /// # Examples
    ///
    /// ```
    /// use sbus_bridge::channels::ChannelStore;
    ///
    /// let store = ChannelStore::new();
    /// store.update([("roll", 0.1), ("pitch", -0.1)]);
    /// store.update([("rudder_trim", 1.0)]); // unknown axis, ignored
    /// ```
    pub fn update<I, S>(&self, partial: I)
    where
        I: IntoIterator<Item = (S, f32)>,
        S: AsRef<str>,
    {
        let mut state = self.lock();

        for (name, value) in partial {
            match name.as_ref() {
                AXIS_ROLL => state.roll = value,
                AXIS_PITCH => state.pitch = value,
                AXIS_YAW => state.yaw = value,
                AXIS_THROTTLE => state.throttle = value,
                _ => {}
            }
        }
    }

    /// Reads the current axis values as a calibrated, ordered channel set.
    ///
    /// The four named axes land on wire channels 0-3 (roll, pitch, yaw,
    /// throttle); channels 4-15 are filled with the neutral value.
    ///
    /// The read is consistent: all four axes are observed under a single
    /// lock acquisition.
    #[must_use]
    pub fn snapshot(&self) -> SbusChannels {
        let state = *self.lock();

        let mut out = [SBUS_CHANNEL_VALUE_NEUTRAL; SBUS_NUM_CHANNELS];
        out[channels::ROLL] = calibrate(state.roll);
        out[channels::PITCH] = calibrate(state.pitch);
        out[channels::YAW] = calibrate(state.yaw);
        out[channels::THROTTLE] = calibrate(state.throttle);
        out
    }

    /// Acquires the state lock, recovering from a poisoned mutex.
    ///
    /// Axis state stays valid even if a panicking thread held the lock,
    /// so the poison flag is ignored rather than propagated.
    fn lock(&self) -> std::sync::MutexGuard<'_, AxisState> {
        self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
