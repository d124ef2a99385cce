//! # Transmission Scheduler
//!
//! Periodic encode-and-write loop driving the actuator bus.
//!
//! The transmitter owns the serial port exclusively and is the only
//! component that runs continuously. Every tick it snapshots the
//! [`ChannelStore`], encodes an SBUS frame with flags 0, and writes it to
//! the port. The configured period is the target spacing between tick
//! starts: a slow write delays the next tick rather than causing a burst of
//! catch-up frames, and ticks never overlap.
//!
//! ## Lifecycle
//!
//! Created stopped. [`start`](SbusTransmitter::start) opens the serial
//! device and spawns the tick task; [`stop`](SbusTransmitter::stop) signals
//! shutdown, waits for any in-flight tick to finish, and releases the
//! device. Both are idempotent, and `stop` may be called from a different
//! task than the one that called `start`.
//!
//! ## Failure semantics
//!
//! A failed write drops that frame and the loop continues; the cadence
//! contract wins over delivery of any single frame. Only an open failure at
//! `start` is surfaced to the caller as an error.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::channels::ChannelStore;
use crate::config::Config;
use crate::error::{Result, SbusBridgeError};
use crate::sbus::encoder::encode_sbus_frame;
use crate::serial::{open_sbus_port, SerialPortIO};

/// Number of frames between throughput log messages
const LOG_INTERVAL_FRAMES: u64 = 1000;

/// Handle to the running tick task
struct TxTask {
    shutdown: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

/// Periodic SBUS frame transmitter
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use sbus_bridge::channels::ChannelStore;
/// use sbus_bridge::config::Config;
/// use sbus_bridge::transmitter::SbusTransmitter;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let store = Arc::new(ChannelStore::new());
///     let mut tx = SbusTransmitter::new(Config::default(), Arc::clone(&store));
///
///     tx.start()?;
///     store.update([("throttle", 0.5)]);
///     // ... frames stream at the configured rate ...
///     tx.stop().await?;
///     Ok(())
/// }
/// ```
pub struct SbusTransmitter {
    config: Config,
    channels: Arc<ChannelStore>,
    task: Option<TxTask>,
}

impl std::fmt::Debug for SbusTransmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SbusTransmitter")
            .field("port", &self.config.serial.port)
            .field("update_rate_ms", &self.config.transmitter.update_rate_ms)
            .field("running", &self.task.is_some())
            .finish_non_exhaustive()
    }
}

impl SbusTransmitter {
    /// Creates a transmitter in the stopped state.
    ///
    /// The serial device is not touched until [`start`](Self::start).
    #[must_use]
    pub fn new(config: Config, channels: Arc<ChannelStore>) -> Self {
        Self {
            config,
            channels,
            task: None,
        }
    }

    /// Returns true while the tick task is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// Opens the serial device and starts the periodic tick task.
    ///
    /// A no-op if already running. Must be called from within a tokio
    /// runtime.
    ///
    /// # Errors
    ///
    /// Returns [`SbusBridgeError::Serial`] if the device cannot be opened;
    /// nothing is spawned in that case.
    pub fn start(&mut self) -> Result<()> {
        if self.task.is_some() {
            debug!("start() while already running, ignoring");
            return Ok(());
        }

        let port = open_sbus_port(&self.config.serial.port)?;
        self.spawn_tick_task(Box::new(port));
        Ok(())
    }

    /// Starts the periodic tick task over an already-open port.
    ///
    /// Used by tests to drive the scheduler against a mock port; `start`
    /// goes through here after opening the real device. A no-op if already
    /// running (the given port is dropped).
    pub fn start_with_port(&mut self, port: Box<dyn SerialPortIO>) {
        if self.task.is_some() {
            debug!("start_with_port() while already running, ignoring");
            return;
        }
        self.spawn_tick_task(port);
    }

    /// Stops the tick task and releases the serial device.
    ///
    /// A no-op if already stopped. Blocks the caller until the in-flight
    /// tick (if any) has completed and the task has exited; no frame is
    /// written after this returns. Safe to call from any task.
    ///
    /// # Errors
    ///
    /// Returns [`SbusBridgeError::Task`] if the tick task panicked; the
    /// device is released either way.
    pub async fn stop(&mut self) -> Result<()> {
        let Some(task) = self.task.take() else {
            debug!("stop() while already stopped, ignoring");
            return Ok(());
        };

        // The task drops the port when it exits, closing the device.
        let _ = task.shutdown.send(true);
        task.handle
            .await
            .map_err(|e| SbusBridgeError::Task(e.to_string()))?;

        info!("Transmitter stopped");
        Ok(())
    }

    fn spawn_tick_task(&mut self, mut port: Box<dyn SerialPortIO>) {
        let channels = Arc::clone(&self.channels);
        let period = Duration::from_millis(self.config.transmitter.update_rate_ms);
        let (shutdown, mut shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            // A late tick shifts the schedule instead of triggering catch-up
            // frames.
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            let mut frames_sent: u64 = 0;

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let frame = encode_sbus_frame(&channels.snapshot(), 0);

                        match port.send_frame(&frame).await {
                            Ok(()) => {
                                frames_sent += 1;
                                if frames_sent % LOG_INTERVAL_FRAMES == 0 {
                                    info!("Sent {} SBUS frames", frames_sent);
                                }
                            }
                            // Recoverable: drop this frame, keep the cadence.
                            Err(e) => warn!("Frame write failed, dropping frame: {}", e),
                        }
                    }
                    _ = shutdown_rx.changed() => {
                        debug!("Tick task shutting down after {} frames", frames_sent);
                        break;
                    }
                }
            }
        });

        info!(
            "Transmitter started ({} ms period)",
            self.config.transmitter.update_rate_ms
        );
        self.task = Some(TxTask { shutdown, handle });
    }
}
