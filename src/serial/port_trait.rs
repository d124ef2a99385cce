//! Trait abstraction over the serial device so the transmitter can be
//! exercised against a recording mock.

use async_trait::async_trait;
use std::io;

/// Byte-oriented, write-only view of the actuator bus transport
#[async_trait]
pub trait SerialPortIO: Send {
    /// Write all bytes to the port
    async fn write_all(&mut self, data: &[u8]) -> io::Result<()>;

    /// Flush the output buffer
    async fn flush(&mut self) -> io::Result<()>;

    /// Write a frame and push it onto the wire in one call
    async fn send_frame(&mut self, frame: &[u8]) -> io::Result<()> {
        self.write_all(frame).await?;
        self.flush().await
    }
}

/// Wrapper around tokio_serial::SerialStream that implements SerialPortIO
pub struct TokioSerialPort {
    port: tokio_serial::SerialStream,
}

impl TokioSerialPort {
    pub fn new(port: tokio_serial::SerialStream) -> Self {
        Self { port }
    }
}

#[async_trait]
impl SerialPortIO for TokioSerialPort {
    async fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        use tokio::io::AsyncWriteExt;
        self.port.write_all(data).await
    }

    async fn flush(&mut self) -> io::Result<()> {
        use tokio::io::AsyncWriteExt;
        self.port.flush().await
    }
}

#[cfg(test)]
pub mod mocks {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Recording serial port for transmitter tests.
    ///
    /// Clones share the same backing storage, so a test can keep one handle
    /// while the transmitter owns the other.
    #[derive(Clone)]
    pub struct MockSerialPort {
        frames: Arc<Mutex<Vec<Vec<u8>>>>,
        fail_writes: Arc<Mutex<Option<io::ErrorKind>>>,
        fail_flushes: Arc<Mutex<Option<io::ErrorKind>>>,
    }

    impl MockSerialPort {
        pub fn new() -> Self {
            Self {
                frames: Arc::new(Mutex::new(Vec::new())),
                fail_writes: Arc::new(Mutex::new(None)),
                fail_flushes: Arc::new(Mutex::new(None)),
            }
        }

        /// All frames written so far, in order
        pub fn frames(&self) -> Vec<Vec<u8>> {
            self.frames.lock().unwrap().clone()
        }

        pub fn frame_count(&self) -> usize {
            self.frames.lock().unwrap().len()
        }

        /// Make every subsequent write fail until cleared
        pub fn fail_writes(&self, error: io::ErrorKind) {
            *self.fail_writes.lock().unwrap() = Some(error);
        }

        pub fn recover_writes(&self) {
            *self.fail_writes.lock().unwrap() = None;
        }

        /// Make every subsequent flush fail until cleared
        pub fn fail_flushes(&self, error: io::ErrorKind) {
            *self.fail_flushes.lock().unwrap() = Some(error);
        }
    }

    #[async_trait]
    impl SerialPortIO for MockSerialPort {
        async fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
            if let Some(error) = *self.fail_writes.lock().unwrap() {
                return Err(io::Error::new(error, "mock write error"));
            }
            self.frames.lock().unwrap().push(data.to_vec());
            Ok(())
        }

        async fn flush(&mut self) -> io::Result<()> {
            if let Some(error) = *self.fail_flushes.lock().unwrap() {
                return Err(io::Error::new(error, "mock flush error"));
            }
            Ok(())
        }
    }
}
