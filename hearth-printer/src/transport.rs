//! Serial transport for thermal printers
//!
//! Owns exactly one device handle (or none). All connection state lives
//! here; no other component may set it. Failures surface to the caller as
//! a bool or a `PrintResult` and are never fatal to the process.

use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio_serial::SerialPortBuilderExt;
use tracing::{info, instrument, warn};

use crate::encode::{CODEPAGE_WPC1252, INIT};
use crate::error::{PrintError, PrintResult};

/// Connection state of a transport
///
/// Re-evaluated on every connect attempt; `Failed` carries the reason of
/// the last error observed on the handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
    Failed(String),
}

/// Capability set of a printer transport
///
/// The job runner is generic over this trait so tests can substitute a
/// fake transport.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Attempt to open the device handle
    ///
    /// Single attempt: no internal retries. Returns true when the
    /// transport transitions to `Connected`.
    async fn connect(&mut self) -> bool;

    /// Write bytes and block until the device buffer is flushed
    ///
    /// Fails immediately with `NotConnected` when the transport is not
    /// connected. The write and the drain are one logical unit; success
    /// means the bytes reached the device.
    async fn write(&mut self, bytes: &[u8]) -> PrintResult<()>;

    /// Close the handle if open; idempotent
    async fn disconnect(&mut self);

    /// Current connection state
    fn state(&self) -> &ConnectionState;

    fn is_connected(&self) -> bool {
        matches!(self.state(), ConnectionState::Connected)
    }
}

/// Serial printer transport (USB/RS-232)
///
/// Default write timeout is 5 seconds so an unresponsive device cannot
/// stall the job queue.
pub struct SerialTransport {
    path: String,
    baud: u32,
    write_timeout: Duration,
    port: Option<tokio_serial::SerialStream>,
    state: ConnectionState,
}

impl SerialTransport {
    /// Create a transport for the given device path and baud rate
    ///
    /// The handle is not opened until `connect` is called.
    pub fn new(path: &str, baud: u32) -> Self {
        Self {
            path: path.to_string(),
            baud,
            write_timeout: Duration::from_secs(5),
            port: None,
            state: ConnectionState::Disconnected,
        }
    }

    /// Set the write-and-flush timeout budget
    pub fn with_write_timeout(mut self, timeout: Duration) -> Self {
        self.write_timeout = timeout;
        self
    }

    /// Get the device path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Get the baud rate
    pub fn baud(&self) -> u32 {
        self.baud
    }

    /// Drop the handle and park in `Failed`
    ///
    /// Device errors are observed on the handle itself, so the write path
    /// reconciles state here the moment one surfaces. Later jobs see a
    /// dead transport instead of writing into a dead handle.
    fn fail(&mut self, reason: String) {
        self.port = None;
        self.state = ConnectionState::Failed(reason);
    }
}

impl Transport for SerialTransport {
    #[instrument(skip(self), fields(path = %self.path, baud = self.baud))]
    async fn connect(&mut self) -> bool {
        if self.is_connected() {
            return true;
        }

        self.state = ConnectionState::Connecting;

        let mut port = match tokio_serial::new(self.path.as_str(), self.baud).open_native_async() {
            Ok(port) => port,
            Err(e) => {
                warn!(error = %e, "Failed to open serial port");
                self.state = ConnectionState::Failed(e.to_string());
                return false;
            }
        };

        // Reset the device and select the WPC1252 code page before any job
        // bytes go out.
        let mut init = Vec::with_capacity(INIT.len() + CODEPAGE_WPC1252.len());
        init.extend_from_slice(&INIT);
        init.extend_from_slice(&CODEPAGE_WPC1252);

        if let Err(e) = port.write_all(&init).await {
            warn!(error = %e, "Printer initialization failed");
            self.state = ConnectionState::Failed(e.to_string());
            return false;
        }

        info!("Printer connected");
        self.port = Some(port);
        self.state = ConnectionState::Connected;
        true
    }

    #[instrument(skip(self, bytes), fields(path = %self.path, data_len = bytes.len()))]
    async fn write(&mut self, bytes: &[u8]) -> PrintResult<()> {
        if !self.is_connected() {
            return Err(PrintError::NotConnected);
        }
        let port = self.port.as_mut().ok_or(PrintError::NotConnected)?;

        let flushed = tokio::time::timeout(self.write_timeout, async {
            port.write_all(bytes).await?;
            port.flush().await
        })
        .await;

        match flushed {
            Ok(Ok(())) => {
                info!(bytes = bytes.len(), "Write flushed to device");
                Ok(())
            }
            Ok(Err(e)) => {
                warn!(error = %e, "Serial write failed");
                self.fail(e.to_string());
                Err(PrintError::Io(e))
            }
            Err(_) => {
                let reason = format!("write not flushed within {:?}", self.write_timeout);
                warn!(timeout = ?self.write_timeout, "Serial write timed out");
                self.fail(reason.clone());
                Err(PrintError::Timeout(reason))
            }
        }
    }

    async fn disconnect(&mut self) {
        if self.port.take().is_some() {
            info!(path = %self.path, "Printer disconnected");
        }
        self.state = ConnectionState::Disconnected;
    }

    fn state(&self) -> &ConnectionState {
        &self.state
    }
}
