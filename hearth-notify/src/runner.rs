//! Print job runner
//!
//! Drives documents through the transport, one job at a time. Printing is
//! a best-effort notification channel: when no device is available the job
//! degrades to a readable trace instead of an error.

use hearth_printer::{Document, Transport, encode_document};
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Outcome of a submitted print job
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    /// Bytes were written and flushed to the device
    Printed,
    /// No device available; the document was traced instead
    Simulated,
    /// The device was reachable but the write failed
    Failed(String),
}

/// Serializes document submission against a single transport
///
/// The transport lock is held for the whole job, so one document's bytes
/// can never interleave with another's on the wire. Alignment and emphasis
/// toggles are stateful on the device; interleaving would corrupt both
/// tickets.
pub struct PrintJobRunner<T: Transport> {
    transport: Mutex<T>,
    simulate: bool,
}

impl<T: Transport> PrintJobRunner<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport: Mutex::new(transport),
            simulate: false,
        }
    }

    /// Force simulation regardless of hardware presence (development mode)
    pub fn with_simulation(mut self, simulate: bool) -> Self {
        self.simulate = simulate;
        self
    }

    /// Submit a document for printing
    ///
    /// Never panics. Connects on demand (one attempt); when no device is
    /// reachable the document is traced and the outcome is `Simulated`.
    pub async fn submit(&self, document: &Document) -> JobOutcome {
        let mut transport = self.transport.lock().await;

        if self.simulate {
            trace_simulated(document);
            return JobOutcome::Simulated;
        }

        if !transport.is_connected() && !transport.connect().await {
            trace_simulated(document);
            return JobOutcome::Simulated;
        }

        // Single write per document: the encoded bytes go out as one
        // contiguous unit.
        let bytes = encode_document(document);
        match transport.write(&bytes).await {
            Ok(()) => {
                info!(bytes = bytes.len(), "Print job written");
                JobOutcome::Printed
            }
            Err(e) => {
                warn!(error = %e, "Print job failed");
                JobOutcome::Failed(e.to_string())
            }
        }
    }
}

fn trace_simulated(document: &Document) {
    info!(
        "Simulated print:\n{}\n{}{}",
        "=".repeat(48),
        document.to_plain_text(),
        "=".repeat(48)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_printer::{ConnectionState, DocumentBuilder, PrintError, PrintResult};
    use std::sync::{Arc, Mutex as StdMutex};

    /// Transport double recording every write as one entry
    struct FakeTransport {
        state: ConnectionState,
        fail_connect: bool,
        fail_write: bool,
        writes: Arc<StdMutex<Vec<Vec<u8>>>>,
    }

    impl FakeTransport {
        fn new() -> (Self, Arc<StdMutex<Vec<Vec<u8>>>>) {
            let writes = Arc::new(StdMutex::new(Vec::new()));
            (
                Self {
                    state: ConnectionState::Disconnected,
                    fail_connect: false,
                    fail_write: false,
                    writes: writes.clone(),
                },
                writes,
            )
        }
    }

    impl Transport for FakeTransport {
        async fn connect(&mut self) -> bool {
            if self.fail_connect {
                self.state = ConnectionState::Failed("no device".to_string());
                return false;
            }
            self.state = ConnectionState::Connected;
            true
        }

        async fn write(&mut self, bytes: &[u8]) -> PrintResult<()> {
            if !self.is_connected() {
                return Err(PrintError::NotConnected);
            }
            self.writes.lock().unwrap().push(bytes.to_vec());
            if self.fail_write {
                self.state = ConnectionState::Failed("io".to_string());
                return Err(PrintError::Timeout("device stalled".to_string()));
            }
            Ok(())
        }

        async fn disconnect(&mut self) {
            self.state = ConnectionState::Disconnected;
        }

        fn state(&self) -> &ConnectionState {
            &self.state
        }
    }

    fn document(text: &str) -> Document {
        let mut b = DocumentBuilder::new(32);
        b.line(text).cut();
        b.build()
    }

    #[tokio::test]
    async fn test_unreachable_device_yields_simulated() {
        let (mut transport, writes) = FakeTransport::new();
        transport.fail_connect = true;
        let runner = PrintJobRunner::new(transport);

        let outcome = runner.submit(&document("hello")).await;
        assert_eq!(outcome, JobOutcome::Simulated);
        assert!(writes.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_forced_simulation_never_touches_transport() {
        let (transport, writes) = FakeTransport::new();
        let runner = PrintJobRunner::new(transport).with_simulation(true);

        let outcome = runner.submit(&document("hello")).await;
        assert_eq!(outcome, JobOutcome::Simulated);
        assert!(writes.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_connected_job_writes_encoded_document_once() {
        let (transport, writes) = FakeTransport::new();
        let runner = PrintJobRunner::new(transport);
        let doc = document("hello");

        let outcome = runner.submit(&doc).await;
        assert_eq!(outcome, JobOutcome::Printed);

        let writes = writes.lock().unwrap();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0], encode_document(&doc));
    }

    #[tokio::test]
    async fn test_write_failure_yields_failed() {
        let (mut transport, _writes) = FakeTransport::new();
        transport.fail_write = true;
        let runner = PrintJobRunner::new(transport);

        let outcome = runner.submit(&document("hello")).await;
        assert!(matches!(outcome, JobOutcome::Failed(_)));
    }

    #[tokio::test]
    async fn test_concurrent_jobs_never_interleave() {
        let (transport, writes) = FakeTransport::new();
        let runner = Arc::new(PrintJobRunner::new(transport));

        let doc_a = document("aaaaaaaaaaaaaaaa");
        let doc_b = document("bbbbbbbbbbbbbbbb");

        let a = {
            let runner = runner.clone();
            let doc = doc_a.clone();
            tokio::spawn(async move { runner.submit(&doc).await })
        };
        let b = {
            let runner = runner.clone();
            let doc = doc_b.clone();
            tokio::spawn(async move { runner.submit(&doc).await })
        };

        assert_eq!(a.await.unwrap(), JobOutcome::Printed);
        assert_eq!(b.await.unwrap(), JobOutcome::Printed);

        // Each document arrived as exactly one contiguous write.
        let writes = writes.lock().unwrap();
        assert_eq!(writes.len(), 2);
        let expected_a = encode_document(&doc_a);
        let expected_b = encode_document(&doc_b);
        assert!(writes.contains(&expected_a));
        assert!(writes.contains(&expected_b));
    }
}
