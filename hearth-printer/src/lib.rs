//! # hearth-printer
//!
//! ESC/POS thermal printer library - low-level printing capabilities only.
//!
//! ## Scope
//!
//! This crate handles HOW to print:
//! - Directive model for print documents
//! - ESC/POS command encoding
//! - Windows-1252 code page conversion for Latin text
//! - Serial transport (USB/RS-232 thermal printers)
//!
//! Business logic (WHAT to print) should stay in application code:
//! - Task ticket rendering → hearth-notify
//!
//! ## Example
//!
//! ```ignore
//! use hearth_printer::{DocumentBuilder, SerialTransport, Transport, encode_document};
//!
//! // Build a document
//! let mut builder = DocumentBuilder::new(32);
//! builder.center();
//! builder.bold();
//! builder.line("TASK REMINDER");
//! builder.bold_off();
//! builder.left();
//! builder.line("Water the plants");
//! builder.cut();
//! let document = builder.build();
//!
//! // Send to a serial printer
//! let mut transport = SerialTransport::new("/dev/ttyUSB0", 9600);
//! if transport.connect().await {
//!     transport.write(&encode_document(&document)).await?;
//! }
//! ```

mod document;
mod encode;
mod encoding;
mod error;
mod transport;

// Re-exports
pub use document::{Directive, Document, DocumentBuilder};
pub use encode::{encode_directive, encode_document};
pub use encoding::{codepage_width, pad_codepage, to_codepage};
pub use error::{PrintError, PrintResult};
pub use transport::{ConnectionState, SerialTransport, Transport};
