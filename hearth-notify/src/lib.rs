//! # hearth-notify
//!
//! Task notification printing pipeline for the household task manager.
//!
//! This crate decides WHAT and WHEN to print:
//! - Task snapshot types shared with the external stores
//! - Ticket rendering (single task, task list, test page)
//! - Print job running against one serial transport
//! - The periodic multi-user lookahead scan
//!
//! Low-level printing (directive encoding, serial I/O) lives in
//! `hearth-printer`. Task persistence, authentication and the HTTP surface
//! are external collaborators consumed through the traits in [`store`].

pub mod config;
pub mod logger;
pub mod renderer;
pub mod runner;
pub mod scheduler;
pub mod service;
pub mod store;
pub mod types;

pub use config::{Config, suggested_ports};
pub use logger::init_logger;
pub use renderer::TicketRenderer;
pub use runner::{JobOutcome, PrintJobRunner};
pub use scheduler::NotificationScheduler;
pub use service::PrintService;
pub use store::{ReminderStore, SettingsStore, TaskStore};
pub use types::{Category, PersonalReminder, Priority, ReminderKind, TaskSnapshot};
