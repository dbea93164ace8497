//! External collaborator interfaces
//!
//! Task rows, user settings and personal reminders are owned by the
//! persistence layer outside this crate. The scheduler consumes them
//! through these read-only traits; tests substitute in-memory fakes.

use crate::types::{PersonalReminder, TaskSnapshot};

/// Read access to the task store
pub trait TaskStore: Send + Sync {
    /// All known user ids
    fn list_user_ids(&self) -> Vec<String>;

    /// Tasks scheduled for the given user on the given day (0 = Sunday)
    ///
    /// Includes daily-repeating tasks and tasks explicitly listing the day.
    fn tasks_for_day(&self, user_id: &str, day: u8) -> Vec<TaskSnapshot>;
}

/// Read access to per-user settings
pub trait SettingsStore: Send + Sync {
    /// The user's lookahead window in minutes, if configured
    ///
    /// `None` means the user has not opted into printed notifications;
    /// the scan skips them without assuming a default.
    fn advance_minutes(&self, user_id: &str) -> Option<u32>;
}

/// Read access to personal reminders
pub trait ReminderStore: Send + Sync {
    fn reminders_for_user(&self, user_id: &str) -> Vec<PersonalReminder>;
}
