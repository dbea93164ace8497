//! Notification scheduler
//!
//! One global timer drives the lookahead scan across all users; a second,
//! faster timer handles personal reminder bookkeeping. No per-user timers.
//!
//! A qualifying task is printed on every tick it remains inside the
//! window; the scheduler keeps no memory of what it already printed.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Datelike, Local, Timelike};
use hearth_printer::Transport;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::runner::JobOutcome;
use crate::service::PrintService;
use crate::store::{ReminderStore, SettingsStore, TaskStore};
use crate::types::TaskSnapshot;

/// Upcoming-task scan period
const TASK_SCAN_INTERVAL_SECS: u64 = 15 * 60;
/// Personal reminder bookkeeping period
const REMINDER_SCAN_INTERVAL_SECS: u64 = 5 * 60;

/// Header title for lookahead tickets
const UPCOMING_TITLE: &str = "UPCOMING TASKS";

/// Periodic multi-user notification scanner
pub struct NotificationScheduler<T: Transport> {
    tasks: Arc<dyn TaskStore>,
    settings: Arc<dyn SettingsStore>,
    reminders: Arc<dyn ReminderStore>,
    printer: Arc<PrintService<T>>,
}

impl<T: Transport> NotificationScheduler<T> {
    pub fn new(
        tasks: Arc<dyn TaskStore>,
        settings: Arc<dyn SettingsStore>,
        reminders: Arc<dyn ReminderStore>,
        printer: Arc<PrintService<T>>,
    ) -> Self {
        Self {
            tasks,
            settings,
            reminders,
            printer,
        }
    }

    /// Run the scheduler until cancelled
    pub async fn run(self, shutdown: CancellationToken) {
        info!(
            task_scan_secs = TASK_SCAN_INTERVAL_SECS,
            reminder_scan_secs = REMINDER_SCAN_INTERVAL_SECS,
            "Notification scheduler started"
        );

        let start = tokio::time::Instant::now();
        let task_period = Duration::from_secs(TASK_SCAN_INTERVAL_SECS);
        let reminder_period = Duration::from_secs(REMINDER_SCAN_INTERVAL_SECS);
        let mut task_interval = tokio::time::interval_at(start + task_period, task_period);
        let mut reminder_interval =
            tokio::time::interval_at(start + reminder_period, reminder_period);

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    info!("Notification scheduler received shutdown signal");
                    break;
                }
                _ = task_interval.tick() => {
                    self.scan_upcoming_tasks().await;
                }
                _ = reminder_interval.tick() => {
                    self.scan_personal_reminders().await;
                }
            }
        }
    }

    /// One lookahead tick over all users
    ///
    /// Also the entry point for an external cron facility.
    pub async fn scan_upcoming_tasks(&self) {
        self.scan_upcoming_tasks_at(Local::now()).await;
    }

    async fn scan_upcoming_tasks_at(&self, now: DateTime<Local>) {
        let now_minutes = now.hour() * 60 + now.minute();
        let today = now.weekday().num_days_from_sunday() as u8;

        for user_id in self.tasks.list_user_ids() {
            // No lookahead window configured means the user has not opted
            // into printed notifications.
            let Some(advance_minutes) = self.settings.advance_minutes(&user_id) else {
                continue;
            };

            let upcoming: Vec<TaskSnapshot> = self
                .tasks
                .tasks_for_day(&user_id, today)
                .into_iter()
                .filter(|task| in_window(task, now_minutes, advance_minutes))
                .collect();

            if upcoming.is_empty() {
                continue;
            }

            info!(
                user_id = %user_id,
                count = upcoming.len(),
                "Upcoming tasks found"
            );

            // One user's hardware problem must not abort the scan.
            let outcome = self.printer.print_task_list(&upcoming, UPCOMING_TITLE).await;
            if let JobOutcome::Failed(reason) = outcome {
                warn!(user_id = %user_id, reason = %reason, "Lookahead print failed");
            }
        }
    }

    /// Reminder bookkeeping pass (no printing on this channel)
    pub async fn scan_personal_reminders(&self) {
        for user_id in self.tasks.list_user_ids() {
            let enabled = self
                .reminders
                .reminders_for_user(&user_id)
                .iter()
                .filter(|r| r.enabled)
                .count();

            if enabled > 0 {
                info!(user_id = %user_id, enabled, "Active personal reminders");
            }
        }
    }
}

/// Window test: enabled tasks strictly in the future and within the
/// user's lookahead, i.e. `task_minutes - now_minutes` in
/// `(0, advance_minutes]`. Due and past tasks are excluded.
fn in_window(task: &TaskSnapshot, now_minutes: u32, advance_minutes: u32) -> bool {
    if !task.enabled {
        return false;
    }
    let Some(task_minutes) = task.schedule_minutes() else {
        warn!(task_id = %task.id, time = %task.time, "Unparsable task time, skipping");
        return false;
    };
    let diff = task_minutes as i64 - now_minutes as i64;
    diff > 0 && diff <= advance_minutes as i64
}
