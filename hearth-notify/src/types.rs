//! Task snapshot types
//!
//! Immutable projections of store rows taken at scan time. The scanner and
//! renderer only read these; the source rows are owned by the external task
//! store.

use serde::{Deserialize, Serialize};

/// Weekday labels indexed by days-from-Sunday (0 = Sunday).
///
/// The same 0-indexed convention is used for day filtering in the store and
/// for label rendering, so storage and display can never drift apart.
pub const DAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Task category, mirroring the task store's fixed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Morning,
    Evening,
    Zone,
    Decluttering,
    Personal,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Morning => "morning",
            Category::Evening => "evening",
            Category::Zone => "zone",
            Category::Decluttering => "decluttering",
            Category::Personal => "personal",
        }
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

/// Immutable projection of a task row at scan time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSnapshot {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Scheduled time in HH:MM format
    pub time: String,
    pub repeat_daily: bool,
    /// Days of week the task runs on, 0 = Sunday
    pub days: Vec<u8>,
    pub enabled: bool,
    pub category: Category,
    /// Zone number (1-4) for zone tasks
    pub zone: Option<u8>,
    pub priority: Priority,
    /// Estimated duration in minutes
    pub estimated_duration: u32,
}

impl TaskSnapshot {
    /// Minutes since midnight parsed from the HH:MM time field
    ///
    /// Returns `None` for malformed times; the scan logs and skips those
    /// tasks rather than failing the tick.
    pub fn schedule_minutes(&self) -> Option<u32> {
        let (h, m) = self.time.split_once(':')?;
        let h: u32 = h.parse().ok()?;
        let m: u32 = m.parse().ok()?;
        if h >= 24 || m >= 60 {
            return None;
        }
        Some(h * 60 + m)
    }

    /// Human-readable day list
    ///
    /// Daily tasks render exactly "daily" regardless of the `days`
    /// contents; otherwise the named weekdays, in stored order.
    pub fn days_text(&self) -> String {
        if self.repeat_daily {
            return "daily".to_string();
        }
        let names: Vec<&str> = self
            .days
            .iter()
            .filter_map(|&d| DAY_LABELS.get(d as usize).copied())
            .collect();
        names.join(", ")
    }

    /// Whether the task is scheduled on the given day (0 = Sunday)
    pub fn runs_on(&self, day: u8) -> bool {
        self.repeat_daily || self.days.contains(&day)
    }
}

/// Personal reminder kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReminderKind {
    Water,
    Break,
    Stretch,
    Posture,
    EyeCare,
}

/// A recurring personal reminder owned by the external settings layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalReminder {
    pub id: String,
    pub kind: ReminderKind,
    pub message: String,
    /// Repeat frequency in minutes
    pub frequency_minutes: u32,
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(time: &str) -> TaskSnapshot {
        TaskSnapshot {
            id: "t-1".to_string(),
            title: "Make the bed".to_string(),
            description: "Start the day with the room in order".to_string(),
            time: time.to_string(),
            repeat_daily: false,
            days: vec![1, 3, 5],
            enabled: true,
            category: Category::Morning,
            zone: None,
            priority: Priority::High,
            estimated_duration: 5,
        }
    }

    #[test]
    fn test_schedule_minutes() {
        assert_eq!(task("07:30").schedule_minutes(), Some(450));
        assert_eq!(task("00:00").schedule_minutes(), Some(0));
        assert_eq!(task("23:59").schedule_minutes(), Some(1439));
    }

    #[test]
    fn test_schedule_minutes_rejects_malformed() {
        assert_eq!(task("24:00").schedule_minutes(), None);
        assert_eq!(task("07:60").schedule_minutes(), None);
        assert_eq!(task("0730").schedule_minutes(), None);
        assert_eq!(task("soon").schedule_minutes(), None);
    }

    #[test]
    fn test_days_text_named_weekdays() {
        assert_eq!(task("07:00").days_text(), "Mon, Wed, Fri");
    }

    #[test]
    fn test_days_text_daily_overrides_days() {
        let mut t = task("07:00");
        t.repeat_daily = true;
        // days contents are irrelevant for daily tasks
        t.days = vec![0, 6];
        assert_eq!(t.days_text(), "daily");
    }

    #[test]
    fn test_days_text_skips_out_of_range() {
        let mut t = task("07:00");
        t.days = vec![0, 9];
        assert_eq!(t.days_text(), "Sun");
    }

    #[test]
    fn test_runs_on() {
        let t = task("07:00");
        assert!(t.runs_on(1));
        assert!(!t.runs_on(0));

        let mut daily = task("07:00");
        daily.repeat_daily = true;
        daily.days.clear();
        assert!(daily.runs_on(0));
    }
}
