//! Task ticket renderer
//!
//! Renders task snapshots into printable documents. Rendering is pure:
//! the caller captures "now" once per print request and passes it in, so
//! the same snapshots and timestamp always produce the same document.

use chrono::{DateTime, Local};
use hearth_printer::{Document, DocumentBuilder};

use crate::types::TaskSnapshot;

/// Task ticket renderer
///
/// Common widths:
/// - 58mm paper: 32 characters
/// - 80mm paper: 48 characters
pub struct TicketRenderer {
    width: usize,
}

impl TicketRenderer {
    /// Create a renderer for the given paper width in characters
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    /// Render a single task ticket
    pub fn render_task(&self, task: &TaskSnapshot, now: DateTime<Local>) -> Document {
        let mut b = DocumentBuilder::new(self.width);

        // Banner
        b.center();
        b.bold();
        b.line("TASK REMINDER");
        b.bold_off();
        b.left();

        // Title block
        b.sep_double();
        b.double_height();
        b.line(&task.title.to_uppercase());
        b.normal_height();
        b.sep_double();
        b.newline();

        // Fields
        b.line(&format!("Description: {}", task.description));
        b.line(&format!("Time: {}", task.time));
        b.line(&format!("Days: {}", task.days_text()));
        b.line(&format!("Category: {}", task.category.as_str()));
        if let Some(zone) = task.zone {
            b.line(&format!("Zone: {}", zone));
        }
        b.line_lr(
            &format!("Priority: {}", task.priority.as_str()),
            &format!("{} min", task.estimated_duration),
        );
        b.line(&format!("Id: {}", task.id));

        // Footer
        b.newline();
        b.sep_double();
        b.center();
        b.line(&now.format("%Y-%m-%d %H:%M").to_string());
        b.left();
        b.feed(3);
        b.cut();

        b.build()
    }

    /// Render a task list under the given title
    ///
    /// Tasks are sorted by scheduled time ascending; equal times keep their
    /// scan order (stable sort). Malformed times sort to the end.
    pub fn render_task_list(
        &self,
        tasks: &[TaskSnapshot],
        title: &str,
        now: DateTime<Local>,
    ) -> Document {
        let mut b = DocumentBuilder::new(self.width);

        // Header
        b.center();
        b.bold();
        b.double_height();
        b.line(title);
        b.normal_height();
        b.bold_off();
        b.line(&format!("Date: {}", now.format("%Y-%m-%d")));
        b.left();
        b.newline();

        let mut sorted: Vec<&TaskSnapshot> = tasks.iter().collect();
        sorted.sort_by_key(|t| t.schedule_minutes().unwrap_or(u32::MAX));

        for (i, task) in sorted.iter().enumerate() {
            b.line(&format!("{}. {} - {}", i + 1, task.time, task.title));
            b.line(&format!("   {}", task.description));
            b.line(&format!(
                "   {} | {} | {} min",
                task.days_text(),
                task.category.as_str(),
                task.estimated_duration
            ));
            b.newline();
        }

        // Footer
        b.center();
        b.sep_double();
        b.line(&format!("Total: {} tasks", tasks.len()));
        b.left();
        b.feed(3);
        b.cut();

        b.build()
    }

    /// Render a connectivity self-test page
    pub fn render_test_page(&self, now: DateTime<Local>) -> Document {
        let mut b = DocumentBuilder::new(self.width);

        b.center();
        b.bold();
        b.double_height();
        b.line("PRINTER TEST");
        b.normal_height();
        b.bold_off();
        b.left();
        b.line("Printer connected successfully!");
        b.line(&now.format("Date/Time: %Y-%m-%d %H:%M:%S").to_string());
        b.feed(3);
        b.cut();

        b.build()
    }
}

impl Default for TicketRenderer {
    fn default() -> Self {
        Self::new(32)
    }
}
