//! Print service
//!
//! The printing operations exposed to the rest of the application (the
//! HTTP layer calls these for on-demand printing, the scheduler for the
//! lookahead channel). Each operation captures wall-clock time exactly
//! once and hands rendering + submission to the pipeline.

use chrono::Local;
use hearth_printer::{SerialTransport, Transport};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::config::Config;
use crate::renderer::TicketRenderer;
use crate::runner::{JobOutcome, PrintJobRunner};
use crate::types::TaskSnapshot;

/// Renders and submits print jobs
pub struct PrintService<T: Transport> {
    renderer: TicketRenderer,
    runner: PrintJobRunner<T>,
}

impl PrintService<SerialTransport> {
    /// Build a service from runtime configuration
    ///
    /// Development mode forces simulation regardless of hardware presence.
    pub fn from_config(config: &Config) -> Self {
        let transport = SerialTransport::new(&config.printer_port, config.printer_baud)
            .with_write_timeout(config.write_timeout);
        let runner = PrintJobRunner::new(transport).with_simulation(config.is_development());
        Self::new(TicketRenderer::new(config.printer_width), runner)
    }
}

impl<T: Transport> PrintService<T> {
    pub fn new(renderer: TicketRenderer, runner: PrintJobRunner<T>) -> Self {
        Self { renderer, runner }
    }

    /// Print a single task ticket
    #[instrument(skip(self, task), fields(task_id = %task.id))]
    pub async fn print_single_task(&self, task: &TaskSnapshot) -> JobOutcome {
        let job_id = Uuid::new_v4();
        let document = self.renderer.render_task(task, Local::now());
        let outcome = self.runner.submit(&document).await;
        info!(job_id = %job_id, outcome = ?outcome, "Single task job finished");
        outcome
    }

    /// Print a task list under the given title
    #[instrument(skip(self, tasks, title), fields(count = tasks.len()))]
    pub async fn print_task_list(&self, tasks: &[TaskSnapshot], title: &str) -> JobOutcome {
        if tasks.is_empty() {
            info!("No tasks to print");
            return JobOutcome::Simulated;
        }

        let job_id = Uuid::new_v4();
        let document = self.renderer.render_task_list(tasks, title, Local::now());
        let outcome = self.runner.submit(&document).await;
        info!(job_id = %job_id, outcome = ?outcome, "Task list job finished");
        outcome
    }

    /// Print a connectivity self-test page
    pub async fn print_test_page(&self) -> JobOutcome {
        let document = self.renderer.render_test_page(Local::now());
        let outcome = self.runner.submit(&document).await;
        info!(outcome = ?outcome, "Test page job finished");
        outcome
    }
}
