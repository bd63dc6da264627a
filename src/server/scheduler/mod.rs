//! Cron jobs for expiring punishments, posting reminders and cleaning up tickets.
//!
//! Each job logs its own failures; a failed run is retried on the next tick.

pub mod expiry;
pub mod tickets;

use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, util::queue::TaskQueue};

/// Every minute, on the minute.
const EVERY_MINUTE: &str = "0 * * * * *";
/// Every five minutes, offset from the minute jobs.
const EVERY_FIVE_MINUTES: &str = "30 */5 * * * *";

/// Starts the background scheduler.
///
/// # Arguments
/// - `db` - Database connection
/// - `discord_http` - Discord HTTP client owned by the bot
/// - `task_queue` - Queue shared with the bot for bulk Discord operations
pub async fn start_scheduler(
    db: DatabaseConnection,
    discord_http: Arc<Http>,
    task_queue: TaskQueue,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();
    let job_http = discord_http.clone();
    let expiry_job = Job::new_async(EVERY_MINUTE, move |_uuid, _lock| {
        let db = job_db.clone();
        let http = job_http.clone();

        Box::pin(async move {
            expiry::process_expiry(&db, http).await;
        })
    })?;

    let job_db = db.clone();
    let job_http = discord_http.clone();
    let ticket_job = Job::new_async(EVERY_FIVE_MINUTES, move |_uuid, _lock| {
        let db = job_db.clone();
        let http = job_http.clone();
        let task_queue = task_queue.clone();

        Box::pin(async move {
            tickets::process_ticket_cleanup(&db, http, task_queue).await;
        })
    })?;

    scheduler.add(expiry_job).await?;
    scheduler.add(ticket_job).await?;
    scheduler.start().await?;

    tracing::info!("Scheduler started");

    Ok(())
}
