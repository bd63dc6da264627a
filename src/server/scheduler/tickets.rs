use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::sync::Arc;

use crate::server::{service::ticket::TicketService, util::queue::TaskQueue};

/// Closes idle tickets, then deletes tickets closed for too long.
pub async fn process_ticket_cleanup(
    db: &DatabaseConnection,
    discord_http: Arc<Http>,
    task_queue: TaskQueue,
) {
    let now = Utc::now();
    let service = TicketService::new(db, discord_http, task_queue);

    match service.close_inactive(now).await {
        Ok(0) => {}
        Ok(closed) => tracing::info!("Closed {} inactive tickets", closed),
        Err(e) => tracing::error!("Error closing inactive tickets: {}", e),
    }

    match service.delete_stale(now).await {
        Ok(0) => {}
        Ok(deleted) => tracing::info!("Deleted {} stale tickets", deleted),
        Err(e) => tracing::error!("Error deleting stale tickets: {}", e),
    }
}
