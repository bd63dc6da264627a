use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::sync::Arc;

use crate::server::service::{ban::BanService, mute::MuteService, reminder::ReminderService};

/// Lifts expired mutes and bans, then posts due reminders.
pub async fn process_expiry(db: &DatabaseConnection, discord_http: Arc<Http>) {
    let now = Utc::now();

    let bot_id = match discord_http.get_current_user().await {
        Ok(user) => Some(user.id.get()),
        Err(e) => {
            tracing::error!("Failed to look up the bot user, skipping expiry: {}", e);
            None
        }
    };

    if let Some(bot_id) = bot_id {
        match MuteService::new(db, discord_http.clone())
            .lift_expired(now, bot_id)
            .await
        {
            Ok(0) => {}
            Ok(lifted) => tracing::info!("Lifted {} expired mutes", lifted),
            Err(e) => tracing::error!("Error lifting expired mutes: {}", e),
        }

        match BanService::new(db, discord_http.clone())
            .lift_expired(now, bot_id)
            .await
        {
            Ok(0) => {}
            Ok(lifted) => tracing::info!("Lifted {} expired bans", lifted),
            Err(e) => tracing::error!("Error lifting expired bans: {}", e),
        }
    }

    match ReminderService::new(db, discord_http)
        .dispatch_due(now)
        .await
    {
        Ok(0) => {}
        Ok(posted) => tracing::debug!("Posted {} reminders", posted),
        Err(e) => tracing::error!("Error posting reminders: {}", e),
    }
}
