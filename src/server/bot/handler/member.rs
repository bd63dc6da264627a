use sea_orm::DatabaseConnection;
use serenity::all::{Context, GuildMemberUpdateEvent, Member};

use crate::server::{
    service::{booster::BoosterService, mute::MuteService},
    util::time::from_discord_timestamp,
};

/// Handles the guild_member_addition event when a member joins a guild.
///
/// Gives the mute role back to members who left and rejoined while muted.
pub async fn handle_guild_member_addition(db: &DatabaseConnection, ctx: Context, new_member: Member) {
    let guild_id = new_member.guild_id.get();
    let user_id = new_member.user.id.get();

    match MuteService::new(db, ctx.http.clone())
        .reapply(guild_id, user_id)
        .await
    {
        Ok(true) => tracing::info!(
            "Reapplied mute to {} on rejoining guild {}",
            user_id,
            guild_id
        ),
        Ok(false) => {}
        Err(e) => tracing::error!(
            "Failed to reapply mute to {} in guild {}: {}",
            user_id,
            guild_id,
            e
        ),
    }
}

/// Handles the guild_member_update event and tracks boost starts and stops.
pub async fn handle_guild_member_update(
    db: &DatabaseConnection,
    ctx: Context,
    _old: Option<Member>,
    new: Option<Member>,
    event: GuildMemberUpdateEvent,
) {
    let guild_id = event.guild_id.get();
    let user_id = event.user.id.get();
    let premium_since = new
        .as_ref()
        .map_or(event.premium_since, |member| member.premium_since)
        .map(from_discord_timestamp);

    if let Err(e) = BoosterService::new(db, ctx.http.clone())
        .member_update(guild_id, user_id, premium_since)
        .await
    {
        tracing::error!(
            "Failed to update boost state of {} in guild {}: {}",
            user_id,
            guild_id,
            e
        );
    }
}
