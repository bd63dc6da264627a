use sea_orm::DatabaseConnection;
use serenity::all::{
    Context, EventHandler, Guild, GuildMemberUpdateEvent, Interaction, Member, Message, Ready,
    UnavailableGuild,
};
use serenity::async_trait;

use crate::server::{service::message_format::PatternCache, util::queue::TaskQueue};

pub mod guild;
pub mod interaction;
pub mod member;
pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub task_queue: TaskQueue,
    pub patterns: PatternCache,
}

impl Handler {
    pub fn new(db: DatabaseConnection, task_queue: TaskQueue) -> Self {
        Self {
            db,
            task_queue,
            patterns: PatternCache::new(),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(&self.db, ctx, guild, is_new).await;
    }

    /// Called when the bot leaves a guild or the guild goes offline
    async fn guild_delete(&self, ctx: Context, incomplete: UnavailableGuild, full: Option<Guild>) {
        guild::handle_guild_delete(&self.db, ctx, incomplete, full).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(&self.db, ctx, new_member).await;
    }

    /// Called when a member is updated in a guild (roles, boosts, etc.)
    async fn guild_member_update(
        &self,
        ctx: Context,
        old: Option<Member>,
        new: Option<Member>,
        event: GuildMemberUpdateEvent,
    ) {
        member::handle_guild_member_update(&self.db, ctx, old, new, event).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.db, &self.task_queue, &self.patterns, ctx, message).await;
    }

    /// Called for slash commands, context menus and message components
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(&self.db, &self.task_queue, ctx, interaction).await;
    }
}
