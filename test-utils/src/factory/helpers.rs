//! Shared helpers for the factory modules.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter used to hand out unique ids and names across all factories.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Next unique value usable as a stored snowflake.
///
/// Offset well above small literal ids tests tend to hard-code.
pub fn next_snowflake() -> i64 {
    1_000_000_000 + next_id() as i64
}

/// Creates a guild with a moderation config that has a mute role set.
///
/// # Returns
/// - `Ok((guild, moderation_config))` - Both created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_guild_with_mute_role(
    db: &DatabaseConnection,
) -> Result<(entity::guild::Model, entity::moderation_config::Model), DbErr> {
    let guild = crate::factory::guild::create_guild(db).await?;
    let config = crate::factory::moderation_config::ModerationConfigFactory::new(db, guild.guild_id)
        .mute_role_id(Some(next_snowflake()))
        .build()
        .await?;

    Ok((guild, config))
}

/// Creates a guild with a fully configured ticketing config.
///
/// Open and closed categories and the log channel all get fresh ids.
///
/// # Returns
/// - `Ok((guild, ticketing_config))` - Both created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_guild_with_ticketing(
    db: &DatabaseConnection,
) -> Result<(entity::guild::Model, entity::ticketing_config::Model), DbErr> {
    let guild = crate::factory::guild::create_guild(db).await?;
    let config = crate::factory::ticketing_config::create_ticketing_config(db, guild.guild_id).await?;

    Ok((guild, config))
}
