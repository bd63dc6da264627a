pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_guild_table;
mod m20260101_000002_create_embed_config_table;
mod m20260101_000003_create_moderation_config_table;
mod m20260101_000004_create_ticketing_config_table;
mod m20260101_000005_create_mute_table;
mod m20260101_000006_create_ban_table;
mod m20260101_000007_create_prune_table;
mod m20260101_000008_create_ticket_table;
mod m20260101_000009_create_server_booster_table;
mod m20260101_000010_create_tag_table;
mod m20260101_000011_create_reminder_table;
mod m20260101_000012_create_role_menu_table;
mod m20260101_000013_create_role_menu_option_table;
mod m20260101_000014_create_channel_message_format_table;
mod m20260101_000015_create_audit_log_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_guild_table::Migration),
            Box::new(m20260101_000002_create_embed_config_table::Migration),
            Box::new(m20260101_000003_create_moderation_config_table::Migration),
            Box::new(m20260101_000004_create_ticketing_config_table::Migration),
            Box::new(m20260101_000005_create_mute_table::Migration),
            Box::new(m20260101_000006_create_ban_table::Migration),
            Box::new(m20260101_000007_create_prune_table::Migration),
            Box::new(m20260101_000008_create_ticket_table::Migration),
            Box::new(m20260101_000009_create_server_booster_table::Migration),
            Box::new(m20260101_000010_create_tag_table::Migration),
            Box::new(m20260101_000011_create_reminder_table::Migration),
            Box::new(m20260101_000012_create_role_menu_table::Migration),
            Box::new(m20260101_000013_create_role_menu_option_table::Migration),
            Box::new(m20260101_000014_create_channel_message_format_table::Migration),
            Box::new(m20260101_000015_create_audit_log_table::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm_migration::sea_orm::{ConnectionTrait, Database, DatabaseConnection};

    async fn migrated() -> Result<DatabaseConnection, DbErr> {
        let db = Database::connect("sqlite::memory:").await?;
        Migrator::up(&db, None).await?;
        db.execute_unprepared("INSERT INTO guild (guild_id, name) VALUES (1, 'Guild')")
            .await?;

        Ok(db)
    }

    /// Expected: A second active mute for the member is refused, a lifted one is not
    #[tokio::test]
    async fn one_active_mute_per_member() -> Result<(), DbErr> {
        let db = migrated().await?;
        let insert = |disabled: bool| {
            format!(
                "INSERT INTO mute (guild_id, user_id, applied_by_id, is_disabled) VALUES (1, 2, 3, {})",
                disabled as i32
            )
        };

        db.execute_unprepared(&insert(true)).await?;
        db.execute_unprepared(&insert(false)).await?;

        assert!(db.execute_unprepared(&insert(false)).await.is_err());

        Ok(())
    }

    /// Expected: A member may hold one open ticket alongside any number of closed ones
    #[tokio::test]
    async fn one_open_ticket_per_member() -> Result<(), DbErr> {
        let db = migrated().await?;

        db.execute_unprepared(
            "INSERT INTO ticket (guild_id, guild_specific_id, user_id, channel_id, closed_on) \
             VALUES (1, 1, 2, 10, CURRENT_TIMESTAMP)",
        )
        .await?;
        db.execute_unprepared(
            "INSERT INTO ticket (guild_id, guild_specific_id, user_id, channel_id) VALUES (1, 2, 2, 11)",
        )
        .await?;

        let second_open = db
            .execute_unprepared(
                "INSERT INTO ticket (guild_id, guild_specific_id, user_id, channel_id) VALUES (1, 3, 2, 12)",
            )
            .await;
        let reused_number = db
            .execute_unprepared(
                "INSERT INTO ticket (guild_id, guild_specific_id, user_id, channel_id) VALUES (1, 2, 5, 13)",
            )
            .await;

        assert!(second_open.is_err());
        assert!(reused_number.is_err());

        Ok(())
    }

    /// Expected: Tag names repeat only once the earlier tag is deleted
    #[tokio::test]
    async fn tag_names_unique_among_active_tags() -> Result<(), DbErr> {
        let db = migrated().await?;
        let insert = |disabled: bool| {
            format!(
                "INSERT INTO tag (guild_id, name, text, creator_id, is_disabled) VALUES (1, 'rules', 'Be nice', 2, {})",
                disabled as i32
            )
        };

        db.execute_unprepared(&insert(true)).await?;
        db.execute_unprepared(&insert(false)).await?;

        assert!(db.execute_unprepared(&insert(false)).await.is_err());

        Ok(())
    }
}
