//! Opening tickets.

use serenity::all::{
    ButtonStyle, ChannelId, ChannelType, CreateChannel, CreateMessage, GuildId,
    PermissionOverwrite, PermissionOverwriteType, Permissions, RoleId, UserId,
};

use crate::server::{
    data::{
        embed_config::EmbedConfigRepository, ticket::TicketRepository,
        ticketing_config::TicketingConfigRepository,
    },
    error::{ticket::TicketError, AppError},
    model::ticket::{button, channel_name, CreateTicketParams, Ticket},
    service::{
        embed::{EmbedConfigEnricher, TicketEnricher},
        moderation_log::ModerationLogService,
    },
};

use super::{bot_permissions, buttons, member_permissions, TicketService};

const DEFAULT_WELCOME: &str = "Thanks for reaching out, a moderator will be with you shortly.";
const DEFAULT_CENTER: &str = "Need help from the moderators? Press the button below to open a private ticket.";

impl<'a> TicketService<'a> {
    /// Opens a ticket for `owner_id`.
    ///
    /// Creates a private channel `{open_prefix}-{number:04}` in the open category, visible to
    /// the owner and the bot only, and posts the welcome message with a Close button.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - The new ticket
    /// - `Err(TicketError::NotConfigured)` - Ticketing is missing, disabled or lacks categories
    /// - `Err(TicketError::AlreadyOpen)` - The owner already has an open ticket
    /// - `Err(AppError::DiscordErr)` - Creating the channel failed
    pub async fn open(&self, guild_id: u64, owner_id: u64) -> Result<Ticket, AppError> {
        let config = self.config(guild_id).await?;
        let Some(open_category_id) = config.open_category_id.filter(|_| config.is_usable()) else {
            return Err(TicketError::NotConfigured.into());
        };

        let ticket_repo = TicketRepository::new(self.db);
        if let Some(existing) = ticket_repo.find_open_by_user(guild_id, owner_id).await? {
            return Err(TicketError::AlreadyOpen(existing.channel_id).into());
        }

        let number = TicketingConfigRepository::new(self.db)
            .next_ticket_number(guild_id)
            .await?
            .ok_or(TicketError::NotConfigured)?;
        let bot_id = self.bot_id().await?;

        let overwrites = vec![
            PermissionOverwrite {
                allow: Permissions::empty(),
                deny: Permissions::VIEW_CHANNEL,
                kind: PermissionOverwriteType::Role(RoleId::new(guild_id)),
            },
            PermissionOverwrite {
                allow: member_permissions(),
                deny: Permissions::empty(),
                kind: PermissionOverwriteType::Member(UserId::new(owner_id)),
            },
            PermissionOverwrite {
                allow: bot_permissions(),
                deny: Permissions::empty(),
                kind: PermissionOverwriteType::Member(UserId::new(bot_id)),
            },
        ];
        let channel = GuildId::new(guild_id)
            .create_channel(
                &self.http,
                CreateChannel::new(channel_name(&config.open_name_prefix, number))
                    .kind(ChannelType::Text)
                    .category(ChannelId::new(open_category_id))
                    .topic(format!("Ticket #{:04} opened by <@{}>", number, owner_id))
                    .permissions(overwrites),
            )
            .await?;

        let ticket = match ticket_repo
            .create(CreateTicketParams {
                guild_id,
                number,
                user_id: owner_id,
                channel_id: channel.id.get(),
                welcome_message_id: None,
            })
            .await
        {
            Ok(ticket) => ticket,
            Err(err) => {
                if let Err(e) = channel.id.delete(&self.http).await {
                    tracing::warn!("Failed to delete orphaned ticket channel {}: {}", channel.id, e);
                }
                return Err(AppError::conflict_on_duplicate(
                    err,
                    "You already have an open ticket",
                ));
            }
        };

        let embed = ModerationLogService::new(self.db, self.http.clone())
            .embed(guild_id)
            .await?
            .title(format!("Ticket #{:04}", number))
            .description(
                config
                    .welcome_message
                    .clone()
                    .unwrap_or_else(|| DEFAULT_WELCOME.to_string()),
            )
            .enrich(&TicketEnricher(&ticket))
            .build();
        let message = channel
            .id
            .send_message(
                &self.http,
                CreateMessage::new()
                    .content(format!("<@{}>", owner_id))
                    .embed(embed)
                    .components(buttons(vec![super::button(
                        button::CLOSE,
                        "Close",
                        ButtonStyle::Danger,
                    )])),
            )
            .await?;

        let ticket = ticket_repo
            .set_welcome_message(ticket.id, message.id.get())
            .await?
            .unwrap_or(ticket);

        tracing::info!(
            "Opened ticket #{} for {} in guild {} (channel {})",
            number,
            owner_id,
            guild_id,
            ticket.channel_id
        );

        Ok(ticket)
    }

    /// Posts the message members use to open tickets.
    ///
    /// Uses the configured center embed when set.
    pub async fn post_center(&self, guild_id: u64, channel_id: u64) -> Result<(), AppError> {
        let config = self.config(guild_id).await?;
        if !config.is_usable() {
            return Err(TicketError::NotConfigured.into());
        }

        let mut embed = ModerationLogService::new(self.db, self.http.clone())
            .embed(guild_id)
            .await?
            .title("Support tickets")
            .description(DEFAULT_CENTER);
        if let Some(id) = config.center_embed_config_id {
            if let Some(center) = EmbedConfigRepository::new(self.db).get_by_id(id).await? {
                embed = embed.enrich(&EmbedConfigEnricher(&center));
            }
        }

        ChannelId::new(channel_id)
            .send_message(
                &self.http,
                CreateMessage::new()
                    .embed(embed.build())
                    .components(buttons(vec![super::button(
                        button::OPEN,
                        "Open a ticket",
                        ButtonStyle::Primary,
                    )])),
            )
            .await?;

        tracing::info!("Posted ticket center in channel {}", channel_id);

        Ok(())
    }
}
