//! Mute and ban records and the create-or-extend rule they share.

use chrono::{DateTime, Utc};

use crate::{
    model::moderation::{
        ApplyPunishmentResultDto, CreateBanDto, CreateMuteDto, PaginatedPunishmentsDto,
        PunishmentDto,
    },
    server::{
        error::AppError,
        model::Paginated,
        util::{
            duration::{end_after, parse_duration},
            snowflake::{from_db, require_id},
        },
    },
};

/// An active or lifted mute or ban.
///
/// Mutes and bans are stored in separate tables with identical columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Punishment {
    pub id: i32,
    pub guild_id: u64,
    pub user_id: u64,
    pub applied_by_id: u64,
    /// `None` when the punishment is indefinite.
    pub applied_until: Option<DateTime<Utc>>,
    pub reason: Option<String>,
    pub lifted_by_id: Option<u64>,
    pub lifted_on: Option<DateTime<Utc>>,
    pub lift_reason: Option<String>,
    pub is_disabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Punishment {
    pub fn from_mute(entity: entity::mute::Model) -> Self {
        Self {
            id: entity.id,
            guild_id: from_db(entity.guild_id),
            user_id: from_db(entity.user_id),
            applied_by_id: from_db(entity.applied_by_id),
            applied_until: entity.applied_until,
            reason: entity.reason,
            lifted_by_id: entity.lifted_by_id.map(from_db),
            lifted_on: entity.lifted_on,
            lift_reason: entity.lift_reason,
            is_disabled: entity.is_disabled,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn from_ban(entity: entity::ban::Model) -> Self {
        Self {
            id: entity.id,
            guild_id: from_db(entity.guild_id),
            user_id: from_db(entity.user_id),
            applied_by_id: from_db(entity.applied_by_id),
            applied_until: entity.applied_until,
            reason: entity.reason,
            lifted_by_id: entity.lifted_by_id.map(from_db),
            lifted_on: entity.lifted_on,
            lift_reason: entity.lift_reason,
            is_disabled: entity.is_disabled,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.is_disabled
    }

    pub fn into_dto(self) -> PunishmentDto {
        PunishmentDto {
            id: self.id,
            user_id: self.user_id,
            applied_by_id: self.applied_by_id,
            applied_until: self.applied_until,
            reason: self.reason,
            lifted_by_id: self.lifted_by_id,
            lifted_on: self.lifted_on,
            is_active: !self.is_disabled,
            created_at: self.created_at,
        }
    }
}

impl Paginated<Punishment> {
    pub fn into_dto(self) -> PaginatedPunishmentsDto {
        PaginatedPunishmentsDto {
            entries: self.items.into_iter().map(Punishment::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// What applying a mute or ban did to the stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// No active record existed; a new one was created.
    Created,
    /// The active record was extended to the new end.
    Extended,
    /// The active record already ends at or after the requested end.
    AlreadyLonger,
}

impl ApplyOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Extended => "extended",
            Self::AlreadyLonger => "already_longer",
        }
    }
}

/// Whether `requested` ends later than `current`. `None` is indefinite and ends last.
pub fn extends(current: Option<DateTime<Utc>>, requested: Option<DateTime<Utc>>) -> bool {
    match (current, requested) {
        (None, _) => false,
        (Some(_), None) => true,
        (Some(current), Some(requested)) => requested > current,
    }
}

/// Parameters for muting or banning a user.
#[derive(Debug, Clone)]
pub struct ApplyPunishmentParams {
    pub guild_id: u64,
    pub user_id: u64,
    pub moderator_id: u64,
    /// `None` applies the punishment indefinitely.
    pub applied_until: Option<DateTime<Utc>>,
    pub reason: Option<String>,
}

impl ApplyPunishmentParams {
    /// Validates a mute request from the REST API.
    ///
    /// # Returns
    /// - `Ok(ApplyPunishmentParams)` - Duration parsed relative to `now`
    /// - `Err(AppError::BadRequest)` - Unparsable duration
    pub fn from_mute_dto(
        dto: CreateMuteDto,
        guild_id: u64,
        moderator_id: u64,
        now: DateTime<Utc>,
    ) -> Result<Self, AppError> {
        Self::from_request(guild_id, dto.user_id, moderator_id, &dto.duration, dto.reason, now)
    }

    /// Validates a ban request from the REST API.
    ///
    /// The message deletion window is validated by the ban itself.
    pub fn from_ban_dto(
        dto: CreateBanDto,
        guild_id: u64,
        moderator_id: u64,
        now: DateTime<Utc>,
    ) -> Result<Self, AppError> {
        Self::from_request(guild_id, dto.user_id, moderator_id, &dto.duration, dto.reason, now)
    }

    /// Builds parameters from a duration as typed by a moderator.
    ///
    /// Blank reasons are dropped and a zero user id is a bad request.
    pub fn from_request(
        guild_id: u64,
        user_id: u64,
        moderator_id: u64,
        duration: &str,
        reason: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<Self, AppError> {
        let user_id = require_id(user_id, "user")?;
        let applied_until = parse_duration(duration)?
            .map(|duration| end_after(now, duration))
            .transpose()?;

        Ok(Self {
            guild_id,
            user_id,
            moderator_id,
            applied_until,
            reason: reason
                .map(|reason| reason.trim().to_string())
                .filter(|reason| !reason.is_empty()),
        })
    }
}

/// Parameters for lifting a mute or ban.
#[derive(Debug, Clone)]
pub struct LiftPunishmentParams {
    pub guild_id: u64,
    pub user_id: u64,
    pub lifted_by_id: u64,
    pub reason: Option<String>,
}

/// Result of a create-or-extend.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplyResult {
    pub outcome: ApplyOutcome,
    pub punishment: Punishment,
}

impl ApplyResult {
    pub fn into_dto(self) -> ApplyPunishmentResultDto {
        ApplyPunishmentResultDto {
            outcome: self.outcome.as_str().to_string(),
            punishment: self.punishment.into_dto(),
        }
    }
}
