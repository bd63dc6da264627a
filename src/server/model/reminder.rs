//! One-shot and recurring reminders.

use chrono::{DateTime, Utc};
use std::str::FromStr;

use crate::server::{error::AppError, util::snowflake::from_db};

#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: i32,
    pub guild_id: u64,
    pub channel_id: u64,
    pub creator_id: u64,
    pub text: String,
    /// Next time the reminder fires.
    pub set_for: DateTime<Utc>,
    /// Six-field cron expression for recurring reminders.
    pub cron_expression: Option<String>,
    pub is_disabled: bool,
    pub created_at: DateTime<Utc>,
}

impl Reminder {
    pub fn from_entity(entity: entity::reminder::Model) -> Self {
        Self {
            id: entity.id,
            guild_id: from_db(entity.guild_id),
            channel_id: from_db(entity.channel_id),
            creator_id: from_db(entity.creator_id),
            text: entity.text,
            set_for: entity.set_for,
            cron_expression: entity.cron_expression,
            is_disabled: entity.is_disabled,
            created_at: entity.created_at,
        }
    }

    pub fn is_recurring(&self) -> bool {
        self.cron_expression.is_some()
    }
}

/// When a new reminder should fire.
#[derive(Debug, Clone, PartialEq)]
pub enum ReminderSchedule {
    Once(DateTime<Utc>),
    /// Six-field cron expression: `sec min hour day-of-month month day-of-week`.
    Recurring(String),
}

#[derive(Debug, Clone)]
pub struct SetReminderParams {
    pub guild_id: u64,
    /// Channel chosen by the user. Falls back to the guild's reminder channel, then to
    /// `invoking_channel_id`.
    pub channel_id: Option<u64>,
    pub invoking_channel_id: u64,
    pub creator_id: u64,
    pub text: String,
    pub schedule: ReminderSchedule,
}

/// Next fire time of `expression` strictly after `after`.
///
/// # Returns
/// - `Ok(DateTime)` - Next occurrence
/// - `Err(AppError::BadRequest)` - Not six fields, unparseable, or never fires again
pub fn next_occurrence(expression: &str, after: DateTime<Utc>) -> Result<DateTime<Utc>, AppError> {
    let fields = expression.split_whitespace().count();
    if fields != 6 {
        return Err(AppError::BadRequest(format!(
            "Cron expression must have 6 fields (sec min hour day month weekday), got {}",
            fields
        )));
    }

    let schedule = cron::Schedule::from_str(expression)
        .map_err(|e| AppError::BadRequest(format!("Invalid cron expression: {}", e)))?;

    schedule.after(&after).next().ok_or_else(|| {
        AppError::BadRequest(format!("Cron expression '{}' never fires", expression))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn finds_next_daily_occurrence() {
        let after = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        let next = next_occurrence("0 0 9 * * *", after).unwrap();

        assert_eq!(next, Utc.with_ymd_and_hms(2024, 3, 11, 9, 0, 0).unwrap());
    }

    #[test]
    fn occurrence_is_strictly_after() {
        let after = Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap();
        let next = next_occurrence("0 0 9 * * *", after).unwrap();

        assert!(next > after);
    }

    #[test]
    fn rejects_five_field_expressions() {
        let result = next_occurrence("0 9 * * *", Utc::now());

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn rejects_garbage() {
        let result = next_occurrence("a b c d e f", Utc::now());

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
