use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TicketDto {
    pub id: i32,
    /// Per-guild ticket number.
    pub number: i64,
    #[serde(with = "crate::model::serde_id::string")]
    #[schema(value_type = String)]
    pub user_id: u64,
    #[serde(with = "crate::model::serde_id::string")]
    #[schema(value_type = String)]
    pub channel_id: u64,
    /// `open`, `closed` or `deleted`.
    pub state: String,
    pub closed_on: Option<DateTime<Utc>>,
    pub last_activity_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedTicketsDto {
    pub tickets: Vec<TicketDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
