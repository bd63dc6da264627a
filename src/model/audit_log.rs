use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AuditLogDto {
    pub id: i32,
    #[serde(with = "crate::model::serde_id::string")]
    #[schema(value_type = String)]
    pub actor_id: u64,
    #[serde(with = "crate::model::serde_id::option_string")]
    #[schema(value_type = Option<String>)]
    pub target_id: Option<u64>,
    pub action: String,
    pub details: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedAuditLogDto {
    pub entries: Vec<AuditLogDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
