use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TagDto {
    pub id: i32,
    pub name: String,
    pub text: String,
    pub has_embed: bool,
    #[serde(with = "crate::model::serde_id::string")]
    #[schema(value_type = String)]
    pub creator_id: u64,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedTagsDto {
    pub tags: Vec<TagDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
