use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The logged-in Discord user.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UserDto {
    #[serde(with = "crate::model::serde_id::string")]
    #[schema(value_type = String)]
    pub id: u64,
    pub name: String,
    pub global_name: Option<String>,
    pub avatar_url: Option<String>,
}
