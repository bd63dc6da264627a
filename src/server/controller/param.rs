use serde::Deserialize;
use utoipa::IntoParams;

/// Page selection for list endpoints.
///
/// Pages are zero-based.
#[derive(Deserialize, IntoParams)]
pub struct PaginationParam {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

/// Optional reason for lifting a mute or ban.
#[derive(Deserialize, IntoParams)]
pub struct LiftParam {
    pub reason: Option<String>,
}
