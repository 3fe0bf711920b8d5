use serde::{Deserialize, Serialize};

/// Guild record as received from the API. Only the fields needed to register
/// the guild with a client are kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuildData {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
}
