use serde::{Deserialize, Serialize};

/// Role (type 0) or member (type 1) override on a guild channel. `allow` and
/// `deny` are permission bitfields serialized as decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionOverwrite {
    pub id: String,
    #[serde(rename = "type")]
    pub overwrite_type: u8,
    pub allow: String,
    pub deny: String,
}

impl PermissionOverwrite {
    pub fn is_role(&self) -> bool {
        self.overwrite_type == 0
    }

    pub fn allow_bits(&self) -> u64 {
        self.allow.parse().unwrap_or(0)
    }

    pub fn deny_bits(&self) -> u64 {
        self.deny.parse().unwrap_or(0)
    }
}
