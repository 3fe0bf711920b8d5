use crate::models::channel::ChannelData;
use crate::models::user::User;

/// One-to-one direct message channel.
#[derive(Debug, Clone)]
pub struct DmChannel {
    pub id: String,
    pub recipient: Option<User>,
    pub last_message_id: Option<String>,
}

impl DmChannel {
    pub fn new(data: &ChannelData) -> Self {
        Self {
            id: data.id.clone(),
            recipient: data
                .recipients
                .as_ref()
                .and_then(|recipients| recipients.first().cloned()),
            last_message_id: data.last_message_id.clone(),
        }
    }
}

/// Group direct message channel. Only the fields the API exposes to
/// non-members are available, so this is always partial.
#[derive(Debug, Clone)]
pub struct GroupDmChannel {
    pub id: String,
    pub name: Option<String>,
    pub icon: Option<String>,
    pub owner_id: Option<String>,
    pub recipients: Vec<User>,
}

impl GroupDmChannel {
    pub fn new(data: &ChannelData) -> Self {
        Self {
            id: data.id.clone(),
            name: data.name.clone(),
            icon: data.icon.clone(),
            owner_id: data.owner_id.clone(),
            recipients: data.recipients.clone().unwrap_or_default(),
        }
    }
}
