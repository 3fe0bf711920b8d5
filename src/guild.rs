use crate::cache::ChannelCache;
use crate::models::guild::GuildData;

#[derive(Debug)]
pub struct Guild {
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
    pub owner_id: Option<String>,
    pub channels: ChannelCache,
}

impl Guild {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: None,
            owner_id: None,
            channels: ChannelCache::default(),
        }
    }
}

impl From<&GuildData> for Guild {
    fn from(data: &GuildData) -> Self {
        Self {
            id: data.id.clone(),
            name: data.name.clone(),
            icon: data.icon.clone(),
            owner_id: data.owner_id.clone(),
            channels: ChannelCache::default(),
        }
    }
}
