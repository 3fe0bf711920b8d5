use crate::cache::ThreadCache;
use crate::guild::Guild;
use crate::models::channel::{ChannelData, ChannelType};
use crate::models::permission::PermissionOverwrite;

/// Fields shared by every guild-scoped channel.
#[derive(Debug, Clone)]
pub struct GuildChannelBase {
    pub id: String,
    pub channel_type: ChannelType,
    /// The resolved guild's id, falling back to the record's own `guild_id`
    /// when the channel was built without a known guild.
    pub guild_id: Option<String>,
    pub name: Option<String>,
    pub position: Option<i64>,
    pub parent_id: Option<String>,
    pub permission_overwrites: Vec<PermissionOverwrite>,
}

impl GuildChannelBase {
    pub fn new(data: &ChannelData, guild: Option<&Guild>) -> Self {
        Self {
            id: data.id.clone(),
            channel_type: data.channel_type,
            guild_id: guild
                .map(|guild| guild.id.clone())
                .or_else(|| data.guild_id.clone()),
            name: data.name.clone(),
            position: data.position,
            parent_id: data.parent_id.clone(),
            permission_overwrites: data.permission_overwrites.clone(),
        }
    }
}

/// Text or announcement channel. Both can own threads.
#[derive(Debug)]
pub struct TextChannel {
    pub base: GuildChannelBase,
    pub topic: Option<String>,
    pub nsfw: bool,
    pub last_message_id: Option<String>,
    pub rate_limit_per_user: i64,
    pub default_thread_rate_limit_per_user: Option<i64>,
    pub threads: ThreadCache,
}

impl TextChannel {
    pub fn new(data: &ChannelData, guild: Option<&Guild>) -> Self {
        Self {
            base: GuildChannelBase::new(data, guild),
            topic: data.topic.clone(),
            nsfw: data.nsfw.unwrap_or(false),
            last_message_id: data.last_message_id.clone(),
            rate_limit_per_user: data.rate_limit_per_user.unwrap_or(0),
            default_thread_rate_limit_per_user: data.default_thread_rate_limit_per_user,
            threads: ThreadCache::default(),
        }
    }
}

/// Voice or stage channel.
#[derive(Debug, Clone)]
pub struct VoiceChannel {
    pub base: GuildChannelBase,
    pub bitrate: Option<i64>,
    /// Zero means unlimited.
    pub user_limit: i64,
    pub rtc_region: Option<String>,
    pub topic: Option<String>,
    pub nsfw: bool,
    pub last_message_id: Option<String>,
    pub rate_limit_per_user: i64,
}

impl VoiceChannel {
    pub fn new(data: &ChannelData, guild: Option<&Guild>) -> Self {
        Self {
            base: GuildChannelBase::new(data, guild),
            bitrate: data.bitrate,
            user_limit: data.user_limit.unwrap_or(0),
            rtc_region: data.rtc_region.clone(),
            topic: data.topic.clone(),
            nsfw: data.nsfw.unwrap_or(false),
            last_message_id: data.last_message_id.clone(),
            rate_limit_per_user: data.rate_limit_per_user.unwrap_or(0),
        }
    }

    pub fn is_full(&self, connected: usize) -> bool {
        self.user_limit > 0 && connected as i64 >= self.user_limit
    }
}

#[derive(Debug, Clone)]
pub struct CategoryChannel {
    pub base: GuildChannelBase,
}

impl CategoryChannel {
    pub fn new(data: &ChannelData, guild: Option<&Guild>) -> Self {
        Self {
            base: GuildChannelBase::new(data, guild),
        }
    }

    /// Ids of the guild's channels filed under this category.
    pub fn children(&self, guild: &Guild) -> Vec<String> {
        guild
            .channels
            .values()
            .into_iter()
            .filter(|channel| channel.parent_id() == Some(self.base.id.as_str()))
            .map(|channel| channel.id().to_string())
            .collect()
    }
}

/// Student hub directory channel.
#[derive(Debug, Clone)]
pub struct DirectoryChannel {
    pub base: GuildChannelBase,
}

impl DirectoryChannel {
    pub fn new(data: &ChannelData, guild: Option<&Guild>) -> Self {
        Self {
            base: GuildChannelBase::new(data, guild),
        }
    }
}
