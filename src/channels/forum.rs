use super::guild::GuildChannelBase;
use crate::cache::ThreadCache;
use crate::guild::Guild;
use crate::models::channel::ChannelData;
use crate::models::forum::{
    transform_api_default_reaction, transform_api_forum_tag, transform_default_reaction,
    transform_forum_tag, ApiDefaultReaction, ApiForumTag, DefaultReaction, ForumTag,
};

#[derive(Debug)]
pub struct ForumChannel {
    pub base: GuildChannelBase,
    pub topic: Option<String>,
    pub nsfw: bool,
    pub rate_limit_per_user: i64,
    pub available_tags: Vec<ForumTag>,
    pub default_reaction_emoji: Option<DefaultReaction>,
    pub default_thread_rate_limit_per_user: Option<i64>,
    pub default_sort_order: Option<u8>,
    pub default_forum_layout: Option<u8>,
    pub threads: ThreadCache,
}

impl ForumChannel {
    pub fn new(data: &ChannelData, guild: Option<&Guild>) -> Self {
        Self {
            base: GuildChannelBase::new(data, guild),
            topic: data.topic.clone(),
            nsfw: data.nsfw.unwrap_or(false),
            rate_limit_per_user: data.rate_limit_per_user.unwrap_or(0),
            available_tags: data
                .available_tags
                .iter()
                .flatten()
                .map(transform_api_forum_tag)
                .collect(),
            default_reaction_emoji: data
                .default_reaction_emoji
                .as_ref()
                .map(transform_api_default_reaction),
            default_thread_rate_limit_per_user: data.default_thread_rate_limit_per_user,
            default_sort_order: data.default_sort_order,
            default_forum_layout: data.default_forum_layout,
            threads: ThreadCache::default(),
        }
    }

    pub fn tag(&self, id: &str) -> Option<&ForumTag> {
        self.available_tags
            .iter()
            .find(|tag| tag.id.as_deref() == Some(id))
    }

    /// Tags in the shape expected by the edit-channel endpoint.
    pub fn available_tags_to_wire(&self) -> Vec<ApiForumTag> {
        self.available_tags.iter().map(transform_forum_tag).collect()
    }

    pub fn default_reaction_to_wire(&self) -> Option<ApiDefaultReaction> {
        self.default_reaction_emoji
            .as_ref()
            .map(transform_default_reaction)
    }
}
