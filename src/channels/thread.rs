use super::guild::GuildChannelBase;
use crate::guild::Guild;
use crate::models::channel::{ChannelData, ThreadMetadata};

/// Announcement, public or private thread.
#[derive(Debug, Clone)]
pub struct ThreadChannel {
    pub base: GuildChannelBase,
    pub owner_id: Option<String>,
    pub last_message_id: Option<String>,
    pub message_count: Option<i64>,
    pub member_count: Option<i64>,
    pub rate_limit_per_user: i64,
    pub metadata: Option<ThreadMetadata>,
    pub applied_tags: Vec<String>,
    /// Set when the thread was first seen in an interaction payload, which
    /// carries less data than a regular channel payload.
    pub from_interaction: bool,
}

impl ThreadChannel {
    pub fn new(data: &ChannelData, guild: Option<&Guild>, from_interaction: bool) -> Self {
        Self {
            base: GuildChannelBase::new(data, guild),
            owner_id: data.owner_id.clone(),
            last_message_id: data.last_message_id.clone(),
            message_count: data.message_count,
            member_count: data.member_count,
            rate_limit_per_user: data.rate_limit_per_user.unwrap_or(0),
            metadata: data.thread_metadata.clone(),
            applied_tags: data.applied_tags.clone(),
            from_interaction,
        }
    }

    pub fn archived(&self) -> bool {
        self.metadata.as_ref().is_some_and(|meta| meta.archived)
    }

    pub fn locked(&self) -> bool {
        self.metadata.as_ref().is_some_and(|meta| meta.locked)
    }
}
