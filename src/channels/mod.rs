pub mod dm;
pub mod forum;
pub mod guild;
pub mod thread;

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::cache::ThreadCache;
use crate::guild::Guild;
use crate::models::channel::ChannelType;
use crate::snowflake;

pub use dm::{DmChannel, GroupDmChannel};
pub use forum::ForumChannel;
pub use guild::{CategoryChannel, DirectoryChannel, GuildChannelBase, TextChannel, VoiceChannel};
pub use thread::ThreadChannel;

/// The closed set of channel representations the factory can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelKind {
    Dm,
    GroupDm,
    Text,
    Voice,
    Category,
    News,
    Stage,
    Thread,
    Directory,
    Forum,
}

impl ChannelKind {
    pub const ALL: [ChannelKind; 10] = [
        ChannelKind::Dm,
        ChannelKind::GroupDm,
        ChannelKind::Text,
        ChannelKind::Voice,
        ChannelKind::Category,
        ChannelKind::News,
        ChannelKind::Stage,
        ChannelKind::Thread,
        ChannelKind::Directory,
        ChannelKind::Forum,
    ];

    /// Kind used for a guild-scoped record of the given type. DM types and
    /// unknown values have no guild representation.
    pub fn for_guild_type(channel_type: ChannelType) -> Option<ChannelKind> {
        match channel_type {
            ChannelType::GuildText => Some(ChannelKind::Text),
            ChannelType::GuildVoice => Some(ChannelKind::Voice),
            ChannelType::GuildCategory => Some(ChannelKind::Category),
            ChannelType::GuildAnnouncement => Some(ChannelKind::News),
            ChannelType::GuildStageVoice => Some(ChannelKind::Stage),
            ChannelType::AnnouncementThread
            | ChannelType::PublicThread
            | ChannelType::PrivateThread => Some(ChannelKind::Thread),
            ChannelType::GuildDirectory => Some(ChannelKind::Directory),
            ChannelType::GuildForum => Some(ChannelKind::Forum),
            ChannelType::Dm | ChannelType::GroupDm | ChannelType::Unknown(_) => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChannelKind::Dm => "dm",
            ChannelKind::GroupDm => "group_dm",
            ChannelKind::Text => "text",
            ChannelKind::Voice => "voice",
            ChannelKind::Category => "category",
            ChannelKind::News => "news",
            ChannelKind::Stage => "stage",
            ChannelKind::Thread => "thread",
            ChannelKind::Directory => "directory",
            ChannelKind::Forum => "forum",
        }
    }
}

#[derive(Debug)]
pub enum Channel {
    Dm(DmChannel),
    GroupDm(GroupDmChannel),
    Text(TextChannel),
    Voice(VoiceChannel),
    Category(CategoryChannel),
    News(TextChannel),
    Stage(VoiceChannel),
    Thread(ThreadChannel),
    Directory(DirectoryChannel),
    Forum(ForumChannel),
}

impl Channel {
    pub fn kind(&self) -> ChannelKind {
        match self {
            Channel::Dm(_) => ChannelKind::Dm,
            Channel::GroupDm(_) => ChannelKind::GroupDm,
            Channel::Text(_) => ChannelKind::Text,
            Channel::Voice(_) => ChannelKind::Voice,
            Channel::Category(_) => ChannelKind::Category,
            Channel::News(_) => ChannelKind::News,
            Channel::Stage(_) => ChannelKind::Stage,
            Channel::Thread(_) => ChannelKind::Thread,
            Channel::Directory(_) => ChannelKind::Directory,
            Channel::Forum(_) => ChannelKind::Forum,
        }
    }

    /// Shared guild fields, absent for DM channels.
    pub fn guild_base(&self) -> Option<&GuildChannelBase> {
        match self {
            Channel::Dm(_) | Channel::GroupDm(_) => None,
            Channel::Text(c) | Channel::News(c) => Some(&c.base),
            Channel::Voice(c) | Channel::Stage(c) => Some(&c.base),
            Channel::Category(c) => Some(&c.base),
            Channel::Thread(c) => Some(&c.base),
            Channel::Directory(c) => Some(&c.base),
            Channel::Forum(c) => Some(&c.base),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Channel::Dm(c) => &c.id,
            Channel::GroupDm(c) => &c.id,
            _ => self
                .guild_base()
                .map(|base| base.id.as_str())
                .unwrap_or_default(),
        }
    }

    pub fn channel_type(&self) -> ChannelType {
        match self {
            Channel::Dm(_) => ChannelType::Dm,
            Channel::GroupDm(_) => ChannelType::GroupDm,
            _ => self
                .guild_base()
                .map(|base| base.channel_type)
                .unwrap_or(ChannelType::Unknown(-1)),
        }
    }

    pub fn guild_id(&self) -> Option<&str> {
        self.guild_base().and_then(|base| base.guild_id.as_deref())
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Channel::Dm(c) => c.recipient.as_ref().map(|user| user.display_name()),
            Channel::GroupDm(c) => c.name.as_deref(),
            _ => self.guild_base().and_then(|base| base.name.as_deref()),
        }
    }

    pub fn position(&self) -> Option<i64> {
        self.guild_base().and_then(|base| base.position)
    }

    /// Category for regular channels, origin channel for threads.
    pub fn parent_id(&self) -> Option<&str> {
        self.guild_base().and_then(|base| base.parent_id.as_deref())
    }

    pub fn is_thread(&self) -> bool {
        matches!(self, Channel::Thread(_))
    }

    pub fn is_dm_based(&self) -> bool {
        matches!(self, Channel::Dm(_) | Channel::GroupDm(_))
    }

    pub fn is_text_based(&self) -> bool {
        self.channel_type().is_text_based()
    }

    pub fn is_voice_based(&self) -> bool {
        matches!(self, Channel::Voice(_) | Channel::Stage(_))
    }

    /// Thread collection for channels that can own threads.
    pub fn threads(&self) -> Option<&ThreadCache> {
        match self {
            Channel::Text(c) | Channel::News(c) => Some(&c.threads),
            Channel::Forum(c) => Some(&c.threads),
            _ => None,
        }
    }

    /// Parent channel from the guild's cache.
    pub fn parent(&self, guild: &Guild) -> Option<Arc<Channel>> {
        self.parent_id()
            .and_then(|parent_id| guild.channels.get(parent_id))
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        snowflake::created_at(self.id())
    }

    pub fn as_text(&self) -> Option<&TextChannel> {
        match self {
            Channel::Text(c) | Channel::News(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_voice(&self) -> Option<&VoiceChannel> {
        match self {
            Channel::Voice(c) | Channel::Stage(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_thread(&self) -> Option<&ThreadChannel> {
        match self {
            Channel::Thread(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_forum(&self) -> Option<&ForumChannel> {
        match self {
            Channel::Forum(c) => Some(c),
            _ => None,
        }
    }
}
