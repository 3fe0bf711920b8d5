use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::channels::{
    CategoryChannel, Channel, ChannelKind, DirectoryChannel, DmChannel, ForumChannel,
    GroupDmChannel, TextChannel, ThreadChannel, VoiceChannel,
};
use crate::client::Client;
use crate::guild::Guild;
use crate::models::channel::ChannelData;

/// Everything a constructor gets to build one channel.
pub struct ChannelInit<'a> {
    pub client: &'a Client,
    pub data: &'a ChannelData,
    pub guild: Option<&'a Guild>,
    /// Only ever set for threads.
    pub from_interaction: bool,
}

pub type Constructor = Arc<dyn Fn(ChannelInit<'_>) -> Channel + Send + Sync>;

/// Constructor table keyed by channel kind. Kinds without an override use
/// the built-in representation.
///
/// The table is handed to the [`Client`] when it is built and cannot be
/// changed afterwards.
#[derive(Clone, Default)]
pub struct Structures {
    overrides: HashMap<ChannelKind, Constructor>,
}

impl Structures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the constructor for `kind`.
    pub fn extend<F>(mut self, kind: ChannelKind, constructor: F) -> Self
    where
        F: Fn(ChannelInit<'_>) -> Channel + Send + Sync + 'static,
    {
        self.overrides.insert(kind, Arc::new(constructor));
        self
    }

    pub fn is_overridden(&self, kind: ChannelKind) -> bool {
        self.overrides.contains_key(&kind)
    }

    pub fn construct(&self, kind: ChannelKind, init: ChannelInit<'_>) -> Channel {
        match self.overrides.get(&kind) {
            Some(constructor) => constructor(init),
            None => default_construct(kind, init),
        }
    }
}

impl fmt::Debug for Structures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut overridden: Vec<&'static str> =
            self.overrides.keys().map(|kind| kind.as_str()).collect();
        overridden.sort_unstable();
        f.debug_struct("Structures")
            .field("overridden", &overridden)
            .finish()
    }
}

pub fn default_construct(kind: ChannelKind, init: ChannelInit<'_>) -> Channel {
    let ChannelInit {
        data,
        guild,
        from_interaction,
        ..
    } = init;
    match kind {
        ChannelKind::Dm => Channel::Dm(DmChannel::new(data)),
        ChannelKind::GroupDm => Channel::GroupDm(GroupDmChannel::new(data)),
        ChannelKind::Text => Channel::Text(TextChannel::new(data, guild)),
        ChannelKind::Voice => Channel::Voice(VoiceChannel::new(data, guild)),
        ChannelKind::Category => Channel::Category(CategoryChannel::new(data, guild)),
        ChannelKind::News => Channel::News(TextChannel::new(data, guild)),
        ChannelKind::Stage => Channel::Stage(VoiceChannel::new(data, guild)),
        ChannelKind::Thread => Channel::Thread(ThreadChannel::new(data, guild, from_interaction)),
        ChannelKind::Directory => Channel::Directory(DirectoryChannel::new(data, guild)),
        ChannelKind::Forum => Channel::Forum(ForumChannel::new(data, guild)),
    }
}
