use std::sync::Arc;

use crate::cache::{ChannelCache, GuildManager};
use crate::channels::Channel;
use crate::config::ClientConfig;
use crate::factory::{create_channel, CreateChannelOptions};
use crate::guild::Guild;
use crate::models::channel::ChannelData;
use crate::models::guild::GuildData;
use crate::structures::Structures;

#[derive(Debug)]
pub struct Client {
    config: ClientConfig,
    structures: Structures,
    guilds: GuildManager,
    channels: ChannelCache,
}

impl Client {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_structures(config, Structures::default())
    }

    pub fn with_structures(config: ClientConfig, structures: Structures) -> Self {
        Self {
            config,
            structures,
            guilds: GuildManager::default(),
            channels: ChannelCache::default(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn structures(&self) -> &Structures {
        &self.structures
    }

    pub fn guilds(&self) -> &GuildManager {
        &self.guilds
    }

    /// Client-wide channel cache, filled by [`Client::add_channel`].
    pub fn channels(&self) -> &ChannelCache {
        &self.channels
    }

    pub fn add_guild(&self, data: &GuildData) -> Arc<Guild> {
        let guild = Arc::new(Guild::from(data));
        if self.guilds.insert(Arc::clone(&guild)).is_some() {
            tracing::debug!(guild_id = %guild.id, "replaced cached guild");
        }
        guild
    }

    /// Build a channel with the configured default options.
    pub fn add_channel(&self, data: &ChannelData, guild: Option<Arc<Guild>>) -> Option<Arc<Channel>> {
        self.add_channel_with(data, guild, self.config.default_options())
    }

    pub fn add_channel_with(
        &self,
        data: &ChannelData,
        guild: Option<Arc<Guild>>,
        options: CreateChannelOptions,
    ) -> Option<Arc<Channel>> {
        let channel = create_channel(self, data, guild, options)?;
        if self.config.cache_channels && !options.allow_unknown_guild {
            self.channels.insert(Arc::clone(&channel));
        }
        Some(channel)
    }

    /// Drop a channel from every cache that holds it: the client-wide cache,
    /// its guild's channels and, for threads, its parent's threads.
    pub fn remove_channel(&self, id: &str) -> Option<Arc<Channel>> {
        let channel = self
            .channels
            .remove(id)
            .or_else(|| self.find_guild_channel(id))?;

        if let Some(guild) = channel.guild_id().and_then(|guild_id| self.guilds.get(guild_id)) {
            if let Some(parent) = channel.parent(&guild).filter(|_| channel.is_thread()) {
                if let Some(threads) = parent.threads() {
                    threads.remove(id);
                }
            }
            guild.channels.remove(id);
        }
        tracing::trace!(channel_id = %id, "removed channel");
        Some(channel)
    }

    fn find_guild_channel(&self, id: &str) -> Option<Arc<Channel>> {
        self.guilds
            .ids()
            .iter()
            .filter_map(|guild_id| self.guilds.get(guild_id))
            .find_map(|guild| guild.channels.get(id))
    }
}
