use dashmap::DashMap;
use std::sync::Arc;

use crate::channels::Channel;
use crate::guild::Guild;

/// Keyed store of channels. Used for a guild's channels, a parent channel's
/// threads, and the client-wide channel cache.
#[derive(Debug, Default)]
pub struct ChannelCache {
    inner: DashMap<String, Arc<Channel>>,
}

/// A parent channel's threads.
pub type ThreadCache = ChannelCache;

impl ChannelCache {
    /// Insert under the channel's own id, returning any channel it replaced.
    pub fn insert(&self, channel: Arc<Channel>) -> Option<Arc<Channel>> {
        self.inner.insert(channel.id().to_string(), channel)
    }

    pub fn get(&self, id: &str) -> Option<Arc<Channel>> {
        self.inner.get(id).map(|entry| Arc::clone(entry.value()))
    }

    pub fn remove(&self, id: &str) -> Option<Arc<Channel>> {
        self.inner.remove(id).map(|(_, channel)| channel)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Cached ids in ascending order.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.inner.iter().map(|entry| entry.key().clone()).collect();
        ids.sort();
        ids
    }

    /// Snapshot of the cached channels, ordered by position then id.
    pub fn values(&self) -> Vec<Arc<Channel>> {
        let mut channels: Vec<Arc<Channel>> = self
            .inner
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        channels.sort_by(|a, b| {
            a.position()
                .unwrap_or(0)
                .cmp(&b.position().unwrap_or(0))
                .then_with(|| a.id().cmp(b.id()))
        });
        channels
    }
}

/// The client's guild registry.
#[derive(Debug, Default)]
pub struct GuildManager {
    inner: DashMap<String, Arc<Guild>>,
}

impl GuildManager {
    pub fn insert(&self, guild: Arc<Guild>) -> Option<Arc<Guild>> {
        self.inner.insert(guild.id.clone(), guild)
    }

    pub fn get(&self, id: &str) -> Option<Arc<Guild>> {
        self.inner.get(id).map(|entry| Arc::clone(entry.value()))
    }

    pub fn remove(&self, id: &str) -> Option<Arc<Guild>> {
        self.inner.remove(id).map(|(_, guild)| guild)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.inner.iter().map(|entry| entry.key().clone()).collect();
        ids.sort();
        ids
    }
}
