use std::sync::Arc;

use crate::channels::{Channel, ChannelKind};
use crate::client::Client;
use crate::guild::Guild;
use crate::models::channel::{ChannelData, ChannelType};
use crate::structures::ChannelInit;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreateChannelOptions {
    /// Build guild channels even when their guild is not known to the client.
    /// Channels built this way are never inserted into any cache.
    pub allow_unknown_guild: bool,
    /// The record came from an interaction payload. Only threads use this.
    pub from_interaction: bool,
}

/// Build the channel representation for a wire record.
///
/// Returns `None` when the record matches no representation, or when it
/// belongs to a guild that is neither supplied nor cached and
/// `allow_unknown_guild` is unset. Unless `allow_unknown_guild` is set, a
/// guild channel is inserted into its guild's channel cache and a thread into
/// its parent's thread cache.
pub fn create_channel(
    client: &Client,
    data: &ChannelData,
    guild: Option<Arc<Guild>>,
    options: CreateChannelOptions,
) -> Option<Arc<Channel>> {
    let guild_id = data.guild_id.as_deref().filter(|id| !id.is_empty());
    if guild_id.is_none() && guild.is_none() {
        return create_dm_channel(client, data);
    }

    let guild = guild.or_else(|| guild_id.and_then(|guild_id| client.guilds().get(guild_id)));

    if guild.is_none() && !options.allow_unknown_guild {
        tracing::debug!(
            channel_id = %data.id,
            guild_id = ?data.guild_id,
            "skipping channel for unknown guild"
        );
        return None;
    }

    let Some(kind) = ChannelKind::for_guild_type(data.channel_type) else {
        tracing::debug!(
            channel_id = %data.id,
            channel_type = i64::from(data.channel_type),
            "no guild channel representation for type"
        );
        return None;
    };

    let channel = Arc::new(client.structures().construct(
        kind,
        ChannelInit {
            client,
            data,
            guild: guild.as_deref(),
            from_interaction: kind == ChannelKind::Thread && options.from_interaction,
        },
    ));

    if !options.allow_unknown_guild {
        if let Some(guild) = &guild {
            if channel.is_thread() {
                register_thread(guild, &channel);
            }
            guild.channels.insert(Arc::clone(&channel));
        }
    }

    tracing::trace!(
        channel_id = %channel.id(),
        kind = kind.as_str(),
        cached = !options.allow_unknown_guild && guild.is_some(),
        "created guild channel"
    );
    Some(channel)
}

fn create_dm_channel(client: &Client, data: &ChannelData) -> Option<Arc<Channel>> {
    let is_group = data.channel_type == ChannelType::GroupDm;
    let kind = if (data.recipients.is_some() && !is_group) || data.channel_type == ChannelType::Dm
    {
        ChannelKind::Dm
    } else if is_group {
        ChannelKind::GroupDm
    } else {
        tracing::debug!(
            channel_id = %data.id,
            channel_type = i64::from(data.channel_type),
            "guildless record is not a direct message"
        );
        return None;
    };

    let channel = client.structures().construct(
        kind,
        ChannelInit {
            client,
            data,
            guild: None,
            from_interaction: false,
        },
    );
    tracing::trace!(channel_id = %data.id, kind = kind.as_str(), "created dm channel");
    Some(Arc::new(channel))
}

/// Insert a thread into its parent's thread cache. Does nothing when the
/// parent is not cached or cannot own threads.
fn register_thread(guild: &Guild, thread: &Arc<Channel>) {
    let Some(parent) = thread.parent(guild) else {
        return;
    };
    if let Some(threads) = parent.threads() {
        threads.insert(Arc::clone(thread));
    }
}
