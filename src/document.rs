//! Loading a JSON snapshot of guilds and channel records into a client.

use std::fmt::Write as _;
use std::io::Read;
use std::sync::Arc;

use serde::Deserialize;

use crate::channels::Channel;
use crate::client::Client;
use crate::error::Result;
use crate::factory::CreateChannelOptions;
use crate::models::channel::ChannelData;
use crate::models::guild::GuildData;

#[derive(Debug, Default, Deserialize)]
pub struct ChannelDocument {
    #[serde(default)]
    pub guilds: Vec<GuildData>,
    #[serde(default)]
    pub channels: Vec<ChannelData>,
}

#[derive(Debug, Default)]
pub struct ApplyReport {
    pub created: Vec<Arc<Channel>>,
    /// Ids of records the factory produced nothing for.
    pub skipped: Vec<String>,
}

impl ChannelDocument {
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn parse(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Register the guilds, then build every channel. Non-thread channels go
    /// first so threads find their parents already cached.
    pub fn apply(&self, client: &Client, options: CreateChannelOptions) -> ApplyReport {
        for guild in &self.guilds {
            client.add_guild(guild);
        }

        let (threads, others): (Vec<&ChannelData>, Vec<&ChannelData>) = self
            .channels
            .iter()
            .partition(|data| data.channel_type.is_thread());

        let mut report = ApplyReport::default();
        for data in others.into_iter().chain(threads) {
            match client.add_channel_with(data, None, options) {
                Some(channel) => report.created.push(channel),
                None => {
                    tracing::warn!(channel_id = %data.id, "no channel created for record");
                    report.skipped.push(data.id.clone());
                }
            }
        }
        report
    }
}

/// Render the client's guilds, their channels and threads, followed by any
/// cached DM channels.
pub fn render_tree(client: &Client) -> String {
    let mut out = String::new();
    for guild_id in client.guilds().ids() {
        let Some(guild) = client.guilds().get(&guild_id) else {
            continue;
        };
        let _ = writeln!(out, "guild {} ({})", guild.id, guild.name);
        for channel in guild.channels.values() {
            if channel.is_thread() {
                continue;
            }
            let _ = writeln!(out, "  {}", describe(&channel));
            if let Some(threads) = channel.threads() {
                for thread in threads.values() {
                    let _ = writeln!(out, "    {}", describe(&thread));
                }
            }
        }
    }
    for channel in client.channels().values() {
        if channel.is_dm_based() {
            let _ = writeln!(out, "{}", describe(&channel));
        }
    }
    out
}

fn describe(channel: &Channel) -> String {
    match channel.name() {
        Some(name) => format!("{} {} \"{}\"", channel.kind().as_str(), channel.id(), name),
        None => format!("{} {}", channel.kind().as_str(), channel.id()),
    }
}
