#![allow(dead_code)]

use std::sync::Arc;

use accordclient::models::channel::ChannelData;
use accordclient::models::guild::GuildData;
use accordclient::{Client, ClientConfig, Guild};

/// Decode a channel record from a JSON literal.
pub fn channel_data(value: serde_json::Value) -> ChannelData {
    serde_json::from_value(value).expect("invalid channel fixture")
}

pub fn guild_data(id: &str, name: &str) -> GuildData {
    GuildData {
        id: id.to_string(),
        name: name.to_string(),
        icon: None,
        owner_id: None,
    }
}

/// A client with default config and one cached guild.
pub fn client_with_guild(guild_id: &str) -> (Client, Arc<Guild>) {
    let client = Client::new(ClientConfig::default());
    let guild = client.add_guild(&guild_data(guild_id, "Test Guild"));
    (client, guild)
}
