pub mod cache;
pub mod channels;
pub mod client;
pub mod config;
pub mod document;
pub mod error;
pub mod factory;
pub mod guild;
pub mod models;
pub mod snowflake;
pub mod structures;

pub use channels::{Channel, ChannelKind};
pub use client::Client;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use factory::{create_channel, CreateChannelOptions};
pub use guild::Guild;
pub use models::forum::{
    transform_api_default_reaction, transform_api_forum_tag, transform_default_reaction,
    transform_forum_tag,
};
pub use structures::{ChannelInit, Structures};
