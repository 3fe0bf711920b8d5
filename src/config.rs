use crate::error::{Error, Result};
use crate::factory::CreateChannelOptions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Keep every channel built through [`crate::client::Client::add_channel`]
    /// in the client-wide channel cache.
    pub cache_channels: bool,
    /// Default for [`CreateChannelOptions::allow_unknown_guild`].
    pub allow_unknown_guild: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            cache_channels: true,
            allow_unknown_guild: false,
        }
    }
}

/// Read a boolean flag. Unset falls back to `default`; anything other than
/// `1`, `0`, `true` or `false` (any case) is rejected.
fn env_flag(name: &'static str, default: bool) -> Result<bool> {
    let Ok(value) = std::env::var(name) else {
        return Ok(default);
    };
    let flag = value.trim().to_ascii_lowercase();
    match flag.as_str() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(Error::Config { name, value }),
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            cache_channels: env_flag("ACCORD_CACHE_CHANNELS", defaults.cache_channels)?,
            allow_unknown_guild: env_flag(
                "ACCORD_ALLOW_UNKNOWN_GUILD",
                defaults.allow_unknown_guild,
            )?,
        })
    }

    pub fn default_options(&self) -> CreateChannelOptions {
        CreateChannelOptions {
            allow_unknown_guild: self.allow_unknown_guild,
            from_interaction: false,
        }
    }
}
