use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serenity::all::ChannelId;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Configuration {
    pub authentication: Authentication,
    pub discord: Discord,
    pub afk: Afk,
}
impl Configuration {
    const FILENAME: &str = "config.toml";
    const TOKEN_ENV: &str = "DISCORD_TOKEN";

    pub fn load() -> anyhow::Result<Self> {
        let mut config = if let Ok(file) = std::fs::read_to_string(Self::FILENAME) {
            toml::from_str(&file).context("failed to load config")?
        } else {
            Self::default()
        };
        config.save()?;

        // Never written back, so tokens supplied by the environment stay out of the file
        if let Ok(token) = std::env::var(Self::TOKEN_ENV)
            && !token.is_empty()
        {
            config.authentication.discord_token = Some(token);
        }

        Ok(config)
    }

    fn save(&self) -> anyhow::Result<()> {
        Ok(std::fs::write(
            Self::FILENAME,
            toml::to_string_pretty(self)?,
        )?)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Authentication {
    pub discord_token: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Discord {
    /// Literal that starts every text command. Matched case-sensitively.
    pub prefix: String,
    /// Channel that receives the welcome notice when a member joins
    pub welcome_channel_id: Option<u64>,
    /// Channel that receives the rules notice when the rules button is pressed
    pub rules_channel_id: Option<u64>,
    /// How long AFK replies and warnings stay up before they are deleted
    pub cleanup_delay_ms: u64,
    pub embed_color: u32,
    /// Shown by the rules button, one field per rule
    pub rules: Vec<String>,
}
impl Discord {
    pub fn welcome_channel(&self) -> Option<ChannelId> {
        self.welcome_channel_id.filter(|id| *id != 0).map(ChannelId::new)
    }

    pub fn rules_channel(&self) -> Option<ChannelId> {
        self.rules_channel_id.filter(|id| *id != 0).map(ChannelId::new)
    }

    pub fn cleanup_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.cleanup_delay_ms)
    }
}

impl Default for Discord {
    fn default() -> Self {
        Self {
            prefix: "anya".to_string(),
            welcome_channel_id: None,
            rules_channel_id: None,
            cleanup_delay_ms: 4000,
            embed_color: 0x0099ff,
            rules: vec![
                "Be respectful to other members.".to_string(),
                "No spam or unsolicited advertising.".to_string(),
                "Keep conversations in the right channel.".to_string(),
            ],
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Afk {
    pub backend: AfkBackend,
    /// File backing the `json` backend
    pub store_path: PathBuf,
}

impl Default for Afk {
    fn default() -> Self {
        Self {
            backend: AfkBackend::Json,
            store_path: PathBuf::from("afk.json"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AfkBackend {
    /// Persisted to `store_path`
    Json,
    /// Lost on restart
    Memory,
}
