//! The side-effect port: everything the bot says or changes goes through [`Chat`].

use serenity::all::{ChannelId, GuildId, InteractionId, MessageId, UserId};

mod discord;
#[cfg(test)]
pub mod recording;

pub use discord::DiscordChat;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MessageRef {
    pub channel_id: ChannelId,
    pub message_id: MessageId,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InteractionRef {
    pub id: InteractionId,
    pub token: String,
}

/// A rich message. Rendered as an embed, optionally with a single button below it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub thumbnail: Option<String>,
    pub fields: Vec<NoticeField>,
    pub button: Option<NoticeButton>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NoticeField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NoticeButton {
    pub custom_id: String,
    pub label: String,
}

#[serenity::async_trait]
pub trait Chat: Send + Sync {
    /// Replies to `to` in its channel and returns the new message
    async fn reply(&self, to: MessageRef, content: &str) -> anyhow::Result<MessageRef>;
    async fn send_notice(&self, channel_id: ChannelId, notice: &Notice)
    -> anyhow::Result<MessageRef>;
    async fn delete(&self, message: MessageRef) -> anyhow::Result<()>;
    async fn set_nickname(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        nickname: &str,
    ) -> anyhow::Result<()>;
    async fn respond(
        &self,
        interaction: &InteractionRef,
        content: &str,
        ephemeral: bool,
    ) -> anyhow::Result<()>;
}
