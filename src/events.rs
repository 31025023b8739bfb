//! Platform-neutral views of the gateway events the dispatcher reacts to.
//!
//! The gateway adapter in `main.rs` builds these from serenity models; tests
//! build them directly.

use serenity::all::{ChannelId, GuildId, InteractionId, MessageId, UserId};

use crate::chat::MessageRef;

#[derive(Clone, Debug)]
pub enum InboundEvent {
    Message(MessageEvent),
    MemberJoin(MemberJoinEvent),
    Interaction(InteractionEvent),
}

#[derive(Clone, Debug)]
pub struct Author {
    pub id: UserId,
    /// `name` or `name#1234`
    pub tag: String,
    /// Nickname if one is set in the guild, otherwise the global display name
    pub display_name: String,
    pub bot: bool,
}

#[derive(Clone, Debug)]
pub struct Mention {
    pub id: UserId,
    pub tag: String,
}
impl Mention {
    /// Whether the mention was typed into the text rather than attached some other way
    /// (e.g. a reply ping). Both `<@id>` and the legacy `<@!id>` forms count.
    pub fn appears_in(&self, content: &str) -> bool {
        content.contains(&format!("<@{}>", self.id)) || content.contains(&format!("<@!{}>", self.id))
    }
}

#[derive(Clone, Debug)]
pub struct MessageEvent {
    pub id: MessageId,
    pub channel_id: ChannelId,
    pub guild_id: Option<GuildId>,
    pub author: Author,
    /// Sent by the bot's own account
    pub from_self: bool,
    pub content: String,
    /// In the order the platform reports them
    pub mentions: Vec<Mention>,
}
impl MessageEvent {
    pub fn message_ref(&self) -> MessageRef {
        MessageRef {
            channel_id: self.channel_id,
            message_id: self.id,
        }
    }
}

#[derive(Clone, Debug)]
pub struct MemberJoinEvent {
    pub guild_id: GuildId,
    pub user_id: UserId,
    pub tag: String,
    pub avatar_url: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComponentKind {
    Button,
    SelectMenu,
    Modal,
}

#[derive(Clone, Debug)]
pub struct InteractionEvent {
    pub id: InteractionId,
    pub token: String,
    pub kind: ComponentKind,
    pub custom_id: String,
    pub guild_id: Option<GuildId>,
    pub channel_id: ChannelId,
    pub user_id: UserId,
    /// Selected options for select menus, field values for modals, empty for buttons
    pub values: Vec<String>,
}
impl InteractionEvent {
    pub fn interaction_ref(&self) -> crate::chat::InteractionRef {
        crate::chat::InteractionRef {
            id: self.id,
            token: self.token.clone(),
        }
    }
}
