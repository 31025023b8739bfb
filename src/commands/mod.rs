use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use serenity::all::{GuildId, UserId};

use crate::{
    afk::AfkStore,
    chat::Chat,
    config,
    events::{ComponentKind, InteractionEvent, MessageEvent},
};

pub mod afk;
pub mod executor;
pub mod help;
pub mod ping;
pub mod registry;

pub use executor::CommandExecutor;
pub use registry::{HandlerRecord, HandlerRegistry, HandlerSource};

/// A unit of bot logic bound to a text command or a message component.
///
/// `args` are the whitespace-separated words after the command name, or the
/// submitted values of a select menu / modal.
///
/// A handler answers at most once, through [`HandlerContext::reply`]. If it
/// fails before answering, the executor answers with a generic failure
/// message instead; if it fails after answering, the failure is only logged.
#[serenity::async_trait]
pub trait CommandHandler: Send + Sync {
    async fn run(&self, cx: &HandlerContext, args: &[String]) -> anyhow::Result<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HandlerKind {
    Command,
    Button,
    Modal,
    SelectMenu,
}
impl From<ComponentKind> for HandlerKind {
    fn from(kind: ComponentKind) -> Self {
        match kind {
            ComponentKind::Button => HandlerKind::Button,
            ComponentKind::Modal => HandlerKind::Modal,
            ComponentKind::SelectMenu => HandlerKind::SelectMenu,
        }
    }
}
impl fmt::Display for HandlerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HandlerKind::Command => "command",
            HandlerKind::Button => "button",
            HandlerKind::Modal => "modal",
            HandlerKind::SelectMenu => "select menu",
        })
    }
}

/// The handlers that ship with the bot
pub struct BuiltinHandlers;
impl HandlerSource for BuiltinHandlers {
    fn handlers(&self) -> Vec<HandlerRecord> {
        use crate::constant::commands as c;
        vec![
            HandlerRecord::new(HandlerKind::Command, c::PING, ping::Handler),
            HandlerRecord::new(HandlerKind::Command, c::AFK, afk::Handler),
            HandlerRecord::new(HandlerKind::Command, c::HELP, help::Handler),
        ]
    }
}

/// What triggered a handler
#[derive(Clone, Debug)]
pub enum Origin {
    Message(MessageEvent),
    Interaction(InteractionEvent),
}

pub struct HandlerContext {
    pub chat: Arc<dyn Chat>,
    pub afk: Arc<dyn AfkStore>,
    pub registry: Arc<HandlerRegistry>,
    pub config: Arc<config::Discord>,
    pub origin: Origin,
    replied: AtomicBool,
}
impl HandlerContext {
    pub fn new(
        chat: Arc<dyn Chat>,
        afk: Arc<dyn AfkStore>,
        registry: Arc<HandlerRegistry>,
        config: Arc<config::Discord>,
        origin: Origin,
    ) -> Self {
        Self {
            chat,
            afk,
            registry,
            config,
            origin,
            replied: AtomicBool::new(false),
        }
    }

    pub fn guild_id(&self) -> Option<GuildId> {
        match &self.origin {
            Origin::Message(msg) => msg.guild_id,
            Origin::Interaction(interaction) => interaction.guild_id,
        }
    }

    pub fn user_id(&self) -> UserId {
        match &self.origin {
            Origin::Message(msg) => msg.author.id,
            Origin::Interaction(interaction) => interaction.user_id,
        }
    }

    /// Answers whoever triggered the handler: a reply to their message, or an
    /// ephemeral response to their interaction.
    pub async fn reply(&self, content: &str) -> anyhow::Result<()> {
        match &self.origin {
            Origin::Message(msg) => {
                self.chat.reply(msg.message_ref(), content).await?;
            }
            Origin::Interaction(interaction) => {
                self.chat
                    .respond(&interaction.interaction_ref(), content, true)
                    .await?;
            }
        }
        self.replied.store(true, Ordering::SeqCst);
        Ok(())
    }

    /// Whether [`Self::reply`] has delivered an answer yet
    pub fn has_replied(&self) -> bool {
        self.replied.load(Ordering::SeqCst)
    }
}
