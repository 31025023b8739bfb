//! Routes each inbound event to the code that handles it.
//!
//! Messages pass through an ordered list of [`MessageStage`]s. Every stage
//! sees every accepted message; a failing stage is logged and the remaining
//! stages still run. Interactions go to a built-in component or the handler
//! registry, and member joins produce a welcome notice.

use std::sync::Arc;

use crate::{
    afk::AfkStore,
    chat::Chat,
    commands::{CommandExecutor, HandlerContext, HandlerRegistry, Origin},
    config,
    events::{InboundEvent, MemberJoinEvent, MessageEvent},
    janitor::Janitor,
};

mod afk;
mod command;
mod interaction;
mod notices;

pub use afk::AfkStage;
pub use command::CommandStage;

/// Dependencies shared by every stage and handler
#[derive(Clone)]
pub struct Services {
    pub config: Arc<config::Discord>,
    pub registry: Arc<HandlerRegistry>,
    pub afk: Arc<dyn AfkStore>,
    pub chat: Arc<dyn Chat>,
    pub janitor: Janitor,
    pub executor: CommandExecutor,
}
impl Services {
    pub fn context(&self, origin: Origin) -> HandlerContext {
        HandlerContext::new(
            self.chat.clone(),
            self.afk.clone(),
            self.registry.clone(),
            self.config.clone(),
            origin,
        )
    }
}

#[serenity::async_trait]
pub trait MessageStage: Send + Sync {
    fn name(&self) -> &'static str;
    async fn run(&self, services: &Services, msg: &MessageEvent) -> anyhow::Result<()>;
}

pub struct Dispatcher {
    services: Services,
    stages: Vec<Box<dyn MessageStage>>,
}
impl Dispatcher {
    /// A dispatcher running the AFK stage, then the command stage
    pub fn new(
        config: config::Discord,
        registry: Arc<HandlerRegistry>,
        afk: Arc<dyn AfkStore>,
        chat: Arc<dyn Chat>,
    ) -> Self {
        Self::with_stages(
            config,
            registry,
            afk,
            chat,
            vec![Box::new(AfkStage), Box::new(CommandStage)],
        )
    }

    pub fn with_stages(
        config: config::Discord,
        registry: Arc<HandlerRegistry>,
        afk: Arc<dyn AfkStore>,
        chat: Arc<dyn Chat>,
        stages: Vec<Box<dyn MessageStage>>,
    ) -> Self {
        Self {
            services: Services {
                config: Arc::new(config),
                executor: CommandExecutor::new(registry.clone()),
                registry,
                afk,
                janitor: Janitor::new(chat.clone()),
                chat,
            },
            stages,
        }
    }

    pub fn config(&self) -> &config::Discord {
        &self.services.config
    }

    pub async fn dispatch(&self, event: InboundEvent) {
        match event {
            InboundEvent::Message(msg) => self.on_message(msg).await,
            InboundEvent::MemberJoin(member) => self.on_member_join(member).await,
            InboundEvent::Interaction(interaction) => {
                let custom_id = interaction.custom_id.clone();
                if let Err(err) = interaction::handle(&self.services, interaction).await {
                    tracing::error!("Error handling interaction `{custom_id}`: {err:#}");
                }
            }
        }
    }

    async fn on_message(&self, msg: MessageEvent) {
        if msg.from_self || msg.author.bot || msg.guild_id.is_none() {
            return;
        }

        for stage in &self.stages {
            if let Err(err) = stage.run(&self.services, &msg).await {
                tracing::error!(
                    "{} stage failed on message {} from {}: {err:#}",
                    stage.name(),
                    msg.id,
                    msg.author.id
                );
            }
        }
    }

    async fn on_member_join(&self, member: MemberJoinEvent) {
        let Some(channel_id) = self.services.config.welcome_channel() else {
            return;
        };

        let notice = notices::welcome(&self.services.config, &member);
        match self.services.chat.send_notice(channel_id, &notice).await {
            Ok(_) => tracing::info!("Welcomed {} to guild {}", member.tag, member.guild_id),
            Err(err) => tracing::error!("Failed to welcome {}: {err:#}", member.user_id),
        }
    }
}
