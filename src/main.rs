use std::sync::Arc;

use anyhow::Context as AnyhowContext;
use serenity::{
    Client,
    all::{Context, EventHandler, Http, Interaction, Member, Message, Ready},
    async_trait,
    model::prelude::GatewayIntents,
};

mod afk;
mod chat;
mod commands;
mod config;
mod constant;
mod dispatch;
mod events;
mod janitor;
#[cfg(test)]
mod testing;
mod util;

use config::{AfkBackend, Configuration};

use crate::{
    afk::{AfkStore, JsonAfkStore, MemoryAfkStore},
    chat::DiscordChat,
    commands::{BuiltinHandlers, HandlerRegistry},
    dispatch::Dispatcher,
    events::InboundEvent,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Configuration::load()?;
    let discord_token = config
        .authentication
        .discord_token
        .as_deref()
        .context("Expected authentication.discord_token to be filled in config")?;

    let afk_store: Arc<dyn AfkStore> = match config.afk.backend {
        AfkBackend::Json => {
            let store = JsonAfkStore::open(&config.afk.store_path)
                .await
                .context("failed to open AFK store")?;
            tracing::info!("AFK records are stored in {}", store.path().display());
            Arc::new(store)
        }
        AfkBackend::Memory => {
            tracing::warn!("AFK records are kept in memory and will not survive a restart");
            Arc::new(MemoryAfkStore::new())
        }
    };

    let registry = Arc::new(HandlerRegistry::from_source(&BuiltinHandlers));
    if registry.is_empty() {
        tracing::warn!("No handlers registered; commands and components will be ignored");
    } else {
        tracing::info!("Registered {} handlers", registry.len());
    }

    let chat = Arc::new(DiscordChat::new(Arc::new(Http::new(discord_token))));
    let dispatcher = Dispatcher::new(config.discord.clone(), registry, afk_store, chat);

    let mut client = Client::builder(
        discord_token,
        GatewayIntents::GUILDS
            | GatewayIntents::GUILD_MEMBERS
            | GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::MESSAGE_CONTENT,
    )
    .event_handler(Handler {
        dispatcher: Arc::new(dispatcher),
    })
    .await
    .context("Error creating client")?;

    if let Err(why) = client.start().await {
        tracing::error!("Client error: {why:?}");
    }

    Ok(())
}

/// Feeds gateway events to the dispatcher
pub struct Handler {
    dispatcher: Arc<Dispatcher>,
}
#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        tracing::info!(
            "{} is connected and listening for `{}`",
            ready.user.name,
            self.dispatcher.config().prefix
        );
    }

    async fn message(&self, ctx: Context, msg: Message) {
        let current_user = ctx.cache.current_user().id;
        let event = util::message_event(&msg, current_user);
        self.dispatcher.dispatch(InboundEvent::Message(event)).await;
    }

    async fn guild_member_addition(&self, _ctx: Context, new_member: Member) {
        let event = util::member_join_event(&new_member);
        self.dispatcher
            .dispatch(InboundEvent::MemberJoin(event))
            .await;
    }

    async fn interaction_create(&self, _ctx: Context, interaction: Interaction) {
        let Some(event) = util::interaction_event(&interaction) else {
            return;
        };
        self.dispatcher
            .dispatch(InboundEvent::Interaction(event))
            .await;
    }
}
