//! Fixtures shared by the unit tests

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use serenity::all::{ChannelId, GuildId, InteractionId, MessageId, UserId};

use crate::{
    afk::MemoryAfkStore,
    chat::recording::RecordingChat,
    commands::{HandlerContext, HandlerRegistry, Origin},
    config,
    events::{Author, ComponentKind, InteractionEvent, Mention, MessageEvent},
};

pub const GUILD: GuildId = GuildId::new(100);
pub const CHANNEL: ChannelId = ChannelId::new(200);
pub const AUTHOR: UserId = UserId::new(300);
pub const AWAY: UserId = UserId::new(301);

fn next_message_id() -> MessageId {
    static NEXT: AtomicU64 = AtomicU64::new(1);
    MessageId::new(NEXT.fetch_add(1, Ordering::SeqCst))
}

pub fn tag(user_id: UserId) -> String {
    if user_id == AUTHOR {
        "author".to_string()
    } else if user_id == AWAY {
        "away".to_string()
    } else {
        format!("user{user_id}")
    }
}

/// A guild message from `author`. Any `<@id>` tokens in `content` become mentions.
pub fn message(author: UserId, content: &str) -> MessageEvent {
    let mentions = content
        .split("<@")
        .skip(1)
        .filter_map(|rest| rest.trim_start_matches('!').split('>').next())
        .filter_map(|id| id.parse::<u64>().ok())
        .map(|id| Mention {
            id: UserId::new(id),
            tag: tag(UserId::new(id)),
        })
        .collect();

    MessageEvent {
        id: next_message_id(),
        channel_id: CHANNEL,
        guild_id: Some(GUILD),
        author: Author {
            id: author,
            tag: tag(author),
            display_name: if author == AUTHOR {
                "Author".to_string()
            } else {
                format!("User {author}")
            },
            bot: false,
        },
        from_self: false,
        content: content.to_string(),
        mentions,
    }
}

pub fn interaction(kind: ComponentKind, custom_id: &str, values: &[&str]) -> InteractionEvent {
    InteractionEvent {
        id: InteractionId::new(555),
        token: "token".to_string(),
        kind,
        custom_id: custom_id.to_string(),
        guild_id: Some(GUILD),
        channel_id: CHANNEL,
        user_id: AUTHOR,
        values: values.iter().map(|v| v.to_string()).collect(),
    }
}

pub fn context(
    chat: Arc<RecordingChat>,
    registry: Arc<HandlerRegistry>,
    origin: Origin,
) -> HandlerContext {
    HandlerContext::new(
        chat,
        Arc::new(MemoryAfkStore::new()),
        registry,
        Arc::new(config::Discord::default()),
        origin,
    )
}
