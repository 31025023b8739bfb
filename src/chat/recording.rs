use std::sync::{
    Mutex,
    atomic::{AtomicBool, AtomicU64, Ordering},
};

use serenity::all::{ChannelId, GuildId, MessageId, UserId};

use super::{Chat, InteractionRef, MessageRef, Notice};

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Reply {
        to: MessageRef,
        content: String,
        sent: MessageRef,
    },
    Notice {
        channel_id: ChannelId,
        notice: Notice,
        sent: MessageRef,
    },
    Delete(MessageRef),
    SetNickname {
        guild_id: GuildId,
        user_id: UserId,
        nickname: String,
    },
    Respond {
        interaction: InteractionRef,
        content: String,
        ephemeral: bool,
    },
}

/// [`Chat`] that records every side effect instead of performing it
pub struct RecordingChat {
    actions: Mutex<Vec<Action>>,
    next_message_id: AtomicU64,
    pub fail_nickname: AtomicBool,
    pub fail_delete: AtomicBool,
}
impl Default for RecordingChat {
    fn default() -> Self {
        Self {
            actions: Mutex::new(Vec::new()),
            next_message_id: AtomicU64::new(9000),
            fail_nickname: AtomicBool::new(false),
            fail_delete: AtomicBool::new(false),
        }
    }
}
impl RecordingChat {
    pub fn actions(&self) -> Vec<Action> {
        self.actions.lock().unwrap().clone()
    }

    pub fn replies(&self) -> Vec<String> {
        self.actions()
            .into_iter()
            .filter_map(|action| match action {
                Action::Reply { content, .. } => Some(content),
                _ => None,
            })
            .collect()
    }

    pub fn deletions(&self) -> Vec<MessageRef> {
        self.actions()
            .into_iter()
            .filter_map(|action| match action {
                Action::Delete(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.actions.lock().unwrap().clear();
    }

    fn record(&self, action: Action) {
        self.actions.lock().unwrap().push(action);
    }

    fn allocate(&self, channel_id: ChannelId) -> MessageRef {
        MessageRef {
            channel_id,
            message_id: MessageId::new(self.next_message_id.fetch_add(1, Ordering::SeqCst)),
        }
    }
}

#[serenity::async_trait]
impl Chat for RecordingChat {
    async fn reply(&self, to: MessageRef, content: &str) -> anyhow::Result<MessageRef> {
        let sent = self.allocate(to.channel_id);
        self.record(Action::Reply {
            to,
            content: content.to_string(),
            sent,
        });
        Ok(sent)
    }

    async fn send_notice(
        &self,
        channel_id: ChannelId,
        notice: &Notice,
    ) -> anyhow::Result<MessageRef> {
        let sent = self.allocate(channel_id);
        self.record(Action::Notice {
            channel_id,
            notice: notice.clone(),
            sent,
        });
        Ok(sent)
    }

    async fn delete(&self, message: MessageRef) -> anyhow::Result<()> {
        if self.fail_delete.load(Ordering::SeqCst) {
            anyhow::bail!("Unknown Message");
        }
        self.record(Action::Delete(message));
        Ok(())
    }

    async fn set_nickname(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        nickname: &str,
    ) -> anyhow::Result<()> {
        if self.fail_nickname.load(Ordering::SeqCst) {
            anyhow::bail!("Missing Permissions");
        }
        self.record(Action::SetNickname {
            guild_id,
            user_id,
            nickname: nickname.to_string(),
        });
        Ok(())
    }

    async fn respond(
        &self,
        interaction: &InteractionRef,
        content: &str,
        ephemeral: bool,
    ) -> anyhow::Result<()> {
        self.record(Action::Respond {
            interaction: interaction.clone(),
            content: content.to_string(),
            ephemeral,
        });
        Ok(())
    }
}
