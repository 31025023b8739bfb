use std::{sync::Arc, time::Duration};

use tokio::task::AbortHandle;

use crate::chat::{Chat, MessageRef};

/// Deletes messages after a delay
#[derive(Clone)]
pub struct Janitor {
    chat: Arc<dyn Chat>,
}
impl Janitor {
    pub fn new(chat: Arc<dyn Chat>) -> Self {
        Self { chat }
    }

    /// Deletes `messages` once `delay` has passed. Aborting the returned handle
    /// cancels the deletion; dropping it does not.
    pub fn schedule(&self, messages: Vec<MessageRef>, delay: Duration) -> AbortHandle {
        let chat = self.chat.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            for message in messages {
                // Usually means someone deleted it first
                if let Err(err) = chat.delete(message).await {
                    tracing::debug!(
                        "Could not delete message {} in {}: {err}",
                        message.message_id,
                        message.channel_id
                    );
                }
            }
        });

        task.abort_handle()
    }
}
