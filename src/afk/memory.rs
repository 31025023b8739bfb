use std::sync::Mutex;

use serenity::all::{GuildId, UserId};

use super::{AfkRecord, AfkStore, AfkStoreError, upsert};

/// Process-local AFK store. Nothing survives a restart.
#[derive(Default)]
pub struct MemoryAfkStore {
    records: Mutex<Vec<AfkRecord>>,
}
impl MemoryAfkStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[serenity::async_trait]
impl AfkStore for MemoryAfkStore {
    async fn set_afk(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        nickname: &str,
        message: &str,
    ) -> Result<(), AfkStoreError> {
        upsert(
            &mut self.records.lock().unwrap(),
            AfkRecord {
                guild_id,
                user_id,
                nickname: nickname.to_string(),
                message: message.to_string(),
            },
        );
        Ok(())
    }

    async fn find_afk(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<Option<AfkRecord>, AfkStoreError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.is_for(guild_id, user_id))
            .cloned())
    }

    async fn clear_afk(&self, guild_id: GuildId, user_id: UserId) -> Result<(), AfkStoreError> {
        self.records
            .lock()
            .unwrap()
            .retain(|r| !r.is_for(guild_id, user_id));
        Ok(())
    }
}
