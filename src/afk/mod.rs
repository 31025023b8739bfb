//! "Away from keyboard" status, keyed by (guild, user).

use serde::{Deserialize, Serialize};
use serenity::all::{GuildId, UserId};

mod error;
mod json;
mod memory;

pub use error::AfkStoreError;
pub use json::JsonAfkStore;
pub use memory::MemoryAfkStore;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AfkRecord {
    pub guild_id: GuildId,
    pub user_id: UserId,
    /// Display name the user had when they went AFK; restored when they return
    pub nickname: String,
    /// Free-text reason; empty when none was given
    #[serde(default)]
    pub message: String,
}
impl AfkRecord {
    fn is_for(&self, guild_id: GuildId, user_id: UserId) -> bool {
        self.guild_id == guild_id && self.user_id == user_id
    }
}

/// Persistence for AFK records. At most one record exists per (guild, user).
#[serenity::async_trait]
pub trait AfkStore: Send + Sync {
    /// Inserts or replaces the record for (guild, user)
    async fn set_afk(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        nickname: &str,
        message: &str,
    ) -> Result<(), AfkStoreError>;
    async fn find_afk(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<Option<AfkRecord>, AfkStoreError>;
    /// Removes every record for (guild, user)
    async fn clear_afk(&self, guild_id: GuildId, user_id: UserId) -> Result<(), AfkStoreError>;
}

/// Upsert over an in-memory document set. Shared by both backends.
fn upsert(records: &mut Vec<AfkRecord>, record: AfkRecord) {
    records.retain(|r| !r.is_for(record.guild_id, record.user_id));
    records.push(record);
}
