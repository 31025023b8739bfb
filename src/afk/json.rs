use std::path::{Path, PathBuf};

use serenity::all::{GuildId, UserId};
use tokio::sync::Mutex;

use super::{AfkRecord, AfkStore, AfkStoreError, upsert};

/// AFK store persisted as a JSON array of records.
///
/// The document set is held in memory and the file is rewritten after every
/// mutation (via a temporary sibling file and a rename, so a crash mid-write
/// leaves the previous version intact). A mutation whose write fails is not
/// applied in memory either.
pub struct JsonAfkStore {
    path: PathBuf,
    records: Mutex<Vec<AfkRecord>>,
}
impl JsonAfkStore {
    /// Opens the store at `path`. A missing file is an empty store.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, AfkStoreError> {
        let path = path.into();
        let records = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Vec::new(),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| AfkStoreError::Json {
                path: path.clone(),
                source,
            })?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(source) => return Err(AfkStoreError::Io { path, source }),
        };

        tracing::debug!("Loaded {} AFK records from {}", records.len(), path.display());
        Ok(Self {
            path,
            records: Mutex::new(records),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, records: &[AfkRecord]) -> Result<(), AfkStoreError> {
        let io_err = |source| AfkStoreError::Io {
            path: self.path.clone(),
            source,
        };

        let bytes = serde_json::to_vec_pretty(records).map_err(|source| AfkStoreError::Json {
            path: self.path.clone(),
            source,
        })?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        tokio::fs::write(&tmp, bytes).await.map_err(io_err)?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(io_err)?;
        Ok(())
    }
}

#[serenity::async_trait]
impl AfkStore for JsonAfkStore {
    async fn set_afk(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        nickname: &str,
        message: &str,
    ) -> Result<(), AfkStoreError> {
        let mut records = self.records.lock().await;
        let mut next = records.clone();
        upsert(
            &mut next,
            AfkRecord {
                guild_id,
                user_id,
                nickname: nickname.to_string(),
                message: message.to_string(),
            },
        );
        self.persist(&next).await?;
        *records = next;
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
            .await
            .iter()
            .find(|r| r.is_for(guild_id, user_id))
            .cloned())
    }

    async fn clear_afk(&self, guild_id: GuildId, user_id: UserId) -> Result<(), AfkStoreError> {
        let mut records = self.records.lock().await;
        if !records.iter().any(|r| r.is_for(guild_id, user_id)) {
            return Ok(());
        }
        let next: Vec<_> = records
            .iter()
            .filter(|r| !r.is_for(guild_id, user_id))
            .cloned()
            .collect();
        self.persist(&next).await?;
        *records = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    const GUILD: GuildId = GuildId::new(1);
    const USER: UserId = UserId::new(10);

    fn scratch_path(name: &str) -> PathBuf {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!(
            "anyacord-{}-{name}-{n}.json",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        path
    }

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let path = scratch_path("missing");
        let store = JsonAfkStore::open(&path).await.unwrap();
        assert!(store.find_afk(GUILD, USER).await.unwrap().is_none());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_records_survive_reopen() {
        let path = scratch_path("reopen");
        {
            let store = JsonAfkStore::open(&path).await.unwrap();
            store.set_afk(GUILD, USER, "Anya", "lunch").await.unwrap();
        }

        let store = JsonAfkStore::open(&path).await.unwrap();
        let record = store.find_afk(GUILD, USER).await.unwrap().unwrap();
        assert_eq!(record.nickname, "Anya");
        assert_eq!(record.message, "lunch");

        store.clear_afk(GUILD, USER).await.unwrap();
        let store = JsonAfkStore::open(&path).await.unwrap();
        assert!(store.find_afk(GUILD, USER).await.unwrap().is_none());

        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_corrupt_file_is_reported() {
        let path = scratch_path("corrupt");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonAfkStore::open(&path).await.err().unwrap();
        assert!(matches!(err, AfkStoreError::Json { .. }));

        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_record_without_message_loads() {
        let path = scratch_path("no-message");
        std::fs::write(
            &path,
            r#"[{"guild_id": "1", "user_id": "10", "nickname": "Anya"}]"#,
        )
        .unwrap();

        let store = JsonAfkStore::open(&path).await.unwrap();
        let record = store.find_afk(GUILD, USER).await.unwrap().unwrap();
        assert_eq!(record.message, "");

        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_clear_removes_duplicate_records() {
        let path = scratch_path("duplicates");
        std::fs::write(
            &path,
            r#"[
                {"guild_id": "1", "user_id": "10", "nickname": "Anya", "message": "lunch"},
                {"guild_id": "1", "user_id": "11", "nickname": "Bond", "message": ""},
                {"guild_id": "1", "user_id": "10", "nickname": "Anya", "message": "nap"}
            ]"#,
        )
        .unwrap();

        let store = JsonAfkStore::open(&path).await.unwrap();
        store.clear_afk(GUILD, USER).await.unwrap();
        assert!(store.find_afk(GUILD, USER).await.unwrap().is_none());

        let store = JsonAfkStore::open(&path).await.unwrap();
        assert!(store.find_afk(GUILD, USER).await.unwrap().is_none());
        assert!(
            store
                .find_afk(GUILD, UserId::new(11))
                .await
                .unwrap()
                .is_some()
        );

        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_failed_write_leaves_records_unchanged() {
        let dir = scratch_path("unwritable").with_extension("d");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("afk.json");

        let store = JsonAfkStore::open(&path).await.unwrap();
        store.set_afk(GUILD, USER, "Anya", "lunch").await.unwrap();

        std::fs::remove_dir_all(&dir).unwrap();

        let other = UserId::new(11);
        let err = store.set_afk(GUILD, other, "Bond", "").await.err().unwrap();
        assert!(matches!(err, AfkStoreError::Io { .. }));
        assert!(store.find_afk(GUILD, other).await.unwrap().is_none());

        assert!(store.clear_afk(GUILD, USER).await.is_err());
        let record = store.find_afk(GUILD, USER).await.unwrap().unwrap();
        assert_eq!(record.message, "lunch");
    }
}
