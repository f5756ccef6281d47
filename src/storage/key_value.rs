use crate::{GameError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Async string key-value storage. Values are JSON documents.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>>> + Send;

    fn set(&self, key: &str, value: String) -> impl Future<Output = Result<()>> + Send;

    fn remove(&self, key: &str) -> impl Future<Output = Result<()>> + Send;
}

pub async fn get_item<T, S>(store: &S, key: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key).await? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

pub async fn set_item<T, S>(store: &S, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let json = serde_json::to_string(value)?;
    store.set(key, json).await
}

// ============================================================================
// IN-MEMORY BACKEND
// ============================================================================

/// Shared in-process map; clones see the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.remove(key);
        Ok(())
    }
}

// ============================================================================
// FILE BACKEND
// ============================================================================

/// One `<key>.json` file per key under a base directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        FileStore {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(GameError::Storage(format!("invalid key '{}'", key)));
        }
        Ok(self.base_dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let path = self.path_for(key)?;
        tokio::fs::create_dir_all(&self.base_dir).await?;
        tokio::fs::write(&path, value).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::game_state::GameState;
    use crate::game::score::Score;
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert!(store.is_empty().await);

        store.set("answer", "42".to_string()).await.unwrap();
        assert_eq!(store.get("answer").await.unwrap(), Some("42".to_string()));
        assert_eq!(store.len().await, 1);

        store.remove("answer").await.unwrap();
        assert_eq!(store.get("answer").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_memory_store_clones_share_data() {
        let store = MemoryStore::new();
        let other = store.clone();
        set_item(&store, "gameState", &GameState::INITIAL.with_score(Score(8)))
            .await
            .unwrap();

        let loaded: Option<GameState> = get_item(&other, "gameState").await.unwrap();
        assert_eq!(loaded, Some(GameState::INITIAL.with_score(Score(8))));
    }

    #[tokio::test]
    async fn test_typed_get_reports_bad_json() {
        let store = MemoryStore::new();
        store.set("gameState", "not json".to_string()).await.unwrap();
        let loaded: Result<Option<GameState>> = get_item(&store, "gameState").await;
        assert_matches!(loaded, Err(GameError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("data"));
        assert_eq!(store.base_dir(), dir.path().join("data"));

        assert_eq!(store.get("highScore").await.unwrap(), None);
        store.set("highScore", "{}".to_string()).await.unwrap();
        assert!(dir.path().join("data").join("highScore.json").exists());
        assert_eq!(store.get("highScore").await.unwrap(), Some("{}".to_string()));

        store.remove("highScore").await.unwrap();
        store.remove("highScore").await.unwrap();
        assert_eq!(store.get("highScore").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_store_rejects_path_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_matches!(store.get("../escape").await, Err(GameError::Storage(_)));
        assert_matches!(store.set("", String::new()).await, Err(GameError::Storage(_)));
    }
}
