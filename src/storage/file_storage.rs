use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::{
    domain::Theme,
    error::Result,
    storage::{Snapshot, Storage, DATA_KEY, THEME_KEY},
};

/// File-backed key-value storage: each key is persisted as a pretty-printed
/// JSON file inside the data directory.
pub struct FileStorage {
    data_dir: PathBuf,
}

impl FileStorage {
    /// Creates storage rooted at the given data directory. The directory is
    /// created on first write.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    fn key_file(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }

    async fn write_key<T: serde::Serialize>(&self, key: &str, value: &T) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).await?;
        }

        let json = serde_json::to_string_pretty(value)?;
        fs::write(self.key_file(key), json).await?;
        debug!(key, "persisted");
        Ok(())
    }

    async fn read_key<T: serde::de::DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let file_path = self.key_file(key);
        if !file_path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&file_path).await?;
        let value = serde_json::from_str(&contents)?;
        Ok(Some(value))
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn save(&self, snapshot: &Snapshot) -> Result<()> {
        self.write_key(DATA_KEY, snapshot).await
    }

    async fn load(&self) -> Result<Option<Snapshot>> {
        self.read_key(DATA_KEY).await
    }

    async fn save_theme(&self, theme: Theme) -> Result<()> {
        self.write_key(THEME_KEY, &theme).await
    }

    async fn load_theme(&self) -> Result<Option<Theme>> {
        self.read_key(THEME_KEY).await
    }
}
