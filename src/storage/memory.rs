use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    domain::Theme,
    error::Result,
    storage::{Snapshot, Storage},
};

/// In-process storage backend. Useful for tests and for embedders that
/// want a board without disk persistence.
#[derive(Default)]
pub struct MemoryStorage {
    snapshot: Mutex<Option<Snapshot>>,
    theme: Mutex<Option<Theme>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds the stored snapshot, as if a previous session had saved it
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Mutex::new(Some(snapshot)),
            theme: Mutex::new(None),
        }
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn save(&self, snapshot: &Snapshot) -> Result<()> {
        *self.snapshot.lock().await = Some(snapshot.clone());
        Ok(())
    }

    async fn load(&self) -> Result<Option<Snapshot>> {
        Ok(self.snapshot.lock().await.clone())
    }

    async fn save_theme(&self, theme: Theme) -> Result<()> {
        *self.theme.lock().await = Some(theme);
        Ok(())
    }

    async fn load_theme(&self) -> Result<Option<Theme>> {
        Ok(*self.theme.lock().await)
    }
}
