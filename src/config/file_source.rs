use crate::{
    config::ConfigSource,
    domain::BoardConfig,
    error::{KanbanError, Result},
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// JSON file holding a [`BoardConfig`]
pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    const CONFIG_FILE: &'static str = "kanban.json";

    /// Config file inside the given directory
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(Self::CONFIG_FILE))
    }

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ConfigSource for FileConfigSource {
    async fn load(&self) -> Result<BoardConfig> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No config file, using defaults");
            return Ok(BoardConfig::default());
        }

        let contents = fs::read_to_string(&self.path).await?;
        let config: BoardConfig = serde_json::from_str(&contents)?;

        if config.list_title_prefix.trim().is_empty() {
            return Err(KanbanError::ConfigError(
                "list_title_prefix must not be empty".to_string(),
            ));
        }
        if config.task_content_prefix.trim().is_empty() {
            return Err(KanbanError::ConfigError(
                "task_content_prefix must not be empty".to_string(),
            ));
        }

        debug!(path = %self.path.display(), name = %config.name, "Loaded config");
        Ok(config)
    }

    async fn save(&self, config: &BoardConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, json).await?;
        Ok(())
    }

    async fn exists(&self) -> bool {
        self.path.exists()
    }
}
