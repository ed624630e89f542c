use crate::{domain::BoardConfig, error::Result};
use async_trait::async_trait;

pub mod file_source;

pub use file_source::FileConfigSource;

/// Where board configuration is read from and written to.
///
/// Optional wiring around the board core: a [`Board`](crate::domain::Board)
/// only needs a [`BoardConfig`] value and never touches disk itself. Only
/// configuration goes through here; board contents live in memory.
#[async_trait]
pub trait ConfigSource: Send + Sync {
    /// Loads the configuration, falling back to defaults when none exists
    async fn load(&self) -> Result<BoardConfig>;

    /// Saves the configuration
    async fn save(&self, config: &BoardConfig) -> Result<()>;

    /// Checks if a configuration has been written
    async fn exists(&self) -> bool;
}
