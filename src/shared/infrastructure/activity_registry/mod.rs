use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::Decision;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("backend error: {0}")]
    Backend(String),
}

/// Decision run against the current state of one activity inside [`ActivityRegistry::update`].
pub type DecideFn<'a> = &'a (dyn Fn(&Activity) -> Decision + Send + Sync);

#[async_trait]
pub trait ActivityRegistry: Send + Sync {
    async fn load_all(&self) -> Result<Vec<(String, Activity)>, RegistryError>;
    async fn load(&self, name: &str) -> Result<Option<Activity>, RegistryError>;

    /// Run `decide` against the named activity and store the accepted state, as one step that
    /// no other writer can interleave with. Returns `None` when no activity carries the name.
    async fn update(
        &self,
        name: &str,
        decide: DecideFn<'_>,
    ) -> Result<Option<Decision>, RegistryError>;
}

pub mod in_memory;
