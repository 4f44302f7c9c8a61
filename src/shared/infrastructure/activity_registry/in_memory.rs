use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::Decision;
use crate::shared::infrastructure::activity_registry::{ActivityRegistry, DecideFn, RegistryError};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryActivityRegistry {
    inner: RwLock<BTreeMap<String, Activity>>,
    is_offline: bool,
    delay_update_ms: AtomicU64,
}

impl InMemoryActivityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_activities(activities: impl IntoIterator<Item = (String, Activity)>) -> Self {
        Self {
            inner: RwLock::new(activities.into_iter().collect()),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Sleep while holding the write lock in `update`, so overlapping writers have to queue.
    pub fn set_delay_update_ms(&self, ms: u64) {
        self.delay_update_ms.store(ms, Ordering::Relaxed);
    }

    fn ensure_online(&self) -> Result<(), RegistryError> {
        if self.is_offline {
            return Err(RegistryError::Backend("Activity registry offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ActivityRegistry for InMemoryActivityRegistry {
    async fn load_all(&self) -> Result<Vec<(String, Activity)>, RegistryError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(guard
            .iter()
            .map(|(name, activity)| (name.clone(), activity.clone()))
            .collect())
    }

    async fn load(&self, name: &str) -> Result<Option<Activity>, RegistryError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(guard.get(name).cloned())
    }

    async fn update(
        &self,
        name: &str,
        decide: DecideFn<'_>,
    ) -> Result<Option<Decision>, RegistryError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;

        let delay = self.delay_update_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let Some(current) = guard.get_mut(name) else {
            return Ok(None);
        };
        let decision = decide(&*current);
        if let Decision::Accepted { activity } = &decision {
            *current = activity.clone();
        }
        Ok(Some(decision))
    }
}
