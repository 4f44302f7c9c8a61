use crate::modules::activities::core::activity::Activity;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Every activity keyed by its name. Serializes as the JSON object served on `GET /activities`.
pub type ActivitiesView = BTreeMap<String, Activity>;

#[async_trait]
pub trait ActivityQueries {
    async fn list_activities(&self) -> anyhow::Result<ActivitiesView>;
}
