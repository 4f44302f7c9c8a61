use crate::modules::activities::use_cases::list_activities::queries_port::{
    ActivitiesView, ActivityQueries,
};
use crate::shared::infrastructure::activity_registry::ActivityRegistry;

#[async_trait::async_trait]
impl<TRegistry> ActivityQueries for TRegistry
where
    TRegistry: ActivityRegistry,
{
    async fn list_activities(&self) -> anyhow::Result<ActivitiesView> {
        Ok(self.load_all().await?.into_iter().collect())
    }
}
