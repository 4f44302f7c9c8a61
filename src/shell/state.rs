use crate::modules::activities::core::seed::seed_activities;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use crate::modules::activities::use_cases::sign_up_participant::handler::SignUpParticipantHandler;
use crate::modules::activities::use_cases::unregister_participant::handler::UnregisterParticipantHandler;
use crate::shared::infrastructure::activity_registry::in_memory::InMemoryActivityRegistry;
use crate::shell::config::AppConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn ActivityQueries + Send + Sync>,
    pub sign_up_handler: Arc<SignUpParticipantHandler<InMemoryActivityRegistry>>,
    pub unregister_handler: Arc<UnregisterParticipantHandler<InMemoryActivityRegistry>>,
}

impl AppState {
    /// Wire the handlers around one registry instance.
    pub fn new(registry: Arc<InMemoryActivityRegistry>, config: &AppConfig) -> Self {
        let sign_up_handler = Arc::new(SignUpParticipantHandler::new(
            registry.clone(),
            config.capacity_policy(),
        ));
        let unregister_handler = Arc::new(UnregisterParticipantHandler::new(registry.clone()));
        Self {
            queries: registry,
            sign_up_handler,
            unregister_handler,
        }
    }

    /// State over a registry holding the seed activities.
    pub fn seeded(config: &AppConfig) -> Self {
        let registry = Arc::new(InMemoryActivityRegistry::with_activities(seed_activities()));
        Self::new(registry, config)
    }
}
