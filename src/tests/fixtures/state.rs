// Shared AppState builders for the inbound adapter tests.

use crate::shared::infrastructure::activity_registry::in_memory::InMemoryActivityRegistry;
use crate::shell::config::AppConfig;
use crate::shell::state::AppState;
use std::sync::Arc;

pub fn make_state(registry: InMemoryActivityRegistry) -> AppState {
    AppState::new(Arc::new(registry), &AppConfig::default())
}

pub fn make_seeded_state() -> AppState {
    AppState::seeded(&AppConfig::default())
}
