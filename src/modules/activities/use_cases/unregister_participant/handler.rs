use crate::modules::activities::application::apply_decision::apply_decision;
use crate::modules::activities::application::errors::ApplicationError;
use crate::modules::activities::use_cases::unregister_participant::command::UnregisterParticipant;
use crate::modules::activities::use_cases::unregister_participant::decide::decide_unregister;
use crate::shared::infrastructure::activity_registry::ActivityRegistry;
use std::sync::Arc;

pub struct UnregisterParticipantHandler<TRegistry>
where
    TRegistry: ActivityRegistry + Send + Sync + 'static,
{
    registry: Arc<TRegistry>,
}

impl<TRegistry> UnregisterParticipantHandler<TRegistry>
where
    TRegistry: ActivityRegistry + Send + Sync + 'static,
{
    pub fn new(registry: Arc<TRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, command: UnregisterParticipant) -> Result<String, ApplicationError> {
        let result = apply_decision(
            &*self.registry,
            &command.activity_name,
            |activity| decide_unregister(activity, command.clone()),
        )
        .await;

        match result {
            Ok(_) => {
                tracing::info!(
                    activity = %command.activity_name,
                    email = %command.email,
                    "participant unregistered"
                );
                Ok(format!(
                    "Unregistered {} from {}",
                    command.email, command.activity_name
                ))
            }
            Err(error) => {
                tracing::debug!(
                    activity = %command.activity_name,
                    email = %command.email,
                    %error,
                    "unregister rejected"
                );
                Err(error)
            }
        }
    }
}
