use crate::modules::activities::application::apply_decision::apply_decision;
use crate::modules::activities::application::errors::ApplicationError;
use crate::modules::activities::core::decision::CapacityPolicy;
use crate::modules::activities::use_cases::sign_up_participant::command::SignUpParticipant;
use crate::modules::activities::use_cases::sign_up_participant::decide::decide_sign_up;
use crate::shared::infrastructure::activity_registry::ActivityRegistry;
use std::sync::Arc;

pub struct SignUpParticipantHandler<TRegistry>
where
    TRegistry: ActivityRegistry + Send + Sync + 'static,
{
    registry: Arc<TRegistry>,
    capacity: CapacityPolicy,
}

impl<TRegistry> SignUpParticipantHandler<TRegistry>
where
    TRegistry: ActivityRegistry + Send + Sync + 'static,
{
    pub fn new(registry: Arc<TRegistry>, capacity: CapacityPolicy) -> Self {
        Self { registry, capacity }
    }

    /// Returns the confirmation message shown to the participant.
    pub async fn handle(&self, command: SignUpParticipant) -> Result<String, ApplicationError> {
        let result = apply_decision(
            &*self.registry,
            &command.activity_name,
            |activity| decide_sign_up(activity, command.clone(), self.capacity),
        )
        .await;

        match result {
            Ok(_) => {
                tracing::info!(
                    activity = %command.activity_name,
                    email = %command.email,
                    "participant signed up"
                );
                Ok(format!(
                    "Signed up {} for {}",
                    command.email, command.activity_name
                ))
            }
            Err(error) => {
                tracing::debug!(
                    activity = %command.activity_name,
                    email = %command.email,
                    %error,
                    "signup rejected"
                );
                Err(error)
            }
        }
    }
}
