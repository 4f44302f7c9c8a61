use crate::modules::activities::core::decision::DecideError;
use crate::shared::infrastructure::activity_registry::RegistryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl ApplicationError {
    pub fn activity_not_found() -> Self {
        ApplicationError::NotFound("Activity not found".into())
    }
}

impl From<DecideError> for ApplicationError {
    fn from(reason: DecideError) -> Self {
        match reason {
            DecideError::AlreadySignedUp | DecideError::ActivityFull => {
                ApplicationError::Conflict(reason.to_string())
            }
            DecideError::ParticipantNotFound => ApplicationError::NotFound(reason.to_string()),
        }
    }
}
