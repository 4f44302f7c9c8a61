use crate::modules::activities::core::activity::Activity;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Student already signed up for this activity")]
    AlreadySignedUp,

    #[error("Activity is full")]
    ActivityFull,

    #[error("Participant not found in this activity")]
    ParticipantNotFound,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { activity: Activity },
    Rejected { reason: DecideError },
}

/// Whether a signup may push the roster past `max_participants`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapacityPolicy {
    #[default]
    Unenforced,
    Enforced,
}

impl From<bool> for CapacityPolicy {
    fn from(enforce: bool) -> Self {
        if enforce {
            CapacityPolicy::Enforced
        } else {
            CapacityPolicy::Unenforced
        }
    }
}
