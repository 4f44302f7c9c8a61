use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::{DecideError, Decision};
use crate::modules::activities::use_cases::unregister_participant::command::UnregisterParticipant;

pub fn decide_unregister(activity: &Activity, command: UnregisterParticipant) -> Decision {
    if !activity.has_participant(&command.email) {
        return Decision::Rejected {
            reason: DecideError::ParticipantNotFound,
        };
    }

    let mut next = activity.clone();
    next.participants.retain(|p| *p != command.email);
    Decision::Accepted { activity: next }
}
