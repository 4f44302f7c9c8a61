use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::{CapacityPolicy, DecideError, Decision};
use crate::modules::activities::use_cases::sign_up_participant::command::SignUpParticipant;

pub fn decide_sign_up(
    activity: &Activity,
    command: SignUpParticipant,
    policy: CapacityPolicy,
) -> Decision {
    if activity.has_participant(&command.email) {
        return Decision::Rejected {
            reason: DecideError::AlreadySignedUp,
        };
    }
    if policy == CapacityPolicy::Enforced && activity.is_full() {
        return Decision::Rejected {
            reason: DecideError::ActivityFull,
        };
    }

    let mut next = activity.clone();
    next.participants.push(command.email);
    Decision::Accepted { activity: next }
}
