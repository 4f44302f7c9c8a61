// Shared test fixture for activities with a given capacity and roster.

use crate::modules::activities::core::activity::Activity;

pub fn make_activity(max_participants: u32, participants: &[&str]) -> Activity {
    Activity::new(
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        max_participants,
        participants.iter().copied(),
    )
}
