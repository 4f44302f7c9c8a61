#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnregisterParticipant {
    pub activity_name: String,
    pub email: String,
}
