#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpParticipant {
    pub activity_name: String,
    pub email: String,
}
