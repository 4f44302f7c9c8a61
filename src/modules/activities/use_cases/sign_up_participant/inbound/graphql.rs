use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};

use crate::modules::activities::use_cases::sign_up_participant::command::SignUpParticipant;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct SignUpMutation;

#[Object]
impl SignUpMutation {
    async fn sign_up(
        &self,
        context: &Context<'_>,
        activity_name: String,
        email: String,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        state
            .sign_up_handler
            .handle(SignUpParticipant {
                activity_name,
                email,
            })
            .await
            .map_err(|e| e.extend())
    }
}
