use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::activities::adapters::inbound::http_error::MessageResponse;
use crate::modules::activities::use_cases::unregister_participant::command::UnregisterParticipant;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UnregisterParams {
    pub email: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(params): Query<UnregisterParams>,
) -> Response {
    let command = UnregisterParticipant {
        activity_name,
        email: params.email,
    };

    match state.unregister_handler.handle(command).await {
        Ok(message) => Json(MessageResponse { message }).into_response(),
        Err(error) => error.into_response(),
    }
}
