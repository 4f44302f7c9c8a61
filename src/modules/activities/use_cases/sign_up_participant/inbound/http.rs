use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::activities::adapters::inbound::http_error::MessageResponse;
use crate::modules::activities::use_cases::sign_up_participant::command::SignUpParticipant;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SignUpParams {
    pub email: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(params): Query<SignUpParams>,
) -> Response {
    let command = SignUpParticipant {
        activity_name,
        email: params.email,
    };

    match state.sign_up_handler.handle(command).await {
        Ok(message) => Json(MessageResponse { message }).into_response(),
        Err(error) => error.into_response(),
    }
}
