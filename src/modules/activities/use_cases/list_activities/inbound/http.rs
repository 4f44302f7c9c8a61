use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::modules::activities::adapters::inbound::http_error::ErrorResponse;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.queries.list_activities().await {
        Ok(activities) => Json(activities).into_response(),
        Err(error) => {
            tracing::error!(%error, "failed to list activities");
            ErrorResponse::respond(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}
