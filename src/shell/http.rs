use axum::{
    Extension, Router,
    response::Redirect,
    routing::{delete, get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::modules::activities::use_cases::list_activities::inbound::http as list_http;
use crate::modules::activities::use_cases::sign_up_participant::inbound::http as sign_up_http;
use crate::modules::activities::use_cases::unregister_participant::inbound::http as unregister_http;
use crate::shell::config::AppConfig;
use crate::shell::graphql::{self, graphiql};
use crate::shell::state::AppState;

pub fn router(state: AppState, config: &AppConfig) -> Router {
    let schema = graphql::schema(state.clone());

    Router::new()
        .route(
            "/",
            get(|| async { Redirect::temporary("/static/index.html") }),
        )
        .route("/activities", get(list_http::handle))
        .route(
            "/activities/{activity_name}/signup",
            post(sign_up_http::handle),
        )
        .route(
            "/activities/{activity_name}/participants",
            delete(unregister_http::handle),
        )
        .route("/gql", get(graphiql).post(graphql::graphql))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
