use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::modules::events::use_cases::ingest_batch::inbound::http as ingest_http;
use crate::modules::events::use_cases::inspect_all::inbound::http as inspect_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/1/batch/{dataset}", post(ingest_http::handle))
        .route("/", get(inspect_http::handle))
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}
