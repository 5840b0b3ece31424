use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.queries.list_all().await {
        Ok(datasets) => Json(datasets).into_response(),
        Err(error) => {
            tracing::error!(%error, "failed to read datasets");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
