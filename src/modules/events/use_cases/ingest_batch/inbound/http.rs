use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header::CONTENT_ENCODING},
    response::IntoResponse,
};

use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(dataset): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let content_encoding = headers
        .get(CONTENT_ENCODING)
        .and_then(|value| value.to_str().ok());

    match state
        .ingest_handler
        .handle(&dataset, content_encoding, &body)
        .await
    {
        Ok(acks) => Json(acks).into_response(),
        Err(error) => {
            tracing::warn!(
                dataset = %dataset,
                content_encoding = ?content_encoding,
                %error,
                "batch rejected"
            );
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
