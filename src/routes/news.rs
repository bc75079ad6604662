use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::Value;
use tracing::info;

use crate::error::ForwardError;
use crate::routes::AppState;

pub async fn get_news(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ForwardError> {
    info!("Fetching news");
    let (status, body) = state
        .upstream
        .invoke(&state.news_manager_app_id, "get-news", &payload)
        .await?;
    Ok((status, Json(body)))
}
