use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::Value;
use tracing::info;

use crate::error::ForwardError;
use crate::routes::AppState;

type Forwarded = Result<(StatusCode, Json<Value>), ForwardError>;

async fn forward(state: &AppState, method: &str, payload: Value) -> Forwarded {
    let (status, body) = state
        .upstream
        .invoke(&state.users_manager_app_id, method, &payload)
        .await?;
    Ok((status, Json(body)))
}

pub async fn create_user(State(state): State<AppState>, Json(payload): Json<Value>) -> Forwarded {
    info!("Creating a new user");
    forward(&state, "CreateUser", payload).await
}

pub async fn get_user_preferences(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Forwarded {
    info!("Getting user preferences");
    forward(&state, "GetUserPreferencesByEmailAddress", payload).await
}

pub async fn update_user(State(state): State<AppState>, Json(payload): Json<Value>) -> Forwarded {
    info!("Updating a user");
    forward(&state, "UpdateUserByEmail", payload).await
}

pub async fn delete_user(State(state): State<AppState>, Json(payload): Json<Value>) -> Forwarded {
    info!("Deleting a user");
    forward(&state, "DeleteUserByEmail", payload).await
}
