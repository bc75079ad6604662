use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::upstream::DaprInvoker;

pub mod news;
pub mod users;

#[derive(Debug, Clone)]
pub struct AppState {
    pub upstream: DaprInvoker,
    pub users_manager_app_id: String,
    pub news_manager_app_id: String,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            upstream: DaprInvoker::new(config.dapr_endpoint.clone()),
            users_manager_app_id: config.users_manager_app_id.clone(),
            news_manager_app_id: config.news_manager_app_id.clone(),
        }
    }
}

async fn handle_404() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Builds the BFF router. When `frontend_dir` is given, unknown paths are
/// served from it with `index.html` as the fallback page.
pub fn create_app(state: AppState, frontend_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        .route(
            "/users",
            post(users::create_user)
                .get(users::get_user_preferences)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/news", post(news::get_news))
        .route("/health", get(|| async { "ok" }));

    let router = match frontend_dir {
        Some(dir) => {
            let serve_dir = ServeDir::new(dir).not_found_service(ServeFile::new(dir.join("index.html")));
            router.fallback_service(serve_dir)
        }
        None => router.fallback(handle_404),
    };

    router
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
