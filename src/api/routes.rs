use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::AppState;

/// Creates the site router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Browsing
        .route("/", get(handlers::index))
        .route("/search", post(handlers::search))
        .route("/movie/:id", get(handlers::movie_detail))
        // Accounts
        .route(
            "/register",
            get(handlers::register_page).post(handlers::register),
        )
        .route("/login", get(handlers::login_page).post(handlers::login))
        .route("/logout", get(handlers::logout))
        // Watchlist
        .route("/addfav", post(handlers::add_favorite))
        .route("/watchlist", get(handlers::watchlist))
        .route("/remove/:id", get(handlers::remove_favorite))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
