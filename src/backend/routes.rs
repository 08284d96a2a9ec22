use axum::{
    routing::{delete, get, post, put},
    Router,
};
use crate::backend::{handlers, AppState};

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/expenses", get(handlers::list_expenses))
        .route("/api/expenses", post(handlers::create_expense))
        .route("/api/expenses/{id}", put(handlers::update_expense))
        .route("/api/expenses/{id}", delete(handlers::delete_expense))
}
