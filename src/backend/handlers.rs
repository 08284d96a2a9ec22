// src/backend/handlers.rs
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::backend::error::ApiError;
use crate::backend::AppState;
use crate::store::Expense;

#[derive(Debug, Deserialize, Serialize)]
pub struct ExpensePayload {
    pub description: String,
    pub amount: f64,
}

pub async fn list_expenses(State(state): State<AppState>) -> Json<Vec<Expense>> {
    Json(state.store.list())
}

pub async fn create_expense(
    State(state): State<AppState>,
    Json(payload): Json<ExpensePayload>,
) -> impl IntoResponse {
    let expense = state.store.create(payload.description, payload.amount);
    tracing::debug!(id = expense.id, "expense created");

    (StatusCode::CREATED, Json(expense))
}

pub async fn update_expense(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ExpensePayload>,
) -> Result<Json<Expense>, ApiError> {
    match state.store.update(id, payload.description, payload.amount) {
        Some(expense) => Ok(Json(expense)),
        None => Err(ApiError::not_found("Expense not found")),
    }
}

pub async fn delete_expense(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> StatusCode {
    state.store.delete(id);
    tracing::debug!(id, "expense deleted");

    StatusCode::NO_CONTENT
}
