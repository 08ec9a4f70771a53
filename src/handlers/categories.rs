// src/handlers/categories.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::{
    error::AppError,
    extract::{AppPath, AppQuery},
    store::TriviaStore,
    utils::pagination::{PageParams, paginate},
};

/// Lists every category, unpaginated.
pub async fn list_categories(
    State(store): State<Arc<dyn TriviaStore>>,
) -> Result<impl IntoResponse, AppError> {
    let categories = store.list_categories().await.map_err(|e| {
        tracing::error!("Failed to list categories: {}", e);
        AppError::from(e)
    })?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "success": true,
            "status": 200,
            "message": "successfully fetched all categories",
            "categories": categories,
        })),
    ))
}

/// Lists one page of the questions filed under a category.
///
/// The category id is not checked; an unknown id, or a page past the end,
/// simply yields an empty list.
pub async fn list_category_questions(
    State(store): State<Arc<dyn TriviaStore>>,
    AppPath(category_id): AppPath<i64>,
    AppQuery(params): AppQuery<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let questions = store.questions_by_category(category_id).await.map_err(|e| {
        tracing::error!("Failed to fetch questions for category {}: {}", category_id, e);
        AppError::from(e)
    })?;

    let page = paginate(&questions, params.page());

    Ok((
        StatusCode::OK,
        Json(json!({
            "success": true,
            "status": 200,
            "message": "successfully returned questions by category",
            "questions": page,
            "total_questions": questions.len(),
            "current_category": category_id,
        })),
    ))
}
