// src/handlers/quizzes.rs

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::{
    error::AppError,
    extract::AppJson,
    models::quiz::QuizRequest,
    store::TriviaStore,
    utils::quiz::select_next_question,
};

/// Serves a random question from the requested category that has not been played yet.
///
/// Returns `"question": null` once the category is exhausted.
pub async fn next_question(
    State(store): State<Arc<dyn TriviaStore>>,
    AppJson(payload): AppJson<QuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    let category = payload
        .quiz_category
        .ok_or_else(|| AppError::Unprocessable("quiz_category is required".to_string()))?;

    let candidates = store.questions_by_category(category.id).await.map_err(|e| {
        tracing::error!("Failed to fetch quiz questions for category {}: {}", category.id, e);
        AppError::from(e)
    })?;

    let next = select_next_question(
        candidates,
        &payload.previous_questions,
        &mut rand::thread_rng(),
    );

    if next.is_none() {
        tracing::debug!("Quiz over for category {}", category.id);
    }

    Ok((
        StatusCode::OK,
        Json(json!({
            "success": true,
            "status": 200,
            "message": "successfully returned next quiz question",
            "question": next,
        })),
    ))
}
