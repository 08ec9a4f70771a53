// src/handlers/questions.rs

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
    extract::{AppJson, AppPath, AppQuery},
    models::question::{CreateQuestionRequest, NewQuestion, SearchRequest},
    store::TriviaStore,
    utils::pagination::{PageParams, paginate},
};

/// Lists one page of questions together with the total count and all categories.
///
/// An empty page (no questions at all, or a page past the end) is a 404.
pub async fn list_questions(
    State(store): State<Arc<dyn TriviaStore>>,
    AppQuery(params): AppQuery<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let questions = store.list_questions().await.map_err(|e| {
        tracing::error!("Failed to list questions: {}", e);
        AppError::from(e)
    })?;

    let page_number = params.page();
    let page = paginate(&questions, page_number);

    if page.is_empty() {
        return Err(AppError::NotFound(format!(
            "Page {} of questions is empty",
            page_number
        )));
    }

    let categories = store.list_categories().await.map_err(|e| {
        tracing::error!("Failed to list categories: {}", e);
        AppError::from(e)
    })?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "success": true,
            "status": 200,
            "message": "successfully fetched questions",
            "questions": page,
            "total_questions": questions.len(),
            "categories": categories,
        })),
    ))
}

/// Deletes a question by ID.
/// The question is looked up first; an unknown id is a 404.
pub async fn delete_question(
    State(store): State<Arc<dyn TriviaStore>>,
    AppPath(id): AppPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let existing = store.get_question(id).await.map_err(|e| {
        tracing::error!("Failed to fetch question {}: {}", id, e);
        AppError::from(e)
    })?;

    if existing.is_none() {
        return Err(AppError::NotFound(format!("Question {} not found", id)));
    }

    let removed = store.delete_question(id).await.map_err(|e| {
        tracing::error!("Failed to delete question {}: {}", id, e);
        AppError::from(e)
    })?;

    // Removed concurrently between the lookup and the delete
    if !removed {
        return Err(AppError::NotFound(format!("Question {} not found", id)));
    }

    tracing::info!("Deleted question {}", id);

    Ok((
        StatusCode::OK,
        Json(json!({
            "success": true,
            "status": 200,
            "message": "successfully deleted question",
            "deleted": id,
        })),
    ))
}

/// Creates a new question.
/// `question`, `answer`, `category` and `difficulty` are all required.
pub async fn create_question(
    State(store): State<Arc<dyn TriviaStore>>,
    AppJson(payload): AppJson<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let new_question = NewQuestion::try_from(payload)?;

    let id = store.insert_question(new_question).await.map_err(|e| {
        tracing::error!("Failed to create question: {}", e);
        AppError::from(e)
    })?;

    tracing::info!("Created question {}", id);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "status": 201,
            "message": "successfully created a question",
            "created_question": id,
        })),
    ))
}

/// Finds questions whose text contains `searchTerm`, ignoring case.
/// A missing or empty term returns every question.
pub async fn search_questions(
    State(store): State<Arc<dyn TriviaStore>>,
    AppJson(payload): AppJson<SearchRequest>,
) -> Result<impl IntoResponse, AppError> {
    let term = payload.search_term.unwrap_or_default();

    let questions = store.search_questions(&term).await.map_err(|e| {
        tracing::error!("Failed to search questions for {:?}: {}", term, e);
        AppError::from(e)
    })?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "success": true,
            "status": 200,
            "message": "successfully found questions",
            "total_questions": questions.len(),
            "questions": questions,
        })),
    ))
}
