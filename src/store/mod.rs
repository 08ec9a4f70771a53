// src/store/mod.rs

//! Persistence seam for categories and questions.
//!
//! Handlers only see [`TriviaStore`]; production wires in [`postgres::PgStore`],
//! tests use [`memory::MemoryStore`].

use std::fmt;

use async_trait::async_trait;

use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
};

pub mod memory;
pub mod postgres;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure raised by a store backend.
#[derive(Debug)]
pub enum StoreError {
    /// The database rejected or failed the statement.
    Database(sqlx::Error),

    /// The backend could not be reached or is in an unusable state.
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Database(e) => write!(f, "database error: {}", e),
            StoreError::Unavailable(msg) => write!(f, "store unavailable: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Database(e) => Some(e),
            StoreError::Unavailable(_) => None,
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err)
    }
}

/// Category and question storage.
///
/// Every list is returned ordered by id so that pages stay stable between requests.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All categories.
    async fn list_categories(&self) -> StoreResult<Vec<Category>>;

    /// All questions.
    async fn list_questions(&self) -> StoreResult<Vec<Question>>;

    /// A single question, or `None` when the id is unknown.
    async fn get_question(&self, id: i64) -> StoreResult<Option<Question>>;

    /// Questions whose `category` equals `category_id`.
    async fn questions_by_category(&self, category_id: i64) -> StoreResult<Vec<Question>>;

    /// Case-insensitive substring match on the question text. An empty term matches everything.
    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>>;

    /// Persists a question and returns its new id.
    async fn insert_question(&self, question: NewQuestion) -> StoreResult<i64>;

    /// Removes a question. Returns `false` when no such id exists.
    async fn delete_question(&self, id: i64) -> StoreResult<bool>;
}
