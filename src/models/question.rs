// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::{ValidationError, ValidationErrors};

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The prompt shown to the player.
    pub question: String,

    pub answer: String,

    /// Category id used as a plain filter key. Not checked against `categories`.
    pub category: i64,

    pub difficulty: i32,
}

/// A question that has passed validation and is ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

/// DTO for creating a new question.
/// Fields are optional here so that absent and `null` values can be reported as
/// validation errors rather than JSON decoding errors.
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i64>,
    pub difficulty: Option<i32>,
}

/// Records a `required` error for `field` when `value` is absent.
fn required<T>(errors: &mut ValidationErrors, field: &'static str, value: Option<T>) -> Option<T> {
    if value.is_none() {
        errors.add(field, ValidationError::new("required"));
    }
    value
}

/// Every field must be present and non-null; all missing fields are reported at once.
impl TryFrom<CreateQuestionRequest> for NewQuestion {
    type Error = ValidationErrors;

    fn try_from(req: CreateQuestionRequest) -> Result<Self, Self::Error> {
        let mut errors = ValidationErrors::new();

        let question = required(&mut errors, "question", req.question);
        let answer = required(&mut errors, "answer", req.answer);
        let category = required(&mut errors, "category", req.category);
        let difficulty = required(&mut errors, "difficulty", req.difficulty);

        match (question, answer, category, difficulty) {
            (Some(question), Some(answer), Some(category), Some(difficulty)) => Ok(NewQuestion {
                question,
                answer,
                category,
                difficulty,
            }),
            _ => Err(errors),
        }
    }
}

/// Body of `POST /questions/search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}
