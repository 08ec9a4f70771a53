// src/models/quiz.rs

use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

/// Body of `POST /quizzes`.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    /// Ids already served in this round.
    #[serde(default)]
    pub previous_questions: Vec<i64>,

    pub quiz_category: Option<QuizCategory>,
}

/// Category reference sent by the client. Extra keys (e.g. `type`) are ignored.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    /// Accepts `1` as well as `"1"`.
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_questions_default_to_empty() {
        let req: QuizRequest =
            serde_json::from_value(serde_json::json!({"quiz_category": {"id": 3}})).unwrap();

        assert!(req.previous_questions.is_empty());
        assert_eq!(req.quiz_category.unwrap().id, 3);
    }

    #[test]
    fn category_id_may_be_a_string() {
        let req: QuizRequest = serde_json::from_value(serde_json::json!({
            "previous_questions": [4, 9],
            "quiz_category": {"type": "History", "id": "4"}
        }))
        .unwrap();

        assert_eq!(req.previous_questions, vec![4, 9]);
        assert_eq!(req.quiz_category.unwrap().id, 4);
    }
}
