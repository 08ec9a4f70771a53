// src/store/memory.rs

use std::{
    collections::BTreeMap,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use async_trait::async_trait;

use super::{StoreError, StoreResult, TriviaStore};
use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
};

/// Category names seeded by the bundled migration, in id order.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

#[derive(Debug, Default)]
struct Inner {
    categories: Vec<Category>,
    questions: BTreeMap<i64, Question>,
    last_id: i64,
}

/// In-process store. Ids are assigned sequentially starting at 1 and never reused.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the same categories the database is seeded with.
    pub fn with_default_categories() -> Self {
        let categories = DEFAULT_CATEGORIES
            .iter()
            .zip(1..)
            .map(|(name, id)| Category {
                id,
                name: name.to_string(),
            })
            .collect();

        Self::with_categories(categories)
    }

    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            inner: RwLock::new(Inner {
                categories,
                ..Inner::default()
            }),
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Inner>> {
        self.inner
            .read()
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    fn filter_questions<F>(&self, predicate: F) -> StoreResult<Vec<Question>>
    where
        F: Fn(&Question) -> bool,
    {
        let inner = self.read()?;
        Ok(inner
            .questions
            .values()
            .filter(|q| predicate(q))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let mut categories = self.read()?.categories.clone();
        categories.sort_by_key(|c| c.id);
        Ok(categories)
    }

    async fn list_questions(&self) -> StoreResult<Vec<Question>> {
        self.filter_questions(|_| true)
    }

    async fn get_question(&self, id: i64) -> StoreResult<Option<Question>> {
        Ok(self.read()?.questions.get(&id).cloned())
    }

    async fn questions_by_category(&self, category_id: i64) -> StoreResult<Vec<Question>> {
        self.filter_questions(|q| q.category == category_id)
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        let needle = term.to_lowercase();
        self.filter_questions(|q| q.question.to_lowercase().contains(&needle))
    }

    async fn insert_question(&self, question: NewQuestion) -> StoreResult<i64> {
        let mut inner = self.write()?;
        inner.last_id += 1;
        let id = inner.last_id;

        inner.questions.insert(
            id,
            Question {
                id,
                question: question.question,
                answer: question.answer,
                category: question.category,
                difficulty: question.difficulty,
            },
        );

        Ok(id)
    }

    async fn delete_question(&self, id: i64) -> StoreResult<bool> {
        Ok(self.write()?.questions.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_question(text: &str, category: i64) -> NewQuestion {
        NewQuestion {
            question: text.to_string(),
            answer: "answer".to_string(),
            category,
            difficulty: 1,
        }
    }

    #[tokio::test]
    async fn default_categories_are_numbered_from_one() {
        let store = MemoryStore::with_default_categories();
        let categories = store.list_categories().await.unwrap();

        assert_eq!(categories.len(), 6);
        assert_eq!(categories[0], Category { id: 1, name: "Science".to_string() });
        assert_eq!(categories[5].name, "Sports");
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let store = MemoryStore::new();
        let first = store.insert_question(new_question("one", 1)).await.unwrap();
        let second = store.insert_question(new_question("two", 1)).await.unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);

        let stored = store.get_question(second).await.unwrap().unwrap();
        assert_eq!(stored.question, "two");
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() {
        let store = MemoryStore::new();
        let id = store.insert_question(new_question("one", 1)).await.unwrap();
        assert!(store.delete_question(id).await.unwrap());

        let next = store.insert_question(new_question("two", 1)).await.unwrap();
        assert_ne!(id, next);
    }

    #[tokio::test]
    async fn delete_missing_leaves_store_unchanged() {
        let store = MemoryStore::new();
        store.insert_question(new_question("one", 1)).await.unwrap();

        assert!(!store.delete_question(42).await.unwrap());
        assert_eq!(store.list_questions().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_record() {
        let store = MemoryStore::new();
        let keep = store.insert_question(new_question("keep", 1)).await.unwrap();
        let removed = store.insert_question(new_question("drop", 1)).await.unwrap();

        assert!(store.delete_question(removed).await.unwrap());

        let ids: Vec<i64> = store
            .list_questions()
            .await
            .unwrap()
            .iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(ids, vec![keep]);
    }

    #[tokio::test]
    async fn filters_by_category() {
        let store = MemoryStore::new();
        store.insert_question(new_question("a", 1)).await.unwrap();
        store.insert_question(new_question("b", 2)).await.unwrap();
        store.insert_question(new_question("c", 1)).await.unwrap();

        let texts: Vec<String> = store
            .questions_by_category(1)
            .await
            .unwrap()
            .into_iter()
            .map(|q| q.question)
            .collect();
        assert_eq!(texts, vec!["a", "c"]);
        assert!(store.questions_by_category(9).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn search_is_case_insensitive_on_question_text() {
        let store = MemoryStore::new();
        store
            .insert_question(new_question("What movie earned Tom Hanks his third Oscar Title?", 5))
            .await
            .unwrap();
        store
            .insert_question(NewQuestion {
                question: "Who painted this?".to_string(),
                answer: "The title is unknown".to_string(),
                category: 2,
                difficulty: 3,
            })
            .await
            .unwrap();

        let hits = store.search_questions("title").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].category, 5);
    }

    #[tokio::test]
    async fn empty_search_term_matches_everything() {
        let store = MemoryStore::new();
        store.insert_question(new_question("one", 1)).await.unwrap();
        store.insert_question(new_question("two", 2)).await.unwrap();

        assert_eq!(store.search_questions("").await.unwrap().len(), 2);
    }
}
