// src/utils/quiz.rs

use std::collections::HashSet;

use rand::{Rng, seq::SliceRandom};

use crate::models::question::Question;

/// Picks the next quiz question uniformly among `candidates` not listed in `previous`.
///
/// Returns `None` once every candidate has been served.
pub fn select_next_question<R>(
    candidates: Vec<Question>,
    previous: &[i64],
    rng: &mut R,
) -> Option<Question>
where
    R: Rng + ?Sized,
{
    let seen: HashSet<i64> = previous.iter().copied().collect();

    let eligible: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !seen.contains(&q.id))
        .collect();

    eligible.choose(rng).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn question(id: i64) -> Question {
        Question {
            id,
            question: format!("Question {}", id),
            answer: "answer".to_string(),
            category: 1,
            difficulty: 1,
        }
    }

    #[test]
    fn never_returns_previous_questions() {
        let mut rng = StdRng::seed_from_u64(7);
        let candidates: Vec<Question> = (1..=5).map(question).collect();

        for _ in 0..200 {
            let next = select_next_question(candidates.clone(), &[1, 3, 5], &mut rng).unwrap();
            assert!(next.id == 2 || next.id == 4);
        }
    }

    #[test]
    fn single_eligible_question_is_always_chosen() {
        let mut rng = StdRng::seed_from_u64(1);
        let candidates: Vec<Question> = (1..=3).map(question).collect();

        for _ in 0..50 {
            let next = select_next_question(candidates.clone(), &[1, 3], &mut rng);
            assert_eq!(next.map(|q| q.id), Some(2));
        }
    }

    #[test]
    fn exhausted_category_yields_none() {
        let mut rng = StdRng::seed_from_u64(3);
        let candidates: Vec<Question> = (1..=3).map(question).collect();

        assert!(select_next_question(candidates, &[3, 2, 1], &mut rng).is_none());
        assert!(select_next_question(Vec::new(), &[], &mut rng).is_none());
    }

    #[test]
    fn unknown_previous_ids_are_ignored() {
        let mut rng = StdRng::seed_from_u64(11);
        let next = select_next_question(vec![question(8)], &[100, -1], &mut rng);
        assert_eq!(next.map(|q| q.id), Some(8));
    }

    #[test]
    fn every_eligible_question_can_be_drawn() {
        let mut rng = StdRng::seed_from_u64(42);
        let candidates: Vec<Question> = (1..=4).map(question).collect();

        let mut drawn = HashSet::new();
        for _ in 0..500 {
            if let Some(q) = select_next_question(candidates.clone(), &[], &mut rng) {
                drawn.insert(q.id);
            }
        }
        assert_eq!(drawn, HashSet::from([1, 2, 3, 4]));
    }
}
