//! Random answer payloads posted to the answers endpoint

use rand::seq::index;
use rand::Rng;

use crate::catalog::{question_count, Answer, QUESTION_IDS};

/// Answers for a subset of the catalog, one per question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerPayload {
    entries: Vec<(&'static str, Answer)>,
}

impl AnswerPayload {
    /// Payload with no answers, as sent by the finish request
    pub fn empty() -> Self {
        Self::default()
    }

    /// Answers `size` distinct questions picked without replacement.
    ///
    /// Sizes larger than the catalog are clamped to the whole catalog.
    pub fn random_subset<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Self {
        let size = size.min(question_count());
        let entries = index::sample(rng, question_count(), size)
            .into_iter()
            .map(|idx| (QUESTION_IDS[idx], random_answer(rng)))
            .collect();
        Self { entries }
    }

    /// Answers a uniformly sized subset, anywhere from none to every question.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let size = rng.gen_range(0..=question_count());
        Self::random_subset(rng, size)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(&'static str, Answer)] {
        &self.entries
    }

    /// Key/value pairs for an `application/x-www-form-urlencoded` body
    pub fn form_fields(&self) -> Vec<(&'static str, &'static str)> {
        self.entries
            .iter()
            .map(|(question, answer)| (*question, answer.as_str()))
            .collect()
    }
}

fn random_answer<R: Rng + ?Sized>(rng: &mut R) -> Answer {
    Answer::ALL[rng.gen_range(0..Answer::ALL.len())]
}
