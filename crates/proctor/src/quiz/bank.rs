//! Question bank and random sampling.

use proctor_common::{Question, QuizError};
use rand::Rng;
use std::collections::HashSet;

/// Immutable, ordered collection of quiz questions
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Assemble a bank, checking that every answer is among its options
    /// and that question texts are unique.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        let mut seen = HashSet::with_capacity(questions.len());

        for q in &questions {
            if !q.is_well_formed() {
                return Err(QuizError::InvalidBank(format!(
                    "correct answer is not one of the options: {:?}",
                    q.text
                )));
            }
            if !seen.insert(q.text) {
                return Err(QuizError::InvalidBank(format!(
                    "duplicate question text: {:?}",
                    q.text
                )));
            }
        }

        Ok(Self { questions })
    }

    /// The built-in RPA question bank
    pub fn builtin() -> Result<Self, QuizError> {
        Self::new(proctor_common::BUILTIN_QUESTIONS.to_vec())
    }

    /// Every question, in canonical order
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// First question whose text matches exactly (case-sensitive, untrimmed)
    pub fn find_by_text(&self, text: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.text == text)
    }

    /// Fail unless a quiz of `n` questions can be drawn from this bank
    pub fn ensure_can_sample(&self, n: usize) -> Result<(), QuizError> {
        if n > self.questions.len() {
            return Err(QuizError::Configuration {
                requested: n,
                available: self.questions.len(),
            });
        }
        Ok(())
    }

    /// Draw `n` distinct questions uniformly at random, in random order
    pub fn sample(&self, n: usize) -> Result<Vec<&Question>, QuizError> {
        self.sample_with(n, &mut rand::rng())
    }

    /// Same as [`sample`](Self::sample) with a caller-supplied RNG
    pub fn sample_with<R: Rng + ?Sized>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<&Question>, QuizError> {
        self.ensure_can_sample(n)?;

        Ok(rand::seq::index::sample(rng, self.questions.len(), n)
            .into_iter()
            .map(|i| &self.questions[i])
            .collect())
    }
}
