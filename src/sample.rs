use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::db::Database;
use crate::error::QuizError;
use crate::models::{Difficulty, Question, QuestionFilter};
use crate::session::QuizSession;

pub const DEFAULT_QUESTION_COUNT: usize = 8;

/// Picks `n` distinct questions uniformly at random. Returns everything when
/// there are `n` or fewer to choose from.
pub fn sample<R: Rng + ?Sized>(questions: Vec<Question>, n: usize, rng: &mut R) -> Vec<Question> {
    if questions.len() <= n {
        return questions;
    }
    questions.choose_multiple(rng, n).cloned().collect()
}

/// Everything needed to turn the question bank into a fresh session.
#[derive(Debug, Clone)]
pub struct QuizSetup {
    pub filter: QuestionFilter,
    pub count: usize,
    pub seed: Option<u64>,
}

impl Default for QuizSetup {
    fn default() -> Self {
        Self {
            filter: QuestionFilter::all(),
            count: DEFAULT_QUESTION_COUNT,
            seed: None,
        }
    }
}

impl QuizSetup {
    pub fn draw(&self, db: &Database) -> Result<Vec<Question>, QuizError> {
        if matches!(&self.filter.categories, Some(c) if c.is_empty()) {
            return Err(QuizError::EmptySelection("category"));
        }
        if matches!(&self.filter.topics, Some(t) if t.is_empty()) {
            return Err(QuizError::EmptySelection("topic"));
        }

        let pool = db.get_questions(&self.filter)?;
        if pool.is_empty() {
            return Err(QuizError::NoQuestions);
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let picked = sample(pool, self.count, &mut rng);
        debug!("drew {} questions for {:?}", picked.len(), self.filter);
        Ok(picked)
    }

    pub fn start(&self, db: &Database) -> Result<QuizSession, QuizError> {
        let questions = self.draw(db)?;
        Ok(QuizSession::new(questions)?)
    }
}

/// How many of each tier ended up in a draw, easy first. Tiers not drawn are skipped.
pub fn difficulty_mix(questions: &[Question]) -> Vec<(Difficulty, usize)> {
    Difficulty::ALL
        .iter()
        .map(|d| (*d, questions.iter().filter(|q| q.difficulty == *d).count()))
        .filter(|(_, n)| *n > 0)
        .collect()
}
