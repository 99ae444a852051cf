//! Quiz session engine.
//!
//! A `QuizSession` walks a fixed, ordered list of questions one step at a
//! time, remembers the chosen answer and time spent on each question, and
//! scores the attempt once at the end. Navigation past either end is reported
//! through return values rather than errors so the UI can poll freely.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Serialize, Serializer};

use crate::error::SessionError;
use crate::models::{AnswerLabel, Category, Difficulty, Question};

/// Source of "now" for per-question timing.
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[derive(Debug)]
pub struct QuizSession<C: Clock = SystemClock> {
    questions: Vec<Question>,
    position: usize,
    answers: Vec<Option<AnswerLabel>>,
    elapsed: Vec<Duration>,
    started_at: Option<Instant>,
    clock: C,
}

impl QuizSession<SystemClock> {
    pub fn new(questions: Vec<Question>) -> Result<Self, SessionError> {
        Self::with_clock(questions, SystemClock)
    }
}

impl<C: Clock> QuizSession<C> {
    pub fn with_clock(questions: Vec<Question>, clock: C) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }

        let total = questions.len();
        debug!("starting quiz session with {} questions", total);

        Ok(Self {
            questions,
            position: 0,
            answers: vec![None; total],
            elapsed: vec![Duration::ZERO; total],
            started_at: None,
            clock,
        })
    }

    /// The question at the current position, or `None` past the end.
    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.position)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_last(&self) -> bool {
        self.position + 1 >= self.questions.len()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answer_at(&self, index: usize) -> Option<AnswerLabel> {
        self.answers.get(index).copied().flatten()
    }

    pub fn current_answer(&self) -> Option<AnswerLabel> {
        self.answer_at(self.position)
    }

    pub fn elapsed_at(&self, index: usize) -> Option<Duration> {
        self.elapsed.get(index).copied()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    /// Starts the stopwatch for the question now on screen.
    pub fn begin_timing(&mut self) {
        self.started_at = Some(self.clock.now());
    }

    /// Overwrites the choice for the current question.
    pub fn record_answer(&mut self, label: AnswerLabel) {
        if let Some(slot) = self.answers.get_mut(self.position) {
            *slot = Some(label);
        }
    }

    /// Parses `label` and records it. Labels outside a-d leave the session untouched.
    pub fn record_answer_str(&mut self, label: &str) -> Result<(), SessionError> {
        let parsed =
            AnswerLabel::parse(label).ok_or_else(|| SessionError::InvalidLabel(label.to_string()))?;
        self.record_answer(parsed);
        Ok(())
    }

    pub fn advance(&mut self) -> bool {
        if self.position + 1 >= self.questions.len() {
            return false;
        }
        self.close_timing();
        self.position += 1;
        true
    }

    pub fn retreat(&mut self) -> bool {
        if self.position == 0 {
            return false;
        }
        self.close_timing();
        self.position -= 1;
        true
    }

    /// Scores the attempt. The last question's timing is closed out if the
    /// caller never navigated away from it.
    pub fn finalize(&mut self) -> QuizResult {
        if self.started_at.is_some()
            && self.elapsed.get(self.position).copied() == Some(Duration::ZERO)
        {
            self.close_timing();
        }

        let details: Vec<AnswerDetail> = self
            .questions
            .iter()
            .zip(self.answers.iter())
            .zip(self.elapsed.iter())
            .map(|((question, chosen), elapsed)| AnswerDetail {
                question_id: question.id,
                category: question.category,
                topic: question.topic.clone(),
                difficulty: question.difficulty,
                prompt: question.prompt.clone(),
                chosen: *chosen,
                correct_answer: question.correct,
                correct: chosen.map_or(false, |c| c == question.correct),
                elapsed: *elapsed,
            })
            .collect();

        let score = details.iter().filter(|d| d.correct).count();
        let total = details.len();
        info!("quiz finalized: {}/{} correct", score, total);

        QuizResult {
            score,
            total,
            finished_at: Utc::now(),
            details,
        }
    }

    fn close_timing(&mut self) {
        if let Some(start) = self.started_at.take() {
            let now = self.clock.now();
            if let Some(slot) = self.elapsed.get_mut(self.position) {
                *slot = now.saturating_duration_since(start);
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnswerDetail {
    pub question_id: i64,
    pub category: Category,
    pub topic: String,
    pub difficulty: Difficulty,
    pub prompt: String,
    pub chosen: Option<AnswerLabel>,
    pub correct_answer: AnswerLabel,
    pub correct: bool,
    #[serde(rename = "elapsed_secs", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
    pub finished_at: DateTime<Utc>,
    pub details: Vec<AnswerDetail>,
}

fn serialize_secs<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}
