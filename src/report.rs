//! Aggregations over a finished quiz, used by the results screen and the
//! `--json` summary.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

use crate::models::Difficulty;
use crate::session::{AnswerDetail, QuizResult};

/// Reference line drawn on the per-difficulty chart.
pub const TARGET_PERCENTAGE: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    Excellent,
    Good,
    Fair,
    NeedsWork,
}

impl Grade {
    pub fn from_percentage(pct: f64) -> Self {
        if pct >= 80.0 {
            Grade::Excellent
        } else if pct >= 60.0 {
            Grade::Good
        } else if pct >= 40.0 {
            Grade::Fair
        } else {
            Grade::NeedsWork
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent! You have a solid grip on economics and finance.",
            Grade::Good => "Good work! You know these topics well.",
            Grade::Fair => "Not bad! Keep practicing to improve.",
            Grade::NeedsWork => "Keep studying! Review the basic concepts.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreTier {
    High,
    Mid,
    Low,
}

impl ScoreTier {
    pub fn from_percentage(pct: f64) -> Self {
        if pct >= 70.0 {
            ScoreTier::High
        } else if pct >= 50.0 {
            ScoreTier::Mid
        } else {
            ScoreTier::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Accuracy {
    pub label: String,
    pub answered: usize,
    pub correct: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub score: usize,
    pub total: usize,
    pub percentage: f64,
    pub grade: Grade,
    pub message: &'static str,
    pub by_topic: Vec<Accuracy>,
    pub by_category: Vec<Accuracy>,
    pub by_difficulty: Vec<Accuracy>,
    pub cumulative: Vec<f64>,
    pub total_elapsed_secs: f64,
}

impl QuizResult {
    pub fn percentage(&self) -> f64 {
        percent(self.score, self.total)
    }

    pub fn grade(&self) -> Grade {
        Grade::from_percentage(self.percentage())
    }

    pub fn accuracy_by_topic(&self) -> Vec<Accuracy> {
        group_by(&self.details, |d| d.topic.clone())
    }

    pub fn accuracy_by_category(&self) -> Vec<Accuracy> {
        group_by(&self.details, |d| d.category.label().to_string())
    }

    /// Always one entry per tier, easy first; tiers absent from the quiz read 0%.
    pub fn accuracy_by_difficulty(&self) -> Vec<Accuracy> {
        Difficulty::ALL
            .iter()
            .map(|tier| {
                let (answered, correct) = self
                    .details
                    .iter()
                    .filter(|d| d.difficulty == *tier)
                    .fold((0, 0), |(n, c), d| (n + 1, c + usize::from(d.correct)));
                Accuracy {
                    label: tier.label().to_string(),
                    answered,
                    correct,
                    percentage: percent(correct, answered),
                }
            })
            .collect()
    }

    /// Running percentage correct after each question.
    pub fn cumulative_accuracy(&self) -> Vec<f64> {
        let mut correct = 0;
        self.details
            .iter()
            .enumerate()
            .map(|(i, d)| {
                if d.correct {
                    correct += 1;
                }
                percent(correct, i + 1)
            })
            .collect()
    }

    pub fn difficulty_distribution(&self) -> [(Difficulty, usize); 3] {
        Difficulty::ALL.map(|tier| {
            (
                tier,
                self.details.iter().filter(|d| d.difficulty == tier).count(),
            )
        })
    }

    pub fn total_elapsed(&self) -> Duration {
        self.details.iter().map(|d| d.elapsed).sum()
    }

    pub fn average_elapsed(&self) -> Duration {
        if self.details.is_empty() {
            Duration::ZERO
        } else {
            self.total_elapsed() / self.details.len() as u32
        }
    }

    pub fn summary(&self) -> Summary {
        let grade = self.grade();
        Summary {
            score: self.score,
            total: self.total,
            percentage: self.percentage(),
            grade,
            message: grade.message(),
            by_topic: self.accuracy_by_topic(),
            by_category: self.accuracy_by_category(),
            by_difficulty: self.accuracy_by_difficulty(),
            cumulative: self.cumulative_accuracy(),
            total_elapsed_secs: self.total_elapsed().as_secs_f64(),
        }
    }
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

fn group_by<F>(details: &[AnswerDetail], key: F) -> Vec<Accuracy>
where
    F: Fn(&AnswerDetail) -> String,
{
    let mut groups: BTreeMap<String, (usize, usize)> = BTreeMap::new();
    for d in details {
        let entry = groups.entry(key(d)).or_insert((0, 0));
        entry.0 += 1;
        if d.correct {
            entry.1 += 1;
        }
    }

    groups
        .into_iter()
        .map(|(label, (answered, correct))| Accuracy {
            label,
            answered,
            correct,
            percentage: percent(correct, answered),
        })
        .collect()
}
