use serde::{Deserialize, Serialize};

// Question categories in the bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Micro,
    Macro,
    Finance,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Micro, Category::Macro, Category::Finance];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Micro => "micro",
            Category::Macro => "macro",
            Category::Finance => "finance",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "micro" | "microeconomics" => Some(Category::Micro),
            "macro" | "macroeconomics" => Some(Category::Macro),
            "finance" | "finanzas" | "fin" => Some(Category::Finance),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Micro => "Microeconomics",
            Category::Macro => "Macroeconomics",
            Category::Finance => "Finance",
        }
    }
}

// Ordinal difficulty tier, stored as 1..=3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Easy = 1,
    Medium = 2,
    Hard = 3,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_i32(&self) -> i32 {
        *self as i32
    }

    pub fn from_i32(v: i32) -> Option<Self> {
        match v {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Medium),
            3 => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "e" | "1" => Some(Difficulty::Easy),
            "medium" | "m" | "2" => Some(Difficulty::Medium),
            "hard" | "h" | "3" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// One of the four option labels a question can be answered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerLabel {
    A,
    B,
    C,
    D,
}

impl AnswerLabel {
    pub const ALL: [AnswerLabel; 4] = [AnswerLabel::A, AnswerLabel::B, AnswerLabel::C, AnswerLabel::D];

    /// Parses a label, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "a" => Some(AnswerLabel::A),
            "b" => Some(AnswerLabel::B),
            "c" => Some(AnswerLabel::C),
            "d" => Some(AnswerLabel::D),
            _ => None,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerLabel::A => "a",
            AnswerLabel::B => "b",
            AnswerLabel::C => "c",
            AnswerLabel::D => "d",
        }
    }

    pub fn upper(&self) -> &'static str {
        match self {
            AnswerLabel::A => "A",
            AnswerLabel::B => "B",
            AnswerLabel::C => "C",
            AnswerLabel::D => "D",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub category: Category,
    pub topic: String,
    pub difficulty: Difficulty,
    pub prompt: String,
    pub options: [String; 4],
    pub correct: AnswerLabel,
}

impl Question {
    pub fn option(&self, label: AnswerLabel) -> &str {
        &self.options[label.index()]
    }
}

// Filter over the question bank. `None` means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    pub categories: Option<Vec<Category>>,
    pub topics: Option<Vec<String>>,
    pub difficulty: Option<Difficulty>,
}

impl QuestionFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = Some(categories);
        self
    }

    pub fn with_topics(mut self, topics: Vec<String>) -> Self {
        self.topics = Some(topics);
        self
    }

    pub fn with_difficulty(mut self, difficulty: Option<Difficulty>) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn matches(&self, q: &Question) -> bool {
        self.categories
            .as_ref()
            .map_or(true, |cats| cats.contains(&q.category))
            && self
                .topics
                .as_ref()
                .map_or(true, |topics| topics.iter().any(|t| t == &q.topic))
            && self.difficulty.map_or(true, |d| d == q.difficulty)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DifficultyCount {
    pub difficulty: Difficulty,
    pub count: i64,
}

// JSON output wrapper for CLI
#[derive(Debug, Serialize)]
pub struct JsonOutput<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_question(category: Category, topic: &str, difficulty: Difficulty) -> Question {
        Question {
            id: 1,
            category,
            topic: topic.to_string(),
            difficulty,
            prompt: "Prompt".to_string(),
            options: [
                "one".to_string(),
                "two".to_string(),
                "three".to_string(),
                "four".to_string(),
            ],
            correct: AnswerLabel::B,
        }
    }

    mod category_tests {
        use super::*;

        #[test]
        fn as_str_roundtrips() {
            for cat in Category::ALL {
                assert_eq!(Category::from_str(cat.as_str()), Some(cat));
            }
        }

        #[test]
        fn from_str_accepts_aliases() {
            assert_eq!(Category::from_str("Microeconomics"), Some(Category::Micro));
            assert_eq!(Category::from_str(" MACRO "), Some(Category::Macro));
            assert_eq!(Category::from_str("finanzas"), Some(Category::Finance));
        }

        #[test]
        fn from_str_rejects_unknown() {
            assert_eq!(Category::from_str("history"), None);
            assert_eq!(Category::from_str(""), None);
        }

        #[test]
        fn serializes_lowercase() {
            let json = serde_json::to_string(&Category::Finance).unwrap();
            assert_eq!(json, "\"finance\"");
        }
    }

    mod difficulty_tests {
        use super::*;

        #[test]
        fn from_i32_valid_range() {
            assert_eq!(Difficulty::from_i32(1), Some(Difficulty::Easy));
            assert_eq!(Difficulty::from_i32(2), Some(Difficulty::Medium));
            assert_eq!(Difficulty::from_i32(3), Some(Difficulty::Hard));
        }

        #[test]
        fn from_i32_out_of_range() {
            assert_eq!(Difficulty::from_i32(0), None);
            assert_eq!(Difficulty::from_i32(4), None);
        }

        #[test]
        fn as_i32_matches_ordinal() {
            assert_eq!(Difficulty::Easy.as_i32(), 1);
            assert_eq!(Difficulty::Hard.as_i32(), 3);
        }

        #[test]
        fn from_str_names_and_numbers() {
            assert_eq!(Difficulty::from_str("medium"), Some(Difficulty::Medium));
            assert_eq!(Difficulty::from_str("3"), Some(Difficulty::Hard));
            assert_eq!(Difficulty::from_str("E"), Some(Difficulty::Easy));
            assert_eq!(Difficulty::from_str("impossible"), None);
        }

        #[test]
        fn ordering_follows_tier() {
            assert!(Difficulty::Easy < Difficulty::Medium);
            assert!(Difficulty::Medium < Difficulty::Hard);
        }
    }

    mod answer_label_tests {
        use super::*;

        #[test]
        fn parse_is_case_insensitive() {
            assert_eq!(AnswerLabel::parse("b"), Some(AnswerLabel::B));
            assert_eq!(AnswerLabel::parse("B"), Some(AnswerLabel::B));
            assert_eq!(AnswerLabel::parse(" d "), Some(AnswerLabel::D));
        }

        #[test]
        fn parse_rejects_outside_set() {
            assert_eq!(AnswerLabel::parse("e"), None);
            assert_eq!(AnswerLabel::parse(""), None);
            assert_eq!(AnswerLabel::parse("ab"), None);
        }

        #[test]
        fn index_mapping() {
            assert_eq!(AnswerLabel::from_index(0), Some(AnswerLabel::A));
            assert_eq!(AnswerLabel::from_index(3), Some(AnswerLabel::D));
            assert_eq!(AnswerLabel::from_index(4), None);
            assert_eq!(AnswerLabel::C.index(), 2);
        }

        #[test]
        fn question_option_lookup() {
            let q = make_question(Category::Micro, "Costs", Difficulty::Easy);
            assert_eq!(q.option(AnswerLabel::A), "one");
            assert_eq!(q.option(AnswerLabel::D), "four");
        }
    }

    mod filter_tests {
        use super::*;

        #[test]
        fn all_matches_everything() {
            let q = make_question(Category::Finance, "Bonds", Difficulty::Hard);
            assert!(QuestionFilter::all().matches(&q));
        }

        #[test]
        fn category_filter() {
            let q = make_question(Category::Finance, "Bonds", Difficulty::Hard);
            let f = QuestionFilter::all().with_categories(vec![Category::Micro]);
            assert!(!f.matches(&q));
            let f = QuestionFilter::all().with_categories(vec![Category::Micro, Category::Finance]);
            assert!(f.matches(&q));
        }

        #[test]
        fn topic_and_difficulty_filter() {
            let q = make_question(Category::Macro, "Inflation", Difficulty::Medium);
            let f = QuestionFilter::all()
                .with_topics(vec!["Inflation".to_string()])
                .with_difficulty(Some(Difficulty::Medium));
            assert!(f.matches(&q));

            let f = f.with_difficulty(Some(Difficulty::Easy));
            assert!(!f.matches(&q));
        }

        #[test]
        fn empty_lists_match_nothing() {
            let q = make_question(Category::Macro, "Inflation", Difficulty::Medium);
            assert!(!QuestionFilter::all().with_categories(vec![]).matches(&q));
            assert!(!QuestionFilter::all().with_topics(vec![]).matches(&q));
        }
    }

    mod json_output_tests {
        use super::*;

        #[test]
        fn ok_wraps_data() {
            let out = JsonOutput::ok(42);
            let json = serde_json::to_value(&out).unwrap();
            assert_eq!(json["success"], true);
            assert_eq!(json["data"], 42);
            assert!(json["error"].is_null());
        }

        #[test]
        fn err_has_message() {
            let out = JsonOutput::<()>::err("boom");
            let json = serde_json::to_value(&out).unwrap();
            assert_eq!(json["success"], false);
            assert_eq!(json["error"], "boom");
        }
    }
}
