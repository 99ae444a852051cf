use log::info;
use rusqlite::types::Type;
use rusqlite::{params, Connection, Result, Row, ToSql};
use std::path::Path;

use crate::models::{AnswerLabel, Category, Difficulty, DifficultyCount, Question, QuestionFilter};
use crate::seed;

pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    pub fn init(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS questions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                category TEXT NOT NULL,
                topic TEXT NOT NULL,
                difficulty INTEGER NOT NULL CHECK (difficulty IN (1, 2, 3)),
                prompt TEXT NOT NULL,
                option_a TEXT NOT NULL,
                option_b TEXT NOT NULL,
                option_c TEXT NOT NULL,
                option_d TEXT NOT NULL,
                correct TEXT NOT NULL CHECK (correct IN ('a', 'b', 'c', 'd'))
            );

            CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category);
            "#,
        )?;

        let existing = self.count_questions()?;
        if existing == 0 {
            let inserted = self.seed()?;
            info!("seeded question bank with {} questions", inserted);
        } else {
            info!("question bank already holds {} questions", existing);
        }

        Ok(())
    }

    fn seed(&self) -> Result<usize> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                r#"
                INSERT INTO questions
                    (category, topic, difficulty, prompt, option_a, option_b, option_c, option_d, correct)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
                "#,
            )?;

            for q in seed::QUESTIONS {
                stmt.execute(params![
                    q.category.as_str(),
                    q.topic,
                    q.difficulty.as_i32(),
                    q.prompt,
                    q.options[0],
                    q.options[1],
                    q.options[2],
                    q.options[3],
                    q.correct.as_str(),
                ])?;
            }
        }
        tx.commit()?;

        Ok(seed::QUESTIONS.len())
    }

    pub fn count_questions(&self) -> Result<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM questions", [], |row| row.get(0))
    }

    pub fn list_topics(&self, categories: &[Category]) -> Result<Vec<String>> {
        if categories.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!(
            "SELECT DISTINCT topic FROM questions WHERE category IN ({}) ORDER BY topic",
            placeholders(1, categories.len())
        );
        let names: Vec<&str> = categories.iter().map(|c| c.as_str()).collect();
        let params_refs: Vec<&dyn ToSql> = names.iter().map(|n| n as &dyn ToSql).collect();

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(params_refs.as_slice(), |row| row.get(0))?;
        rows.collect::<Result<Vec<String>>>()
    }

    pub fn get_questions(&self, filter: &QuestionFilter) -> Result<Vec<Question>> {
        let mut clauses: Vec<String> = Vec::new();
        let mut params_vec: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(categories) = &filter.categories {
            if categories.is_empty() {
                return Ok(Vec::new());
            }
            clauses.push(format!(
                "category IN ({})",
                placeholders(params_vec.len() + 1, categories.len())
            ));
            for c in categories {
                params_vec.push(Box::new(c.as_str()));
            }
        }

        if let Some(topics) = &filter.topics {
            if topics.is_empty() {
                return Ok(Vec::new());
            }
            clauses.push(format!(
                "topic IN ({})",
                placeholders(params_vec.len() + 1, topics.len())
            ));
            for t in topics {
                params_vec.push(Box::new(t.clone()));
            }
        }

        if let Some(difficulty) = filter.difficulty {
            clauses.push(format!("difficulty = ?{}", params_vec.len() + 1));
            params_vec.push(Box::new(difficulty.as_i32()));
        }

        let mut query = String::from(
            r#"
            SELECT id, category, topic, difficulty, prompt,
                   option_a, option_b, option_c, option_d, correct
            FROM questions
            "#,
        );
        if !clauses.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&clauses.join(" AND "));
        }
        query.push_str(" ORDER BY id");

        let mut stmt = self.conn.prepare(&query)?;
        let params_refs: Vec<&dyn ToSql> = params_vec.iter().map(|b| b.as_ref()).collect();
        let rows = stmt.query_map(params_refs.as_slice(), question_from_row)?;
        rows.collect::<Result<Vec<_>>>()
    }

    pub fn get_question(&self, id: i64) -> Result<Option<Question>> {
        let result = self.conn.query_row(
            r#"
            SELECT id, category, topic, difficulty, prompt,
                   option_a, option_b, option_c, option_d, correct
            FROM questions WHERE id = ?1
            "#,
            params![id],
            question_from_row,
        );

        match result {
            Ok(q) => Ok(Some(q)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn difficulty_stats(&self) -> Result<Vec<DifficultyCount>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT difficulty, COUNT(*)
            FROM questions
            GROUP BY difficulty
            ORDER BY difficulty
            "#,
        )?;

        let rows = stmt.query_map([], |row| {
            let level: i32 = row.get(0)?;
            Ok(DifficultyCount {
                difficulty: Difficulty::from_i32(level)
                    .ok_or_else(|| conversion_error(0, Type::Integer, level))?,
                count: row.get(1)?,
            })
        })?;
        rows.collect::<Result<Vec<_>>>()
    }
}

// "?3, ?4, ?5" for start = 3, count = 3
fn placeholders(start: usize, count: usize) -> String {
    (start..start + count)
        .map(|i| format!("?{}", i))
        .collect::<Vec<_>>()
        .join(", ")
}

fn conversion_error(idx: usize, ty: Type, value: impl std::fmt::Display) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        idx,
        ty,
        format!("unexpected value '{}'", value).into(),
    )
}

fn question_from_row(row: &Row<'_>) -> Result<Question> {
    let category: String = row.get(1)?;
    let difficulty: i32 = row.get(3)?;
    let correct: String = row.get(9)?;

    Ok(Question {
        id: row.get(0)?,
        category: Category::from_str(&category)
            .ok_or_else(|| conversion_error(1, Type::Text, &category))?,
        topic: row.get(2)?,
        difficulty: Difficulty::from_i32(difficulty)
            .ok_or_else(|| conversion_error(3, Type::Integer, difficulty))?,
        prompt: row.get(4)?,
        options: [row.get(5)?, row.get(6)?, row.get(7)?, row.get(8)?],
        correct: AnswerLabel::parse(&correct)
            .ok_or_else(|| conversion_error(9, Type::Text, &correct))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_db() -> Database {
        let db = Database::open(":memory:").expect("Failed to create in-memory database");
        db.init().expect("Failed to initialize database");
        db
    }

    mod init_tests {
        use super::*;

        #[test]
        fn init_creates_and_seeds_table() {
            let db = setup_db();
            let count = db.count_questions().expect("questions table should exist");
            assert_eq!(count, seed::QUESTIONS.len() as i64);
        }

        #[test]
        fn init_is_idempotent() {
            let db = setup_db();
            db.init().expect("Re-init should succeed");
            db.init().expect("Re-init should succeed");
            assert_eq!(db.count_questions().unwrap(), seed::QUESTIONS.len() as i64);
        }

        #[test]
        fn init_does_not_reseed_non_empty_table() {
            let db = Database::open(":memory:").unwrap();
            db.conn
                .execute_batch(
                    r#"
                    CREATE TABLE questions (
                        id INTEGER PRIMARY KEY AUTOINCREMENT,
                        category TEXT NOT NULL,
                        topic TEXT NOT NULL,
                        difficulty INTEGER NOT NULL,
                        prompt TEXT NOT NULL,
                        option_a TEXT NOT NULL,
                        option_b TEXT NOT NULL,
                        option_c TEXT NOT NULL,
                        option_d TEXT NOT NULL,
                        correct TEXT NOT NULL
                    );
                    INSERT INTO questions
                        (category, topic, difficulty, prompt, option_a, option_b, option_c, option_d, correct)
                    VALUES ('micro', 'Costs', 1, 'Only one?', 'w', 'x', 'y', 'z', 'a');
                    "#,
                )
                .unwrap();

            db.init().unwrap();
            assert_eq!(db.count_questions().unwrap(), 1);
        }

        #[test]
        fn check_constraint_rejects_bad_label() {
            let db = setup_db();
            let result = db.conn.execute(
                r#"
                INSERT INTO questions
                    (category, topic, difficulty, prompt, option_a, option_b, option_c, option_d, correct)
                VALUES ('micro', 'Costs', 1, 'Bad', 'w', 'x', 'y', 'z', 'e')
                "#,
                [],
            );
            assert!(result.is_err());
        }

        #[test]
        fn check_constraint_rejects_bad_difficulty() {
            let db = setup_db();
            let result = db.conn.execute(
                r#"
                INSERT INTO questions
                    (category, topic, difficulty, prompt, option_a, option_b, option_c, option_d, correct)
                VALUES ('micro', 'Costs', 4, 'Bad', 'w', 'x', 'y', 'z', 'a')
                "#,
                [],
            );
            assert!(result.is_err());
        }
    }

    mod topic_tests {
        use super::*;

        #[test]
        fn list_topics_empty_selection() {
            let db = setup_db();
            assert!(db.list_topics(&[]).unwrap().is_empty());
        }

        #[test]
        fn list_topics_sorted_and_distinct() {
            let db = setup_db();
            let topics = db.list_topics(&Category::ALL).unwrap();
            let mut sorted = topics.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(topics, sorted);
            assert!(topics.contains(&"Elasticity".to_string()));
            assert!(topics.contains(&"Bonds".to_string()));
        }

        #[test]
        fn list_topics_restricted_to_category() {
            let db = setup_db();
            let topics = db.list_topics(&[Category::Finance]).unwrap();
            assert!(topics.contains(&"Bonds".to_string()));
            assert!(!topics.contains(&"Elasticity".to_string()));
            assert!(!topics.contains(&"Inflation".to_string()));
        }
    }

    mod question_tests {
        use super::*;

        #[test]
        fn get_questions_all() {
            let db = setup_db();
            let questions = db.get_questions(&QuestionFilter::all()).unwrap();
            assert_eq!(questions.len(), seed::QUESTIONS.len());
            assert!(questions.windows(2).all(|w| w[0].id < w[1].id));
        }

        #[test]
        fn get_questions_by_category() {
            let db = setup_db();
            let filter = QuestionFilter::all().with_categories(vec![Category::Macro]);
            let questions = db.get_questions(&filter).unwrap();
            assert!(!questions.is_empty());
            assert!(questions.iter().all(|q| q.category == Category::Macro));
        }

        #[test]
        fn get_questions_by_topic_and_difficulty() {
            let db = setup_db();
            let filter = QuestionFilter::all()
                .with_categories(vec![Category::Micro, Category::Finance])
                .with_topics(vec!["Elasticity".to_string(), "Bonds".to_string()])
                .with_difficulty(Some(Difficulty::Hard));
            let questions = db.get_questions(&filter).unwrap();
            assert!(!questions.is_empty());
            for q in &questions {
                assert!(q.topic == "Elasticity" || q.topic == "Bonds");
                assert_eq!(q.difficulty, Difficulty::Hard);
            }
        }

        #[test]
        fn get_questions_matches_in_memory_filter() {
            let db = setup_db();
            let all = db.get_questions(&QuestionFilter::all()).unwrap();
            let filter = QuestionFilter::all()
                .with_categories(vec![Category::Finance])
                .with_difficulty(Some(Difficulty::Medium));
            let expected: Vec<i64> = all
                .iter()
                .filter(|q| filter.matches(q))
                .map(|q| q.id)
                .collect();
            let actual: Vec<i64> = db
                .get_questions(&filter)
                .unwrap()
                .iter()
                .map(|q| q.id)
                .collect();
            assert_eq!(actual, expected);
        }

        #[test]
        fn get_questions_empty_lists_select_nothing() {
            let db = setup_db();
            let filter = QuestionFilter::all().with_categories(vec![]);
            assert!(db.get_questions(&filter).unwrap().is_empty());
            let filter = QuestionFilter::all().with_topics(vec![]);
            assert!(db.get_questions(&filter).unwrap().is_empty());
        }

        #[test]
        fn get_questions_unknown_topic() {
            let db = setup_db();
            let filter = QuestionFilter::all().with_topics(vec!["Astrology".to_string()]);
            assert!(db.get_questions(&filter).unwrap().is_empty());
        }

        #[test]
        fn question_roundtrips_seed_fields() {
            let db = setup_db();
            let q = db.get_question(1).unwrap().expect("first question");
            let seeded = &seed::QUESTIONS[0];
            assert_eq!(q.category, seeded.category);
            assert_eq!(q.topic, seeded.topic);
            assert_eq!(q.difficulty, seeded.difficulty);
            assert_eq!(q.prompt, seeded.prompt);
            assert_eq!(q.options[3], seeded.options[3]);
            assert_eq!(q.correct, seeded.correct);
        }

        #[test]
        fn get_question_not_found() {
            let db = setup_db();
            assert!(db.get_question(9999).unwrap().is_none());
        }

        #[test]
        fn unknown_category_surfaces_as_error() {
            let db = setup_db();
            db.conn
                .execute("UPDATE questions SET category = 'history' WHERE id = 1", [])
                .unwrap();
            let result = db.get_question(1);
            assert!(matches!(
                result,
                Err(rusqlite::Error::FromSqlConversionFailure(1, Type::Text, _))
            ));
        }
    }

    mod stats_tests {
        use super::*;

        #[test]
        fn difficulty_stats_cover_all_tiers() {
            let db = setup_db();
            let stats = db.difficulty_stats().unwrap();
            let tiers: Vec<Difficulty> = stats.iter().map(|s| s.difficulty).collect();
            assert_eq!(tiers, Difficulty::ALL.to_vec());
            let total: i64 = stats.iter().map(|s| s.count).sum();
            assert_eq!(total, db.count_questions().unwrap());
        }

        #[test]
        fn difficulty_stats_empty_table() {
            let db = setup_db();
            db.conn.execute("DELETE FROM questions", []).unwrap();
            assert!(db.difficulty_stats().unwrap().is_empty());
        }
    }

    #[test]
    fn placeholders_are_numbered_from_start() {
        assert_eq!(placeholders(1, 3), "?1, ?2, ?3");
        assert_eq!(placeholders(4, 2), "?4, ?5");
        assert_eq!(placeholders(1, 0), "");
    }
}
