mod countdown;
mod db;
mod error;
mod models;
mod report;
mod sample;
mod seed;
mod session;
mod tui;

use clap::{Args, Parser, Subcommand};
use log::info;
use std::fs::OpenOptions;
use std::path::PathBuf;

use countdown::DEFAULT_TIME_LIMIT_SECS;
use db::Database;
use error::QuizError;
use models::{AnswerLabel, Category, Difficulty, JsonOutput, QuestionFilter};
use sample::{QuizSetup, DEFAULT_QUESTION_COUNT};
use tui::AppOptions;

const APP_DIR: &str = "econquiz";
const DEFAULT_DB_NAME: &str = "econquiz.db";
const LOG_FILE_NAME: &str = "econquiz.log";

#[derive(Parser)]
#[command(name = "econquiz")]
#[command(about = "A timed multiple-choice quiz on economics and finance")]
#[command(version)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize and seed the question bank
    Init,

    /// Show question counts per difficulty
    Stats,

    /// List topics for the given categories
    Topics {
        /// Comma-separated categories: micro, macro, finance
        #[arg(long, short, value_delimiter = ',')]
        category: Vec<String>,
    },

    /// Draw a random set of questions without running a quiz
    Questions {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show one question with its answer
    Show {
        /// Question ID
        id: i64,
    },

    /// Start a timed quiz in the terminal UI
    Quiz {
        #[command(flatten)]
        filter: FilterArgs,

        /// Time limit for the whole quiz, in seconds
        #[arg(long, short = 'l', default_value_t = DEFAULT_TIME_LIMIT_SECS)]
        time_limit: u64,
    },

    /// Launch interactive terminal UI
    Tui,
}

#[derive(Args, Debug, Clone)]
struct FilterArgs {
    /// Comma-separated categories: micro, macro, finance
    #[arg(long, short, value_delimiter = ',')]
    category: Vec<String>,

    /// Comma-separated topic names
    #[arg(long, short, value_delimiter = ',')]
    topic: Vec<String>,

    /// easy, medium or hard (1, 2, 3)
    #[arg(long, short)]
    difficulty: Option<String>,

    /// Number of questions to draw
    #[arg(long, short = 'n', default_value_t = DEFAULT_QUESTION_COUNT)]
    count: usize,

    /// Seed for a reproducible draw
    #[arg(long, short)]
    seed: Option<u64>,
}

impl FilterArgs {
    fn to_setup(&self) -> Result<QuizSetup, QuizError> {
        let mut filter = QuestionFilter::all().with_difficulty(parse_difficulty(
            self.difficulty.as_deref(),
        )?);
        if !self.category.is_empty() {
            filter = filter.with_categories(parse_categories(&self.category)?);
        }
        let topics: Vec<String> = self
            .topic
            .iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        if !topics.is_empty() {
            filter = filter.with_topics(topics);
        }

        Ok(QuizSetup {
            filter,
            count: self.count,
            seed: self.seed,
        })
    }
}

fn parse_categories(raw: &[String]) -> Result<Vec<Category>, QuizError> {
    let mut categories = Vec::new();
    for s in raw {
        let c = Category::from_str(s).ok_or_else(|| {
            QuizError::InvalidArgument(format!(
                "Invalid category '{}'. Use: micro, macro, or finance",
                s.trim()
            ))
        })?;
        if !categories.contains(&c) {
            categories.push(c);
        }
    }
    Ok(categories)
}

fn parse_difficulty(raw: Option<&str>) -> Result<Option<Difficulty>, QuizError> {
    match raw {
        None => Ok(None),
        Some(s) => Difficulty::from_str(s).map(Some).ok_or_else(|| {
            QuizError::InvalidArgument(format!(
                "Invalid difficulty '{}'. Use: easy, medium, or hard",
                s
            ))
        }),
    }
}

fn config_dir() -> PathBuf {
    let dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR);

    std::fs::create_dir_all(&dir).ok();
    dir
}

fn get_db_path() -> PathBuf {
    if let Ok(path) = std::env::var("ECONQUIZ_DB") {
        return PathBuf::from(path);
    }
    config_dir().join(DEFAULT_DB_NAME)
}

/// Logs go to a file since the terminal belongs to the UI.
fn init_logging() {
    let path = config_dir().join(LOG_FILE_NAME);
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    env_logger::Builder::from_env(env_logger::Env::default().filter_or("ECONQUIZ_LOG", "warn"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .ok();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let db_path = get_db_path();
    let db = Database::open(&db_path)?;
    db.init()?;
    info!("using database at {}", db_path.display());

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Init => {
            let count = db.count_questions()?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string(&JsonOutput::ok(serde_json::json!({
                        "path": db_path.display().to_string(),
                        "questions": count
                    })))?
                );
            } else {
                println!("Database initialized at: {}", db_path.display());
                println!("Questions in bank: {}", count);
            }
        }

        Commands::Stats => {
            let stats = db.difficulty_stats()?;
            let total: i64 = stats.iter().map(|s| s.count).sum();
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string(&JsonOutput::ok(serde_json::json!({
                        "total": total,
                        "by_difficulty": stats
                    })))?
                );
            } else {
                println!("=== Question Bank ===");
                for s in &stats {
                    println!("{:<8} {}", s.difficulty.label(), s.count);
                }
                println!("{}", "-".repeat(12));
                println!("{:<8} {}", "Total", total);
            }
        }

        Commands::Topics { category } => {
            let categories = if category.is_empty() {
                Category::ALL.to_vec()
            } else {
                parse_categories(&category)?
            };
            let topics = db.list_topics(&categories)?;
            if cli.json {
                println!("{}", serde_json::to_string(&JsonOutput::ok(&topics))?);
            } else if topics.is_empty() {
                println!("No topics found.");
            } else {
                for topic in topics {
                    println!("{}", topic);
                }
            }
        }

        Commands::Questions { filter } => {
            let setup = filter.to_setup()?;
            let questions = setup.draw(&db)?;
            if cli.json {
                println!("{}", serde_json::to_string(&JsonOutput::ok(&questions))?);
            } else {
                println!(
                    "{:<5} {:<15} {:<8} {:<22} PROMPT",
                    "ID", "CATEGORY", "LEVEL", "TOPIC"
                );
                println!("{}", "-".repeat(90));
                for q in &questions {
                    println!(
                        "{:<5} {:<15} {:<8} {:<22} {}",
                        q.id,
                        q.category.label(),
                        q.difficulty.label(),
                        truncate(&q.topic, 20),
                        q.prompt
                    );
                }
            }
        }

        Commands::Show { id } => {
            if let Some(q) = db.get_question(id)? {
                if cli.json {
                    println!("{}", serde_json::to_string(&JsonOutput::ok(&q))?);
                } else {
                    println!(
                        "Question {} ({}, {}, {})",
                        q.id,
                        q.category.label(),
                        q.topic,
                        q.difficulty.label()
                    );
                    println!();
                    println!("{}", q.prompt);
                    for label in AnswerLabel::ALL {
                        println!("  {}) {}", label.upper(), q.option(label));
                    }
                    println!();
                    println!("Answer: {}", q.correct.upper());
                }
            } else if cli.json {
                println!(
                    "{}",
                    serde_json::to_string(&JsonOutput::<()>::err("Question not found"))?
                );
            } else {
                println!("Question not found.");
            }
        }

        Commands::Quiz { filter, time_limit } => {
            let setup = filter.to_setup()?;
            // Surface selection problems before the terminal switches screens.
            setup.draw(&db)?;
            let options = AppOptions {
                count: setup.count,
                time_limit,
                seed: setup.seed,
            };

            match tui::run(db, options, Some(setup))? {
                Some(result) => {
                    if cli.json {
                        println!(
                            "{}",
                            serde_json::to_string(&JsonOutput::ok(serde_json::json!({
                                "result": result,
                                "summary": result.summary()
                            })))?
                        );
                    } else {
                        let secs = result.total_elapsed().as_secs();
                        println!("=== Quiz Result ===");
                        println!(
                            "Score: {}/{} ({:.1}%)",
                            result.score,
                            result.total,
                            result.percentage()
                        );
                        println!("{}", result.grade().message());
                        println!("Time: {}:{:02}", secs / 60, secs % 60);
                        println!();
                        for a in result.accuracy_by_difficulty() {
                            println!(
                                "{:<8} {}/{} ({:.0}%)",
                                a.label, a.correct, a.answered, a.percentage
                            );
                        }
                    }
                }
                None => {
                    if cli.json {
                        println!(
                            "{}",
                            serde_json::to_string(&JsonOutput::<()>::err("Quiz not finished"))?
                        );
                    } else {
                        println!("Quiz not finished.");
                    }
                }
            }
        }

        Commands::Tui => {
            let options = AppOptions {
                count: DEFAULT_QUESTION_COUNT,
                time_limit: DEFAULT_TIME_LIMIT_SECS,
                seed: None,
            };
            if let Some(result) = tui::run(db, options, None)? {
                info!("last quiz: {}/{}", result.score, result.total);
            }
        }
    }

    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
