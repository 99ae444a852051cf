mod ui;
mod widgets;

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, warn};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::countdown::{Countdown, Tick};
use crate::db::Database;
use crate::models::{AnswerLabel, Category, Difficulty, DifficultyCount, Question, QuestionFilter};
use crate::sample::{self, QuizSetup};
use crate::session::{QuizResult, QuizSession};

const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Setup,
    Quiz,
    Results,
    Stats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupFocus {
    Categories,
    Topics,
    Difficulty,
}

impl SetupFocus {
    fn next(&self) -> Self {
        match self {
            SetupFocus::Categories => SetupFocus::Topics,
            SetupFocus::Topics => SetupFocus::Difficulty,
            SetupFocus::Difficulty => SetupFocus::Categories,
        }
    }

    fn prev(&self) -> Self {
        match self {
            SetupFocus::Categories => SetupFocus::Difficulty,
            SetupFocus::Topics => SetupFocus::Categories,
            SetupFocus::Difficulty => SetupFocus::Topics,
        }
    }
}

pub struct StatefulList<T> {
    pub items: Vec<T>,
    pub selected: Option<usize>,
}

impl<T> StatefulList<T> {
    fn with_items(items: Vec<T>) -> Self {
        let selected = if items.is_empty() { None } else { Some(0) };
        Self { items, selected }
    }

    fn next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.selected {
            Some(i) if i + 1 < self.items.len() => i + 1,
            _ => 0,
        };
        self.selected = Some(i);
    }

    fn previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.selected {
            Some(0) | None => self.items.len() - 1,
            Some(i) => i - 1,
        };
        self.selected = Some(i);
    }

    fn selected_item_mut(&mut self) -> Option<&mut T> {
        match self.selected {
            Some(i) => self.items.get_mut(i),
            None => None,
        }
    }
}

/// A checkbox row in the setup screen.
pub struct Toggle<T> {
    pub value: T,
    pub checked: bool,
}

pub struct SetupState {
    pub focus: SetupFocus,
    pub categories: StatefulList<Toggle<Category>>,
    pub topics: StatefulList<Toggle<String>>,
    pub difficulty: StatefulList<Option<Difficulty>>,
}

impl SetupState {
    fn new() -> Self {
        let categories = Category::ALL
            .iter()
            .map(|c| Toggle {
                value: *c,
                checked: true,
            })
            .collect();
        let mut difficulty = vec![None];
        difficulty.extend(Difficulty::ALL.iter().map(|d| Some(*d)));

        Self {
            focus: SetupFocus::Categories,
            categories: StatefulList::with_items(categories),
            topics: StatefulList::with_items(Vec::new()),
            difficulty: StatefulList::with_items(difficulty),
        }
    }

    pub fn selected_categories(&self) -> Vec<Category> {
        self.categories
            .items
            .iter()
            .filter(|t| t.checked)
            .map(|t| t.value)
            .collect()
    }

    pub fn selected_topics(&self) -> Vec<String> {
        self.topics
            .items
            .iter()
            .filter(|t| t.checked)
            .map(|t| t.value.clone())
            .collect()
    }

    pub fn selected_difficulty(&self) -> Option<Difficulty> {
        self.difficulty
            .selected
            .and_then(|i| self.difficulty.items.get(i).copied())
            .flatten()
    }

    fn filter(&self) -> QuestionFilter {
        QuestionFilter::all()
            .with_categories(self.selected_categories())
            .with_topics(self.selected_topics())
            .with_difficulty(self.selected_difficulty())
    }
}

#[derive(Debug, Clone)]
pub struct AppOptions {
    pub count: usize,
    pub time_limit: u64,
    pub seed: Option<u64>,
}

pub struct App {
    db: Database,
    options: AppOptions,
    pub view: View,
    stats_return: View,
    bank: Vec<Question>,
    pub stats: Vec<DifficultyCount>,
    pub setup: SetupState,
    pub session: Option<QuizSession>,
    pub countdown: Countdown,
    pub result: Option<QuizResult>,
    pub timed_out: bool,
    pub feedback: Option<String>,
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(db: Database, options: AppOptions) -> Result<Self, Box<dyn std::error::Error>> {
        let stats = db.difficulty_stats()?;
        let bank = db.get_questions(&QuestionFilter::all())?;
        let countdown = Countdown::new(options.time_limit);

        let mut app = Self {
            db,
            options,
            view: View::Home,
            stats_return: View::Home,
            bank,
            stats,
            setup: SetupState::new(),
            session: None,
            countdown,
            result: None,
            timed_out: false,
            feedback: None,
            status: None,
            should_quit: false,
        };
        app.refresh_topics()?;
        Ok(app)
    }

    pub fn total_questions(&self) -> i64 {
        self.stats.iter().map(|s| s.count).sum()
    }

    /// How many questions the current setup selection can draw from.
    pub fn matching_count(&self) -> usize {
        let filter = self.setup.filter();
        self.bank.iter().filter(|q| filter.matches(q)).count()
    }

    fn refresh_topics(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let topics = self
            .db
            .list_topics(&self.setup.selected_categories())?
            .into_iter()
            .map(|t| Toggle {
                value: t,
                checked: true,
            })
            .collect();
        self.setup.topics = StatefulList::with_items(topics);
        Ok(())
    }

    fn open_setup(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.refresh_topics()?;
        self.status = None;
        self.view = View::Setup;
        Ok(())
    }

    fn open_stats(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.stats = self.db.difficulty_stats()?;
        self.stats_return = self.view;
        self.view = View::Stats;
        Ok(())
    }

    fn start_from_setup(&mut self) {
        let setup = QuizSetup {
            filter: self.setup.filter(),
            count: self.options.count,
            seed: self.options.seed,
        };
        self.start_quiz(&setup);
    }

    /// Draws questions and switches to the quiz view. Problems with the
    /// selection are reported in the status line.
    pub fn start_quiz(&mut self, setup: &QuizSetup) {
        let session = match setup.start(&self.db) {
            Ok(session) => session,
            Err(e) => {
                warn!("could not start quiz: {}", e);
                self.status = Some(capitalize(&e.to_string()));
                return;
            }
        };

        let mix = sample::difficulty_mix(session.questions())
            .iter()
            .map(|(d, n)| format!("{} {}", d.label(), n))
            .collect::<Vec<_>>()
            .join(", ");

        self.session = Some(session);
        self.countdown = Countdown::new(self.options.time_limit);
        self.result = None;
        self.timed_out = false;
        self.status = None;
        self.view = View::Quiz;
        self.load_current();
        self.feedback = Some(format!("Selected questions: {}", mix));
    }

    fn load_current(&mut self) {
        if let Some(session) = self.session.as_mut() {
            if session.current().is_none() {
                self.finish_quiz(false);
                return;
            }
            session.begin_timing();
            self.feedback = None;
        }
    }

    fn select_option(&mut self, label: AnswerLabel) {
        if let Some(session) = self.session.as_mut() {
            session.record_answer(label);
            self.feedback = Some(format!("Selected: {}", label.upper()));
        }
    }

    fn next_question(&mut self) {
        let moved = self.session.as_mut().map_or(false, |s| s.advance());
        if moved {
            self.load_current();
        } else {
            self.feedback = Some("Last question! Press f to finish".to_string());
        }
    }

    fn previous_question(&mut self) {
        let moved = self.session.as_mut().map_or(false, |s| s.retreat());
        if moved {
            self.load_current();
        }
    }

    fn finish_quiz(&mut self, timed_out: bool) {
        if let Some(mut session) = self.session.take() {
            let result = session.finalize();
            debug!("result: {}/{}", result.score, result.total);
            self.result = Some(result);
            self.timed_out = timed_out;
            self.status = if timed_out {
                Some("Time's up!".to_string())
            } else {
                None
            };
            self.view = View::Results;
        }
    }

    /// Called by the event loop once per elapsed second.
    pub fn on_second(&mut self) {
        if self.view != View::Quiz || self.session.is_none() {
            return;
        }
        if let Tick::Expired = self.countdown.tick() {
            self.finish_quiz(true);
        }
    }

    pub fn take_result(&mut self) -> Option<QuizResult> {
        self.result.take()
    }

    fn handle_key(&mut self, key: KeyCode) -> Result<(), Box<dyn std::error::Error>> {
        match self.view {
            View::Home => match key {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Enter | KeyCode::Char('s') => self.open_setup()?,
                KeyCode::Char('t') => self.open_stats()?,
                _ => {}
            },

            View::Setup => self.handle_setup_key(key)?,

            View::Quiz => match key {
                KeyCode::Char(c @ ('a'..='d' | 'A'..='D')) => {
                    if let Some(session) = self.session.as_mut() {
                        self.feedback = Some(match session.record_answer_str(&c.to_string()) {
                            Ok(()) => format!("Selected: {}", c.to_ascii_uppercase()),
                            Err(e) => e.to_string(),
                        });
                    }
                }
                KeyCode::Char(c @ '1'..='4') => {
                    if let Some(label) = AnswerLabel::from_index(c as usize - '1' as usize) {
                        self.select_option(label);
                    }
                }
                KeyCode::Char('l') | KeyCode::Char('n') | KeyCode::Right => self.next_question(),
                KeyCode::Char('h') | KeyCode::Char('p') | KeyCode::Left => {
                    self.previous_question()
                }
                KeyCode::Char('f') => self.finish_quiz(false),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },

            View::Results => match key {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('r') | KeyCode::Enter => {
                    self.status = None;
                    self.view = View::Home;
                }
                KeyCode::Char('s') => self.open_stats()?,
                _ => {}
            },

            View::Stats => match key {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('h') | KeyCode::Left => {
                    self.view = self.stats_return;
                }
                _ => {}
            },
        }
        Ok(())
    }

    fn handle_setup_key(&mut self, key: KeyCode) -> Result<(), Box<dyn std::error::Error>> {
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc => self.view = View::Home,
            KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right => {
                self.setup.focus = self.setup.focus.next()
            }
            KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Left => {
                self.setup.focus = self.setup.focus.prev()
            }
            KeyCode::Char('j') | KeyCode::Down => match self.setup.focus {
                SetupFocus::Categories => self.setup.categories.next(),
                SetupFocus::Topics => self.setup.topics.next(),
                SetupFocus::Difficulty => self.setup.difficulty.next(),
            },
            KeyCode::Char('k') | KeyCode::Up => match self.setup.focus {
                SetupFocus::Categories => self.setup.categories.previous(),
                SetupFocus::Topics => self.setup.topics.previous(),
                SetupFocus::Difficulty => self.setup.difficulty.previous(),
            },
            KeyCode::Char(' ') => match self.setup.focus {
                SetupFocus::Categories => {
                    if let Some(t) = self.setup.categories.selected_item_mut() {
                        t.checked = !t.checked;
                    }
                    self.refresh_topics()?;
                }
                SetupFocus::Topics => {
                    if let Some(t) = self.setup.topics.selected_item_mut() {
                        t.checked = !t.checked;
                    }
                }
                SetupFocus::Difficulty => {}
            },
            KeyCode::Char('d') => self.setup.difficulty.next(),
            KeyCode::Enter => self.start_from_setup(),
            _ => {}
        }
        Ok(())
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Runs the interactive UI. With `start`, the quiz begins immediately instead
/// of on the home screen. Returns the last finished result, if any.
pub fn run(
    db: Database,
    options: AppOptions,
    start: Option<QuizSetup>,
) -> Result<Option<QuizResult>, Box<dyn std::error::Error>> {
    let mut app = App::new(db, options)?;
    if let Some(setup) = start {
        app.start_quiz(&setup);
        if app.view != View::Quiz {
            let msg = app.status.take().unwrap_or_else(|| "could not start quiz".to_string());
            return Err(msg.into());
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;
    Ok(app.take_result())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code)?;
                }
            }
        }

        while last_tick.elapsed() >= TICK {
            last_tick += TICK;
            app.on_second();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_app(time_limit: u64) -> App {
        let db = Database::open(":memory:").unwrap();
        db.init().unwrap();
        App::new(
            db,
            AppOptions {
                count: 3,
                time_limit,
                seed: Some(42),
            },
        )
        .unwrap()
    }

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            app.handle_key(*key).unwrap();
        }
    }

    mod navigation_tests {
        use super::*;

        #[test]
        fn starts_on_home_with_all_topics() {
            let app = setup_app(600);
            assert_eq!(app.view, View::Home);
            assert!(app.total_questions() > 0);
            assert!(!app.setup.topics.items.is_empty());
            assert!(app.setup.topics.items.iter().all(|t| t.checked));
        }

        #[test]
        fn home_to_setup_to_quiz() {
            let mut app = setup_app(600);
            press(&mut app, &[KeyCode::Enter]);
            assert_eq!(app.view, View::Setup);
            press(&mut app, &[KeyCode::Enter]);
            assert_eq!(app.view, View::Quiz);
            assert_eq!(app.session.as_ref().unwrap().len(), 3);
        }

        #[test]
        fn stats_returns_to_previous_view() {
            let mut app = setup_app(600);
            press(&mut app, &[KeyCode::Char('t')]);
            assert_eq!(app.view, View::Stats);
            press(&mut app, &[KeyCode::Esc]);
            assert_eq!(app.view, View::Home);
        }

        #[test]
        fn quit_from_home() {
            let mut app = setup_app(600);
            press(&mut app, &[KeyCode::Char('q')]);
            assert!(app.should_quit);
        }
    }

    mod setup_tests {
        use super::*;

        #[test]
        fn unchecking_every_category_blocks_start() {
            let mut app = setup_app(600);
            press(
                &mut app,
                &[
                    KeyCode::Enter,
                    KeyCode::Char(' '),
                    KeyCode::Char('j'),
                    KeyCode::Char(' '),
                    KeyCode::Char('j'),
                    KeyCode::Char(' '),
                ],
            );
            assert!(app.setup.selected_categories().is_empty());
            assert!(app.setup.topics.items.is_empty());
            press(&mut app, &[KeyCode::Enter]);
            assert_eq!(app.view, View::Setup);
            assert_eq!(app.status.as_deref(), Some("Select at least one category"));
        }

        #[test]
        fn unchecking_category_narrows_topics() {
            let mut app = setup_app(600);
            let before = app.setup.topics.items.len();
            press(&mut app, &[KeyCode::Enter, KeyCode::Char(' ')]);
            assert!(app.setup.topics.items.len() < before);
            assert!(!app
                .setup
                .topics
                .items
                .iter()
                .any(|t| t.value == "Elasticity"));
        }

        #[test]
        fn matching_count_follows_selection() {
            let mut app = setup_app(600);
            let all = app.matching_count();
            assert_eq!(all as i64, app.total_questions());
            press(&mut app, &[KeyCode::Enter, KeyCode::Char('d')]);
            let easy = app.matching_count();
            assert!(easy > 0 && easy < all);
        }

        #[test]
        fn difficulty_cycles_through_tiers() {
            let mut app = setup_app(600);
            press(&mut app, &[KeyCode::Enter]);
            assert_eq!(app.setup.selected_difficulty(), None);
            press(&mut app, &[KeyCode::Char('d')]);
            assert_eq!(app.setup.selected_difficulty(), Some(Difficulty::Easy));
            press(&mut app, &[KeyCode::Char('d'), KeyCode::Char('d'), KeyCode::Char('d')]);
            assert_eq!(app.setup.selected_difficulty(), None);
        }
    }

    mod quiz_tests {
        use super::*;

        fn start(app: &mut App) {
            press(app, &[KeyCode::Enter, KeyCode::Enter]);
            assert_eq!(app.view, View::Quiz);
        }

        #[test]
        fn answering_and_moving() {
            let mut app = setup_app(600);
            start(&mut app);
            press(&mut app, &[KeyCode::Char('b')]);
            assert_eq!(app.feedback.as_deref(), Some("Selected: B"));
            press(&mut app, &[KeyCode::Char('l'), KeyCode::Char('3')]);
            let session = app.session.as_ref().unwrap();
            assert_eq!(session.position(), 1);
            assert_eq!(session.answer_at(0), Some(AnswerLabel::B));
            assert_eq!(session.answer_at(1), Some(AnswerLabel::C));
        }

        #[test]
        fn next_on_last_question_shows_hint() {
            let mut app = setup_app(600);
            start(&mut app);
            press(&mut app, &[KeyCode::Char('l'), KeyCode::Char('l'), KeyCode::Char('l')]);
            assert_eq!(app.session.as_ref().unwrap().position(), 2);
            assert_eq!(
                app.feedback.as_deref(),
                Some("Last question! Press f to finish")
            );
        }

        #[test]
        fn finish_produces_result() {
            let mut app = setup_app(600);
            start(&mut app);
            press(&mut app, &[KeyCode::Char('f')]);
            assert_eq!(app.view, View::Results);
            assert!(app.session.is_none());
            let result = app.result.as_ref().unwrap();
            assert_eq!(result.total, 3);
            assert_eq!(result.score, 0);
            assert!(!app.timed_out);
        }

        #[test]
        fn countdown_expiry_forces_finalize() {
            let mut app = setup_app(2);
            start(&mut app);
            press(&mut app, &[KeyCode::Char('a')]);
            app.on_second();
            assert_eq!(app.view, View::Quiz);
            app.on_second();
            assert_eq!(app.view, View::Results);
            assert!(app.timed_out);
            assert_eq!(app.status.as_deref(), Some("Time's up!"));
            assert_eq!(app.result.as_ref().unwrap().details[0].chosen, Some(AnswerLabel::A));
        }

        #[test]
        fn ticks_outside_quiz_are_ignored() {
            let mut app = setup_app(1);
            app.on_second();
            assert_eq!(app.view, View::Home);
            assert_eq!(app.countdown.remaining(), 1);
        }

        #[test]
        fn new_quiz_resets_countdown() {
            let mut app = setup_app(5);
            start(&mut app);
            app.on_second();
            press(&mut app, &[KeyCode::Char('f'), KeyCode::Char('r')]);
            assert_eq!(app.view, View::Home);
            start(&mut app);
            assert_eq!(app.countdown.remaining(), 5);
        }
    }
}
