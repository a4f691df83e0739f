//! # stellar-x
//!
//! An interactive terminal tour about space weather: a guided story, a
//! gallery, a storm damage simulator with per-character quizzes, and a
//! handful of explorable info pages.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stellar_x::{Tour, TourConfig, TourError};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), TourError> {
//!     let tour = Tour::from_config(&TourConfig::default())?;
//!     tour.run().await
//! }
//! ```

mod app;
mod config;
mod content;
mod data;
mod error;
mod exhibits;
mod logging;
mod models;
mod nav;
mod quiz;
mod storm;
mod story;
pub mod terminal;
mod ui;

use std::future;

use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind};
use futures_util::StreamExt;
use tokio::time::{self, Instant};
use tracing::{debug, info, warn};

pub use app::{App, QuizView};
pub use config::{ConfigError, Timings, TourConfig};
pub use data::{
    LoadError, QuestionBank, default_questions, default_roster, load_questions_from_json,
    parse_questions, parse_roster, validate_bank,
};
pub use error::TourError;
pub use exhibits::{ArtBoard, ImpactBoard, PredictionReel};
pub use logging::init_file_logging;
pub use models::{Character, CharacterRef, PageId, Question, RiskLevel};
pub use nav::{Edge, NavEvent, NavOutcome, NavTimings, Navigator, PageRequest, TourGraph};
pub use quiz::{AnswerFeedback, QuizError, QuizProgress, QuizRun, Thresholds, Tier};
pub use storm::{Severity, StormSliders, StormSource, System};
pub use ui::render;

/// A tour instance that can be run in the terminal.
pub struct Tour {
    app: App,
}

impl Tour {
    pub fn new(app: App) -> Self {
        Self { app }
    }

    /// Builds a tour from `config`, using the built-in roster and either the
    /// question bank named in the config or the built-in one.
    pub fn from_config(config: &TourConfig) -> Result<Self, TourError> {
        config.validate()?;
        let questions = match &config.questions {
            Some(path) => load_questions_from_json(path)?,
            None => default_questions()?,
        };
        let roster = default_roster()?;
        validate_bank(&questions, &roster)?;
        info!(
            characters = roster.len(),
            questions = questions.len(),
            "tour data loaded"
        );

        let app = App::new(roster, QuestionBank::new(questions), config, Instant::now());
        Ok(Self::new(app))
    }

    /// Run the tour in the terminal.
    ///
    /// This will take over the terminal and return when the user quits.
    pub async fn run(mut self) -> Result<(), TourError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app).await;
        terminal::restore()?;
        result
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

async fn run_event_loop(
    terminal: &mut terminal::TourTerminal,
    app: &mut App,
) -> Result<(), TourError> {
    let mut events = EventStream::new();

    loop {
        app.tick(Instant::now());
        terminal.draw(|frame| ui::render(frame, app))?;

        tokio::select! {
            event = events.next() => {
                let Some(event) = event else {
                    debug!("input stream closed");
                    break;
                };
                if let Event::Key(key) = event? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if handle_input(app, key.code, Instant::now()) {
                        break;
                    }
                }
            }
            _ = wait_for_deadline(app.next_deadline()) => {}
        }
    }

    Ok(())
}

/// Sleeps until `deadline`, or forever when nothing is scheduled.
pub async fn wait_for_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => time::sleep_until(deadline).await,
        None => future::pending::<()>().await,
    }
}

/// Applies a key press. Returns true if the tour should exit.
pub fn handle_input(app: &mut App, key: KeyCode, now: Instant) -> bool {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return true;
    }
    if !app.is_interactive() {
        return false;
    }

    let handled = match app.current_page() {
        PageId::Welcome => handle_welcome_input(app, key, now),
        PageId::Story => handle_story_input(app, key, now),
        PageId::Gallery => handle_gallery_input(app, key, now),
        PageId::DamageSimulator => handle_simulator_input(app, key, now),
        PageId::Detail => handle_detail_input(app, key, now),
        PageId::ImpactAnalysis => handle_impact_input(app, key, now),
        PageId::AuroraPainter => handle_intensity_input(app, key, now),
        PageId::StormSliders => handle_sliders_input(app, key, now),
        PageId::ArtChallenge => handle_art_input(app, key, now),
        _ => handle_info_input(app, key, now),
    };
    if !handled {
        handle_global_input(app, key, now);
    }
    false
}

fn handle_global_input(app: &mut App, key: KeyCode, now: Instant) {
    match key {
        KeyCode::Char('n') | KeyCode::PageDown | KeyCode::Tab => {
            app.go_next(now);
        }
        KeyCode::Char('p') | KeyCode::PageUp | KeyCode::BackTab => {
            app.go_back(now);
        }
        KeyCode::Char(c) => {
            if let Some(page) = c
                .to_digit(10)
                .and_then(|d| PageId::DOTS.get(d as usize))
            {
                app.jump_to(page.index(), now);
            }
        }
        _ => {}
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode, now: Instant) -> bool {
    match key {
        KeyCode::Enter => {
            app.go_next(now);
            true
        }
        _ => false,
    }
}

fn handle_story_input(app: &mut App, key: KeyCode, now: Instant) -> bool {
    if let Some(modal) = app.modal() {
        // Once answered the modal only waits for its redirect.
        if modal.answer().is_some() {
            return true;
        }
        match key {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab => app.toggle_modal_choice(),
            KeyCode::Enter => app.confirm_modal(now),
            KeyCode::Esc => app.close_modal(),
            _ => {}
        }
        return true;
    }

    match key {
        KeyCode::Left => app.story_back(now),
        KeyCode::Right => app.story_forward(now),
        KeyCode::Char('s') => app.open_modal(),
        KeyCode::Enter if app.story().is_finished() => {
            app.follow(Edge::Skip, now);
        }
        _ => return false,
    }
    true
}

fn handle_gallery_input(app: &mut App, key: KeyCode, now: Instant) -> bool {
    match key {
        KeyCode::Left => app.gallery_previous(),
        KeyCode::Right => app.gallery_next(),
        KeyCode::Esc => {
            app.follow(Edge::Return, now);
        }
        _ => return false,
    }
    true
}

fn handle_simulator_input(app: &mut App, key: KeyCode, now: Instant) -> bool {
    if app.quiz().is_some() {
        return handle_quiz_input(app, key, now);
    }

    match key {
        KeyCode::Down | KeyCode::Char('j') => app.select_next_character(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_character(),
        KeyCode::Left => app.lower_intensity(),
        KeyCode::Right => app.raise_intensity(),
        KeyCode::Enter => {
            if let Err(e) = app.start_quiz() {
                warn!(error = %e, "could not start quiz");
                app.set_notice(e.to_string());
            }
        }
        KeyCode::Char('d') => {
            app.open_detail(now);
        }
        KeyCode::Esc => {
            app.follow(Edge::Return, now);
        }
        _ => return false,
    }
    true
}

fn handle_quiz_input(app: &mut App, key: KeyCode, now: Instant) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Err(e) = app.submit_answer(now) {
                debug!(error = %e, "answer rejected");
                app.set_notice(e.to_string());
            }
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            if app.quiz().is_some_and(|q| q.run().is_completed()) {
                app.retry_quiz();
            }
        }
        KeyCode::Esc => app.close_quiz(),
        _ => return false,
    }
    true
}

fn handle_detail_input(app: &mut App, key: KeyCode, now: Instant) -> bool {
    match key {
        KeyCode::Enter => {
            app.follow(Edge::Skip, now);
        }
        KeyCode::Esc => {
            app.follow(Edge::Return, now);
        }
        _ => return false,
    }
    true
}

fn handle_intensity_input(app: &mut App, key: KeyCode, now: Instant) -> bool {
    match key {
        KeyCode::Left => app.lower_intensity(),
        KeyCode::Right => app.raise_intensity(),
        _ => return handle_info_input(app, key, now),
    }
    true
}

fn handle_impact_input(app: &mut App, key: KeyCode, now: Instant) -> bool {
    match key {
        KeyCode::Left => app.previous_metric(),
        KeyCode::Right => app.next_metric(),
        KeyCode::Down | KeyCode::Char('j') => app.next_category(),
        KeyCode::Up | KeyCode::Char('k') => app.previous_category(),
        KeyCode::Char(' ') => app.toggle_category(),
        _ => return handle_info_input(app, key, now),
    }
    true
}

fn handle_sliders_input(app: &mut App, key: KeyCode, now: Instant) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.select_next_source(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_source(),
        KeyCode::Left => app.lower_source(),
        KeyCode::Right => app.raise_source(),
        _ => return handle_info_input(app, key, now),
    }
    true
}

fn handle_art_input(app: &mut App, key: KeyCode, now: Instant) -> bool {
    match key {
        KeyCode::Left => app.select_previous_artwork(),
        KeyCode::Right => app.select_next_artwork(),
        KeyCode::Char(' ') | KeyCode::Char('l') => app.like_artwork(),
        _ => return handle_info_input(app, key, now),
    }
    true
}

fn handle_info_input(app: &mut App, key: KeyCode, now: Instant) -> bool {
    match key {
        KeyCode::Enter => {
            app.go_next(now);
        }
        KeyCode::Esc => {
            app.follow(Edge::Return, now);
        }
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn ready_app() -> (App, Instant) {
        let start = Instant::now();
        let bank = QuestionBank::new(default_questions().unwrap());
        let mut app = App::new(default_roster().unwrap(), bank, &TourConfig::default(), start);
        let now = start + ms(2000);
        app.tick(now);
        (app, now)
    }

    #[test]
    fn test_quit_works_while_loading() {
        let start = Instant::now();
        let bank = QuestionBank::new(default_questions().unwrap());
        let mut app = App::new(default_roster().unwrap(), bank, &TourConfig::default(), start);
        assert!(app.is_loading());
        assert!(!handle_input(&mut app, KeyCode::Enter, start));
        assert_eq!(app.current_page(), PageId::Welcome);
        assert!(!app.is_transitioning());
        assert!(handle_input(&mut app, KeyCode::Char('q'), start));
    }

    #[test]
    fn test_digit_jumps_to_page() {
        let (mut app, now) = ready_app();
        handle_input(&mut app, KeyCode::Char('4'), now);
        app.tick(now + ms(400));
        assert_eq!(app.current_page(), PageId::DamageSimulator);
    }

    #[test]
    fn test_input_ignored_while_transitioning() {
        let (mut app, now) = ready_app();
        handle_input(&mut app, KeyCode::Enter, now);
        assert!(app.is_transitioning());
        handle_input(&mut app, KeyCode::Char('7'), now + ms(100));
        app.tick(now + ms(400));
        assert_eq!(app.current_page(), PageId::Story);
    }

    #[test]
    fn test_escape_on_simulator_returns_to_legacy_stories() {
        let (mut app, now) = ready_app();
        app.jump_to(PageId::DamageSimulator.index(), now);
        let now = now + ms(400);
        app.tick(now);

        handle_input(&mut app, KeyCode::Esc, now);
        app.tick(now + ms(400));
        assert_eq!(app.current_page(), PageId::LegacyStories);
    }

    #[test]
    fn test_enter_in_simulator_starts_quiz() {
        let (mut app, now) = ready_app();
        app.jump_to(PageId::DamageSimulator.index(), now);
        let now = now + ms(400);
        app.tick(now);

        handle_input(&mut app, KeyCode::Enter, now);
        assert!(app.quiz().is_some());
        handle_input(&mut app, KeyCode::Enter, now);
        handle_input(&mut app, KeyCode::Enter, now);
        assert!(app.notice().is_some());
    }

    #[test]
    fn test_sliders_page_keys_move_one_source() {
        let (mut app, now) = ready_app();
        app.jump_to(PageId::StormSliders.index(), now);
        let now = now + ms(400);
        app.tick(now);

        handle_input(&mut app, KeyCode::Char('j'), now);
        for _ in 0..9 {
            handle_input(&mut app, KeyCode::Right, now);
        }
        let affected: Vec<_> = app
            .sliders()
            .affected_systems()
            .into_iter()
            .filter(|(_, hit)| *hit)
            .map(|(system, _)| system.label())
            .collect();
        assert_eq!(affected, ["Satellite", "GPS Tracker"]);
        assert_eq!(app.current_page(), PageId::StormSliders);
    }

    #[test]
    fn test_from_config_rejects_bank_for_unknown_character() {
        let path = std::env::temp_dir().join(format!("stellar-x-pilots-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"[{"character":"pilot","text":"?","options":["a","b"],"correct_answer":1}]"#,
        )
        .unwrap();
        let config = TourConfig {
            questions: Some(path.clone()),
            ..TourConfig::default()
        };

        let result = Tour::from_config(&config);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(
            result,
            Err(TourError::Load(LoadError::UnknownCharacter { index: 0, .. }))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_for_deadline_sleeps_until_due() {
        let start = Instant::now();
        wait_for_deadline(Some(start + ms(300))).await;
        assert!(Instant::now() >= start + ms(300));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_without_deadline_never_fires() {
        let waited = time::timeout(ms(5000), wait_for_deadline(None)).await;
        assert!(waited.is_err());
    }
}
