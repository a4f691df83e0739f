use std::time::Duration;

use crossterm::event::KeyCode;
use ratatui::{Terminal, backend::TestBackend};
use stellar_x::{
    App, PageId, QuestionBank, Tier, TourConfig, default_questions, default_roster, handle_input,
    render,
};
use tokio::time::Instant;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn new_app(start: Instant) -> App {
    let bank = QuestionBank::new(default_questions().unwrap());
    App::new(default_roster().unwrap(), bank, &TourConfig::default(), start)
}

/// Renders `app` and returns the screen as one string per row.
fn screen(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    terminal.draw(|frame| render(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn press(app: &mut App, key: KeyCode, now: Instant) -> Instant {
    handle_input(app, key, now);
    let now = now + ms(400);
    app.tick(now);
    now
}

#[test]
fn test_loading_then_welcome() {
    let start = Instant::now();
    let mut app = new_app(start);
    assert!(screen(&app).contains("Loading Stellar X"));

    app.tick(start + ms(2000));
    let text = screen(&app);
    assert!(text.contains("STELLAR X"));
    assert!(text.contains("Space Weather"));
}

#[test]
fn test_walk_story_into_gallery_via_modal() {
    let start = Instant::now();
    let mut app = new_app(start);
    let now = start + ms(2000);
    app.tick(now);

    let now = press(&mut app, KeyCode::Enter, now);
    assert_eq!(app.current_page(), PageId::Story);
    assert!(screen(&app).contains("A Fisherman's Story"));

    handle_input(&mut app, KeyCode::Char('n'), now);
    assert!(screen(&app).contains("Do you know about Space Weather?"));

    handle_input(&mut app, KeyCode::Enter, now);
    assert!(screen(&app).contains("Wow! Let's know more"));

    let now = now + ms(2000);
    app.tick(now);
    app.tick(now + ms(400));
    assert_eq!(app.current_page(), PageId::Gallery);
    assert!(screen(&app).contains("1/5"));
}

#[test]
fn test_simulator_quiz_to_result() {
    let start = Instant::now();
    let mut app = new_app(start);
    let mut now = start + ms(2000);
    app.tick(now);

    now = press(&mut app, KeyCode::Char('4'), now);
    let text = screen(&app);
    assert!(text.contains("Space Weather Damage Simulator"));
    assert!(text.contains("Grid Operator"));
    assert!(text.contains("Solar intensity"));

    handle_input(&mut app, KeyCode::Enter, now);
    assert!(screen(&app).contains("1/5"));

    for _ in 0..5 {
        handle_input(&mut app, KeyCode::Char('j'), now);
        handle_input(&mut app, KeyCode::Enter, now);
        now += ms(2000);
        app.tick(now);
    }

    assert_eq!(app.quiz_tier(), Some(Tier::Excellent));
    assert!(screen(&app).contains("Score: 5/5"));

    handle_input(&mut app, KeyCode::Char('r'), now);
    assert_eq!(app.quiz().unwrap().run().score(), 0);
    assert!(screen(&app).contains("1/5"));
}

#[test]
fn test_detail_page_shows_only_chosen_character() {
    let start = Instant::now();
    let mut app = new_app(start);
    let mut now = start + ms(2000);
    app.tick(now);

    now = press(&mut app, KeyCode::Char('4'), now);
    handle_input(&mut app, KeyCode::Char('j'), now);
    press(&mut app, KeyCode::Char('d'), now);

    assert_eq!(app.current_page(), PageId::Detail);
    let text = screen(&app);
    assert!(text.contains("Fisherman"));
    assert!(text.contains("High risk"));
    assert!(!text.contains("Astronaut"));
    assert!(!text.contains("Grid Operator"));
}

#[test]
fn test_transition_dims_and_ignores_input() {
    let start = Instant::now();
    let mut app = new_app(start);
    let now = start + ms(2000);
    app.tick(now);

    handle_input(&mut app, KeyCode::Char('5'), now);
    assert!(app.is_transitioning());
    assert_eq!(app.current_page(), PageId::Welcome);

    handle_input(&mut app, KeyCode::Char('9'), now + ms(100));
    app.tick(now + ms(300));
    assert_eq!(app.current_page(), PageId::ImpactAnalysis);
    assert!(app.is_transitioning());

    app.tick(now + ms(400));
    assert!(!app.is_transitioning());
    assert!(screen(&app).contains("Economic Impact"));
}

#[test]
fn test_art_challenge_wraps_to_welcome() {
    let start = Instant::now();
    let mut app = new_app(start);
    let mut now = start + ms(2000);
    app.tick(now);

    now = press(&mut app, KeyCode::Char('9'), now);
    assert_eq!(app.current_page(), PageId::ArtChallenge);
    assert!(screen(&app).contains("restart"));

    press(&mut app, KeyCode::Enter, now);
    assert_eq!(app.current_page(), PageId::Welcome);
}

#[test]
fn test_storm_sliders_light_up_systems() {
    let start = Instant::now();
    let mut app = new_app(start);
    let mut now = start + ms(2000);
    app.tick(now);

    now = press(&mut app, KeyCode::Char('7'), now);
    assert_eq!(app.current_page(), PageId::StormSliders);
    assert!(screen(&app).contains("Severity: Low"));

    for _ in 0..17 {
        handle_input(&mut app, KeyCode::Right, now);
    }
    let text = screen(&app);
    assert!(text.contains("Severity: Extreme"));
    assert!(text.contains("[!] Radio Communications"));
    assert!(text.contains("[!] GPS Tracker"));
    assert!(!text.contains("[!] Power Grid"));
}

#[test]
fn test_prediction_monitor_rotates() {
    let start = Instant::now();
    let mut app = new_app(start);
    let mut now = start + ms(2000);
    app.tick(now);

    now = press(&mut app, KeyCode::Char('8'), now);
    assert_eq!(app.current_page(), PageId::Prediction);
    assert!(screen(&app).contains("> Satellite Monitoring"));

    for _ in 0..3 {
        now += ms(4000);
        app.tick(now);
    }
    assert!(screen(&app).contains("> Global Alerts"));
}

#[test]
fn test_art_challenge_likes() {
    let start = Instant::now();
    let mut app = new_app(start);
    let mut now = start + ms(2000);
    app.tick(now);

    now = press(&mut app, KeyCode::Char('9'), now);
    assert!(screen(&app).contains("Most Loved: Arshi, 9 Years Old (0)"));

    handle_input(&mut app, KeyCode::Right, now);
    handle_input(&mut app, KeyCode::Char(' '), now);
    assert!(screen(&app).contains("Most Loved: Shreya, 12 Years Old (1)"));
}

#[test]
fn test_impact_category_expands() {
    let start = Instant::now();
    let mut app = new_app(start);
    let mut now = start + ms(2000);
    app.tick(now);

    now = press(&mut app, KeyCode::Char('5'), now);
    assert!(!screen(&app).contains("Transformer damage"));

    handle_input(&mut app, KeyCode::Char('j'), now);
    handle_input(&mut app, KeyCode::Char(' '), now);
    assert!(screen(&app).contains("Transformer damage"));
    assert_eq!(app.current_page(), PageId::ImpactAnalysis);
}
