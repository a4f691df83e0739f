mod detail;
mod gallery;
mod info;
mod simulator;
mod story;
mod welcome;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::models::PageId;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    if app.is_loading() {
        render_loading(frame, area);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .split(area);

    render_header(frame, chunks[0], app);

    match app.current_page() {
        PageId::Welcome => welcome::render(frame, chunks[1]),
        PageId::Story => story::render(frame, chunks[1], app),
        PageId::Gallery => gallery::render(frame, chunks[1], app),
        PageId::DamageSimulator => simulator::render(frame, chunks[1], app),
        PageId::Detail => detail::render(frame, chunks[1], app),
        page => info::render(frame, chunks[1], page, app),
    }

    if app.is_transitioning() {
        // Fade the outgoing page while the transition runs.
        frame
            .buffer_mut()
            .set_style(chunks[1], Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM));
    }

    render_footer(frame, chunks[2], app);
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(5),
        Constraint::Fill(1),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Loading Stellar X...",
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from("Preparing your space journey".fg(Color::DarkGray)),
    ];

    frame.render_widget(
        Paragraph::new(content).alignment(Alignment::Center),
        chunks[1],
    );
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let current = app.current_page();
    let mut dots: Vec<Span> = Vec::with_capacity(PageId::DOTS.len() * 2);
    for page in PageId::DOTS {
        let span = if page == current {
            Span::styled("●", Style::default().fg(Color::Yellow).bold())
        } else {
            Span::styled("○", Style::default().fg(Color::DarkGray))
        };
        dots.push(span);
        dots.push(Span::raw(" "));
    }

    let chunks = Layout::horizontal([Constraint::Fill(1), Constraint::Length(20)]).split(area);

    let title = Paragraph::new(Span::styled(
        current.title(),
        Style::default().fg(Color::Cyan).bold(),
    ))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(title, chunks[0]);

    let dots = Paragraph::new(Line::from(dots))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Color::DarkGray),
        );
    frame.render_widget(dots, chunks[1]);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(area);

    if let Some(notice) = app.notice() {
        frame.render_widget(
            Paragraph::new(notice)
                .alignment(Alignment::Center)
                .fg(Color::Yellow),
            chunks[0],
        );
    }

    let next_label = if app.current_page() == PageId::ArtChallenge {
        "restart"
    } else {
        "next"
    };
    let prev = if app.current_page() == PageId::Welcome {
        String::new()
    } else {
        "p previous  ·  ".to_string()
    };
    let controls = format!(
        "{}n {}  ·  0-9 jump  ·  {}  ·  q quit",
        prev,
        next_label,
        page_hint(app)
    );

    let widget = Paragraph::new(controls)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, chunks[1]);
}

fn page_hint(app: &App) -> &'static str {
    match app.current_page() {
        PageId::Welcome => "enter explore",
        PageId::Story if app.modal().is_some() => "←/→ choose  ·  enter answer  ·  esc close",
        PageId::Story => "←/→ story  ·  s skip  ·  enter continue",
        PageId::Gallery => "←/→ browse  ·  esc back",
        PageId::DamageSimulator if app.quiz().is_some() => "j/k choose  ·  enter answer  ·  r retry  ·  esc close",
        PageId::DamageSimulator => "j/k character  ·  ←/→ intensity  ·  enter quiz  ·  d details",
        PageId::Detail => "enter continue  ·  esc back",
        PageId::ImpactAnalysis => "←/→ metric  ·  j/k category  ·  space details",
        PageId::AuroraPainter => "←/→ intensity  ·  enter continue",
        PageId::StormSliders => "j/k source  ·  ←/→ intensity  ·  enter continue",
        PageId::ArtChallenge => "←/→ artwork  ·  space like",
        _ => "enter continue",
    }
}

/// Horizontal bar for a value in `0..=100`.
pub(crate) fn gauge_bar(value: f64, width: usize) -> String {
    let filled = ((value.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
