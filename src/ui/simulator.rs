use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::{App, QuizView};
use crate::models::Character;
use crate::quiz::Tier;
use crate::storm::{self, DamageLevel, IntensityLevel};

use super::gauge_bar;

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];
const GAUGE_WIDTH: usize = 20;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    match app.quiz() {
        Some(quiz) if quiz.run().is_completed() => render_result(frame, area, app, quiz),
        Some(quiz) => render_quiz(frame, area, quiz),
        None => render_characters(frame, area, app),
    }
}

fn render_characters(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(4),
    ])
    .margin(1)
    .split(area);

    let intensity = app.intensity();
    let level = IntensityLevel::of(intensity);
    let header = Line::from(vec![
        Span::styled("Solar intensity ", Style::default().fg(Color::Gray)),
        Span::styled(gauge_bar(intensity as f64, GAUGE_WIDTH), level_style(level)),
        Span::styled(format!(" {}% {}", intensity, level.label()), level_style(level).bold()),
    ]);
    frame.render_widget(Paragraph::new(header), chunks[0]);

    let lines: Vec<Line> = app
        .roster()
        .iter()
        .enumerate()
        .map(|(index, character)| character_line(character, intensity, index == app.selected_character_index()))
        .collect();
    frame.render_widget(Paragraph::new(lines), chunks[1]);

    if let Some(character) = app.selected_character() {
        let widget = Paragraph::new(character.impact.as_str())
            .wrap(Wrap { trim: true })
            .fg(Color::Gray)
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Color::DarkGray)
                    .title(format!(" {} {} ", character.emoji, character.name)),
            );
        frame.render_widget(widget, chunks[2]);
    }
}

fn character_line(character: &Character, intensity: u8, selected: bool) -> Line<'static> {
    let health = storm::health(character, intensity);
    let damage = storm::damage_level(character, intensity);
    let marker = if selected { ">" } else { " " };
    let name_style = if selected {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Gray)
    };

    Line::from(vec![
        Span::styled(format!(" {} {} ", marker, character.emoji), name_style),
        Span::styled(format!("{:<14}", character.name), name_style),
        Span::styled(gauge_bar(health, GAUGE_WIDTH), damage_style(damage)),
        Span::styled(format!(" {:>3.0}%", health), damage_style(damage)),
    ])
}

fn level_style(level: IntensityLevel) -> Style {
    let color = match level {
        IntensityLevel::Calm => Color::Green,
        IntensityLevel::Moderate => Color::Yellow,
        IntensityLevel::Strong => Color::LightRed,
        IntensityLevel::Severe => Color::Red,
    };
    Style::default().fg(color)
}

fn damage_style(level: DamageLevel) -> Style {
    let color = match level {
        DamageLevel::Low => Color::Green,
        DamageLevel::Elevated => Color::Yellow,
        DamageLevel::High => Color::LightRed,
        DamageLevel::Critical => Color::Red,
    };
    Style::default().fg(color)
}

fn render_quiz(frame: &mut Frame, area: Rect, quiz: &QuizView) {
    let run = quiz.run();
    let question = run.current_question();
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .margin(2)
    .split(area);

    let progress = format!(
        "{}/{}  ·  score {}",
        run.current_question_number(),
        run.total(),
        run.score()
    );
    frame.render_widget(
        Paragraph::new(progress)
            .alignment(Alignment::Right)
            .fg(Color::DarkGray),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new(question.text.as_str())
            .wrap(Wrap { trim: true })
            .fg(Color::White)
            .bold(),
        chunks[1],
    );

    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);
    for (index, option) in question.options.iter().enumerate() {
        let style = option_style(index, quiz.selected_option(), run.last_answer(), question.correct_answer);
        let marker = if index == quiz.selected_option() { ">" } else { " " };
        let label = OPTION_LABELS.get(index).copied().unwrap_or('?');

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", label), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }
    frame.render_widget(Paragraph::new(lines), chunks[2]);

    if let (Some(answer), Some(explanation)) = (run.last_answer(), question.explanation.as_deref()) {
        let (verdict, color) = if question.is_correct(answer) {
            ("Correct! ", Color::Green)
        } else {
            ("Not quite. ", Color::Red)
        };
        let widget = Paragraph::new(Line::from(vec![
            Span::styled(verdict, Style::default().fg(color).bold()),
            Span::styled(explanation, Style::default().fg(Color::Gray)),
        ]))
        .wrap(Wrap { trim: true });
        frame.render_widget(widget, chunks[3]);
    }
}

/// Once answered, the correct option turns green and a wrong pick red.
fn option_style(index: usize, selected: usize, answer: Option<usize>, correct: usize) -> Style {
    match answer {
        Some(_) if index == correct => Style::default().fg(Color::Green).bold(),
        Some(chosen) if index == chosen => Style::default().fg(Color::Red).bold(),
        Some(_) => Style::default().fg(Color::DarkGray),
        None if index == selected => Style::default().fg(Color::Cyan).bold(),
        None => Style::default().fg(Color::Gray),
    }
}

fn render_result(frame: &mut Frame, area: Rect, app: &App, quiz: &QuizView) {
    let run = quiz.run();
    let Some(tier) = app.quiz_tier() else {
        return;
    };
    let name = app
        .roster()
        .iter()
        .find(|c| c.id == run.character_id())
        .map(|c| c.name.as_str())
        .unwrap_or("Character");
    let color = tier_color(tier);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(tier.headline(name), Style::default().fg(color).bold())),
        Line::from(""),
        Line::from(Span::styled(
            format!("Score: {}/{} - {}", run.score(), run.total(), tier.label()),
            Style::default().fg(color),
        )),
        Line::from(""),
    ];
    if tier != Tier::Excellent {
        content.push(Line::from(
            "Review the protection strategies and try again!".fg(Color::Gray),
        ));
    }

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}

fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::Excellent => Color::Green,
        Tier::Good => Color::Yellow,
        Tier::NeedsReview => Color::Red,
    }
}
