use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::content::{MODAL_QUESTION, STORY_LINES};
use crate::story::StoryModal;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let story = app.story();
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(2)
    .split(area);

    let progress = format!("{}/{}", story.index() + 1, STORY_LINES.len());
    frame.render_widget(
        Paragraph::new(progress)
            .alignment(Alignment::Right)
            .fg(Color::DarkGray),
        chunks[0],
    );

    let last = story.visible_lines().len() - 1;
    let lines: Vec<Line> = story
        .visible_lines()
        .iter()
        .enumerate()
        .flat_map(|(index, text)| {
            let style = if index == last {
                Style::default().fg(Color::White).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            [Line::from(Span::styled(*text, style)), Line::from("")]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }),
        chunks[1],
    );

    if story.is_finished() {
        frame.render_widget(
            Paragraph::new("Press ENTER to continue your journey")
                .alignment(Alignment::Center)
                .fg(Color::Green)
                .bold(),
            chunks[2],
        );
    }

    if let Some(modal) = app.modal() {
        render_modal(frame, area, modal);
    }
}

fn render_modal(frame: &mut Frame, area: Rect, modal: &StoryModal) {
    let popup = centered(area, 50, 7);
    frame.render_widget(Clear, popup);

    let content = match modal.answer() {
        Some(message) => vec![
            Line::from(""),
            Line::from(Span::styled(message, Style::default().fg(Color::Green).bold())),
        ],
        None => {
            let choice = |label: &'static str, active: bool| {
                if active {
                    Span::styled(format!("[ {} ]", label), Style::default().fg(Color::Black).bg(Color::Yellow).bold())
                } else {
                    Span::styled(format!("  {}  ", label), Style::default().fg(Color::Gray))
                }
            };
            vec![
                Line::from(""),
                Line::from(Span::styled(MODAL_QUESTION, Style::default().fg(Color::White).bold())),
                Line::from(""),
                Line::from(vec![
                    choice("Yes", modal.selected_yes()),
                    Span::raw("    "),
                    choice("No", !modal.selected_yes()),
                ]),
            ]
        }
    };

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::Yellow)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, popup);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
