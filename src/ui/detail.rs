use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{Character, RiskLevel};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let characters = app.detail_characters();
    if characters.is_empty() {
        frame.render_widget(
            Paragraph::new("No character selected")
                .alignment(Alignment::Center)
                .fg(Color::DarkGray),
            area,
        );
        return;
    }

    let constraints = vec![Constraint::Fill(1); characters.len()];
    let chunks = Layout::vertical(constraints).margin(1).split(area);
    for (character, chunk) in characters.iter().zip(chunks.iter()) {
        render_character(frame, *chunk, character);
    }
}

fn render_character(frame: &mut Frame, area: Rect, character: &Character) {
    let risk = risk_color(character.risk_level);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} risk", character.risk_level.label()),
                Style::default().fg(risk).bold(),
            ),
            Span::styled(
                format!("  ·  vulnerability {:.0}%", character.vulnerability * 100.0),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(""),
        Line::from(character.detailed_impact.as_str().fg(Color::White)),
        Line::from(""),
        Line::from("Affected systems".fg(Color::Cyan).bold()),
    ];
    lines.extend(
        character
            .affected_systems
            .iter()
            .map(|system| Line::from(format!("  • {}", system).fg(Color::Gray))),
    );
    lines.push(Line::from(""));
    lines.push(Line::from("Protection".fg(Color::Green).bold()));
    lines.extend(
        character
            .solutions
            .iter()
            .map(|solution| Line::from(format!("  ✓ {}", solution).fg(Color::Gray))),
    );

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(risk)
            .padding(Padding::horizontal(1))
            .title(format!(" {} {} ", character.emoji, character.name)),
    );
    frame.render_widget(widget, area);
}

fn risk_color(level: RiskLevel) -> Color {
    match level {
        RiskLevel::Moderate => Color::Yellow,
        RiskLevel::High => Color::LightRed,
        RiskLevel::Critical => Color::Red,
        RiskLevel::Extreme => Color::Magenta,
    }
}
