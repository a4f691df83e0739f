use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::content::{
    ART_PROMPT, ARTWORKS, AURORA_LINES, IMPACT_CATEGORIES, IMPACT_METRICS, LEGACY_STORIES,
    PREDICTION_PHASES,
};
use crate::exhibits::{ArtBoard, ImpactBoard, PredictionReel};
use crate::models::PageId;
use crate::storm::{IntensityLevel, Severity, StormSliders, StormSource};

use super::gauge_bar;

const GAUGE_WIDTH: usize = 30;

/// Text-driven pages that share one layout.
pub fn render(frame: &mut Frame, area: Rect, page: PageId, app: &App) {
    let lines = match page {
        PageId::LegacyStories => paragraphs(LEGACY_STORIES),
        PageId::ImpactAnalysis => impact(app.impact()),
        PageId::AuroraPainter => aurora(app.intensity()),
        PageId::StormSliders => sliders(app.sliders()),
        PageId::Prediction => prediction(app.prediction()),
        PageId::ArtChallenge => art(app.art()),
        _ => Vec::new(),
    };

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::LEFT)
            .border_style(Color::DarkGray)
            .padding(Padding::new(1, 1, 1, 0)),
    );
    let chunks = Layout::vertical([Constraint::Fill(1)]).margin(2).split(area);
    frame.render_widget(widget, chunks[0]);
}

fn paragraphs(text: &'static [&'static str]) -> Vec<Line<'static>> {
    text.iter()
        .flat_map(|line| [Line::from(line.fg(Color::White)), Line::from("")])
        .collect()
}

fn cursor(active: bool) -> Span<'static> {
    if active {
        Span::styled("> ", Style::default().fg(Color::Yellow).bold())
    } else {
        Span::raw("  ")
    }
}

fn impact(board: &ImpactBoard) -> Vec<Line<'static>> {
    let mut metrics: Vec<Span> = Vec::with_capacity(IMPACT_METRICS.len() * 2);
    for (index, (title, _, _)) in IMPACT_METRICS.iter().enumerate() {
        let style = if index == board.metric() {
            Style::default().fg(Color::Black).bg(Color::Yellow).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        metrics.push(Span::styled(format!(" {} ", title), style));
        metrics.push(Span::raw(" "));
    }

    let (_, value, description) = IMPACT_METRICS[board.metric()];
    let mut lines = vec![
        Line::from(metrics),
        Line::from(vec![
            Span::styled(format!("{}  ", value), Style::default().fg(Color::Yellow).bold()),
            Span::styled(description, Style::default().fg(Color::Gray)),
        ]),
        Line::from(""),
    ];

    for (index, category) in IMPACT_CATEGORIES.iter().enumerate() {
        let color = severity_color(category.severity);
        lines.push(Line::from(vec![
            cursor(index == board.category()),
            Span::styled(format!("{:<22}", category.name), Style::default().fg(Color::White).bold()),
            Span::styled(format!("{:<9}", category.severity), Style::default().fg(color)),
            Span::styled(gauge_bar(category.percentage as f64, 20), Style::default().fg(color)),
            Span::styled(format!(" {}%", category.percentage), Style::default().fg(color)),
        ]));

        if board.expanded() == Some(index) {
            lines.push(Line::from(format!("    {}", category.description).fg(Color::Gray)));
            lines.extend(
                category
                    .examples
                    .iter()
                    .map(|example| Line::from(format!("    • {}", example).fg(Color::Gray))),
            );
        }
    }
    lines
}

fn severity_color(severity: &str) -> Color {
    match severity {
        "Critical" => Color::Red,
        "High" => Color::LightRed,
        "Medium" => Color::Yellow,
        _ => Color::Green,
    }
}

fn aurora(intensity: u8) -> Vec<Line<'static>> {
    let level = IntensityLevel::of(intensity);
    let color = match level {
        IntensityLevel::Calm => Color::Green,
        IntensityLevel::Moderate => Color::LightGreen,
        IntensityLevel::Strong => Color::Magenta,
        IntensityLevel::Severe => Color::Red,
    };

    let mut lines = paragraphs(AURORA_LINES);
    lines.push(Line::from(vec![
        Span::styled(gauge_bar(intensity as f64, GAUGE_WIDTH), Style::default().fg(color)),
        Span::styled(
            format!(" {}% {}", intensity, level.label()),
            Style::default().fg(color).bold(),
        ),
    ]));
    lines
}

fn sliders(sliders: &StormSliders) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = Vec::new();
    for source in StormSource::ALL {
        let level = sliders.level(source);
        lines.push(Line::from(vec![
            cursor(source == sliders.selected()),
            Span::styled(source.label(), Style::default().fg(Color::Cyan)),
        ]));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(gauge_bar(level as f64, GAUGE_WIDTH), Style::default().fg(Color::Yellow)),
            Span::styled(format!(" {}", level), Style::default().fg(Color::Yellow).bold()),
        ]));
    }

    let severity = sliders.severity();
    let color = match severity {
        Severity::Low => Color::Green,
        Severity::Moderate => Color::Yellow,
        Severity::High => Color::LightRed,
        Severity::Extreme => Color::Red,
    };
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Severity: ", Style::default().fg(Color::Gray)),
        Span::styled(severity.label(), Style::default().fg(color).bold()),
    ]));
    lines.push(Line::from(""));

    for (system, affected) in sliders.affected_systems() {
        let line = if affected {
            Line::from(vec![
                Span::styled("  [!] ", Style::default().fg(Color::Red)),
                Span::styled(system.label(), Style::default().fg(Color::Red).bold()),
            ])
        } else {
            Line::from(vec![
                Span::styled("  [ ] ", Style::default().fg(Color::DarkGray)),
                Span::styled(system.label(), Style::default().fg(Color::DarkGray)),
            ])
        };
        lines.push(line);
    }
    lines
}

fn prediction(reel: &PredictionReel) -> Vec<Line<'static>> {
    let active = reel.phase();
    let (_, description) = PREDICTION_PHASES[active];
    let mut lines: Vec<Line> = PREDICTION_PHASES
        .iter()
        .enumerate()
        .map(|(index, (title, _))| {
            let style = if index == active {
                Style::default().fg(Color::Green).bold()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(vec![cursor(index == active), Span::styled(*title, style)])
        })
        .collect();

    let activity = reel.solar_activity();
    lines.push(Line::from(""));
    lines.push(Line::from(description.fg(Color::White)));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Solar activity ", Style::default().fg(Color::Gray)),
        Span::styled(gauge_bar(activity as f64, GAUGE_WIDTH), Style::default().fg(Color::Yellow)),
        Span::styled(format!(" {}%", activity), Style::default().fg(Color::Yellow).bold()),
    ]));
    lines
}

fn art(board: &ArtBoard) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(ART_PROMPT.fg(Color::White)), Line::from("")];

    if let Some(best) = board.most_loved() {
        lines.push(Line::from(
            format!("Most Loved: {} ({})", ARTWORKS[best], board.likes(best))
                .fg(Color::Yellow)
                .bold(),
        ));
        lines.push(Line::from(""));
    }

    for (index, caption) in ARTWORKS.iter().enumerate() {
        let style = if index == board.selected() {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(vec![
            cursor(index == board.selected()),
            Span::styled(format!("Artwork {:<3}", index + 1), style),
            Span::styled(format!("{:<24}", caption), style),
            Span::styled(format!("♥ {}", board.likes(index)), Style::default().fg(Color::LightRed)),
        ]));
    }
    lines
}
