use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::content::GALLERY;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let item = &GALLERY[app.gallery_index()];
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Fill(1),
    ])
    .margin(2)
    .split(area);

    let progress = format!("{}/{}", app.gallery_index() + 1, GALLERY.len());
    frame.render_widget(
        Paragraph::new(progress)
            .alignment(Alignment::Right)
            .fg(Color::DarkGray),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new(item.title).fg(Color::Yellow).bold(),
        chunks[1],
    );

    let widget = Paragraph::new(item.description)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .block(
            Block::default()
                .borders(Borders::LEFT)
                .border_style(Color::DarkGray)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, chunks[2]);
}
