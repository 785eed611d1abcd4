//! Log tab - the in-app console

use crate::app::App;
use log::Level;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn level_color(level: Level) -> Color {
    match level {
        Level::Error => Color::Red,
        Level::Warn => Color::Yellow,
        Level::Info => Color::Green,
        Level::Debug => Color::Cyan,
        Level::Trace => Color::DarkGray,
    }
}

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let records = app
        .console
        .as_ref()
        .map(|c| c.get_lines())
        .unwrap_or_default();

    let lines: Vec<Line> = if records.is_empty() {
        vec![Line::from(Span::styled(
            "No log output yet.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        records
            .into_iter()
            .skip(app.log_scroll)
            .map(|(level, msg)| {
                Line::from(vec![
                    Span::styled(
                        format!("{:5} ", level),
                        Style::default().fg(level_color(level)),
                    ),
                    Span::raw(msg),
                ])
            })
            .collect()
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Log ({}) ", app.log_scroll)),
    );

    f.render_widget(paragraph, area);
}
