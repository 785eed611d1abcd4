//! 2D rectangle tab - base vs elemental

use super::{draw_controls, flat_reach, metric_line, section_header};
use crate::app::App;
use bucket_core::engine::format_multiplier;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Rectangle},
        Block, Borders, Paragraph, Wrap,
    },
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    draw_controls(f, app, chunks[0], "Buckets");

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(10), Constraint::Min(0)])
        .split(chunks[1]);

    draw_summary(f, app, right[0]);
    draw_rectangle(f, app, right[1]);
}

fn draw_summary(f: &mut Frame, app: &App, area: Rect) {
    let input = &app.input;
    let rect = &app.output.rectangle;

    let lines = vec![
        section_header("The Rectangle"),
        metric_line(
            "Total Damage Multiplier",
            format_multiplier(app.output.rectangle_multiplier),
        ),
        Line::from(vec![
            Span::styled("Formula: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!(
                    "(1 + {}) × (1 + {})",
                    input.base_percent / 100.0,
                    input.elemental_percent / 100.0
                ),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(format!(
            "Imagine a rectangle that is {:.2} units long and {:.2} units wide.",
            rect.length, rect.width
        )),
        Line::from(""),
        Line::from(Span::styled(
            "20m of fencing: a 10x10 square (100m²) beats a 19x1 rectangle (19m²).",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn draw_rectangle(f: &mut Frame, app: &App, area: Rect) {
    let rect = app.output.rectangle.clone();
    let reach = flat_reach(app.rectangle_max_side());

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Area = {:.2} ", rect.area())),
        )
        .marker(Marker::Braille)
        .x_bounds([-0.2, reach])
        .y_bounds([-0.2, reach])
        .paint(move |ctx| {
            // Unit square for scale
            ctx.draw(&Rectangle {
                x: 0.0,
                y: 0.0,
                width: 1.0,
                height: 1.0,
                color: Color::DarkGray,
            });
            ctx.layer();
            ctx.draw(&Rectangle {
                x: rect.corners[0][0],
                y: rect.corners[0][1],
                width: rect.length,
                height: rect.width,
                color: Color::Green,
            });
            ctx.print(rect.length / 2.0, -0.15, "base");
            ctx.print(rect.length + 0.05, rect.width / 2.0, "elemental");
        });

    f.render_widget(canvas, area);
}
