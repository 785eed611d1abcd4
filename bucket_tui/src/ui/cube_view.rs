//! 3D cube tab - adding multishot as a third dimension

use super::{draw_box_wireframe, draw_controls, metric_line, section_header, stat_line};
use crate::app::App;
use bucket_core::engine::format_multiplier;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
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
    draw_box(f, app, right[1]);
}

fn draw_summary(f: &mut Frame, app: &App, area: Rect) {
    let mesh = &app.output.mesh;
    let lines = vec![
        section_header("The Cube"),
        metric_line("New Total Multiplier", format_multiplier(app.output.cube_multiplier)),
        stat_line(
            "Was (2D)",
            format_multiplier(app.output.rectangle_multiplier),
        ),
        stat_line(
            "Box sides",
            format!("{:.2} × {:.2} × {:.2}", mesh.dims[0], mesh.dims[1], mesh.dims[2]),
        ),
        stat_line("Volume", format!("{:.2}", mesh.volume())),
        Line::from(""),
        Line::from(Span::styled(
            "The 'N' Growth: adding a third dimension (depth) makes the volume explode.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn draw_box(f: &mut Frame, app: &App, area: Rect) {
    draw_box_wireframe(
        f,
        &app.output.mesh,
        app.cube_max_side(),
        area,
        "Base × Elemental × Multishot",
        Color::Magenta,
    );
}
