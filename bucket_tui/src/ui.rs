//! UI rendering

mod budget_view;
mod build_view;
mod cube_view;
mod help_view;
mod log_view;
mod rectangle_view;

use crate::app::{App, Control, Tab};
use bucket_core::geometry::{BoxMesh, Point3};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, Paragraph, Tabs,
    },
    Frame,
};

/// Width of the slider bar in cells
const SLIDER_WIDTH: usize = 24;

/// Depth axis foreshortening for the oblique projection
const DEPTH_SCALE: f64 = 0.5;
/// cos/sin of the 45° receding axis
const DEPTH_ANGLE: f64 = std::f64::consts::FRAC_1_SQRT_2;
/// Blank space around canvas drawings
const CANVAS_MARGIN: f64 = 0.2;

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    match app.current_tab {
        Tab::Rectangle => rectangle_view::draw(f, app, chunks[1]),
        Tab::Cube => cube_view::draw(f, app, chunks[1]),
        Tab::Build => build_view::draw(f, app, chunks[1]),
        Tab::Budget => budget_view::draw(f, app, chunks[1]),
        Tab::Log => log_view::draw(f, app, chunks[1]),
        Tab::Help => help_view::draw(f, app, chunks[1]),
    }

    draw_keybindings(f, app, chunks[2]);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let common_keys = vec![("Tab", "Next tab"), ("r", "Reset"), ("q", "Quit")];

    let tab_keys: Vec<(&str, &str)> = match app.current_tab {
        Tab::Rectangle | Tab::Cube | Tab::Budget => {
            vec![("↑/↓", "Select"), ("←/→", "Adjust"), ("Shift", "×10")]
        }
        Tab::Build => vec![
            ("↑/↓", "Select"),
            ("←/→", "Adjust"),
            ("s", "Re-roll crits"),
        ],
        Tab::Log => vec![("↑/↓", "Scroll")],
        Tab::Help => vec![],
    };

    let mut spans: Vec<Span> = Vec::new();

    for (i, (key, desc)) in tab_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    if !tab_keys.is_empty() {
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
    }

    for (i, (key, desc)) in common_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::Gray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Keys "))
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|t| {
            let style = if *t == app.current_tab {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(t.name(), style))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Damage Bucket Lab "),
        )
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider("|");

    f.render_widget(tabs, area);
}

/// Draw the controls of the current tab as a slider panel
pub fn draw_controls(f: &mut Frame, app: &App, area: Rect, title: &str) {
    let mut lines: Vec<Line> = Vec::new();
    for (i, control) in app.controls().into_iter().enumerate() {
        lines.extend(slider_lines(app, control, i == app.selected));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(format!(" {} ", title)));

    f.render_widget(paragraph, area);
}

/// Label line plus bar line for one control
fn slider_lines(app: &App, control: Control, selected: bool) -> Vec<Line<'static>> {
    let marker = if selected { "▶ " } else { "  " };
    let label_style = if selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let label = Line::from(vec![
        Span::styled(marker.to_string(), label_style),
        Span::styled(app.control_label(control), label_style),
    ]);

    let bar = match app.control_range(control) {
        Some(range) => {
            let fraction = range.fraction(app.control_value(control));
            let filled = ((fraction * SLIDER_WIDTH as f64).round() as usize).min(SLIDER_WIDTH);
            Line::from(vec![
                Span::raw("  "),
                Span::styled("█".repeat(filled), Style::default().fg(Color::Cyan)),
                Span::styled(
                    "░".repeat(SLIDER_WIDTH - filled),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!(" {}", app.control_display(control)),
                    Style::default().fg(Color::White),
                ),
            ])
        }
        None => Line::from(vec![
            Span::raw("  "),
            Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                app.control_display(control),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
        ]),
    };

    vec![label, bar]
}

pub fn section_header(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("═══ {} ═══", title),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

/// Big headline value, styled like a dashboard metric
pub fn metric_line(name: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", name), Style::default().fg(Color::Gray)),
        Span::styled(
            value,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
    ])
}

pub fn stat_line(name: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:20}", name), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

/// Cabinet projection: x right, multishot up, elemental recedes at 45°
fn project(p: Point3) -> (f64, f64) {
    let recede = p[1] * DEPTH_SCALE * DEPTH_ANGLE;
    (p[0] + recede, p[2] + recede)
}

/// Canvas extent that fits a projected box whose sides are at most `max_side`
pub fn box_reach(max_side: f64) -> f64 {
    max_side * (1.0 + DEPTH_SCALE * DEPTH_ANGLE) + CANVAS_MARGIN
}

/// Canvas extent that fits a flat shape whose sides are at most `max_side`
pub fn flat_reach(max_side: f64) -> f64 {
    max_side + CANVAS_MARGIN
}

/// Projected wireframe of a box, scaled so a `max_side` cube just fits
pub fn draw_box_wireframe(
    f: &mut Frame,
    mesh: &BoxMesh,
    max_side: f64,
    area: Rect,
    title: &str,
    color: Color,
) {
    let segments: Vec<((f64, f64), (f64, f64))> = mesh
        .edge_segments()
        .into_iter()
        .map(|(a, b)| (project(a), project(b)))
        .collect();
    let reach = box_reach(max_side);

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title)),
        )
        .marker(Marker::Braille)
        .x_bounds([-CANVAS_MARGIN, reach])
        .y_bounds([-CANVAS_MARGIN, reach])
        .paint(move |ctx| {
            for ((x1, y1), (x2, y2)) in &segments {
                ctx.draw(&CanvasLine {
                    x1: *x1,
                    y1: *y1,
                    x2: *x2,
                    y2: *y2,
                    color,
                });
            }
        });

    f.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bucket_core::geometry::box_mesh;

    #[test]
    fn test_projection_keeps_front_face() {
        // Points on the y = 0 face map straight through
        assert_eq!(project([2.0, 0.0, 3.0]), (2.0, 3.0));
    }

    #[test]
    fn test_projection_recedes_diagonally() {
        let (x, y) = project([0.0, 2.0, 0.0]);
        assert!((x - y).abs() < f64::EPSILON);
        assert!(x > 0.0);
    }

    #[test]
    fn test_reach_contains_every_projected_corner() {
        // 600% on every axis, wider than the default sliders allow
        let mesh = box_mesh(600.0, 600.0, 600.0);
        let reach = box_reach(7.0);
        for v in mesh.vertices {
            let (x, y) = project(v);
            assert!(x <= reach && y <= reach);
            assert!(x >= -CANVAS_MARGIN && y >= -CANVAS_MARGIN);
        }
    }
}
