//! Budget tab - splitting a fixed mod capacity across buckets

use super::{draw_box_wireframe, draw_controls, section_header, stat_line};
use crate::app::App;
use bucket_core::{allocation::BudgetPlan, engine::format_multiplier};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    draw_controls(f, app, chunks[0], "Mod Budget");

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(45),
            Constraint::Percentage(15),
        ])
        .split(chunks[1]);

    draw_plan(f, &app.rectangle_plan, "2D: Base × Elemental", right[0]);

    let cube_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(right[1]);
    draw_plan(f, &app.cube_plan, "3D: Base × Elemental × Multishot", cube_row[0]);
    draw_allocated_box(f, app, cube_row[1]);

    draw_notes(f, right[2]);
}

/// The cube plan as a box; hidden if the weights don't describe three buckets
fn draw_allocated_box(f: &mut Frame, app: &App, area: Rect) {
    match app.cube_plan.box_mesh() {
        Some(mesh) => draw_box_wireframe(
            f,
            &mesh,
            app.budget_max_side(),
            area,
            &format!("Volume {:.2}", mesh.volume()),
            Color::Cyan,
        ),
        None => {
            let paragraph = Paragraph::new(Line::from(Span::styled(
                "Box needs exactly three buckets",
                Style::default().fg(Color::DarkGray),
            )))
            .block(Block::default().borders(Borders::ALL));
            f.render_widget(paragraph, area);
        }
    }
}

fn draw_plan(f: &mut Frame, plan: &BudgetPlan, title: &str, area: Rect) {
    let mut lines = vec![section_header(&format!("{:.0}% capacity", plan.capacity))];

    for a in &plan.allocations {
        lines.push(stat_line(&a.name, format!("{:.1}%", a.percent)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(format!("{:20}", "Multiplier"), Style::default().fg(Color::Gray)),
        Span::styled(
            format_multiplier(plan.multiplier),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(stat_line("Even split", format_multiplier(plan.even_split_multiplier)));
    lines.push(stat_line(
        "All in one bucket",
        format_multiplier(plan.single_bucket_multiplier),
    ));

    let efficiency = plan.efficiency();
    let color = if efficiency >= 0.999 {
        Color::Green
    } else {
        Color::Yellow
    };
    lines.push(Line::from(vec![
        Span::styled(format!("{:20}", "Efficiency"), Style::default().fg(Color::Gray)),
        Span::styled(format!("{:.1}%", efficiency * 100.0), Style::default().fg(color)),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(format!(" {} ", title)));

    f.render_widget(paragraph, area);
}

fn draw_notes(f: &mut Frame, area: Rect) {
    let lines = vec![Line::from(Span::styled(
        "For a fixed total, the product of the buckets peaks when every side is equal. \
         Weights shift the split away from even.",
        Style::default().fg(Color::DarkGray),
    ))];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}
