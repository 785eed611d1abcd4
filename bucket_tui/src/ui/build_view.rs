//! Full build tab - crit, faction and fire rate on top of the cube

use super::{draw_controls, section_header, stat_line};
use crate::app::App;
use bucket_core::engine::{format_damage, format_multiplier, NEW_BUCKET};
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

    draw_controls(f, app, chunks[0], "The Full Build");

    let right = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    draw_breakdown(f, app, right[0]);
    draw_golden_rule(f, app, right[1]);
}

fn draw_breakdown(f: &mut Frame, app: &App, area: Rect) {
    let out = &app.output;
    let sim = &app.simulation;

    let mut lines = vec![section_header("Buckets")];
    for bucket in &out.breakdown {
        lines.push(stat_line(bucket.kind.name(), format_multiplier(bucket.factor)));
    }
    lines.push(stat_line("Fire Rate", format!("{:.1}/s", app.input.fire_rate)));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Avg Crit = 1 + [Chance × (Mult - 1)]",
        Style::default().fg(Color::Yellow),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Final Sustained Force: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format_damage(out.sustained),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" Damage Units", Style::default().fg(Color::Gray)),
    ]));
    lines.push(Line::from(""));

    lines.push(section_header("Rolled Shots"));
    lines.push(stat_line("Shots", sim.shots.to_string()));
    lines.push(stat_line("Crit rate", format!("{:.1}%", sim.crit_rate())));
    lines.push(stat_line("Highest tier", sim.max_tier.to_string()));
    lines.push(stat_line(
        "Simulated avg",
        format_multiplier(sim.average_multiplier()),
    ));
    lines.push(stat_line("Expected avg", format_multiplier(out.average_crit)));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Breakdown "));

    f.render_widget(paragraph, area);
}

fn draw_golden_rule(f: &mut Frame, app: &App, area: Rect) {
    let gains = &app.gains;

    let mut lines = vec![
        section_header(&format!("Next +{:.0}%", gains.extra_percent)),
        stat_line("Now", format_multiplier(gains.current_multiplier)),
    ];

    let best_gain = gains
        .gains
        .iter()
        .chain(std::iter::once(&gains.new_bucket))
        .map(|g| g.relative_gain)
        .fold(f64::NEG_INFINITY, f64::max);

    for g in gains.gains.iter().chain(std::iter::once(&gains.new_bucket)) {
        let color = if (g.relative_gain - best_gain).abs() < 1e-12 {
            Color::Green
        } else if g.name == NEW_BUCKET {
            Color::Cyan
        } else {
            Color::White
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:14}", g.name), Style::default().fg(Color::Gray)),
            Span::styled(
                format!(
                    "{} (+{:.1}%)",
                    format_multiplier(g.new_multiplier),
                    g.relative_gain * 100.0
                ),
                Style::default().fg(color),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(section_header("The Golden Rule of Modding"));
    lines.push(Line::from(
        "Don't double up on the same bucket. A second base damage mod on top of \
         Serration makes the rectangle slightly longer but no wider.",
    ));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "You're almost always better off adding a new dimension \
         (Elemental, Multishot, Crit, or Faction).",
        Style::default().fg(Color::Green),
    )));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Where To Invest "))
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}
