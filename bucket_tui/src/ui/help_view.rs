//! Help tab view

use super::section_header;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, _app: &App, area: Rect) {
    let lines = vec![
        section_header("Navigation"),
        key_line("1-6", "Jump to tab (2D/3D/Build/Budget/Log/Help)"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("↑/k  ↓/j", "Select control / scroll log"),
        key_line("←/h  →/l", "Adjust selected control"),
        key_line("Shift+←/→", "Adjust by ten steps"),
        key_line("r", "Reset to preset"),
        key_line("s", "Re-roll the crit simulation"),
        key_line("q / Ctrl+C", "Quit"),
        Line::from(""),
        section_header("Damage Buckets"),
        Line::from(""),
        Line::from(Span::styled(
            "Inside a bucket, mods add:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  Bucket = 1 + (p1 + p2 + ...) / 100"),
        Line::from(""),
        Line::from(Span::styled(
            "Across buckets, factors multiply:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  Total = (1 + Base) × (1 + Elemental) × (1 + Multishot) × ..."),
        Line::from(""),
        Line::from(Span::styled("Average crit:", Style::default().fg(Color::Yellow))),
        Line::from("  Avg Crit = 1 + [Chance × (Mult - 1)]"),
        Line::from("  Chance above 100% means some hits roll a higher crit tier"),
        Line::from(""),
        Line::from(Span::styled(
            "Sustained force:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  Per-shot multiplier × Fire Rate"),
        Line::from(""),
        Line::from(Span::styled(
            "Fixed budget:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  A square beats a long thin rectangle of the same perimeter,"),
        Line::from("  so spreading capacity over more buckets wins."),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help & Formulas "));

    f.render_widget(paragraph, area);
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:20}", key), Style::default().fg(Color::Yellow)),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
