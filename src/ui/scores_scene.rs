//! High score list rendering.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::SCORE_DISPLAY_COUNT;
use crate::scores::ScoreEntry;

/// Render the top score list. `entries` is expected to be sorted already,
/// highest score first.
pub fn render_scores(frame: &mut Frame, area: Rect, entries: &[ScoreEntry]) {
    let block = Block::default()
        .title(format!(" High Scores Top {} ", SCORE_DISPLAY_COUNT))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();

    if entries.is_empty() {
        lines.push(Line::from(Span::styled(
            "No scores recorded yet.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for (i, entry) in entries.iter().take(SCORE_DISPLAY_COUNT).enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:>2}. ", i + 1),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("{:<16} ", entry.player),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{:>10.2}  ", entry.score),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                entry.date.format("%c").to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Esc] Back to menu",
        Style::default().fg(Color::DarkGray),
    )));

    let text = Paragraph::new(lines);
    frame.render_widget(text, inner);
}
