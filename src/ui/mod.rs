//! Terminal UI scenes.

pub mod minefield_scene;
pub mod scores_scene;
pub mod setup_scene;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the main menu: play, high scores, quit.
pub fn render_menu(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Minefield ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "MINEFIELD",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[P] Play a new game",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "[S] View high scores",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled("[Q] Quit", Style::default().fg(Color::White))),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}

/// Centered sub-rectangle of `area`, clamped to its size.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
