//! Minefield board rendering.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::game::{Game, GameStatus};
use crate::square::{Square, SquareKind};
use crate::ui::centered_rect;

/// Render the play screen: board on the left, info panel on the right,
/// game-over overlay once the session has ended.
pub fn render_minefield(
    frame: &mut Frame,
    area: Rect,
    game: &Game,
    player: &str,
    cursor: (usize, usize),
) {
    frame.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),    // Board
            Constraint::Length(26), // Info panel
        ])
        .split(area);

    render_board(frame, chunks[0], game, cursor);
    render_info_panel(frame, chunks[1], game, player);

    if game.status() != GameStatus::InProgress {
        render_game_over_overlay(frame, chunks[0], game, player);
    }
}

fn render_board(frame: &mut Frame, area: Rect, game: &Game, cursor: (usize, usize)) {
    let block = Block::default()
        .title(" Minefield ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let grid = game.grid();
    // Each square is 2 chars wide, 1 char tall; center in available space.
    let board_width = (grid.width() * 2) as u16;
    let board_height = grid.height() as u16;
    let x_offset = inner.x + (inner.width.saturating_sub(board_width)) / 2;
    let y_offset = inner.y + (inner.height.saturating_sub(board_height)) / 2;

    let game_over = game.status() != GameStatus::InProgress;

    for y in 0..grid.height() {
        let mut spans = Vec::new();

        for x in 0..grid.width() {
            let (text, color) = square_display(grid.get(x, y));

            let mut style = Style::default().fg(color);
            if cursor == (x, y) && !game_over {
                style = style.bg(Color::DarkGray);
            }

            spans.push(Span::styled(text, style));
        }

        let line = Paragraph::new(Line::from(spans));
        frame.render_widget(
            line,
            Rect::new(x_offset, y_offset + y as u16, board_width, 1),
        );
    }
}

/// Display glyph and color for a square: hidden squares all look alike,
/// revealed ones show their contents.
fn square_display(square: &Square) -> (String, Color) {
    if !square.is_revealed() {
        return ("# ".to_string(), Color::Gray);
    }

    match square.kind() {
        SquareKind::Bomb => ("* ".to_string(), Color::Red),
        SquareKind::Empty => (". ".to_string(), Color::DarkGray),
        SquareKind::Number(n) => {
            let color = match n {
                1 => Color::Blue,
                2 => Color::Green,
                3 => Color::Red,
                4 => Color::Magenta,
                5 => Color::Yellow,
                6 => Color::Cyan,
                7 => Color::Gray,
                _ => Color::White,
            };
            (format!("{} ", n), color)
        }
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &Game, player: &str) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let grid = game.grid();
    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Player: ", Style::default().fg(Color::DarkGray)),
            Span::styled(player.to_string(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled("Grid: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}x{}", grid.width(), grid.height()),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Mines: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", grid.mine_count()),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Cleared: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}/{}", grid.revealed_count(), grid.nonmine_count()),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
    ];

    if game.status() == GameStatus::InProgress {
        lines.push(Line::from(Span::styled(
            "Sweeping...",
            Style::default().fg(Color::Green),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "[Arrows] Move",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(Span::styled(
            "[Enter] Reveal",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(Span::styled(
            "[Esc] Abandon game",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let text = Paragraph::new(lines);
    frame.render_widget(text, inner);
}

fn render_game_over_overlay(frame: &mut Frame, area: Rect, game: &Game, player: &str) {
    let (title, color) = match game.status() {
        GameStatus::Won => ("You won!", Color::Green),
        GameStatus::Lost => ("You lost!", Color::Red),
        GameStatus::InProgress => unreachable!("overlay drawn for a live game"),
    };

    let overlay_area = centered_rect(area, 38, 8);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let mut lines = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if game.status() == GameStatus::Won {
        if let (Some(score), Some(elapsed)) = (game.score(), game.elapsed()) {
            lines.push(Line::from(Span::styled(
                format!("Congratulations, {}!", player),
                Style::default().fg(Color::White),
            )));
            lines.push(Line::from(Span::styled(
                format!("Score: {:.2} in {:.2}s", score, elapsed),
                Style::default().fg(Color::White),
            )));
        }
    }

    lines.push(Line::from(Span::styled(
        "[Any key to continue]",
        Style::default().fg(Color::DarkGray),
    )));

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}
