//! Game setup screen: player name, grid size and mine count entry.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::{MAX_GRID_HEIGHT, MAX_GRID_WIDTH, MAX_PLAYER_NAME_LEN};

/// Which text field currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupField {
    Player,
    Size,
    Mines,
}

/// Validated setup values, ready to build a grid from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupConfig {
    pub player: String,
    pub width: usize,
    pub height: usize,
    pub mines: usize,
}

/// Text-entry state for the setup screen.
pub struct SetupScreen {
    pub player_input: String,
    pub size_input: String,
    pub mines_input: String,
    pub focus: SetupField,
    pub validation_error: Option<String>,
}

impl SetupScreen {
    pub fn new() -> Self {
        Self {
            player_input: String::new(),
            size_input: String::new(),
            mines_input: String::new(),
            focus: SetupField::Player,
            validation_error: None,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.validation_error = None;
        match self.focus {
            SetupField::Player => {
                if self.player_input.len() < MAX_PLAYER_NAME_LEN && !c.is_control() {
                    self.player_input.push(c);
                }
            }
            SetupField::Size => {
                if c.is_ascii_digit() || c == ',' {
                    self.size_input.push(c);
                }
            }
            SetupField::Mines => {
                if c.is_ascii_digit() {
                    self.mines_input.push(c);
                }
            }
        }
    }

    pub fn backspace(&mut self) {
        self.validation_error = None;
        match self.focus {
            SetupField::Player => self.player_input.pop(),
            SetupField::Size => self.size_input.pop(),
            SetupField::Mines => self.mines_input.pop(),
        };
    }

    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            SetupField::Player => SetupField::Size,
            SetupField::Size => SetupField::Mines,
            SetupField::Mines => SetupField::Player,
        };
    }

    /// Validate all fields. On failure the error is kept for display and
    /// the focus moves to the offending field.
    pub fn try_submit(&mut self) -> Option<SetupConfig> {
        match self.validate() {
            Ok(config) => Some(config),
            Err((field, message)) => {
                self.focus = field;
                self.validation_error = Some(message);
                None
            }
        }
    }

    fn validate(&self) -> Result<SetupConfig, (SetupField, String)> {
        let player = self.player_input.trim();
        if player.is_empty() {
            return Err((SetupField::Player, "Player name is required.".to_string()));
        }

        let (width, height) = parse_pair(&self.size_input).ok_or((
            SetupField::Size,
            "Enter grid size as width,height.".to_string(),
        ))?;
        if width == 0 || height == 0 || width > MAX_GRID_WIDTH || height > MAX_GRID_HEIGHT {
            return Err((
                SetupField::Size,
                format!(
                    "Grid size must be between 1,1 and {},{}.",
                    MAX_GRID_WIDTH, MAX_GRID_HEIGHT
                ),
            ));
        }

        let mines: usize = self
            .mines_input
            .trim()
            .parse()
            .map_err(|_| (SetupField::Mines, "Enter the amount of mines.".to_string()))?;
        if mines == 0 || mines > width * height {
            return Err((
                SetupField::Mines,
                format!("Mines must be between 1 and {}.", width * height),
            ));
        }

        Ok(SetupConfig {
            player: player.to_string(),
            width,
            height,
            mines,
        })
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Player name
                Constraint::Length(3), // Grid size
                Constraint::Length(3), // Mines
                Constraint::Length(2), // Validation
                Constraint::Min(0),    // Filler
                Constraint::Length(2), // Controls
            ])
            .split(area);

        let title = Paragraph::new(Line::from(Span::styled(
            "New Game",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, chunks[0]);

        self.draw_field(
            frame,
            chunks[1],
            SetupField::Player,
            "Player name (max 16 characters)",
            &self.player_input,
        );
        self.draw_field(
            frame,
            chunks[2],
            SetupField::Size,
            "Grid size as width,height (max 25,25)",
            &self.size_input,
        );
        self.draw_field(
            frame,
            chunks[3],
            SetupField::Mines,
            "Amount of mines",
            &self.mines_input,
        );

        if let Some(error) = &self.validation_error {
            let msg = Paragraph::new(Line::from(Span::styled(
                error.as_str(),
                Style::default().fg(Color::Red),
            )));
            frame.render_widget(msg, chunks[4]);
        }

        let controls = Paragraph::new(Line::from(Span::styled(
            "[Tab] Next field  [Enter] Start  [Esc] Back",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(controls, chunks[6]);
    }

    fn draw_field(&self, frame: &mut Frame, area: Rect, field: SetupField, label: &str, value: &str) {
        let focused = self.focus == field;
        let border_color = if focused { Color::Yellow } else { Color::DarkGray };

        let block = Block::default()
            .title(format!(" {} ", label))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let cursor = if focused { "_" } else { "" };
        let text = Paragraph::new(Line::from(vec![
            Span::styled(value.to_string(), Style::default().fg(Color::White)),
            Span::styled(cursor, Style::default().fg(Color::Yellow)),
        ]));
        frame.render_widget(text, inner);
    }
}

/// Parse "a,b" into two integers.
fn parse_pair(input: &str) -> Option<(usize, usize)> {
    let (a, b) = input.trim().split_once(',')?;
    Some((a.trim().parse().ok()?, b.trim().parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(player: &str, size: &str, mines: &str) -> SetupScreen {
        let mut screen = SetupScreen::new();
        screen.player_input = player.to_string();
        screen.size_input = size.to_string();
        screen.mines_input = mines.to_string();
        screen
    }

    #[test]
    fn test_parse_pair() {
        assert_eq!(parse_pair("5,7"), Some((5, 7)));
        assert_eq!(parse_pair(" 12 , 3 "), Some((12, 3)));
        assert_eq!(parse_pair("5"), None);
        assert_eq!(parse_pair("a,b"), None);
        assert_eq!(parse_pair(""), None);
    }

    #[test]
    fn test_submit_valid_config() {
        let mut screen = filled("alice", "9,9", "10");
        let config = screen.try_submit().unwrap();
        assert_eq!(
            config,
            SetupConfig {
                player: "alice".to_string(),
                width: 9,
                height: 9,
                mines: 10,
            }
        );
    }

    #[test]
    fn test_submit_requires_player_name() {
        let mut screen = filled("  ", "9,9", "10");
        assert!(screen.try_submit().is_none());
        assert_eq!(screen.focus, SetupField::Player);
        assert!(screen.validation_error.is_some());
    }

    #[test]
    fn test_submit_rejects_oversized_grid() {
        let mut screen = filled("alice", "26,5", "10");
        assert!(screen.try_submit().is_none());
        assert_eq!(screen.focus, SetupField::Size);
    }

    #[test]
    fn test_submit_rejects_bad_mine_count() {
        let mut screen = filled("alice", "3,3", "10");
        assert!(screen.try_submit().is_none());
        assert_eq!(screen.focus, SetupField::Mines);

        let mut screen = filled("alice", "3,3", "0");
        assert!(screen.try_submit().is_none());
        assert_eq!(screen.focus, SetupField::Mines);
    }

    #[test]
    fn test_player_input_caps_length() {
        let mut screen = SetupScreen::new();
        for _ in 0..30 {
            screen.push_char('x');
        }
        assert_eq!(screen.player_input.len(), MAX_PLAYER_NAME_LEN);
    }

    #[test]
    fn test_field_cycle() {
        let mut screen = SetupScreen::new();
        assert_eq!(screen.focus, SetupField::Player);
        screen.next_field();
        assert_eq!(screen.focus, SetupField::Size);
        screen.next_field();
        assert_eq!(screen.focus, SetupField::Mines);
        screen.next_field();
        assert_eq!(screen.focus, SetupField::Player);
    }
}
