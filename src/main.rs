mod constants;
mod error;
mod game;
mod grid;
mod scores;
mod square;
mod ui;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use constants::SCORE_DISPLAY_COUNT;
use game::{Game, GameStatus};
use grid::Grid;
use scores::{ScoreBoard, ScoreEntry};
use ui::setup_scene::SetupScreen;

enum Screen {
    Menu,
    Setup,
    Playing,
    Scores,
}

/// One game in progress plus the UI state around it.
struct PlaySession {
    game: Game,
    player: String,
    cursor: (usize, usize),
    recorded: bool,
}

impl PlaySession {
    fn new(game: Game, player: String) -> Self {
        let cursor = (game.grid().width() / 2, game.grid().height() / 2);
        Self {
            game,
            player,
            cursor,
            recorded: false,
        }
    }

    /// Move the cursor, clamping to the grid bounds.
    fn move_cursor(&mut self, dx: i32, dy: i32) {
        let grid = self.game.grid();
        let x = (self.cursor.0 as i32 + dx).clamp(0, grid.width() as i32 - 1) as usize;
        let y = (self.cursor.1 as i32 + dy).clamp(0, grid.height() as i32 - 1) as usize;
        self.cursor = (x, y);
    }
}

fn main() -> io::Result<()> {
    let score_board = ScoreBoard::new()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &score_board);

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    score_board: &ScoreBoard,
) -> io::Result<()> {
    let mut screen = Screen::Menu;
    let mut setup = SetupScreen::new();
    let mut session: Option<PlaySession> = None;
    let mut score_entries: Vec<ScoreEntry> = Vec::new();

    loop {
        terminal.draw(|frame| {
            let area = frame.size();
            match screen {
                Screen::Menu => ui::render_menu(frame, area),
                Screen::Setup => setup.draw(frame, area),
                Screen::Playing => {
                    if let Some(s) = &session {
                        ui::minefield_scene::render_minefield(
                            frame, area, &s.game, &s.player, s.cursor,
                        );
                    }
                }
                Screen::Scores => ui::scores_scene::render_scores(frame, area, &score_entries),
            }
        })?;

        if !event::poll(Duration::from_millis(200))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match screen {
            Screen::Menu => match key.code {
                KeyCode::Char('p') | KeyCode::Char('P') => {
                    setup = SetupScreen::new();
                    screen = Screen::Setup;
                }
                KeyCode::Char('s') | KeyCode::Char('S') => {
                    score_entries = score_board.top(SCORE_DISPLAY_COUNT)?;
                    screen = Screen::Scores;
                }
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(()),
                _ => {}
            },
            Screen::Setup => match key.code {
                KeyCode::Esc => screen = Screen::Menu,
                KeyCode::Tab | KeyCode::Down => setup.next_field(),
                KeyCode::Backspace => setup.backspace(),
                KeyCode::Enter => {
                    if let Some(config) = setup.try_submit() {
                        let mut rng = rand::thread_rng();
                        match Grid::new(config.width, config.height, config.mines, &mut rng) {
                            Ok(grid) => {
                                let mut game = Game::new(grid);
                                game.start_timer();
                                session = Some(PlaySession::new(game, config.player));
                                screen = Screen::Playing;
                            }
                            Err(e) => setup.validation_error = Some(e.to_string()),
                        }
                    }
                }
                KeyCode::Char(c) => setup.push_char(c),
                _ => {}
            },
            Screen::Playing => {
                let Some(s) = session.as_mut() else {
                    screen = Screen::Menu;
                    continue;
                };

                if s.game.status() != GameStatus::InProgress {
                    // Any key dismisses the game-over overlay.
                    session = None;
                    screen = Screen::Menu;
                    continue;
                }

                match key.code {
                    KeyCode::Up => s.move_cursor(0, -1),
                    KeyCode::Down => s.move_cursor(0, 1),
                    KeyCode::Left => s.move_cursor(-1, 0),
                    KeyCode::Right => s.move_cursor(1, 0),
                    KeyCode::Enter => {
                        let (x, y) = s.cursor;
                        s.game.guess(x, y);

                        if s.game.status() != GameStatus::InProgress {
                            s.game.stop_timer();
                            s.game.game_over();

                            if s.game.status() == GameStatus::Won && !s.recorded {
                                if let (Some(score), Some(date)) =
                                    (s.game.score(), s.game.started_on())
                                {
                                    score_board.record(ScoreEntry {
                                        player: s.player.clone(),
                                        score,
                                        date,
                                    })?;
                                    s.recorded = true;
                                }
                            }
                        }
                    }
                    KeyCode::Esc => {
                        session = None;
                        screen = Screen::Menu;
                    }
                    _ => {}
                }
            }
            Screen::Scores => match key.code {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => screen = Screen::Menu,
                _ => {}
            },
        }
    }
}
