use crate::config::AppConfig;
use crate::error::ConfigError;
use crate::game::{GameObserver, GameState, Placement, Player, PlayerFactory, Status};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

/// What the board view shows besides the grid itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feedback {
    pub message: Option<String>,
    pub last_placed: Option<(usize, usize)>,
}

impl GameObserver for Feedback {
    fn piece_placed(&mut self, placement: &Placement, _player: &Player) {
        self.last_placed = Some((placement.row, placement.column));
    }

    fn game_over(&mut self, status: Status) {
        self.message = status.message();
    }
}

pub struct App {
    config: AppConfig,
    factory: PlayerFactory,
    game_state: GameState,
    selected_column: usize,
    should_quit: bool,
    feedback: Feedback,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self, ConfigError> {
        let mut factory = PlayerFactory::default();
        let game_state = config.new_game(&mut factory)?;
        Ok(App {
            selected_column: game_state.board().width() / 2, // Start in middle
            config,
            factory,
            game_state,
            should_quit: false,
            feedback: Feedback::default(),
        })
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal.draw(|f| self.render(f)).map_err(Into::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        let width = self.game_state.board().width();

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < width {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='9') => {
                // Columns the board does not have are ignored here, before the engine
                let column = c as usize - '1' as usize;
                if column < width {
                    self.selected_column = column;
                    self.drop_piece(column);
                }
            }
            KeyCode::Char('r') => self.restart(),
            _ => {}
        }
    }

    /// Drop the current player's piece in `column`; full columns do nothing
    fn drop_piece(&mut self, column: usize) {
        let placed = self
            .game_state
            .attempt_move_observed(column, &mut self.feedback);
        if matches!(placed, Some(p) if p.status == Status::InProgress) {
            self.feedback.message = None;
        }
    }

    /// Start a new match; the new players get fresh ordinals
    fn restart(&mut self) {
        match self.config.new_game(&mut self.factory) {
            Ok(state) => {
                self.selected_column = state.board().width() / 2;
                self.game_state = state;
                self.feedback = Feedback {
                    message: Some("New game started!".to_string()),
                    last_placed: None,
                };
            }
            Err(e) => {
                tracing::error!(error = %e, "could not start a new game");
                self.feedback.message = Some(e.to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game_state, self.selected_column, &self.feedback);
    }
}
