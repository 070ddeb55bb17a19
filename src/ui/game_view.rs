use super::app::Feedback;
use crate::game::{win, Board, Cell, GameState, Player, Status};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::str::FromStr;

/// Terminal color for a player's display attribute, white if unrecognised
pub fn player_color(player: &Player) -> Color {
    Color::from_str(player.color()).unwrap_or(Color::White)
}

pub fn render(frame: &mut Frame, game_state: &GameState, selected_column: usize, feedback: &Feedback) {
    let board_height = game_state.board().height() as u16 + 4;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Min(board_height),    // Board
            Constraint::Length(3),            // Message
            Constraint::Length(3),            // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, chunks[0]);
    render_board(frame, game_state, selected_column, feedback.last_placed, chunks[1]);
    render_message(frame, &feedback.message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, game_state: &GameState, area: ratatui::layout::Rect) {
    let current = game_state.current_player();
    let (status, color) = match game_state.status() {
        Status::InProgress => (
            format!("Current Player: {} ({})", current.name(), current.color()),
            player_color(current),
        ),
        Status::Won(ordinal) => {
            let color = game_state.player(ordinal).map_or(Color::White, player_color);
            (format!("Game Over  |  Player {} won", ordinal), color)
        }
        Status::Tied => ("Game Over  |  Tie".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn cell_span(game_state: &GameState, cell: Cell, highlight: bool) -> Span<'static> {
    match cell.owner().and_then(|ordinal| game_state.player(ordinal)) {
        None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
        Some(player) => {
            let mut style = Style::default().fg(player_color(player));
            if highlight {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            Span::styled(" ● ", style)
        }
    }
}

fn render_board(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    last_placed: Option<(usize, usize)>,
    area: ratatui::layout::Rect,
) {
    let board: &Board = game_state.board();
    let winning_cells = match game_state.status() {
        Status::Won(ordinal) => win::find_win(board, ordinal).map(|run| run.cells()),
        _ => None,
    };
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..board.width() {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "═".repeat(board.width() * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..board.height() {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..board.width() {
            let highlight = last_placed == Some((row, col))
                || winning_cells.is_some_and(|cells| cells.contains(&(row, col)));
            row_spans.push(cell_span(game_state, board.get(row, col), highlight));
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..board.width() {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let controls = Paragraph::new(Line::from(
        "←/→: Move  |  Enter: Drop  |  1-9: Drop in column  |  R: New game  |  Q: Quit",
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Controls"),
    );

    frame.render_widget(controls, area);
}
