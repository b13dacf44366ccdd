//! Tic-tac-toe board rendering.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};
use tictactoe_core::{GameEngine, GameStatus, Player, Position, Square, WinLine};

/// Renders the tic-tac-toe board.
pub fn render_board(f: &mut Frame, area: Rect, engine: &GameEngine) {
    let win_line = match engine.evaluate().status() {
        GameStatus::Won(_, line) => Some(*line),
        _ => None,
    };

    let board_area = center_rect(area, 40, 12);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    render_row(f, rows[0], engine, win_line, 0);
    render_separator(f, rows[1]);
    render_row(f, rows[2], engine, win_line, 3);
    render_separator(f, rows[3]);
    render_row(f, rows[4], engine, win_line, 6);
}

fn render_row(f: &mut Frame, area: Rect, engine: &GameEngine, win_line: Option<WinLine>, start: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    render_square(f, cols[0], engine, win_line, start);
    render_vertical_sep(f, cols[1]);
    render_square(f, cols[2], engine, win_line, start + 1);
    render_vertical_sep(f, cols[3]);
    render_square(f, cols[4], engine, win_line, start + 2);
}

fn render_square(
    f: &mut Frame,
    area: Rect,
    engine: &GameEngine,
    win_line: Option<WinLine>,
    index: usize,
) {
    let pos = Position::ALL[index];
    let square = engine.state().board().get(pos);
    let (text, mut style) = match square {
        Square::Empty => (
            format!("{}", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    // Highlight the cells of the winning line.
    if let Some(line) = win_line {
        if line.contains(pos) {
            style = style.fg(Color::Green).add_modifier(Modifier::BOLD);
        }
    }

    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
