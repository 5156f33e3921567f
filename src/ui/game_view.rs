use crate::game::PuzzleState;
use crate::solver::MoveSequence;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::tower_widget;

/// Moves of history kept visible before the cursor in the solution panel.
const SOLUTION_LOOKBEHIND: usize = 8;
/// Upper bound on moves drawn in the solution panel at once.
const SOLUTION_WINDOW: usize = 96;

pub fn render(
    frame: &mut Frame,
    puzzle: &PuzzleState,
    solver: &MoveSequence,
    show_solution: bool,
    message: &Option<String>,
) {
    let solution_height = if show_solution { 5 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Header
            Constraint::Min(6),                  // Pegs
            Constraint::Length(solution_height), // Solution
            Constraint::Length(3),               // Message
            Constraint::Length(4),               // Controls
        ])
        .split(frame.area());

    render_header(frame, puzzle, solver, chunks[0]);
    render_pegs(frame, puzzle, chunks[1]);
    if show_solution {
        render_solution(frame, solver, chunks[2]);
    }
    render_message(frame, message, chunks[3]);
    render_controls(frame, chunks[4]);
}

fn render_header(frame: &mut Frame, puzzle: &PuzzleState, solver: &MoveSequence, area: Rect) {
    let (status, color) = if puzzle.is_solved() {
        ("Solved", Color::Green)
    } else if puzzle.hand().is_some() {
        ("Holding", Color::Yellow)
    } else {
        ("Playing", Color::White)
    };

    let header_text = Line::from(vec![
        Span::raw(format!("Disks: {}", puzzle.num_disks())),
        Span::raw("  |  "),
        Span::raw(format!("Solver: {}/{}", solver.cursor(), solver.len())),
        Span::raw("  |  "),
        Span::raw(format!("Manual touches: {}", solver.manual_log().len())),
        Span::raw("  |  ["),
        Span::styled(status, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw("]"),
    ]);

    let header = Paragraph::new(header_text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Towers of Hanoi"),
        );

    frame.render_widget(header, area);
}

fn render_pegs(frame: &mut Frame, puzzle: &PuzzleState, area: Rect) {
    let lines = tower_widget::tower_lines(puzzle);

    // Anchor the base of the pegs to the bottom of the area
    let height = lines.len() as u16;
    let area = if area.height > height {
        Rect {
            y: area.y + area.height - height,
            height,
            ..area
        }
    } else {
        area
    };

    let pegs = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(pegs, area);
}

fn render_solution(frame: &mut Frame, solver: &MoveSequence, area: Rect) {
    let moves = solver.moves();
    let cursor = solver.cursor();
    let start = cursor.saturating_sub(SOLUTION_LOOKBEHIND);
    let end = moves.len().min(start + SOLUTION_WINDOW);

    let mut spans = Vec::with_capacity(end - start + 2);
    if start > 0 {
        spans.push(Span::styled("\u{2026} ", Style::default().fg(Color::DarkGray)));
    }
    for (i, mv) in moves.iter().enumerate().take(end).skip(start) {
        let style = if i < cursor {
            Style::default().fg(Color::DarkGray)
        } else if i == cursor {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default()
        };
        spans.push(Span::styled(mv.to_string(), style));
        spans.push(Span::raw(" "));
    }
    if end < moves.len() {
        spans.push(Span::styled("\u{2026}", Style::default().fg(Color::DarkGray)));
    }

    let solution = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Solution {}/{}", cursor, moves.len())),
        );

    frame.render_widget(solution, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line1 = Line::from("1/2/3 or A/B/C: Pick up / drop  |  U: Undo  |  R: Restart  |  Q: Quit");
    let line2 = Line::from(vec![
        Span::styled("Solver", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw(": S Step  F Finish  ? Show moves"),
    ]);

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
