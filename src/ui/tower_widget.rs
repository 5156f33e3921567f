use crate::game::{Disk, Peg, PuzzleState};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const DISK_COLORS: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Blue,
    Color::Magenta,
];

/// Width of one peg column: wide enough for the largest disk plus a margin.
pub fn column_width(num_disks: usize) -> usize {
    2 * num_disks + 1
}

fn disk_style(disk: Disk) -> Style {
    let color = DISK_COLORS[(disk.size() - 1) % DISK_COLORS.len()];
    Style::default().fg(color)
}

/// A disk drawn as `2 * size - 1` cells centered in a column of `width`.
fn disk_cell(disk: Disk, width: usize, style: Style) -> Vec<Span<'static>> {
    let body = 2 * disk.size() - 1;
    let pad = (width - body) / 2;
    vec![
        Span::raw(" ".repeat(pad)),
        Span::styled("\u{2588}".repeat(body), style),
        Span::raw(" ".repeat(width - body - pad)),
    ]
}

fn pole_cell(width: usize) -> Vec<Span<'static>> {
    let pad = width / 2;
    vec![
        Span::raw(" ".repeat(pad)),
        Span::styled("\u{2502}", Style::default().fg(Color::DarkGray)),
        Span::raw(" ".repeat(width - pad - 1)),
    ]
}

/// Lay out the three pegs as text lines: the held disk on top, then one row
/// per disk slot, then the base and the peg labels.
pub fn tower_lines(state: &PuzzleState) -> Vec<Line<'static>> {
    let n = state.num_disks();
    let width = column_width(n);
    let mut lines = Vec::with_capacity(n + 4);

    // Held disk floats above the middle peg
    let mut hand_spans = vec![Span::raw(" ".repeat(width + 1))];
    match state.hand() {
        Some(disk) => hand_spans.extend(disk_cell(
            disk,
            width,
            disk_style(disk).add_modifier(Modifier::BOLD),
        )),
        None => hand_spans.push(Span::raw(" ".repeat(width))),
    }
    lines.push(Line::from(hand_spans));
    lines.push(Line::from(""));

    // Row 0 is the top slot, which only the tallest possible stack reaches
    for row in 0..n {
        let level = n - 1 - row;
        let mut spans = Vec::new();
        for (i, peg) in Peg::ALL.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            match state.peg(peg).iter_bottom_up().nth(level) {
                Some(disk) => spans.extend(disk_cell(disk, width, disk_style(disk))),
                None => spans.extend(pole_cell(width)),
            }
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from("\u{2580}".repeat(3 * width + 2)));

    let labels: Vec<String> = Peg::ALL
        .iter()
        .map(|peg| format!("{:^width$}", format!("{} {}", peg.index() + 1, peg.label())))
        .collect();
    lines.push(Line::from(Span::styled(
        labels.join(" "),
        Style::default().add_modifier(Modifier::BOLD),
    )));

    lines
}
