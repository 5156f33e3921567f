use crate::game::{Peg, PuzzleState};
use crate::solver::MoveSequence;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::{debug, info};

pub struct App {
    puzzle: PuzzleState,
    solver: MoveSequence,
    size: usize,
    show_solution: bool,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(size: usize, show_solution: bool) -> Self {
        App {
            puzzle: PuzzleState::new(size),
            solver: MoveSequence::new(size),
            size,
            show_solution,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop. Blocks on each input event, so nothing is
    /// redrawn until a key arrives.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        info!("quit requested");
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            // Other Ctrl/Alt chords are not commands
            KeyCode::Char(_)
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {}
            KeyCode::Char(ch) => self.handle_char(ch.to_ascii_lowercase()),
            _ => {}
        }

        if self.puzzle.is_solved() && self.puzzle.num_disks() > 0 {
            self.message = Some("Solved! Press 'r' to play again.".to_string());
        }
    }

    /// Letter commands are case-insensitive
    fn handle_char(&mut self, ch: char) {
        match ch {
            'q' => {
                self.should_quit = true;
            }
            'r' => {
                self.reset();
                self.message = Some("Puzzle reset.".to_string());
            }
            's' => self.step_solver(),
            'f' => self.finish_solver(),
            'u' => self.undo(),
            '?' => {
                self.show_solution = !self.show_solution;
            }
            _ => {
                if let Ok(peg) = Peg::from_char(ch) {
                    self.select_peg(peg);
                }
            }
        }
    }

    fn reset(&mut self) {
        self.puzzle.reset(self.size);
        self.solver.generate(self.size);
    }

    /// Touch a peg by hand, recording the touch if it did anything
    fn select_peg(&mut self, peg: Peg) {
        let holding = self.puzzle.hand();
        if self.puzzle.select_peg(peg) {
            self.solver.record_touch(peg);
            return;
        }

        self.message = Some(match holding {
            None => format!("Peg {peg} is empty!"),
            Some(disk) => format!("Disk {} does not fit on peg {peg}!", disk.size()),
        });
        debug!(peg = %peg, "manual touch rejected");
    }

    fn step_solver(&mut self) {
        if self.solver.is_finished() {
            self.message = Some("Solver has no moves left.".to_string());
        } else if !self.solver.step(&mut self.puzzle) {
            self.message = Some(self.stuck_message());
        }
    }

    fn finish_solver(&mut self) {
        let played = self.solver.run_to_end(&mut self.puzzle);
        if !self.solver.is_finished() {
            self.message = Some(self.stuck_message());
        } else if played == 0 {
            self.message = Some("Solver has no moves left.".to_string());
        }
    }

    fn stuck_message(&self) -> String {
        match self.solver.next_move() {
            Some(mv) if self.puzzle.hand().is_some() => {
                format!("Put the held disk down before playing {mv}.")
            }
            Some(mv) => format!("Solver move {mv} is not legal here. Press 'r' to reset."),
            None => "Solver has no moves left.".to_string(),
        }
    }

    fn undo(&mut self) {
        if self.solver.manual_log().is_empty() {
            self.message = Some("Nothing to undo.".to_string());
        } else if !self.solver.undo_manual(&mut self.puzzle) {
            self.message = Some("Cannot undo that touch now.".to_string());
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.puzzle,
            &self.solver,
            self.show_solution,
            &self.message,
        );
    }

    pub fn puzzle(&self) -> &PuzzleState {
        &self.puzzle
    }

    pub fn solver(&self) -> &MoveSequence {
        &self.solver
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_SIZE, false)
    }
}
