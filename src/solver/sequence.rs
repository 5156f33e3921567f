use tracing::{debug, info};

use super::moves::{generate_moves, Move};
use crate::game::{Peg, PuzzleState};

/// The generated solution with a playback cursor, plus a log of manual peg
/// touches used for undo.
///
/// Playback and the manual log are independent: manual play never moves the
/// cursor, and stepping the solver never writes to the log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSequence {
    moves: Vec<Move>,
    cursor: usize,
    manual: Vec<Peg>,
}

impl MoveSequence {
    /// Create a sequence already generated for `num_disks`
    pub fn new(num_disks: usize) -> Self {
        let mut seq = MoveSequence::default();
        seq.generate(num_disks);
        seq
    }

    /// Replace the sequence with the A→C solution for `num_disks` and rewind.
    pub fn generate(&mut self, num_disks: usize) {
        self.moves = generate_moves(num_disks, Peg::A, Peg::B, Peg::C);
        self.cursor = 0;
        self.manual.clear();
        info!(num_disks, moves = self.moves.len(), "generated solution");
    }

    /// Play the next move against `state`.
    ///
    /// The cursor only advances when both the pickup and the drop succeed. A
    /// step with a disk already in hand does nothing. If the drop turns out
    /// to be illegal the disk is put back on its source peg.
    pub fn step(&mut self, state: &mut PuzzleState) -> bool {
        let Some(&mv) = self.moves.get(self.cursor) else {
            return false;
        };
        if state.hand().is_some() {
            debug!(next = %mv, "solver step skipped, hand is full");
            return false;
        }
        let [from, to] = mv.touches();
        if !state.select_peg(from) {
            debug!(next = %mv, "solver step failed, source peg is empty");
            return false;
        }
        if !state.select_peg(to) {
            // Putting a disk back where it was just taken from is always legal.
            let restored = state.select_peg(from);
            debug_assert!(restored);
            debug!(next = %mv, "solver step failed, drop is illegal");
            return false;
        }

        self.cursor += 1;
        debug!(played = %mv, cursor = self.cursor, "solver step");
        true
    }

    /// Step until the sequence is exhausted or a step fails. Returns the
    /// number of moves played.
    pub fn run_to_end(&mut self, state: &mut PuzzleState) -> usize {
        let mut played = 0;
        while self.step(state) {
            played += 1;
        }
        played
    }

    /// Record a successful manual touch of `peg`.
    ///
    /// Touching the same peg twice in a row undoes the first touch (putting a
    /// disk back where it came from, or picking up the disk just dropped), so
    /// the pair cancels instead of growing the log.
    pub fn record_touch(&mut self, peg: Peg) {
        if self.manual.last() == Some(&peg) {
            self.manual.pop();
        } else {
            self.manual.push(peg);
        }
    }

    /// Undo the most recent manual touch by touching the same peg again.
    pub fn undo_manual(&mut self, state: &mut PuzzleState) -> bool {
        let Some(&peg) = self.manual.last() else {
            return false;
        };
        if !state.select_peg(peg) {
            return false;
        }
        self.record_touch(peg);
        true
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Index of the next unplayed move
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn played(&self) -> &[Move] {
        &self.moves[..self.cursor]
    }

    pub fn remaining(&self) -> &[Move] {
        &self.moves[self.cursor..]
    }

    pub fn next_move(&self) -> Option<Move> {
        self.moves.get(self.cursor).copied()
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.moves.len()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Manual touches still in effect, oldest first
    pub fn manual_log(&self) -> &[Peg] {
        &self.manual
    }
}
