//! Optimal move generation and the step-through playback cursor.

mod moves;
mod sequence;

pub use moves::{generate_moves, Move};
pub use sequence::MoveSequence;
