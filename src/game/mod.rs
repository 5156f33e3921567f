//! Core puzzle logic: disks, peg stacks, and the puzzle state machine with
//! its single-disk hand.

mod disk;
mod peg;
mod state;

pub use disk::{Disk, DiskStack};
pub use peg::Peg;
pub use state::PuzzleState;
