//! # Hanoi TUI
//!
//! The Towers of Hanoi puzzle in the terminal, with a step-through solver.
//! The terminal UI is built with Ratatui; all puzzle logic is plain owned
//! state with no I/O.
//!
//! ## Modules
//!
//! - [`game`]: Disks, peg stacks, and the puzzle state machine with its hand
//! - [`solver`]: Optimal move generation, playback cursor, manual-touch log
//! - [`ui`]: Terminal UI: event loop and game view
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod solver;
pub mod ui;
