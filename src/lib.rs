//! # Connect Four
//!
//! A two-player Connect Four engine: pieces drop to the lowest empty row of a
//! column and the first player with four in a row (horizontally, vertically,
//! or diagonally) wins; a full board with no winner is a tie. A terminal UI
//! built with Ratatui drives the engine.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, win detection, state machine
//! - [`ui`] — Terminal UI: board view and key handling
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
