//! Minefield - Terminal Minesweeper Library
//!
//! This module exposes the game engine for testing and external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod constants;
pub mod error;
pub mod game;
pub mod grid;
pub mod scores;
pub mod square;

// UI module is not exposed as it's tightly coupled to the terminal
mod ui;
