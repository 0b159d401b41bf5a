// SPDX-License-Identifier: MIT OR Apache-2.0

//! Letterpress Core - Board, Tray and Dictionary Logic
//!
//! This crate provides the core game functionality including:
//! - The 5×5 letter grid and the word tray
//! - Cell submission signalling and word validation
//! - Frequency-weighted random letters
//! - Word lists and structured event logging

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod board;
pub mod cell;
pub mod dictionary;
pub mod letters;
pub mod logging;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use board::Board;
pub use cell::{Cell, CellId, CellSubmit};
pub use dictionary::{Lexicon, WordList};

/// Number of columns on the board
pub const BOARD_WIDTH: usize = 5;
/// Number of rows on the board
pub const BOARD_HEIGHT: usize = 5;
/// Number of cells on the board
pub const CELL_COUNT: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// Grid position of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row, counted from the top
    pub row: usize,
    /// Column, counted from the left
    pub column: usize,
}

impl Position {
    /// Create a new position
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Position of the cell at `index` in insertion order
    pub fn from_index(index: usize) -> Self {
        Self {
            row: index / BOARD_WIDTH,
            column: index % BOARD_WIDTH,
        }
    }

    /// Insertion index of this position
    pub fn to_index(&self) -> usize {
        self.row * BOARD_WIDTH + self.column
    }

    /// Check if the position lies on the board
    pub fn is_valid(&self) -> bool {
        self.row < BOARD_HEIGHT && self.column < BOARD_WIDTH
    }
}

/// Absolute placement of a cell inside the grid, in percent of the grid size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Offset from the left edge
    pub left_percent: f32,
    /// Offset from the top edge
    pub top_percent: f32,
}

impl Placement {
    /// Placement for a grid position
    pub fn for_position(position: Position) -> Self {
        Self {
            left_percent: position.column as f32 * (100.0 / BOARD_WIDTH as f32),
            top_percent: position.row as f32 * (100.0 / BOARD_HEIGHT as f32),
        }
    }
}

/// Checkerboard shading label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shade {
    Light,
    Dark,
}

impl Shade {
    /// Shade for the cell at `index`; alternates with every cell, which gives a
    /// checkerboard on an odd-width grid
    pub fn from_index(index: usize) -> Self {
        if index % 2 == 0 {
            Shade::Light
        } else {
            Shade::Dark
        }
    }
}

/// Where a cell currently lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// On the letter grid
    Grid,
    /// In the word tray
    Tray,
}

/// Validity marker shown on the tray
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    /// Nothing submitted since the last reset
    #[default]
    Neither,
    /// The tray spells a dictionary word
    Valid,
    /// The tray does not spell a dictionary word
    Invalid,
}

/// Observable state of the tray
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrayState {
    Empty,
    NonEmptyInvalid,
    NonEmptyValid,
}

/// Events emitted by the board after it handles a signal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BoardEvent {
    /// A cell was moved into the tray
    CellSubmitted {
        /// The submitted cell
        cell: CellId,
        /// Its letter
        letter: char,
        /// The tray word after the submission
        word: String,
        /// Whether that word is in the dictionary
        valid: bool,
    },
    /// The tray was emptied back onto the grid
    TrayReset {
        /// Cells that went back to the grid, in former tray order
        returned: Vec<CellId>,
    },
}

/// Errors raised by board operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// No dictionary was supplied to the board
    #[error("Letterpress dictionary isn't loaded")]
    DictionaryUnavailable,

    /// The cell id does not belong to this board
    #[error("Unknown cell {0}")]
    UnknownCell(CellId),

    /// A board needs exactly one letter per cell
    #[error("Expected {expected} letters, got {actual}")]
    CellCount {
        /// Required number of letters
        expected: usize,
        /// Number supplied
        actual: usize,
    },

    /// Cells carry a single ASCII letter
    #[error("Invalid letter {0:?}")]
    InvalidLetter(char),

    /// A letter frequency table could not be turned into a distribution
    #[error("Invalid letter weights: {0}")]
    InvalidWeights(String),
}
