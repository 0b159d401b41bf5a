// SPDX-License-Identifier: MIT OR Apache-2.0

//! Letter tiles and their submission signal

use crate::{Placement, Position, Region, Shade};
use crossbeam_channel::Sender;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a cell on its board (its insertion index)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellId(pub usize);

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Signal a cell sends to its board when it is moved to the tray
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSubmit {
    /// The cell being submitted
    pub cell: CellId,
}

/// A single letter tile
#[derive(Debug, Clone)]
pub struct Cell {
    id: CellId,
    letter: char,
    position: Position,
    placement: Placement,
    shade: Shade,
    region: Region,
    signal: Option<Sender<CellSubmit>>,
}

impl Cell {
    /// Create an unattached cell. Its position and shade are set when a board
    /// attaches it.
    pub fn new(letter: char) -> Self {
        let position = Position::new(0, 0);
        Self {
            id: CellId(0),
            letter: letter.to_ascii_lowercase(),
            position,
            placement: Placement::for_position(position),
            shade: Shade::Light,
            region: Region::Grid,
            signal: None,
        }
    }

    /// Bind the cell to a board slot and subscribe it to the board's signal
    pub(crate) fn attach(&mut self, index: usize, signal: Sender<CellSubmit>) {
        self.id = CellId(index);
        self.position = Position::from_index(index);
        self.placement = Placement::for_position(self.position);
        self.shade = Shade::from_index(index);
        self.region = Region::Grid;
        self.signal = Some(signal);
    }

    pub(crate) fn set_region(&mut self, region: Region) {
        self.region = region;
    }

    /// Move this cell to the tray by signalling its board.
    ///
    /// Returns false if the cell is not attached to a live board.
    pub fn move_to_tray(&self) -> bool {
        match &self.signal {
            Some(signal) => signal.send(CellSubmit { cell: self.id }).is_ok(),
            None => false,
        }
    }

    pub fn id(&self) -> CellId {
        self.id
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn row(&self) -> usize {
        self.position.row
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn shade(&self) -> Shade {
        self.shade
    }

    pub fn region(&self) -> Region {
        self.region
    }

    /// Whether the cell is currently in the tray
    pub fn in_tray(&self) -> bool {
        self.region == Region::Tray
    }
}
