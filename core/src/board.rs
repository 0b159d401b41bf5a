// SPDX-License-Identifier: MIT OR Apache-2.0

//! The letter grid, the word tray and word validation

use crate::cell::{Cell, CellId, CellSubmit};
use crate::dictionary::Lexicon;
use crate::letters::LetterDistribution;
use crate::{
    BoardError, BoardEvent, Indicator, Position, Region, TrayState, BOARD_HEIGHT, BOARD_WIDTH, CELL_COUNT,
};
use crossbeam_channel::{unbounded, Receiver, Sender};
use rand::distributions::Distribution;
use rand::Rng;
use std::fmt;
use std::sync::Arc;

/// A 5×5 board of letter cells and the tray the player spells into
pub struct Board {
    cells: Vec<Cell>,
    /// Cell ids in the tray, in submission order
    tray: Vec<CellId>,
    indicator: Indicator,
    dictionary: Option<Arc<dyn Lexicon>>,
    signal_rx: Receiver<CellSubmit>,
    subscribers: Vec<Sender<BoardEvent>>,
}

impl Board {
    /// Create a board of freshly drawn letters
    pub fn new(dictionary: Option<Arc<dyn Lexicon>>) -> Self {
        Self::with_rng(&mut rand::thread_rng(), dictionary)
    }

    /// Create a board drawing its letters from `rng`
    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R, dictionary: Option<Arc<dyn Lexicon>>) -> Self {
        let letters = LetterDistribution::english();
        let cells = (0..CELL_COUNT)
            .map(|_| Cell::new(letters.sample(&mut *rng)))
            .collect();
        Self::with_cells(cells, dictionary)
    }

    /// Create a board from exactly 25 letters, filled row by row. Whitespace
    /// in `letters` is ignored, so rows may be separated by spaces.
    pub fn from_letters(letters: &str, dictionary: Option<Arc<dyn Lexicon>>) -> Result<Self, BoardError> {
        let letters: Vec<char> = letters.chars().filter(|c| !c.is_whitespace()).collect();
        if letters.len() != CELL_COUNT {
            return Err(BoardError::CellCount {
                expected: CELL_COUNT,
                actual: letters.len(),
            });
        }
        if let Some(&bad) = letters.iter().find(|c| !c.is_ascii_alphabetic()) {
            return Err(BoardError::InvalidLetter(bad));
        }

        let cells = letters.into_iter().map(Cell::new).collect();
        Ok(Self::with_cells(cells, dictionary))
    }

    /// Attach the cell set. Happens once per board: positions each cell,
    /// labels its shade and subscribes it to the submission signal.
    fn with_cells(mut cells: Vec<Cell>, dictionary: Option<Arc<dyn Lexicon>>) -> Self {
        let (signal_tx, signal_rx) = unbounded();

        for (index, cell) in cells.iter_mut().enumerate() {
            cell.attach(index, signal_tx.clone());
        }

        if dictionary.is_none() {
            tracing::warn!("Board created without a dictionary; every word will be invalid");
        }

        Self {
            cells,
            tray: Vec::new(),
            indicator: Indicator::Neither,
            dictionary,
            signal_rx,
            subscribers: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        BOARD_WIDTH
    }

    pub fn height(&self) -> usize {
        BOARD_HEIGHT
    }

    /// All cells in insertion order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get a cell by id
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id.0)
    }

    /// Get the cell at a grid coordinate, wherever it currently lives
    pub fn cell_at(&self, row: usize, column: usize) -> Option<&Cell> {
        let position = Position::new(row, column);
        if !position.is_valid() {
            return None;
        }
        self.cells.get(position.to_index())
    }

    /// Cells currently on the grid
    pub fn grid_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| c.region() == Region::Grid)
    }

    /// Cells currently in the tray, in tray order
    pub fn tray_cells(&self) -> impl Iterator<Item = &Cell> {
        self.tray.iter().filter_map(move |id| self.cells.get(id.0))
    }

    /// The current tray indicator
    pub fn indicator(&self) -> Indicator {
        self.indicator
    }

    /// Whether a dictionary was supplied
    pub fn has_dictionary(&self) -> bool {
        self.dictionary.is_some()
    }

    /// The tray state machine's current state
    pub fn tray_state(&self) -> TrayState {
        match (self.tray.is_empty(), self.indicator) {
            (true, _) => TrayState::Empty,
            (false, Indicator::Valid) => TrayState::NonEmptyValid,
            (false, _) => TrayState::NonEmptyInvalid,
        }
    }

    /// Look a word up in the dictionary, ignoring case
    pub fn try_is_word(&self, candidate: &str) -> Result<bool, BoardError> {
        let dictionary = self
            .dictionary
            .as_ref()
            .ok_or(BoardError::DictionaryUnavailable)?;
        Ok(dictionary.contains(&candidate.to_lowercase()))
    }

    /// Look a word up in the dictionary, ignoring case.
    ///
    /// A missing dictionary is logged and counts as "not a word".
    pub fn is_word(&self, candidate: &str) -> bool {
        match self.try_is_word(candidate) {
            Ok(found) => found,
            Err(e) => {
                tracing::error!(candidate, "{}", e);
                false
            }
        }
    }

    /// Letters of the tray cells, in tray order
    pub fn current_word(&self) -> String {
        self.tray_cells().map(Cell::letter).collect()
    }

    /// Whether the tray currently spells a dictionary word
    pub fn current_word_valid(&self) -> bool {
        self.is_word(&self.current_word())
    }

    /// Subscribe to board events
    pub fn subscribe(&mut self) -> Receiver<BoardEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Move a cell to the tray through its submission signal and process it
    pub fn submit(&mut self, id: CellId) -> Result<BoardEvent, BoardError> {
        let cell = self.cell(id).ok_or(BoardError::UnknownCell(id))?;
        if !cell.move_to_tray() {
            return Err(BoardError::UnknownCell(id));
        }

        let mut last = None;
        for event in self.process_pending() {
            last = Some(event?);
        }
        last.ok_or(BoardError::UnknownCell(id))
    }

    /// Handle every queued submission signal in arrival order
    pub fn process_pending(&mut self) -> Vec<Result<BoardEvent, BoardError>> {
        let pending: Vec<CellSubmit> = self.signal_rx.try_iter().collect();
        pending.into_iter().map(|s| self.handle_event(s)).collect()
    }

    /// React to a cell submission: append the cell to the tray, re-check the
    /// word and flip the indicator
    pub fn handle_event(&mut self, signal: CellSubmit) -> Result<BoardEvent, BoardError> {
        let id = signal.cell;
        if id.0 >= self.cells.len() {
            return Err(BoardError::UnknownCell(id));
        }

        let _span = tracing::debug_span!("board.submit", cell = id.0).entered();

        // Appending an element that is already in the tray moves it to the end.
        self.tray.retain(|&c| c != id);
        self.tray.push(id);
        self.cells[id.0].set_region(Region::Tray);

        let word = self.current_word();
        let valid = self.is_word(&word);
        self.indicator = if valid {
            Indicator::Valid
        } else {
            Indicator::Invalid
        };

        tracing::debug!(word = %word, valid, "Cell submitted");

        let event = BoardEvent::CellSubmitted {
            cell: id,
            letter: self.cells[id.0].letter(),
            word,
            valid,
        };
        self.publish(&event);
        Ok(event)
    }

    /// Return every tray cell to the grid and clear the indicator
    pub fn reset(&mut self) -> BoardEvent {
        let returned: Vec<CellId> = std::mem::take(&mut self.tray);
        for id in &returned {
            self.cells[id.0].set_region(Region::Grid);
        }
        self.indicator = Indicator::Neither;

        tracing::info!(returned = returned.len(), "Tray reset");

        let event = BoardEvent::TrayReset { returned };
        self.publish(&event);
        event
    }

    fn publish(&mut self, event: &BoardEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("letters", &self.cells.iter().map(Cell::letter).collect::<String>())
            .field("tray", &self.tray)
            .field("indicator", &self.indicator)
            .field("has_dictionary", &self.dictionary.is_some())
            .finish()
    }
}
