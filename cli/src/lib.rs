// SPDX-License-Identifier: MIT OR Apache-2.0

//! Letterpress CLI - interactive play in a terminal

pub mod command;
pub mod config;
pub mod render;

use anyhow::{Context, Result};
use command::{parse_command, Command, HELP};
use crossbeam_channel::Receiver;
use letterpress_core::logging::ContextLogger;
use letterpress_core::{Board, BoardEvent, Lexicon};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{BufRead, Write};
use std::sync::Arc;

/// One interactive game: the current board plus what is needed to deal the next
pub struct Session {
    board: Board,
    events: Receiver<BoardEvent>,
    dictionary: Option<Arc<dyn Lexicon>>,
    rng: StdRng,
    logger: Option<ContextLogger>,
}

impl Session {
    /// Start a session. A seed makes every dealt board reproducible.
    pub fn new(dictionary: Option<Arc<dyn Lexicon>>, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut board = Board::with_rng(&mut rng, dictionary.clone());
        let events = board.subscribe();

        Self {
            board,
            events,
            dictionary,
            rng,
            logger: None,
        }
    }

    /// Stream board events as JSON lines through `logger`
    pub fn with_logger(mut self, logger: ContextLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run one command. Returns false when the player quits.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<bool> {
        match command {
            Command::Submit(position) => {
                let id = self
                    .board
                    .cell_at(position.row, position.column)
                    .map(|c| c.id())
                    .context("No cell at that position")?;
                if self.board.cell(id).map_or(false, |c| c.in_tray()) {
                    writeln!(out, "That letter is already in the tray.")?;
                    return Ok(true);
                }
                self.board.submit(id)?;
                self.print_state(out)?;
            }
            Command::Reset => {
                self.board.reset();
                self.print_state(out)?;
            }
            Command::New => {
                self.board = Board::with_rng(&mut self.rng, self.dictionary.clone());
                self.events = self.board.subscribe();
                if let Some(logger) = self.logger.take() {
                    let logger = logger.next_board();
                    logger.info("new board");
                    self.logger = Some(logger);
                }
                self.print_state(out)?;
            }
            Command::Word => {
                let word = self.board.current_word();
                if word.is_empty() {
                    writeln!(out, "The tray is empty.")?;
                } else if self.board.current_word_valid() {
                    writeln!(out, "{} is a word.", word.to_uppercase())?;
                } else {
                    writeln!(out, "{} is not a word.", word.to_uppercase())?;
                }
            }
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => return Ok(false),
        }

        self.flush_events();
        Ok(true)
    }

    /// Read commands line by line until EOF or `quit`
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        if !self.board.has_dictionary() {
            writeln!(out, "Warning: no dictionary loaded, every word will be invalid.")?;
        }
        self.print_state(out)?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            if line.trim().is_empty() {
                continue;
            }

            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(e) => {
                    writeln!(out, "{}", e)?;
                    continue;
                }
            };

            match self.execute(command, out) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => writeln!(out, "{}", e)?,
            }
        }

        Ok(())
    }

    fn print_state<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "\n{}", render::render_board(&self.board))?;
        writeln!(out, "{}", render::render_tray(&self.board))?;
        Ok(())
    }

    fn flush_events(&self) {
        for event in self.events.try_iter() {
            match &self.logger {
                Some(logger) => logger.event(&event),
                None => tracing::trace!(?event, "Board event"),
            }
        }
    }
}
