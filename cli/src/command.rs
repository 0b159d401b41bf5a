// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parsing of interactive commands

use anyhow::{anyhow, Result};
use letterpress_core::{Position, BOARD_HEIGHT, BOARD_WIDTH};

/// A line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cell at a grid coordinate to the tray
    Submit(Position),
    /// Return the tray to the grid
    Reset,
    /// Deal a fresh board
    New,
    /// Print the tray word
    Word,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  <col><row>   move a cell to the tray, e.g. 'b3'
  reset        put the tray back on the board
  new          deal a new board
  word         show the current word
  help         show this message
  quit         leave the game";

/// Parse a command from a line of input
pub fn parse_command(input: &str) -> Result<Command> {
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "reset" | "r" => return Ok(Command::Reset),
        "new" | "n" => return Ok(Command::New),
        "word" | "w" => return Ok(Command::Word),
        "help" | "h" | "?" => return Ok(Command::Help),
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    // Coordinate like "b3": column letter then 1-based row
    let mut chars = input.chars();
    let col_char = chars
        .next()
        .ok_or_else(|| anyhow!("Empty command. Type 'help' for a list."))?;
    let row_str = chars.as_str();

    let last_col = (b'a' + BOARD_WIDTH as u8 - 1) as char;
    if !('a'..=last_col).contains(&col_char) {
        return Err(anyhow!(
            "Unknown command '{}'. Columns are A-{}; type 'help' for a list.",
            input,
            last_col.to_ascii_uppercase()
        ));
    }
    let column = (col_char as u8 - b'a') as usize;

    let row = match row_str.parse::<usize>() {
        Ok(r) if r > 0 && r <= BOARD_HEIGHT => r - 1,
        _ => return Err(anyhow!("Invalid row. Must be between 1 and {}.", BOARD_HEIGHT)),
    };

    Ok(Command::Submit(Position::new(row, column)))
}
