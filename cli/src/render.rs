// SPDX-License-Identifier: MIT OR Apache-2.0

//! ASCII board rendering for the CLI.

use letterpress_core::{Board, Indicator, Shade};

/// Render the letter grid. Cells that are in the tray leave a `.` behind;
/// dark squares are bracketed so the checkerboard shows.
pub fn render_board(board: &Board) -> String {
    let mut output = String::new();

    // Add column labels
    output.push_str("  ");
    for col in 0..board.width() {
        output.push_str(&format!("  {} ", column_char(col)));
    }
    output.push('\n');

    for row in 0..board.height() {
        output.push_str(&format!("{} ", row + 1));

        for col in 0..board.width() {
            let symbol = match board.cell_at(row, col) {
                Some(cell) if !cell.in_tray() => cell.letter().to_ascii_uppercase(),
                _ => '.',
            };
            let shade = board.cell_at(row, col).map(|c| c.shade());

            match shade {
                Some(Shade::Dark) => output.push_str(&format!(" [{}]", symbol)),
                _ => output.push_str(&format!("  {} ", symbol)),
            }
        }
        output.push('\n');
    }

    output
}

/// Render the tray: the word so far and its indicator
pub fn render_tray(board: &Board) -> String {
    let word: String = board
        .current_word()
        .chars()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let marker = match board.indicator() {
        Indicator::Neither => "",
        Indicator::Valid => "  [valid]",
        Indicator::Invalid => "  [invalid]",
    };

    if word.is_empty() {
        format!("Tray: (empty){}", marker)
    } else {
        format!("Tray: {}{}", word, marker)
    }
}

/// Convert a column index to its label
fn column_char(col: usize) -> char {
    (b'A' + col as u8) as char
}
