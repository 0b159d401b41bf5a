// SPDX-License-Identifier: MIT OR Apache-2.0

use letterpress_core::{
    Board, BoardError, CellId, Indicator, Lexicon, Region, Shade, TrayState, WordList,
};
use std::io::Write;
use std::sync::Arc;

// c a t x q
// z d o g b
// i r e e n
// s p l u m
// f h t k y
const LETTERS: &str = "catxqzdogbireensplumfhtky";

fn words() -> Option<Arc<dyn Lexicon>> {
    Some(Arc::new(WordList::from_words(["cat", "dog", "tree", "lump"])))
}

fn submit_all(board: &mut Board, ids: &[usize]) {
    for &id in ids {
        board.submit(CellId(id)).unwrap();
    }
}

#[test]
fn layout_after_construction() {
    let board = Board::from_letters(LETTERS, words()).unwrap();

    assert_eq!(board.width(), 5);
    assert_eq!(board.height(), 5);
    for (index, cell) in board.cells().iter().enumerate() {
        assert_eq!(cell.row(), index / 5);
        assert_eq!(cell.column(), index % 5);
        assert_eq!(cell.placement().left_percent, (index % 5) as f32 * 20.0);
        assert_eq!(cell.placement().top_percent, (index / 5) as f32 * 20.0);
        assert!(!cell.in_tray());
    }
    assert_eq!(board.tray_cells().count(), 0);
}

#[test]
fn shades_form_a_checkerboard() {
    let board = Board::from_letters(LETTERS, words()).unwrap();
    for cell in board.cells() {
        let expected = if (cell.row() + cell.column()) % 2 == 0 {
            Shade::Light
        } else {
            Shade::Dark
        };
        assert_eq!(cell.shade(), expected, "cell {}", cell.id());
    }
}

#[test]
fn valid_word_sets_only_valid_indicator() {
    let mut board = Board::from_letters(LETTERS, words()).unwrap();
    submit_all(&mut board, &[0, 1, 2]);

    assert_eq!(board.current_word(), "cat");
    assert!(board.current_word_valid());
    assert_eq!(board.indicator(), Indicator::Valid);
}

#[test]
fn invalid_word_sets_only_invalid_indicator() {
    let mut board = Board::from_letters(LETTERS, words()).unwrap();
    // x, q, z
    submit_all(&mut board, &[3, 4, 5]);

    assert_eq!(board.current_word(), "xqz");
    assert!(!board.current_word_valid());
    assert_eq!(board.indicator(), Indicator::Invalid);
    assert_eq!(board.tray_state(), TrayState::NonEmptyInvalid);
}

#[test]
fn indicator_follows_every_submission() {
    let mut board = Board::from_letters(LETTERS, words()).unwrap();
    // d, o, g, then b
    submit_all(&mut board, &[6, 7]);
    assert_eq!(board.indicator(), Indicator::Invalid);
    board.submit(CellId(8)).unwrap();
    assert_eq!(board.indicator(), Indicator::Valid);
    board.submit(CellId(9)).unwrap();
    assert_eq!(board.current_word(), "dogb");
    assert_eq!(board.indicator(), Indicator::Invalid);
}

#[test]
fn reset_after_play_returns_everything() {
    let mut board = Board::from_letters(LETTERS, words()).unwrap();
    // t, r, e, e
    submit_all(&mut board, &[22, 11, 12, 13]);
    assert_eq!(board.current_word(), "tree");
    assert_eq!(board.tray_state(), TrayState::NonEmptyValid);

    board.reset();

    assert!(board.cells().iter().all(|c| c.region() == Region::Grid));
    assert_eq!(board.current_word(), "");
    assert_eq!(board.indicator(), Indicator::Neither);
    assert_eq!(board.tray_state(), TrayState::Empty);

    // the board keeps working after a reset
    submit_all(&mut board, &[0, 1, 2]);
    assert_eq!(board.indicator(), Indicator::Valid);
}

#[test]
fn reset_on_empty_tray() {
    let mut board = Board::from_letters(LETTERS, words()).unwrap();
    board.reset();
    assert_eq!(board.tray_state(), TrayState::Empty);
    assert_eq!(board.indicator(), Indicator::Neither);
}

#[test]
fn dictionary_unavailable_degrades_to_invalid() {
    let mut board = Board::from_letters(LETTERS, None).unwrap();
    assert!(!board.has_dictionary());
    assert_eq!(board.try_is_word("cat"), Err(BoardError::DictionaryUnavailable));

    submit_all(&mut board, &[0, 1, 2]);
    assert_eq!(board.current_word(), "cat");
    assert!(!board.current_word_valid());
    assert_eq!(board.indicator(), Indicator::Invalid);
}

#[test]
fn case_insensitive_lookup() {
    let board = Board::from_letters(LETTERS, words()).unwrap();
    for candidate in ["CAT", "Cat", "cat"] {
        assert!(board.is_word(candidate), "{}", candidate);
    }
}

#[test]
fn empty_word_is_not_valid() {
    let board = Board::from_letters(LETTERS, words()).unwrap();
    assert!(!board.is_word(""));
}

#[test]
fn uppercase_letters_are_normalised() {
    let board = Board::from_letters(&LETTERS.to_uppercase(), words()).unwrap();
    assert!(board.cells().iter().all(|c| c.letter().is_ascii_lowercase()));
}

#[test]
fn word_list_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# test words\nCat\ndog\n").unwrap();

    let list = WordList::load(file.path()).unwrap();
    assert_eq!(list.len(), 2);

    let mut board = Board::from_letters(LETTERS, Some(Arc::new(list))).unwrap();
    submit_all(&mut board, &[0, 1, 2]);
    assert!(board.current_word_valid());
}
