//! Quick Letterpress Demo - plays one scripted round without a terminal UI
//! Deals a fixed board, spells a few words and prints every board event as JSON.

use anyhow::Result;
use letterpress_core::letters::random_letter;
use letterpress_core::{Board, CellId, Lexicon, WordList};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

const LETTERS: &str = "catxqzdogbireensplumfhtky";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let dictionary: Arc<dyn Lexicon> = Arc::new(WordList::from_words(["cat", "dog", "tree"]));
    let mut board = Board::from_letters(LETTERS, Some(dictionary))?;
    let events = board.subscribe();

    for word in [&[0usize, 1, 2][..], &[3, 4, 5][..], &[22, 11, 12, 13][..]] {
        for &id in word {
            board.submit(CellId(id))?;
        }
        println!(
            "{} -> {}",
            board.current_word(),
            if board.current_word_valid() { "valid" } else { "invalid" }
        );
        board.reset();
    }

    for event in events.try_iter() {
        println!("{}", serde_json::to_string(&event)?);
    }

    let mut rng = StdRng::seed_from_u64(2024);
    let sample: String = (0..25).map(|_| random_letter(&mut rng)).collect();
    println!("random letters: {}", sample);

    Ok(())
}
