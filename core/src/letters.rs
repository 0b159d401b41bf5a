// SPDX-License-Identifier: MIT OR Apache-2.0

//! Frequency-weighted random letters

use crate::BoardError;
use once_cell::sync::Lazy;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

/// Relative frequencies of letters in English text, in percent
pub const ENGLISH_FREQUENCIES: [(char, f64); 26] = [
    ('a', 8.167),
    ('b', 1.492),
    ('c', 2.782),
    ('d', 4.253),
    ('e', 12.702),
    ('f', 2.228),
    ('g', 2.015),
    ('h', 6.094),
    ('i', 6.966),
    ('j', 0.153),
    ('k', 0.772),
    ('l', 4.025),
    ('m', 2.406),
    ('n', 6.749),
    ('o', 7.507),
    ('p', 1.929),
    ('q', 0.095),
    ('r', 5.987),
    ('s', 6.327),
    ('t', 9.056),
    ('u', 2.758),
    ('v', 0.978),
    ('w', 2.360),
    ('x', 0.150),
    ('y', 1.974),
    ('z', 0.074),
];

/// Distribution over letters with a weight per letter.
///
/// Sampling draws `r` uniformly from `[0, total)` and returns the letter whose
/// cumulative weight interval contains `r`.
#[derive(Debug, Clone)]
pub struct LetterDistribution {
    letters: Vec<char>,
    index: WeightedIndex<f64>,
}

impl LetterDistribution {
    /// Build a distribution from `(letter, weight)` pairs
    pub fn new(table: &[(char, f64)]) -> Result<Self, BoardError> {
        if let Some(&(letter, _)) = table.iter().find(|(l, _)| !l.is_ascii_lowercase()) {
            return Err(BoardError::InvalidLetter(letter));
        }
        if let Some(&(letter, weight)) = table.iter().find(|(_, w)| !w.is_finite()) {
            return Err(BoardError::InvalidWeights(format!(
                "weight of {:?} is {}",
                letter, weight
            )));
        }
        let total: f64 = table.iter().map(|(_, w)| w).sum();
        if !total.is_finite() {
            return Err(BoardError::InvalidWeights("total weight overflows".to_string()));
        }

        let index = WeightedIndex::new(table.iter().map(|&(_, w)| w))
            .map_err(|e| BoardError::InvalidWeights(e.to_string()))?;

        Ok(Self {
            letters: table.iter().map(|&(l, _)| l).collect(),
            index,
        })
    }

    /// The English letter-frequency distribution, built on first use
    pub fn english() -> &'static Self {
        &ENGLISH
    }
}

static ENGLISH: Lazy<LetterDistribution> = Lazy::new(|| {
    LetterDistribution::new(&ENGLISH_FREQUENCIES)
        .unwrap_or_else(|e| unreachable!("English frequency table is valid: {}", e))
});

impl Distribution<char> for LetterDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        self.letters[self.index.sample(rng)]
    }
}

/// Draw one letter with English letter frequencies
pub fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    LetterDistribution::english().sample(rng)
}
