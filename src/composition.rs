use std::{collections::BTreeMap, fmt::Display};

/// How often a character occurs within a whole sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterShare {
    pub character: u8,
    pub count: usize,
    pub percentage: f64,
}

/// Counts every distinct character of the sequence, including characters outside of any alphabet.
/// The shares are ordered by character and their percentages are relative to the sequence length.
pub fn composition(sequence: &[u8]) -> Vec<CharacterShare> {
    let mut counts = BTreeMap::<u8, usize>::new();
    for &character in sequence {
        *counts.entry(character.to_ascii_uppercase()).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(character, count)| CharacterShare {
            character,
            count,
            percentage: count as f64 * 100.0 / sequence.len() as f64,
        })
        .collect()
}

impl Display for CharacterShare {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {:.2}%", char::from(self.character), self.percentage)
    }
}
