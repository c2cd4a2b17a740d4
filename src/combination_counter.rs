use std::fmt::Display;

use crate::{
    alphabet::SymbolTable,
    error::{Error, Result},
};

/// The overlapping occurrence statistics of one combination within a sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinationPercentage {
    pub combination: String,
    pub count: usize,
    pub possible: usize,
    pub percentage: f64,
}

/// Enumerates all `ALPHABET_SIZE^length` combinations of the table's symbols.
///
/// The order is lexicographic with respect to the order of the symbols in the table,
/// i.e. the last position varies fastest.
pub fn generate_combinations<const ALPHABET_SIZE: usize>(
    symbol_table: &SymbolTable<ALPHABET_SIZE>,
    length: usize,
) -> Result<Vec<String>> {
    if length == 0 {
        return Err(Error::InvalidCombinationLength);
    }
    let too_many_combinations = || Error::TooManyCombinations {
        length,
        alphabet_size: ALPHABET_SIZE,
    };
    // Both the list and the total length of its strings have to be addressable.
    let combination_amount = u32::try_from(length)
        .ok()
        .and_then(|exponent| ALPHABET_SIZE.checked_pow(exponent))
        .filter(|combination_amount| combination_amount.checked_mul(length).is_some())
        .ok_or_else(too_many_combinations)?;

    let mut result: Vec<String> = Vec::new();
    result
        .try_reserve_exact(combination_amount)
        .map_err(|_| too_many_combinations())?;

    let mut indices = vec![0; length];
    loop {
        result.push(
            indices
                .iter()
                .map(|&index| char::from(symbol_table.symbol(index)))
                .collect(),
        );

        // Advance like an odometer, last position first.
        let Some(position) = indices.iter().rposition(|&index| index + 1 < ALPHABET_SIZE) else {
            break;
        };
        indices[position] += 1;
        indices[position + 1..].fill(0);
    }

    debug_assert_eq!(result.len(), combination_amount);
    Ok(result)
}

/// Counts the positions in `sequence` where `combination` matches, allowing matches to overlap.
///
/// Matching ignores ASCII case.
pub fn count_overlapping(sequence: &[u8], combination: &[u8]) -> usize {
    if combination.is_empty() || combination.len() > sequence.len() {
        return 0;
    }

    sequence
        .windows(combination.len())
        .filter(|window| window.eq_ignore_ascii_case(combination))
        .count()
}

/// Computes the overlapping occurrence percentage of `combination` within `sequence`.
///
/// The denominator is the number of positions the combination could occupy.
/// If the sequence is shorter than the combination, the percentage is zero.
pub fn combination_percentage(sequence: &[u8], combination: &[u8]) -> Result<f64> {
    Ok(count_combination(sequence, combination)?.percentage)
}

fn count_combination(sequence: &[u8], combination: &[u8]) -> Result<CombinationPercentage> {
    if combination.is_empty() {
        return Err(Error::InvalidCombinationLength);
    }

    let count = count_overlapping(sequence, combination);
    let possible = (sequence.len() + 1).saturating_sub(combination.len());
    let percentage = if possible > 0 {
        count as f64 / possible as f64 * 100.0
    } else {
        0.0
    };

    Ok(CombinationPercentage {
        combination: combination.iter().map(|&c| char::from(c)).collect(),
        count,
        possible,
        percentage,
    })
}

/// Generates all combinations of the given length and computes the percentage of each within `sequence`.
pub fn combination_percentages<const ALPHABET_SIZE: usize>(
    symbol_table: &SymbolTable<ALPHABET_SIZE>,
    sequence: &[u8],
    length: usize,
) -> Result<Vec<CombinationPercentage>> {
    let combinations = generate_combinations(symbol_table, length)?;
    if sequence.len() < length {
        log::debug!(
            "Sequence of length {} is shorter than the combination length {length}",
            sequence.len()
        );
    }

    combinations
        .iter()
        .map(|combination| count_combination(sequence, combination.as_bytes()))
        .collect()
}

impl Display for CombinationPercentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {:.2}%", self.combination, self.percentage)
    }
}
