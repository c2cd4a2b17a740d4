use std::io::Write;

use window_counts::WindowCounts;

use crate::{
    alphabet::SymbolTable,
    error::{Error, Result},
};

mod window_counts;

/// The symbol frequencies of one window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSample<const ALPHABET_SIZE: usize> {
    /// The 1-based centre of the window, a half-integer for even window widths.
    pub center: f64,
    pub frequencies: [f64; ALPHABET_SIZE],
}

/// Per-symbol frequency series over all window positions.
///
/// `frequencies[i]` belongs to `symbols[i]` and is index-aligned with `positions`.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowFrequencies<const ALPHABET_SIZE: usize> {
    symbols: [u8; ALPHABET_SIZE],
    positions: Vec<f64>,
    frequencies: [Vec<f64>; ALPHABET_SIZE],
}

/// Slides a window over a sequence one position at a time, updating the symbol counts incrementally.
///
/// Each step removes the character leaving the window and adds the character entering it,
/// so the window is never rescanned.
pub struct SlidingWindow<'sequence, 'table, const ALPHABET_SIZE: usize> {
    sequence: &'sequence [u8],
    symbol_table: &'table SymbolTable<ALPHABET_SIZE>,
    window_width: usize,
    /// 0-based start of the next window to be emitted.
    next_start: usize,
    counts: WindowCounts<ALPHABET_SIZE>,
}

impl<'sequence, 'table, const ALPHABET_SIZE: usize>
    SlidingWindow<'sequence, 'table, ALPHABET_SIZE>
{
    pub fn new(
        sequence: &'sequence [u8],
        symbol_table: &'table SymbolTable<ALPHABET_SIZE>,
        window_width: usize,
    ) -> Result<Self> {
        if window_width == 0 {
            return Err(Error::InvalidWindowWidth);
        }

        let mut counts = WindowCounts::new();
        if let Some(first_window) = sequence.get(..window_width) {
            for &character in first_window {
                counts.add(symbol_table.classify(character));
            }
        }

        Ok(Self {
            sequence,
            symbol_table,
            window_width,
            next_start: 0,
            counts,
        })
    }

    /// The number of windows in total, zero if the sequence is shorter than the window.
    pub fn window_amount(&self) -> usize {
        (self.sequence.len() + 1).saturating_sub(self.window_width)
    }
}

impl<const ALPHABET_SIZE: usize> Iterator for SlidingWindow<'_, '_, ALPHABET_SIZE> {
    type Item = WindowSample<ALPHABET_SIZE>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next_start;
        if start >= self.window_amount() {
            return None;
        }

        if start > 0 {
            let leaving = self.sequence[start - 1];
            let entering = self.sequence[start - 1 + self.window_width];
            self.counts.remove(self.symbol_table.classify(leaving));
            self.counts.add(self.symbol_table.classify(entering));
        }
        debug_assert!(self.counts.valid_count() <= self.window_width);
        self.next_start += 1;

        Some(WindowSample {
            center: (start + 1) as f64 + (self.window_width - 1) as f64 / 2.0,
            frequencies: self.counts.frequencies(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.window_amount().saturating_sub(self.next_start);
        (remaining, Some(remaining))
    }
}

impl<const ALPHABET_SIZE: usize> ExactSizeIterator for SlidingWindow<'_, '_, ALPHABET_SIZE> {}

/// Computes the relative frequency of each symbol for every window of the given width.
///
/// Characters outside of the alphabet occupy window positions but are excluded from
/// both the symbol counts and the denominator.
/// If the sequence is shorter than the window, the result is empty.
pub fn track_window_frequencies<const ALPHABET_SIZE: usize>(
    symbol_table: &SymbolTable<ALPHABET_SIZE>,
    sequence: &[u8],
    window_width: usize,
) -> Result<WindowFrequencies<ALPHABET_SIZE>> {
    let sliding_window = SlidingWindow::new(sequence, symbol_table, window_width)?;
    let window_amount = sliding_window.window_amount();
    if window_amount == 0 {
        log::debug!(
            "Sequence of length {} is shorter than the window width {window_width}",
            sequence.len()
        );
    }

    let mut result = WindowFrequencies {
        symbols: *symbol_table.symbols(),
        positions: Vec::with_capacity(window_amount),
        frequencies: std::array::from_fn(|_| Vec::with_capacity(window_amount)),
    };
    for sample in sliding_window {
        result.positions.push(sample.center);
        for (series, frequency) in result.frequencies.iter_mut().zip(sample.frequencies) {
            series.push(frequency);
        }
    }

    Ok(result)
}

impl<const ALPHABET_SIZE: usize> WindowFrequencies<ALPHABET_SIZE> {
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The frequency series of `symbol`, or `None` if it is not part of the alphabet.
    pub fn frequencies_of(&self, symbol: u8) -> Option<&[f64]> {
        let index = self
            .symbols
            .iter()
            .position(|&candidate| candidate == symbol.to_ascii_uppercase())?;
        Some(&self.frequencies[index])
    }

    /// Iterates over the symbols in alphabet order together with their frequency series.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[f64])> {
        self.symbols
            .iter()
            .copied()
            .zip(self.frequencies.iter().map(Vec::as_slice))
    }

    /// Writes the series as a tab-separated table with one row per window position.
    pub fn write_tsv(&self, output: &mut impl Write) -> Result<()> {
        write!(output, "position")?;
        for symbol in self.symbols {
            write!(output, "\t{}", char::from(symbol))?;
        }
        writeln!(output)?;

        for (index, position) in self.positions.iter().enumerate() {
            write!(output, "{position}")?;
            for series in &self.frequencies {
                write!(output, "\t{:.6}", series[index])?;
            }
            writeln!(output)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::{seq::SliceRandom, Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;

    use crate::{alphabet::SymbolTable, error::Error};

    use super::{track_window_frequencies, SlidingWindow};

    fn dna() -> SymbolTable<4> {
        SymbolTable::new(*b"ACGT").unwrap()
    }

    /// Recounts every window from scratch.
    fn naive_frequencies(sequence: &[u8], window_width: usize) -> Vec<(f64, [f64; 4])> {
        let table = dna();
        sequence
            .windows(window_width)
            .enumerate()
            .map(|(start, window)| {
                let mut counts = [0usize; 4];
                for &character in window {
                    if let Some(index) = table.classify(character) {
                        counts[index] += 1;
                    }
                }
                let valid: usize = counts.iter().sum();
                let mut frequencies = [0.0; 4];
                if valid > 0 {
                    for (frequency, count) in frequencies.iter_mut().zip(counts) {
                        *frequency = count as f64 / valid as f64;
                    }
                }
                (
                    start as f64 + 1.0 + (window_width - 1) as f64 / 2.0,
                    frequencies,
                )
            })
            .collect()
    }

    #[test]
    fn homopolymer() {
        let result = track_window_frequencies(&dna(), b"AAAA", 2).unwrap();
        assert_eq!(result.positions(), [1.5, 2.5, 3.5]);
        assert_eq!(result.frequencies_of(b'A').unwrap(), [1.0, 1.0, 1.0]);
        for symbol in *b"CGT" {
            assert_eq!(result.frequencies_of(symbol).unwrap(), [0.0, 0.0, 0.0]);
        }
        assert_eq!(result.frequencies_of(b'N'), None);
    }

    #[test]
    fn odd_window_centers() {
        let result = track_window_frequencies(&dna(), b"ACGTA", 3).unwrap();
        assert_eq!(result.positions(), [2.0, 3.0, 4.0]);
        assert_eq!(
            result.frequencies_of(b'a').unwrap(),
            [1.0 / 3.0, 0.0, 1.0 / 3.0]
        );
    }

    #[test]
    fn non_alphabet_characters_are_excluded() {
        let result = track_window_frequencies(&dna(), b"ANNC", 2).unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(result.frequencies_of(b'A').unwrap(), [1.0, 0.0, 0.0]);
        assert_eq!(result.frequencies_of(b'C').unwrap(), [0.0, 0.0, 1.0]);

        let result = track_window_frequencies(&dna(), b"NNNN", 4).unwrap();
        assert_eq!(result.len(), 1);
        assert!(result.iter().all(|(_, series)| series == [0.0]));
    }

    #[test]
    fn lowercase_input() {
        let upper = track_window_frequencies(&dna(), b"ACGTTGCA", 3).unwrap();
        let lower = track_window_frequencies(&dna(), b"acgtTGca", 3).unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn degenerate_inputs() {
        let result = track_window_frequencies(&dna(), b"ACG", 4).unwrap();
        assert!(result.is_empty());
        assert!(result.iter().all(|(_, series)| series.is_empty()));

        assert!(track_window_frequencies(&dna(), b"", 1).unwrap().is_empty());
        assert_eq!(track_window_frequencies(&dna(), b"ACG", 3).unwrap().len(), 1);

        assert!(matches!(
            track_window_frequencies(&dna(), b"ACGT", 0),
            Err(Error::InvalidWindowWidth)
        ));
    }

    #[test]
    fn exact_size() {
        let table = dna();
        let mut sliding_window = SlidingWindow::new(b"ACGTACGT", &table, 3).unwrap();
        assert_eq!(sliding_window.len(), 6);
        sliding_window.next();
        assert_eq!(sliding_window.len(), 5);
        assert_eq!(sliding_window.count(), 5);
    }

    #[test]
    fn matches_naive_recount() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
        for _ in 0..200 {
            let length = rng.gen_range(0usize..300);
            let sequence: Vec<u8> = (0..length)
                .map(|_| *b"ACGTACGTACGTNn-acgt".choose(&mut rng).unwrap())
                .collect();
            let window_width = rng.gen_range(1usize..40);

            let result = track_window_frequencies(&dna(), &sequence, window_width).unwrap();
            let expected = naive_frequencies(&sequence, window_width);
            assert_eq!(result.len(), expected.len());
            assert_eq!(result.len(), (length + 1).saturating_sub(window_width));

            for (index, (center, frequencies)) in expected.iter().enumerate() {
                assert_eq!(result.positions()[index], *center);
                let mut sum = 0.0;
                for ((_, series), frequency) in result.iter().zip(frequencies) {
                    assert_eq!(series[index], *frequency);
                    sum += series[index];
                }
                if frequencies.iter().any(|&frequency| frequency > 0.0) {
                    assert!((sum - 1.0).abs() < 1e-9);
                } else {
                    assert_eq!(sum, 0.0);
                }
            }
        }
    }

    #[test]
    fn tsv_output() {
        let result = track_window_frequencies(&dna(), b"AACG", 2).unwrap();
        let mut output = Vec::new();
        result.write_tsv(&mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "position\tA\tC\tG\tT\n\
             1.5\t1.000000\t0.000000\t0.000000\t0.000000\n\
             2.5\t0.500000\t0.500000\t0.000000\t0.000000\n\
             3.5\t0.000000\t0.500000\t0.500000\t0.000000\n"
        );
    }
}
