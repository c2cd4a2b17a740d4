/// Running symbol counts of the characters currently inside a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowCounts<const ALPHABET_SIZE: usize> {
    symbol_counts: [usize; ALPHABET_SIZE],
    valid_count: usize,
}

impl<const ALPHABET_SIZE: usize> WindowCounts<ALPHABET_SIZE> {
    pub fn new() -> Self {
        Self {
            symbol_counts: [0; ALPHABET_SIZE],
            valid_count: 0,
        }
    }

    /// Accounts for a character entering the window.
    /// `None` stands for a character outside of the alphabet, which is consumed without being counted.
    #[inline]
    pub fn add(&mut self, class: Option<usize>) {
        if let Some(index) = class {
            self.symbol_counts[index] += 1;
            self.valid_count += 1;
        }
    }

    /// Accounts for a character leaving the window.
    #[inline]
    pub fn remove(&mut self, class: Option<usize>) {
        if let Some(index) = class {
            debug_assert!(self.symbol_counts[index] > 0);
            debug_assert!(self.valid_count > 0);
            self.symbol_counts[index] -= 1;
            self.valid_count -= 1;
        }
    }

    pub fn valid_count(&self) -> usize {
        self.valid_count
    }

    /// The relative frequency of each symbol among the valid characters.
    /// All frequencies are zero if the window holds no valid character.
    pub fn frequencies(&self) -> [f64; ALPHABET_SIZE] {
        let mut frequencies = [0.0; ALPHABET_SIZE];
        if self.valid_count > 0 {
            for (frequency, count) in frequencies.iter_mut().zip(self.symbol_counts) {
                *frequency = count as f64 / self.valid_count as f64;
            }
        }
        frequencies
    }
}

impl<const ALPHABET_SIZE: usize> Default for WindowCounts<ALPHABET_SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::WindowCounts;

    #[test]
    fn add_and_remove() {
        let mut counts = WindowCounts::<4>::new();
        for class in [Some(0), Some(0), None, Some(3)] {
            counts.add(class);
        }
        assert_eq!(counts.valid_count(), 3);
        assert_eq!(counts.frequencies(), [2.0 / 3.0, 0.0, 0.0, 1.0 / 3.0]);

        counts.remove(Some(0));
        counts.remove(None);
        assert_eq!(counts.valid_count(), 2);
        assert_eq!(counts.frequencies(), [0.5, 0.0, 0.0, 0.5]);
    }

    #[test]
    fn no_valid_characters() {
        let mut counts = WindowCounts::<4>::new();
        counts.add(None);
        counts.add(None);
        assert_eq!(counts.valid_count(), 0);
        assert_eq!(counts.frequencies(), [0.0; 4]);
    }
}
