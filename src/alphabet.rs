use compact_genome::{
    implementation::alphabets::dna_alphabet::DnaAlphabet,
    interface::alphabet::{Alphabet, AlphabetCharacter},
};

use crate::error::{Error, Result};

/// An ordered set of symbols together with a lookup table that classifies arbitrary
/// sequence characters as one of the symbols or as outside of the alphabet.
///
/// Characters are uppercase-normalised before classification, so the symbols themselves must be uppercase.
#[derive(Debug, Clone)]
pub struct SymbolTable<const ALPHABET_SIZE: usize> {
    symbols: [u8; ALPHABET_SIZE],
    classes: [Option<usize>; 256],
}

impl<const ALPHABET_SIZE: usize> SymbolTable<ALPHABET_SIZE> {
    pub fn new(symbols: [u8; ALPHABET_SIZE]) -> Result<Self> {
        if ALPHABET_SIZE == 0 {
            return Err(Error::EmptyAlphabet);
        }

        let mut classes = [None; 256];
        for (index, symbol) in symbols.iter().copied().enumerate() {
            if !symbol.is_ascii() || symbol.is_ascii_lowercase() {
                return Err(Error::UnnormalisedSymbol(symbol));
            }

            let class = &mut classes[usize::from(symbol)];
            if class.is_some() {
                return Err(Error::DuplicateSymbol(symbol));
            }
            *class = Some(index);
        }

        Ok(Self { symbols, classes })
    }

    /// Builds the table from the characters of a `compact_genome` alphabet, in index order.
    pub fn from_alphabet<AlphabetType: Alphabet>() -> Result<Self> {
        if AlphabetType::SIZE != ALPHABET_SIZE {
            return Err(Error::AlphabetSizeMismatch {
                actual: AlphabetType::SIZE,
                expected: ALPHABET_SIZE,
            });
        }

        let mut symbols = [0; ALPHABET_SIZE];
        for (index, symbol) in symbols.iter_mut().enumerate() {
            let character = AlphabetType::CharacterType::from_index(index)
                .map_err(|_| Error::AlphabetIndex(index))?;
            *symbol = character.into();
        }

        Self::new(symbols)
    }

    /// Returns the index of the symbol matching `character`, or `None` if it is not part of the alphabet.
    #[inline]
    pub fn classify(&self, character: u8) -> Option<usize> {
        self.classes[usize::from(character.to_ascii_uppercase())]
    }

    pub fn symbols(&self) -> &[u8; ALPHABET_SIZE] {
        &self.symbols
    }

    pub fn symbol(&self, index: usize) -> u8 {
        self.symbols[index]
    }
}

impl SymbolTable<{ DnaAlphabet::SIZE }> {
    /// The canonical DNA alphabet `ACGT`.
    pub fn dna() -> Result<Self> {
        Self::from_alphabet::<DnaAlphabet>()
    }
}
