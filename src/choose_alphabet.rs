use basecomp::{alphabet::SymbolTable, error::Result};
use compact_genome::{
    implementation::alphabets::dna_alphabet::DnaAlphabet, interface::alphabet::Alphabet,
};

use crate::cli::{CliAlphabet, IntoCliAlphabet};

pub fn call<Function: ChooseAlphabet>(
    alphabet: CliAlphabet,
    arguments: Function::Arguments,
) -> Result<Function::Return> {
    match alphabet {
        CliAlphabet::Dna => with_alphabet::<{ DnaAlphabet::SIZE }, DnaAlphabet, Function>(arguments),
    }
}

fn with_alphabet<
    const ALPHABET_SIZE: usize,
    AlphabetType: 'static + Alphabet + IntoCliAlphabet,
    Function: ChooseAlphabet,
>(
    arguments: Function::Arguments,
) -> Result<Function::Return> {
    let symbol_table = SymbolTable::<ALPHABET_SIZE>::from_alphabet::<AlphabetType>()?;
    log::debug!(
        "Using alphabet {:?} with symbols {:?}",
        AlphabetType::into_cli_alphabet(),
        String::from_utf8_lossy(symbol_table.symbols())
    );

    Function::call::<ALPHABET_SIZE, AlphabetType>(&symbol_table, arguments)
}

pub trait ChooseAlphabet {
    type Arguments;
    type Return;

    fn call<const ALPHABET_SIZE: usize, AlphabetType: 'static + Alphabet + IntoCliAlphabet>(
        symbol_table: &SymbolTable<ALPHABET_SIZE>,
        arguments: Self::Arguments,
    ) -> Result<Self::Return>;
}
