use std::{
    fs::File,
    io::{stdout, BufWriter, Write},
};

use basecomp::{
    alphabet::SymbolTable, combination_counter::combination_percentages,
    composition::composition, error::Result, window_tracker::track_window_frequencies,
};
use choose_alphabet::{call, ChooseAlphabet};
use clap::Parser;
use cli::{
    Cli, CliCommands, CliLogLevel, CombinationsCommand, CompositionCommand, IntoCliAlphabet,
    WindowFrequenciesCommand,
};
use compact_genome::interface::alphabet::Alphabet;
use log::{error, info};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

mod choose_alphabet;
mod cli;

fn main() {
    let cli = Cli::parse();

    // Without a logger, errors can only go to stderr directly.
    if let Err(error) = init_logger(cli.log_level) {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }

    if let Err(error) = run(cli.command) {
        error!("{error}");
        std::process::exit(1);
    }
}

fn init_logger(log_level: CliLogLevel) -> Result<()> {
    TermLogger::init(
        log_level.into(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    Ok(())
}

fn run(command: CliCommands) -> Result<()> {
    match command {
        CliCommands::Combinations(combinations_command) => {
            call::<Combinations>(combinations_command.alphabet, combinations_command)
        }
        CliCommands::WindowFrequencies(window_frequencies_command) => call::<WindowFrequencies>(
            window_frequencies_command.alphabet,
            window_frequencies_command,
        ),
        CliCommands::Composition(composition_command) => print_composition(composition_command),
    }
}

struct Combinations;

impl ChooseAlphabet for Combinations {
    type Arguments = CombinationsCommand;

    type Return = ();

    fn call<const ALPHABET_SIZE: usize, AlphabetType: 'static + Alphabet + IntoCliAlphabet>(
        symbol_table: &SymbolTable<ALPHABET_SIZE>,
        combinations_command: Self::Arguments,
    ) -> Result<Self::Return> {
        let sequence = combinations_command.input.load()?;
        info!(
            "Counting combinations of lengths {:?} in a sequence of length {}",
            combinations_command.lengths,
            sequence.characters.len()
        );

        let mut output = stdout().lock();
        for (index, &length) in combinations_command.lengths.iter().enumerate() {
            let percentages = combination_percentages(symbol_table, &sequence.characters, length)?;

            if index > 0 {
                writeln!(output)?;
            }
            writeln!(output, "Length {length} combination percentages:")?;
            for percentage in &percentages {
                writeln!(output, "{percentage}")?;
            }
        }

        Ok(())
    }
}

struct WindowFrequencies;

impl ChooseAlphabet for WindowFrequencies {
    type Arguments = WindowFrequenciesCommand;

    type Return = ();

    fn call<const ALPHABET_SIZE: usize, AlphabetType: 'static + Alphabet + IntoCliAlphabet>(
        symbol_table: &SymbolTable<ALPHABET_SIZE>,
        window_frequencies_command: Self::Arguments,
    ) -> Result<Self::Return> {
        let sequence = window_frequencies_command.input.load()?;
        let window_width = window_frequencies_command.window_width;

        let frequencies = track_window_frequencies(symbol_table, &sequence.characters, window_width)?;
        if frequencies.is_empty() {
            info!(
                "Sequence {:?} of length {} is shorter than the window width {window_width}",
                sequence.id,
                sequence.characters.len()
            );
        } else {
            info!(
                "Computed {} windows of width {window_width} over sequence {:?}",
                frequencies.len(),
                sequence.id
            );
        }

        // Write frequency table.
        if let Some(output) = &window_frequencies_command.output {
            let mut output = BufWriter::new(File::create(output)?);
            frequencies.write_tsv(&mut output)?;
            output.flush()?;
        } else {
            let mut output = stdout().lock();
            frequencies.write_tsv(&mut output)?;
        }

        Ok(())
    }
}

fn print_composition(composition_command: CompositionCommand) -> Result<()> {
    let sequence = composition_command.input.load()?;
    info!(
        "Sequence {:?} has length {}",
        sequence.id,
        sequence.characters.len()
    );

    let mut output = stdout().lock();
    for share in composition(&sequence.characters) {
        writeln!(output, "{share}")?;
    }

    Ok(())
}
