use std::path::PathBuf;

use basecomp::{
    error::{Error, Result},
    fasta::{read_sequence, FastaSequence},
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use compact_genome::implementation::alphabets::dna_alphabet::DnaAlphabet;
use log::LevelFilter;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// The minimum level of log messages written to stderr.
    #[arg(long, value_enum, default_value_t = CliLogLevel::Info)]
    pub log_level: CliLogLevel,

    #[command(subcommand)]
    pub command: CliCommands,
}

#[derive(Subcommand)]
pub enum CliCommands {
    /// Print the overlapping occurrence percentage of every combination of the given lengths.
    Combinations(CombinationsCommand),

    /// Compute the relative symbol frequencies of a sliding window.
    WindowFrequencies(WindowFrequenciesCommand),

    /// Print the percentage of each distinct character of the sequence.
    Composition(CompositionCommand),
}

#[derive(Args)]
pub struct CombinationsCommand {
    #[command(flatten)]
    pub input: InputArguments,

    /// The combination lengths to enumerate.
    #[arg(long, num_args = 1.., default_values_t = [2, 3])]
    pub lengths: Vec<usize>,

    #[arg(long, value_enum, default_value_t = CliAlphabet::Dna)]
    pub alphabet: CliAlphabet,
}

#[derive(Args)]
pub struct WindowFrequenciesCommand {
    #[command(flatten)]
    pub input: InputArguments,

    #[arg(long, default_value_t = 30)]
    pub window_width: usize,

    #[arg(long, value_enum, default_value_t = CliAlphabet::Dna)]
    pub alphabet: CliAlphabet,

    /// Write the tab-separated frequency table here instead of to stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct CompositionCommand {
    #[command(flatten)]
    pub input: InputArguments,
}

#[derive(Args)]
pub struct InputArguments {
    /// Read the sequence from this FASTA file.
    #[arg(long, conflicts_with = "sequence", required_unless_present = "sequence")]
    pub input_fasta: Option<PathBuf>,

    /// Use the record with this id instead of the first record of the FASTA file.
    #[arg(long, requires = "input_fasta", conflicts_with = "sequence")]
    pub record_id: Option<String>,

    /// Analyse this sequence directly.
    #[arg(long)]
    pub sequence: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliAlphabet {
    Dna,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliLogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LevelFilter {
    fn from(log_level: CliLogLevel) -> Self {
        match log_level {
            CliLogLevel::Off => LevelFilter::Off,
            CliLogLevel::Error => LevelFilter::Error,
            CliLogLevel::Warn => LevelFilter::Warn,
            CliLogLevel::Info => LevelFilter::Info,
            CliLogLevel::Debug => LevelFilter::Debug,
            CliLogLevel::Trace => LevelFilter::Trace,
        }
    }
}

pub trait IntoCliAlphabet {
    fn into_cli_alphabet() -> CliAlphabet;
}

impl IntoCliAlphabet for DnaAlphabet {
    fn into_cli_alphabet() -> CliAlphabet {
        CliAlphabet::Dna
    }
}

impl InputArguments {
    pub fn load(&self) -> Result<FastaSequence> {
        if let Some(input_fasta) = &self.input_fasta {
            read_sequence(input_fasta, self.record_id.as_deref())
        } else {
            let sequence = self.sequence.as_deref().unwrap_or_default();
            if let Some(character) = sequence.chars().find(|character| !character.is_ascii()) {
                return Err(Error::NonAsciiSequence(character));
            }

            let characters = sequence.as_bytes().to_ascii_uppercase();
            Ok(FastaSequence {
                id: "sequence".to_string(),
                characters,
            })
        }
    }
}
