use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),

    #[error("logger initialisation error: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("the alphabet is empty")]
    EmptyAlphabet,

    #[error("the alphabet contains the symbol {:?} more than once", char::from(*.0))]
    DuplicateSymbol(u8),

    #[error("the alphabet symbol {:?} is not an uppercase ASCII character", char::from(*.0))]
    UnnormalisedSymbol(u8),

    #[error("the alphabet has {actual} characters, but {expected} were expected")]
    AlphabetSizeMismatch { actual: usize, expected: usize },

    #[error("the alphabet has no character with index {0}")]
    AlphabetIndex(usize),

    #[error("the combination length must be positive")]
    InvalidCombinationLength,

    #[error("there are too many combinations of length {length} over an alphabet of size {alphabet_size}")]
    TooManyCombinations { length: usize, alphabet_size: usize },

    #[error("the window width must be positive")]
    InvalidWindowWidth,

    #[error("the sequence contains the non-ASCII character {0:?}")]
    NonAsciiSequence(char),

    #[error("the FASTA file {0:?} contains no records")]
    EmptyFasta(std::path::PathBuf),

    #[error("the FASTA file {path:?} contains no record with id {id:?}")]
    RecordNotFound { path: std::path::PathBuf, id: String },
}
