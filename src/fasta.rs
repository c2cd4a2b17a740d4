use std::{fs::File, path::Path};

use bio::io::fasta;
use log::info;

use crate::error::{Error, Result};

/// A single sequence selected from a FASTA file, uppercase-normalised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaSequence {
    pub id: String,
    pub characters: Vec<u8>,
}

/// Reads the record with the given id, or the first record if no id is given.
///
/// All characters of the record are kept, including ambiguity codes.
pub fn read_sequence(path: impl AsRef<Path>, record_id: Option<&str>) -> Result<FastaSequence> {
    let path = path.as_ref();
    let reader = fasta::Reader::new(File::open(path)?);

    for record in reader.records() {
        let record = record?;
        if record_id.map_or(true, |record_id| record.id() == record_id) {
            let sequence = FastaSequence {
                id: record.id().to_string(),
                characters: record.seq().to_ascii_uppercase(),
            };
            info!(
                "Loaded record {:?} of length {} from {path:?}",
                sequence.id,
                sequence.characters.len()
            );
            return Ok(sequence);
        }
    }

    Err(match record_id {
        Some(record_id) => Error::RecordNotFound {
            path: path.to_owned(),
            id: record_id.to_string(),
        },
        None => Error::EmptyFasta(path.to_owned()),
    })
}
