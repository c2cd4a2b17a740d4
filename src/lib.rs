//! Base composition analysis of nucleotide sequences.
//!
//! [`combination_counter`] enumerates all combinations of a fixed length over an alphabet and
//! computes their overlapping occurrence percentages, and [`window_tracker`] computes the relative
//! symbol frequencies of a window sliding over a sequence.

pub mod alphabet;
pub mod combination_counter;
pub mod composition;
pub mod error;
pub mod fasta;
pub mod window_tracker;
