//! Input handling module

pub mod records;

pub use records::{load_pairs, parse_record, read_pairs, ParseError};
