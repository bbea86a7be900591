//! Line-oriented observation records
//!
//! Each non-blank line holds whitespace-separated columns; the last two are
//! the pair. Leading columns such as a timestamp are ignored:
//!
//! ```text
//! Thu Dec 11 17:53:01 PST 2008    a@facebook.com    b@facebook.com
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: expected at least two fields, found {found}")]
    MissingField { line: usize, found: usize },

    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse one record into a `(source, target)` pair.
///
/// Blank lines yield `Ok(None)`. `line_no` is only used for error reporting.
pub fn parse_record(line: &str, line_no: usize) -> Result<Option<(String, String)>, ParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    match fields.as_slice() {
        [] => Ok(None),
        [.., src, dst] => Ok(Some((src.to_string(), dst.to_string()))),
        _ => Err(ParseError::MissingField {
            line: line_no,
            found: fields.len(),
        }),
    }
}

/// Read all pairs from a line-oriented source
pub fn read_pairs<R: BufRead>(
    reader: R,
    skip_malformed: bool,
) -> Result<Vec<(String, String)>, ParseError> {
    let mut pairs = Vec::new();
    let mut skipped = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;

        match parse_record(&line, idx + 1) {
            Ok(Some(pair)) => pairs.push(pair),
            Ok(None) => {}
            Err(err) if skip_malformed => {
                log::warn!("Skipping malformed record: {}", err);
                skipped += 1;
            }
            Err(err) => return Err(err),
        }
    }

    if skipped > 0 {
        log::warn!("Skipped {} malformed records", skipped);
    }
    log::info!("Read {} observation records", pairs.len());

    Ok(pairs)
}

/// Load all pairs from a file
pub fn load_pairs<P: AsRef<Path>>(
    path: P,
    skip_malformed: bool,
) -> Result<Vec<(String, String)>, ParseError> {
    let path = path.as_ref();
    log::info!("Reading records from {}", path.display());

    if !path.exists() {
        return Err(ParseError::NotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    read_pairs(BufReader::new(file), skip_malformed)
}
