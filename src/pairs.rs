use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::{AlignerError, Result, Sequence};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencePair {
    /// 1-based line number in the source file.
    pub row: usize,
    pub seq1: Sequence,
    pub seq2: Sequence,
}

impl SequencePair {
    pub fn new(row: usize, seq1: Sequence, seq2: Sequence) -> Self {
        Self { row, seq1, seq2 }
    }
}

/// Reads every sequence pair from a headerless CSV file.
pub fn read_pairs<P: AsRef<Path>>(path: P) -> Result<Vec<SequencePair>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let pairs = parse_pairs(file)?;
    debug!("read {} sequence pairs from {}", pairs.len(), path.display());
    Ok(pairs)
}

/// Parses `seq1,seq2` records. Fields past the second are ignored and
/// surrounding whitespace is trimmed; an empty field is an empty sequence.
/// Input must be UTF-8; each character is one symbol.
pub fn parse_pairs<R: Read>(reader: R) -> Result<Vec<SequencePair>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut pairs = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let row = record
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or(index + 1);
        match (record.get(0), record.get(1)) {
            (Some(seq1), Some(seq2)) => {
                pairs.push(SequencePair::new(row, Sequence::from(seq1), Sequence::from(seq2)))
            }
            _ => {
                return Err(AlignerError::MalformedRow {
                    row,
                    reason: format!("expected two sequences, found {} field(s)", record.len()),
                })
            }
        }
    }

    Ok(pairs)
}
