//! Needleman-Wunsch global alignment of two symbol sequences.
//!
//! ```
//! use nw_aligner::{Aligner, AlignerParameters, ScoreParams, Sequence};
//!
//! let params = AlignerParameters::new().with_score_params(ScoreParams::new(1, -1, -1));
//! let aligner = Aligner::new(params);
//!
//! let result = aligner.align(&Sequence::from("AGCTG"), &Sequence::from("AGCT")).unwrap();
//! assert_eq!(result.score, 3);
//! assert_eq!(result.to_string(), "AGCTG AGCT- 3");
//! ```

use std::fmt;

use log::{debug, trace};
use thiserror::Error;

pub mod batch;
pub mod config;
pub mod matrix;
pub mod pairs;
pub mod scoring;
pub mod traceback;

pub use batch::BatchAligner;
pub use config::AlignerConfig;
pub use matrix::ScoreMatrix;
pub use pairs::SequencePair;
pub use scoring::{AlignmentStats, Position, Score, ScoreParams};
pub use traceback::{AlignmentResult, TracebackOperation};

/// Symbol written into an aligned sequence opposite a symbol of the other one.
pub const GAP_SYMBOL: char = '-';

#[derive(Debug, Error)]
pub enum AlignerError {
    #[error("matrix is {found:?} but the sequences need {expected:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    #[error("Traceback error: {0}")]
    Traceback(String),
    #[error("row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Worker error: {0}")]
    Worker(String),
}

pub type Result<T> = std::result::Result<T, AlignerError>;

/// Ordered symbols of one input. Symbols are Unicode scalar values, so a
/// multi-byte character scores and aligns as a single symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    symbols: Vec<char>,
}

impl Sequence {
    pub fn new(symbols: &[char]) -> Self {
        Self {
            symbols: symbols.to_vec(),
        }
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl From<&str> for Sequence {
    fn from(s: &str) -> Self {
        Self {
            symbols: s.chars().collect(),
        }
    }
}

impl From<String> for Sequence {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AlignerParameters {
    score_params: ScoreParams,
}

impl AlignerParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score_params(mut self, score_params: ScoreParams) -> Self {
        self.score_params = score_params;
        self
    }

    pub fn score_params(&self) -> &ScoreParams {
        &self.score_params
    }
}

/// Runs one pairwise alignment per call. Holds no per-pair state, so a
/// single instance can be reused across any number of pairs.
#[derive(Debug, Clone, Default)]
pub struct Aligner {
    params: AlignerParameters,
}

impl Aligner {
    pub fn new(params: AlignerParameters) -> Self {
        Self { params }
    }

    pub fn with_score_params(mut self, score_params: ScoreParams) -> Self {
        self.params = self.params.with_score_params(score_params);
        self
    }

    pub fn score_params(&self) -> &ScoreParams {
        self.params.score_params()
    }

    /// Builds the score matrix for the pair and traces one optimal
    /// alignment back through it. The matrix is dropped before returning.
    pub fn align(&self, seq1: &Sequence, seq2: &Sequence) -> Result<AlignmentResult> {
        self.align_symbols(seq1.symbols(), seq2.symbols())
    }

    /// Fails with [`AlignerError::InvalidConfig`] before allocating when the
    /// scores could overflow a table of this size.
    pub fn align_symbols(&self, seq1: &[char], seq2: &[char]) -> Result<AlignmentResult> {
        let score_params = self.params.score_params();
        score_params.check_fits(seq1.len(), seq2.len())?;
        let matrix = ScoreMatrix::build(seq1, seq2, score_params);
        debug!(
            "filled {}x{} score matrix",
            matrix.rows(),
            matrix.cols()
        );

        let result = traceback::align(&matrix, seq1, seq2, score_params)?;
        trace!("alignment score {} over {} columns", result.score, result.len());
        Ok(result)
    }
}
