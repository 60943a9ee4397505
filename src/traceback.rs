use std::fmt;

use crate::matrix::ScoreMatrix;
use crate::scoring::{AlignmentStats, Position, Score, ScoreParams};
use crate::{AlignerError, Result, GAP_SYMBOL};

/// One column of a pairwise alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracebackOperation {
    Match,
    Mismatch,
    /// Symbol from the second sequence against a gap in the first.
    Insertion,
    /// Symbol from the first sequence against a gap in the second.
    Deletion,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentResult {
    pub score: Score,
    pub aligned_seq1: String,
    pub aligned_seq2: String,
    pub operations: Vec<TracebackOperation>,
}

impl AlignmentResult {
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn stats(&self) -> AlignmentStats {
        self.operations
            .iter()
            .fold(AlignmentStats::default(), |mut acc, op| {
                match op {
                    TracebackOperation::Match => acc.matches += 1,
                    TracebackOperation::Mismatch => acc.mismatches += 1,
                    TracebackOperation::Insertion | TracebackOperation::Deletion => acc.gaps += 1,
                }
                acc
            })
    }

    /// Three-line view: first sequence, a marker row (`|` match, `.` mismatch,
    /// blank for gaps) and the second sequence.
    pub fn pretty(&self) -> String {
        let markers: String = self
            .operations
            .iter()
            .map(|op| match op {
                TracebackOperation::Match => '|',
                TracebackOperation::Mismatch => '.',
                _ => ' ',
            })
            .collect();
        format!("{}\n{}\n{}", self.aligned_seq1, markers, self.aligned_seq2)
    }
}

impl fmt::Display for AlignmentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.aligned_seq1, self.aligned_seq2, self.score)
    }
}

/// Reconstructs one optimal global alignment from a filled score matrix.
///
/// Starts at `(m, n)` and steps back to `(0, 0)`. When several predecessor
/// moves explain a cell, the first of diagonal, up, left is taken, so the
/// output is fully determined by the inputs.
///
/// Fails when `matrix` does not have `(seq1.len()+1, seq2.len()+1)` cells,
/// when `params` can overflow a table of that size, or when a cell cannot
/// be explained by `params`.
pub fn align(
    matrix: &ScoreMatrix,
    seq1: &[char],
    seq2: &[char],
    params: &ScoreParams,
) -> Result<AlignmentResult> {
    let expected = (seq1.len() + 1, seq2.len() + 1);
    if matrix.dimensions() != expected {
        return Err(AlignerError::DimensionMismatch {
            expected,
            found: matrix.dimensions(),
        });
    }
    params.check_fits(seq1.len(), seq2.len())?;

    let capacity = seq1.len() + seq2.len();
    let mut aligned_seq1: Vec<char> = Vec::with_capacity(capacity);
    let mut aligned_seq2: Vec<char> = Vec::with_capacity(capacity);
    let mut operations = Vec::with_capacity(capacity);

    let mut current = Position {
        i: seq1.len(),
        j: seq2.len(),
    };

    while !current.is_origin() {
        let Position { i, j } = current;
        let cell = matrix.get(i, j);

        if i > 0 && j > 0 {
            let (a, b) = (seq1[i - 1], seq2[j - 1]);
            if cell == matrix.get(i - 1, j - 1) + params.substitution(a, b) {
                aligned_seq1.push(a);
                aligned_seq2.push(b);
                operations.push(if a == b {
                    TracebackOperation::Match
                } else {
                    TracebackOperation::Mismatch
                });
                current.i -= 1;
                current.j -= 1;
                continue;
            }
        }

        if i > 0 && cell == matrix.get(i - 1, j) + params.gap {
            aligned_seq1.push(seq1[i - 1]);
            aligned_seq2.push(GAP_SYMBOL);
            operations.push(TracebackOperation::Deletion);
            current.i -= 1;
        } else if j > 0 && cell == matrix.get(i, j - 1) + params.gap {
            aligned_seq1.push(GAP_SYMBOL);
            aligned_seq2.push(seq2[j - 1]);
            operations.push(TracebackOperation::Insertion);
            current.j -= 1;
        } else {
            return Err(AlignerError::Traceback(format!(
                "cell ({}, {}) = {} has no predecessor under the scoring parameters",
                i, j, cell
            )));
        }
    }

    // Built from the end backwards
    aligned_seq1.reverse();
    aligned_seq2.reverse();
    operations.reverse();

    Ok(AlignmentResult {
        score: matrix.final_score(),
        aligned_seq1: aligned_seq1.into_iter().collect(),
        aligned_seq2: aligned_seq2.into_iter().collect(),
        operations,
    })
}
