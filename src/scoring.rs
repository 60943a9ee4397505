use crate::{AlignerError, Result};

/// Matrix cell and alignment score type.
pub type Score = i64;

// DNA scoring defaults
pub const DEFAULT_MATCH: Score = 1;
pub const DEFAULT_MISMATCH: Score = -1;
pub const DEFAULT_GAP: Score = -2;

/// Linear scoring policy: one score for identical symbols, one for
/// differing symbols and one for every gap column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreParams {
    pub match_score: Score,
    pub mismatch: Score,
    pub gap: Score,
}

impl Default for ScoreParams {
    fn default() -> Self {
        Self {
            match_score: DEFAULT_MATCH,
            mismatch: DEFAULT_MISMATCH,
            gap: DEFAULT_GAP,
        }
    }
}

impl ScoreParams {
    pub fn new(match_score: Score, mismatch: Score, gap: Score) -> Self {
        Self {
            match_score,
            mismatch,
            gap,
        }
    }

    /// Score for placing `a` and `b` in the same column.
    #[inline]
    pub fn substitution(&self, a: char, b: char) -> Score {
        if a == b {
            self.match_score
        } else {
            self.mismatch
        }
    }

    /// Largest magnitude any single column can contribute.
    pub fn max_magnitude(&self) -> u64 {
        self.match_score
            .unsigned_abs()
            .max(self.mismatch.unsigned_abs())
            .max(self.gap.unsigned_abs())
    }

    /// Checks that every cell of a `len1 x len2` table fits in a `Score`.
    ///
    /// A cell is the score of an alignment with at most `len1 + len2`
    /// columns, so `(len1 + len2) * max_magnitude()` bounds every value and
    /// every intermediate sum of the recurrence.
    pub fn check_fits(&self, len1: usize, len2: usize) -> Result<()> {
        let columns = (len1 as u64).checked_add(len2 as u64);
        let bound = columns.and_then(|c| c.checked_mul(self.max_magnitude()));
        match bound {
            Some(b) if b <= Score::MAX as u64 => Ok(()),
            _ => Err(AlignerError::InvalidConfig(format!(
                "scores (match {}, mismatch {}, gap {}) overflow a {}x{} alignment",
                self.match_score, self.mismatch, self.gap, len1, len2
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub i: usize,
    pub j: usize,
}

impl Position {
    pub fn is_origin(&self) -> bool {
        self.i == 0 && self.j == 0
    }
}

/// Column counts of a finished alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlignmentStats {
    pub matches: usize,
    pub mismatches: usize,
    pub gaps: usize,
}

impl AlignmentStats {
    pub fn columns(&self) -> usize {
        self.matches + self.mismatches + self.gaps
    }

    /// Fraction of columns that are identical symbols; 0.0 for an empty alignment.
    pub fn identity(&self) -> f64 {
        match self.columns() {
            0 => 0.0,
            n => self.matches as f64 / n as f64,
        }
    }

    /// Score implied by the counts under `params`.
    pub fn implied_score(&self, params: &ScoreParams) -> Score {
        self.matches as Score * params.match_score
            + self.mismatches as Score * params.mismatch
            + self.gaps as Score * params.gap
    }
}
