use crate::scoring::{Score, ScoreParams};

/// Dense `(m+1) x (n+1)` Needleman-Wunsch score table, stored row-major.
///
/// Cell `(i, j)` holds the best score for aligning the first `i` symbols of
/// the first sequence with the first `j` symbols of the second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreMatrix {
    data: Vec<Score>,
    rows: usize,
    cols: usize,
}

impl ScoreMatrix {
    /// Fills the whole table for `seq1` (rows) against `seq2` (columns).
    ///
    /// Total for any input, including empty sequences. Arithmetic saturates,
    /// so cells are exact only when [`ScoreParams::check_fits`] accepts the
    /// pair; [`crate::traceback::align`] refuses to walk a table that fails it.
    pub fn build(seq1: &[char], seq2: &[char], params: &ScoreParams) -> Self {
        let rows = seq1.len() + 1;
        let cols = seq2.len() + 1;
        let mut matrix = Self {
            data: vec![0; rows * cols],
            rows,
            cols,
        };

        for j in 1..cols {
            matrix.set(0, j, (j as Score).saturating_mul(params.gap));
        }
        for i in 1..rows {
            matrix.set(i, 0, (i as Score).saturating_mul(params.gap));
        }

        for i in 1..rows {
            let a = seq1[i - 1];
            for j in 1..cols {
                let diagonal = matrix
                    .get(i - 1, j - 1)
                    .saturating_add(params.substitution(a, seq2[j - 1]));
                let up = matrix.get(i - 1, j).saturating_add(params.gap);
                let left = matrix.get(i, j - 1).saturating_add(params.gap);
                matrix.set(i, j, diagonal.max(up).max(left));
            }
        }

        matrix
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, value: Score) {
        self.data[row * self.cols + col] = value;
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Score {
        self.data[row * self.cols + col]
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Score of the full global alignment, `M[m][n]`.
    pub fn final_score(&self) -> Score {
        self.get(self.rows - 1, self.cols - 1)
    }

    pub fn row(&self, row: usize) -> &[Score] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit() -> ScoreParams {
        ScoreParams::new(1, -1, -1)
    }

    fn build(seq1: &str, seq2: &str, params: &ScoreParams) -> ScoreMatrix {
        let seq1: Vec<char> = seq1.chars().collect();
        let seq2: Vec<char> = seq2.chars().collect();
        ScoreMatrix::build(&seq1, &seq2, params)
    }

    #[test]
    fn test_empty_inputs() {
        let m = build("", "", &unit());
        assert_eq!(m.dimensions(), (1, 1));
        assert_eq!(m.final_score(), 0);
    }

    #[test]
    fn test_borders_hold_cumulative_gaps() {
        let params = ScoreParams::new(2, -3, -5);
        let m = build("ACG", "TT", &params);
        assert_eq!(m.dimensions(), (4, 3));
        assert_eq!(m.row(0), &[0, -5, -10]);
        for i in 0..4 {
            assert_eq!(m.get(i, 0), -5 * i as Score);
        }
    }

    #[test]
    fn test_one_empty_side() {
        let m = build("", "AA", &unit());
        assert_eq!(m.dimensions(), (1, 3));
        assert_eq!(m.final_score(), -2);
    }

    #[test]
    fn test_recurrence_small_table() {
        // rows: -, A, G ; cols: -, A, C
        let m = build("AG", "AC", &unit());
        assert_eq!(m.row(0), &[0, -1, -2]);
        assert_eq!(m.row(1), &[-1, 1, 0]);
        assert_eq!(m.row(2), &[-2, 0, 0]);
    }

    #[test]
    fn test_symbols_are_characters() {
        let m = build("é", "è", &unit());
        assert_eq!(m.dimensions(), (2, 2));
        assert_eq!(m.final_score(), -1);
        assert_eq!(build("aé", "ae", &unit()).final_score(), 0);
    }

    #[test]
    fn test_extreme_policy_saturates_instead_of_panicking() {
        let params = ScoreParams::new(1, -1, Score::MIN / 2);
        let m = build("AAA", "", &params);
        assert_eq!(m.get(1, 0), Score::MIN / 2);
        assert_eq!(m.final_score(), Score::MIN);

        let m = build("AB", "BA", &ScoreParams::new(Score::MAX, Score::MIN, Score::MIN));
        assert_eq!(m.dimensions(), (3, 3));
    }

    #[test]
    fn test_known_scores() {
        assert_eq!(build("AGCTG", "AGCT", &unit()).final_score(), 3);
        assert_eq!(build("ACGT", "ACGT", &unit()).final_score(), 4);
        assert_eq!(build("A", "A", &unit()).final_score(), 1);
    }
}
