//! Semi-global batch alignment scorer for barcode-style templates.
//!
//! One fixed template sequence is scored against many query sequences with
//! a dynamic-programming recurrence using asymmetric gap costs and a
//! position-dependent "branch" override of the deletion cost. Only the
//! terminal score is produced; there is no traceback.

use thiserror::Error;

mod batch;
mod config;
mod display;
mod grid;
mod parallel;
mod scoring;

pub use batch::BatchScorer;
pub use config::{AlignerConfig, DEFAULT_MAX_SEQUENCE_LEN};
pub use display::{print_grid, render_grid};
pub use grid::Grid;
pub use parallel::ParallelScorer;
pub use scoring::{
    ScoreParams, DNA_BRANCH_PENALTY, DNA_DELETION_PENALTY, DNA_INSERTION_PENALTY,
    DNA_MATCH_REWARD, DNA_MISMATCH_PENALTY,
};

#[derive(Debug, Error)]
pub enum AlignerError {
    #[error("failed to allocate a {rows}x{cols} score grid")]
    AllocationError { rows: usize, cols: usize },
    #[error("sequence of length {length} exceeds the configured bound of {max}")]
    SequenceTooLong { length: usize, max: usize },
    #[error("query of length {query_len} is longer than the template of length {template_len}")]
    TemplateShorterThanQuery { template_len: usize, query_len: usize },
    #[error("scoring query {index} failed")]
    QueryFailed {
        index: usize,
        #[source]
        source: Box<AlignerError>,
    },
    #[error("worker pool failure: {0}")]
    WorkerPool(String),
}

/// An immutable byte sequence with a known length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    data: Vec<u8>,
}

impl Sequence {
    pub fn new(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl From<&str> for Sequence {
    fn from(s: &str) -> Self {
        Self::new(s.as_bytes())
    }
}

/// Fills a caller-owned [`Grid`] and reports the best terminal score for
/// one (template, query) pair.
///
/// The objective is semi-global: the reported score is the maximum over
/// the final grid column, i.e. the best alignment that consumes the whole
/// query and ends anywhere along the template. This is not a local
/// (maximum-anywhere) score, and it can be negative for non-empty inputs.
#[derive(Debug)]
pub struct Aligner {
    params: ScoreParams,
}

impl Aligner {
    pub fn new(params: ScoreParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ScoreParams {
        &self.params
    }

    /// Resets `grid` and fills it for `template` vs `query`, returning the
    /// best score in the final column. Empty template or query scores 0.
    ///
    /// Fails with [`AlignerError::SequenceTooLong`] if either sequence does
    /// not fit the grid, and with [`AlignerError::TemplateShorterThanQuery`]
    /// if the query is longer than a non-empty template (the repeat check
    /// below indexes the template by query column, so longer queries would
    /// read past its end; an empty template fills nothing and scores 0).
    pub fn align(
        &self,
        grid: &mut Grid,
        template: &Sequence,
        query: &Sequence,
    ) -> Result<i32, AlignerError> {
        let tlen = template.len();
        let qlen = query.len();

        if tlen >= grid.rows() {
            return Err(AlignerError::SequenceTooLong {
                length: tlen,
                max: grid.rows().saturating_sub(1),
            });
        }
        if qlen >= grid.cols() {
            return Err(AlignerError::SequenceTooLong {
                length: qlen,
                max: grid.cols().saturating_sub(1),
            });
        }
        // An empty template is well defined whatever the query length: no
        // row is ever filled and the score is 0. Only a non-empty template
        // constrains the query, since the repeat check then reads t[j].
        if tlen > 0 && qlen > tlen {
            return Err(AlignerError::TemplateShorterThanQuery {
                template_len: tlen,
                query_len: qlen,
            });
        }

        grid.reset();

        let t = template.as_bytes();
        let q = query.as_bytes();
        let p = &self.params;

        for i in 1..=tlen {
            for j in 1..=qlen {
                let insertion = grid.get(i, j - 1) + p.insertion_penalty;

                // The repeat check indexes the TEMPLATE at the query column
                // j, not the query. This mirrors the original scorer, where
                // the intended comparison was probably q[j - 1]; the given
                // behaviour is kept unchanged so a deliberate correction
                // stays traceable. At j == tlen the original read the C
                // string terminator, which matches no base, hence the
                // bounds guard.
                let is_repeat = j < tlen && t[j] == t[i - 1];
                let gap = if is_repeat {
                    p.branch_penalty
                } else {
                    p.deletion_penalty
                };
                let deletion = grid.get(i - 1, j) + gap;

                let diag = if t[i - 1] == q[j - 1] {
                    p.match_reward
                } else {
                    p.mismatch_penalty
                };
                let matched = grid.get(i - 1, j - 1) + diag;

                grid.set(i, j, insertion.max(deletion).max(matched));
            }
        }

        // Best score along the last column. Column 0 is all zeros, so an
        // empty query reports 0; an empty template skips the scan entirely.
        Ok((1..=tlen).map(|i| grid.get(i, qlen)).max().unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grid() -> Grid {
        Grid::with_config(&AlignerConfig::default()).unwrap()
    }

    /// Row-of-rows evaluation of the same recurrence, used as an oracle
    /// against the flat-buffer fill.
    fn reference_score(t: &[u8], q: &[u8], p: &ScoreParams) -> i32 {
        let mut m = vec![vec![0i32; q.len() + 1]; t.len() + 1];
        for i in 1..=t.len() {
            for j in 1..=q.len() {
                let ins = m[i][j - 1] + p.insertion_penalty;
                let gap = if j < t.len() && t[j] == t[i - 1] {
                    p.branch_penalty
                } else {
                    p.deletion_penalty
                };
                let del = m[i - 1][j] + gap;
                let mat = m[i - 1][j - 1]
                    + if t[i - 1] == q[j - 1] {
                        p.match_reward
                    } else {
                        p.mismatch_penalty
                    };
                m[i][j] = ins.max(del).max(mat);
            }
        }
        (1..=t.len()).map(|i| m[i][q.len()]).max().unwrap_or(0)
    }

    #[test]
    fn identical_pair_scores_all_matches() {
        let aligner = Aligner::new(ScoreParams::default());
        let score = aligner
            .align(&mut grid(), &"AC".into(), &"AC".into())
            .unwrap();
        assert_eq!(score, 8);
    }

    #[test]
    fn single_mismatch_prefers_gap_over_substitution() {
        let aligner = Aligner::new(ScoreParams::default());
        let score = aligner
            .align(&mut grid(), &"A".into(), &"G".into())
            .unwrap();
        // One cell: insertion (-7) beats the mismatch (-13); no zero floor.
        assert_eq!(score, -7);
    }

    #[test]
    fn empty_template_scores_zero() {
        let aligner = Aligner::new(ScoreParams::default());
        let score = aligner
            .align(&mut grid(), &"".into(), &"".into())
            .unwrap();
        assert_eq!(score, 0);
    }

    #[test]
    fn empty_template_with_nonempty_query_scores_zero() {
        let aligner = Aligner::new(ScoreParams::default());
        let score = aligner
            .align(&mut grid(), &"".into(), &"ACGT".into())
            .unwrap();
        assert_eq!(score, 0);
    }

    #[test]
    fn empty_query_scores_zero() {
        let aligner = Aligner::new(ScoreParams::default());
        let score = aligner
            .align(&mut grid(), &"ACGT".into(), &"".into())
            .unwrap();
        assert_eq!(score, 0);
    }

    #[test]
    fn branch_penalty_overrides_deletion_on_template_repeat() {
        let aligner = Aligner::new(ScoreParams::default());
        let mut g = grid();

        // t[1] == t[0]: the deletion into (1,1) takes the branch cost (-4),
        // beating both the insertion (-7) and the mismatch (-13).
        aligner.align(&mut g, &"AAG".into(), &"G".into()).unwrap();
        assert_eq!(g.get(1, 1), -4);

        // No repeat at the same cell: the ordinary deletion cost applies.
        aligner.align(&mut g, &"CAG".into(), &"G".into()).unwrap();
        assert_eq!(g.get(1, 1), -7);
    }

    #[test]
    fn query_longer_than_template_is_rejected() {
        let aligner = Aligner::new(ScoreParams::default());
        let err = aligner
            .align(&mut grid(), &"AC".into(), &"ACGT".into())
            .unwrap_err();
        assert!(matches!(
            err,
            AlignerError::TemplateShorterThanQuery {
                template_len: 2,
                query_len: 4,
            }
        ));
    }

    #[test]
    fn template_over_grid_bound_is_rejected() {
        let aligner = Aligner::new(ScoreParams::default());
        let template = Sequence::new(&[b'A'; 200]);
        let err = aligner
            .align(&mut grid(), &template, &"A".into())
            .unwrap_err();
        assert!(matches!(
            err,
            AlignerError::SequenceTooLong {
                length: 200,
                max: 127,
            }
        ));
    }

    #[test]
    fn query_over_grid_bound_is_rejected() {
        let aligner = Aligner::new(ScoreParams::default());
        let mut g = Grid::new(300, 64).unwrap();
        let template = Sequence::new(&[b'A'; 250]);
        let query = Sequence::new(&[b'C'; 100]);
        let err = aligner.align(&mut g, &template, &query).unwrap_err();
        assert!(matches!(
            err,
            AlignerError::SequenceTooLong {
                length: 100,
                max: 63,
            }
        ));
    }

    #[test]
    fn grid_reuse_does_not_leak_between_runs() {
        let aligner = Aligner::new(ScoreParams::default());
        let mut shared = grid();
        let template: Sequence = "ACGTACGT".into();

        aligner
            .align(&mut shared, &template, &"ACGTACGT".into())
            .unwrap();
        let reused = aligner.align(&mut shared, &template, &"GT".into()).unwrap();

        let fresh = aligner.align(&mut grid(), &template, &"GT".into()).unwrap();
        assert_eq!(reused, fresh);
    }

    proptest! {
        #[test]
        fn fill_matches_reference_recurrence(
            t in "[ACGT]{0,50}",
            q in "[ACGT]{0,50}",
        ) {
            // The repeat check constrains queries to template length.
            let q = &q[..q.len().min(t.len())];
            let params = ScoreParams::default();
            let aligner = Aligner::new(params);
            let score = aligner
                .align(&mut grid(), &t.as_str().into(), &q.into())
                .unwrap();
            prop_assert_eq!(score, reference_score(t.as_bytes(), q.as_bytes(), &params));
        }
    }
}
