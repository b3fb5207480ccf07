use log::debug;

use crate::{Aligner, AlignerConfig, AlignerError, Grid, ScoreParams, Sequence};

/// Scores one fixed template against many queries, reusing a single owned
/// [`Grid`] across calls.
#[derive(Debug)]
pub struct BatchScorer {
    aligner: Aligner,
    grid: Grid,
    template: Sequence,
}

impl BatchScorer {
    /// Builds a scorer around `template`. The grid is allocated once, from
    /// `config`; a template that does not fit it is rejected up front.
    pub fn new(
        template: Sequence,
        params: ScoreParams,
        config: &AlignerConfig,
    ) -> Result<Self, AlignerError> {
        let grid = Grid::with_config(config)?;
        if template.len() >= grid.rows() {
            return Err(AlignerError::SequenceTooLong {
                length: template.len(),
                max: grid.rows() - 1,
            });
        }
        debug!(
            "constructed batch scorer: template length {}, grid {}x{}",
            template.len(),
            grid.rows(),
            grid.cols()
        );
        Ok(Self {
            aligner: Aligner::new(params),
            grid,
            template,
        })
    }

    pub fn template(&self) -> &Sequence {
        &self.template
    }

    /// The grid as left by the most recent [`score`](Self::score) call.
    /// Only meaningful for rendering right after a single-query run.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Scores a single query against the template.
    pub fn score(&mut self, query: &Sequence) -> Result<i32, AlignerError> {
        self.aligner.align(&mut self.grid, &self.template, query)
    }

    /// Scores every query in input order, returning one score per query.
    ///
    /// The batch fails atomically: the first failing query aborts the call
    /// with [`AlignerError::QueryFailed`] naming its position, and no
    /// partial output is returned.
    pub fn score_all(&mut self, queries: &[Sequence]) -> Result<Vec<i32>, AlignerError> {
        let mut scores = Vec::with_capacity(queries.len());
        for (index, query) in queries.iter().enumerate() {
            let score = self
                .aligner
                .align(&mut self.grid, &self.template, query)
                .map_err(|source| AlignerError::QueryFailed {
                    index,
                    source: Box::new(source),
                })?;
            scores.push(score);
        }
        debug!(
            "scored {} queries against template of length {}",
            scores.len(),
            self.template.len()
        );
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer(template: &str) -> BatchScorer {
        BatchScorer::new(
            template.into(),
            ScoreParams::default(),
            &AlignerConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn batch_preserves_input_order_and_length() {
        let mut batch = scorer("ACGTACGT");
        let queries: Vec<Sequence> = ["ACGTACGT", "TTTT", "ACGT", ""]
            .iter()
            .map(|&q| q.into())
            .collect();
        let scores = batch.score_all(&queries).unwrap();

        assert_eq!(scores.len(), queries.len());
        for (score, query) in scores.iter().zip(&queries) {
            assert_eq!(*score, batch.score(query).unwrap());
        }
    }

    #[test]
    fn empty_batch_yields_empty_output() {
        let mut batch = scorer("ACGT");
        assert!(batch.score_all(&[]).unwrap().is_empty());
    }

    #[test]
    fn failing_query_aborts_with_its_position() {
        let mut batch = scorer("ACGT");
        let queries: Vec<Sequence> = vec!["ACGT".into(), "ACGTACGT".into(), "AC".into()];
        let err = batch.score_all(&queries).unwrap_err();
        match err {
            AlignerError::QueryFailed { index, source } => {
                assert_eq!(index, 1);
                assert!(matches!(
                    *source,
                    AlignerError::TemplateShorterThanQuery { .. }
                ));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn oversized_template_is_rejected_at_construction() {
        let template = Sequence::new(&[b'A'; 200]);
        let err = BatchScorer::new(
            template,
            ScoreParams::default(),
            &AlignerConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, AlignerError::SequenceTooLong { .. }));
    }
}
