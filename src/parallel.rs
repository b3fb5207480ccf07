use std::thread;

use crossbeam_channel::unbounded;
use log::debug;

use crate::{Aligner, AlignerConfig, AlignerError, Grid, ScoreParams, Sequence};

/// Channel-fed worker pool scoring one template against many queries.
///
/// Each worker owns a private [`Grid`] and [`Aligner`]; queries are pulled
/// from a shared queue and results carry their input index, so the output
/// vector comes back in input order regardless of scheduling. The failure
/// policy matches [`BatchScorer::score_all`]: the first failing query
/// fails the whole batch.
///
/// [`BatchScorer::score_all`]: crate::BatchScorer::score_all
pub struct ParallelScorer {
    template: Sequence,
    params: ScoreParams,
    config: AlignerConfig,
    workers: usize,
}

struct WorkItem<'a> {
    index: usize,
    query: &'a Sequence,
}

struct WorkResult {
    index: usize,
    result: Result<i32, AlignerError>,
}

impl ParallelScorer {
    pub fn new(template: Sequence, params: ScoreParams, config: AlignerConfig) -> Self {
        let workers = thread::available_parallelism().map_or(1, |n| n.get());
        Self {
            template,
            params,
            config,
            workers,
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn template(&self) -> &Sequence {
        &self.template
    }

    /// Scores every query in input order across the worker pool.
    pub fn score_all(&self, queries: &[Sequence]) -> Result<Vec<i32>, AlignerError> {
        if queries.is_empty() {
            return Ok(Vec::new());
        }

        let workers = self.workers.min(queries.len());

        // Per-worker grids are allocated up front so an allocation failure
        // surfaces before any thread starts.
        let mut grids = Vec::with_capacity(workers);
        for _ in 0..workers {
            grids.push(Grid::with_config(&self.config)?);
        }

        let (work_tx, work_rx) = unbounded::<WorkItem>();
        let (result_tx, result_rx) = unbounded::<WorkResult>();

        for (index, query) in queries.iter().enumerate() {
            work_tx
                .send(WorkItem { index, query })
                .map_err(|e| AlignerError::WorkerPool(e.to_string()))?;
        }
        // Workers exit once the queue drains.
        drop(work_tx);

        let mut scores = vec![0i32; queries.len()];
        let template = &self.template;
        let params = self.params;

        let outcome: Result<(), AlignerError> = thread::scope(|scope| {
            for grid in grids {
                let work_rx = work_rx.clone();
                let result_tx = result_tx.clone();
                scope.spawn(move || {
                    let aligner = Aligner::new(params);
                    let mut grid = grid;
                    while let Ok(work) = work_rx.recv() {
                        let result = aligner.align(&mut grid, template, work.query);
                        if result_tx
                            .send(WorkResult {
                                index: work.index,
                                result,
                            })
                            .is_err()
                        {
                            break;
                        }
                    }
                });
            }
            drop(result_tx);

            // Results arrive in scheduling order, so the earliest failure
            // by input index is tracked explicitly to match the sequential
            // batch policy.
            let mut first_failure: Option<(usize, AlignerError)> = None;
            for _ in 0..queries.len() {
                let WorkResult { index, result } = result_rx
                    .recv()
                    .map_err(|e| AlignerError::WorkerPool(e.to_string()))?;
                match result {
                    Ok(score) => scores[index] = score,
                    Err(source) => {
                        if first_failure.as_ref().map_or(true, |(i, _)| index < *i) {
                            first_failure = Some((index, source));
                        }
                    }
                }
            }
            match first_failure {
                Some((index, source)) => Err(AlignerError::QueryFailed {
                    index,
                    source: Box::new(source),
                }),
                None => Ok(()),
            }
        });
        outcome?;

        debug!(
            "scored {} queries across {} workers",
            queries.len(),
            workers
        );
        Ok(scores)
    }
}
