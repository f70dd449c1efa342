use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info};
use rayon::prelude::*;

use crate::iterator::{SequenceIterator, candidate_count};
use crate::operator::Operator;
use crate::pipeline::Pipeline;
use crate::solver::constants::DEFAULT_CHUNK_SIZE;
use crate::solver::errors::SolverError;
use crate::solver::solution::{SearchReport, Solution};
use crate::utils::validate_operator_set;

/// Configuration for the search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Candidates per task in the parallel search.
    pub chunk_size: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Exhaustive search over every sequence of `max_moves` keys
#[derive(Debug, Clone)]
pub struct BruteForceSolver {
    pipeline: Pipeline,
    max_moves: usize,
    operators: Vec<Operator>,
    total: u64,
    config: SolverConfig,
}

impl BruteForceSolver {
    /// # Errors
    ///
    /// Returns an error if the operator set is empty or has duplicates, or
    /// if the number of candidates does not fit in a `u64`.
    pub fn new(
        start: i64,
        target: i64,
        max_moves: usize,
        operators: Vec<Operator>,
    ) -> Result<Self, SolverError> {
        Self::with_config(start, target, max_moves, operators, SolverConfig::default())
    }

    /// # Errors
    ///
    /// Same as [`BruteForceSolver::new`].
    pub fn with_config(
        start: i64,
        target: i64,
        max_moves: usize,
        operators: Vec<Operator>,
        config: SolverConfig,
    ) -> Result<Self, SolverError> {
        validate_operator_set(&operators)?;

        let total =
            candidate_count(operators.len(), max_moves).ok_or(SolverError::SearchSpaceTooLarge {
                operators: operators.len(),
                moves: max_moves,
            })?;

        debug!(
            "Solver for {} -> {} in {} moves, {} candidates, chunk size {}",
            start, target, max_moves, total, config.chunk_size
        );

        Ok(Self {
            pipeline: Pipeline::new(start, target),
            max_moves,
            operators,
            total,
            config,
        })
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    pub fn max_moves(&self) -> usize {
        self.max_moves
    }

    /// Size of the search space, `operators ^ max_moves`
    pub fn candidate_count(&self) -> u64 {
        self.total
    }

    /// Every candidate sequence, lazily, in search order
    pub fn candidates(&self) -> SequenceIterator<'_> {
        SequenceIterator::new(&self.operators, self.max_moves)
    }

    /// Find every winning sequence, in enumeration order.
    ///
    /// # Errors
    ///
    /// An operator that fails outright aborts the whole search with
    /// [`SolverError::OperatorError`].
    pub fn run(&self) -> Result<Vec<Solution>, SolverError> {
        Ok(self.report()?.solutions)
    }

    /// Like [`run`](Self::run), also reporting how many candidates were tried.
    ///
    /// # Errors
    ///
    /// Same as [`run`](Self::run).
    pub fn report(&self) -> Result<SearchReport, SolverError> {
        self.logged(|| self.search_range(0, self.total, None, false))
    }

    /// Sequential search that checks `cancel` before every candidate.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Cancelled`] once the flag is seen set, besides
    /// the errors of [`run`](Self::run).
    pub fn run_with_cancel(&self, cancel: &AtomicBool) -> Result<SearchReport, SolverError> {
        self.logged(|| self.search_range(0, self.total, Some(cancel), false))
    }

    /// Stop at the first winning sequence.
    ///
    /// # Errors
    ///
    /// Same as [`run`](Self::run), for the candidates visited before the
    /// first win.
    pub fn first_solution(&self) -> Result<Option<Solution>, SolverError> {
        let report = self.search_range(0, self.total, None, true)?;
        Ok(report.solutions.into_iter().next())
    }

    /// Split the candidates into chunks searched on the rayon pool.
    ///
    /// Solutions come back in the same order as [`run`](Self::run).
    ///
    /// # Errors
    ///
    /// Same as [`run`](Self::run).
    pub fn run_parallel(&self) -> Result<Vec<Solution>, SolverError> {
        Ok(self.logged(|| self.parallel_search(None))?.solutions)
    }

    /// Parallel search where every task checks `cancel` between candidates.
    ///
    /// # Errors
    ///
    /// Same as [`run_with_cancel`](Self::run_with_cancel).
    pub fn run_parallel_with_cancel(
        &self,
        cancel: &AtomicBool,
    ) -> Result<SearchReport, SolverError> {
        self.logged(|| self.parallel_search(Some(cancel)))
    }

    fn logged<F>(&self, search: F) -> Result<SearchReport, SolverError>
    where
        F: FnOnce() -> Result<SearchReport, SolverError>,
    {
        info!(
            "Searching {} sequences of {} moves from {} to {}",
            self.total,
            self.max_moves,
            self.pipeline.start(),
            self.pipeline.target()
        );

        let report = search()?;

        info!(
            "Visited {} sequences, found {} solutions",
            report.visited,
            report.solutions.len()
        );
        Ok(report)
    }

    fn parallel_search(&self, cancel: Option<&AtomicBool>) -> Result<SearchReport, SolverError> {
        let chunk_size = self.config.chunk_size.max(1);
        let chunks = usize::try_from(self.total.div_ceil(chunk_size)).map_err(|_| {
            SolverError::SearchSpaceTooLarge {
                operators: self.operators.len(),
                moves: self.max_moves,
            }
        })?;

        debug!("Splitting search into {} chunks", chunks);

        let reports = (0..chunks)
            .into_par_iter()
            .map(|chunk| {
                let start = (chunk as u64).saturating_mul(chunk_size);
                let end = start.saturating_add(chunk_size).min(self.total);
                self.search_range(start, end, cancel, false)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut merged = SearchReport::default();
        for report in reports {
            merged.merge(report);
        }
        Ok(merged)
    }

    /// Evaluate the candidates with ordinals in `start..end`
    fn search_range(
        &self,
        start: u64,
        end: u64,
        cancel: Option<&AtomicBool>,
        stop_at_first: bool,
    ) -> Result<SearchReport, SolverError> {
        let mut candidates = self.candidates();
        candidates.seek(start);

        let mut buffer = Vec::with_capacity(self.max_moves);
        let mut report = SearchReport::default();

        for index in start..end {
            if let Some(flag) = cancel
                && flag.load(Ordering::Relaxed)
            {
                info!("Search cancelled after {} sequences", report.visited);
                return Err(SolverError::Cancelled);
            }

            if !candidates.next_into(&mut buffer) {
                break;
            }
            report.visited += 1;

            if self.pipeline.evaluate(&buffer)? {
                debug!("Found sequence #{}: {:?}", index, buffer);
                report.solutions.push(Solution::new(index, buffer.clone()));
                if stop_at_first {
                    break;
                }
            }
        }

        Ok(report)
    }
}
