use common::{Axis, Color, Line};
use constraint_grid::ConstraintGrid;
use key::Key;
use search::SearchEngine;
use Axis::*;

pub use constraint_grid::PossibilityGrid;
pub use field::Field;
pub use puzzle::Puzzle;
pub use search::SearchOutcome;

mod common;
mod constraint_grid;
mod field;
mod key;
mod line;
mod puzzle;
mod search;
mod xpm;

#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    #[error("{axis} {index} needs at least {min_len} cells but has {len}")]
    KeyDoesNotFit { axis: Axis, index: usize, min_len: usize, len: usize },
}

#[derive(Clone, Copy, Debug)]
pub struct SolverConfig {
    /// Search stops once this many solutions are found.
    pub max_solutions: usize,
    /// Lines with more candidates than this are not filtered during propagation.
    pub fit_limit: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { max_solutions: 99999, fit_limit: None }
    }
}

#[derive(Clone, Debug)]
pub struct Report {
    /// Propagation passes that discarded at least one candidate.
    pub iterations: usize,
    /// Cell possibilities once propagation reached its fixpoint.
    pub preliminary: PossibilityGrid,
    pub solutions: usize,
    pub capped: bool,
}

pub struct Solver {
    background: Color,
    row_keys: Vec<Key>,
    col_keys: Vec<Key>,
    grid: ConstraintGrid,
    config: SolverConfig,
}

impl Solver {
    /// Derives the keys of every row and column of `puzzle` and expands them into candidates.
    pub fn new(puzzle: &Puzzle, config: SolverConfig) -> Result<Self, SolveError> {
        let background = puzzle.background();
        let row_keys: Vec<Key> = (0..puzzle.nrows()).map(|r| Key::from_line(puzzle.row(r), background)).collect();
        let col_keys: Vec<Key> = (0..puzzle.ncols()).map(|c| Key::from_line(&puzzle.col(c), background)).collect();
        let rows = expand_keys(&row_keys, puzzle.ncols(), Row)?;
        let cols = expand_keys(&col_keys, puzzle.nrows(), Col)?;
        let grid = ConstraintGrid::new(rows, cols, config.fit_limit);
        log::debug!("{} initial candidates", grid.candidate_total());
        Ok(Self { background, row_keys, col_keys, grid, config })
    }

    fn nrows(&self) -> usize {
        self.row_keys.len()
    }

    fn ncols(&self) -> usize {
        self.col_keys.len()
    }

    /// Prunes the candidates to a fixpoint; returns the number of passes that changed something.
    pub fn saturate(&mut self) -> usize {
        let iterations = self.grid.saturate();
        log::debug!(
            "{}x{}: {iterations} iterations, {} candidates left",
            self.nrows(),
            self.ncols(),
            self.grid.candidate_total()
        );
        iterations
    }

    pub fn possibilities(&self) -> &PossibilityGrid {
        self.grid.possibilities()
    }

    /// Searches the remaining candidates for complete grids.
    pub fn search<F: FnMut(&Field)>(&self, on_solution: F) -> SearchOutcome {
        let engine = SearchEngine::new(self.grid.rows(), self.grid.cols(), self.background, self.config.max_solutions);
        let outcome = engine.run(on_solution);
        log::debug!("search: {outcome:?}");
        outcome
    }

    pub fn solve<F: FnMut(&Field)>(mut self, on_solution: F) -> Report {
        let iterations = self.saturate();
        let SearchOutcome { solutions, capped } = self.search(on_solution);
        Report { iterations, preliminary: self.possibilities().clone(), solutions, capped }
    }
}

fn expand_keys(keys: &[Key], len: usize, axis: Axis) -> Result<Vec<Vec<Line>>, SolveError> {
    keys.iter()
        .enumerate()
        .map(|(idx, key)| {
            log::trace!("{axis} {idx}: key {key:?}");
            line::candidates(key, len, axis, idx)
        })
        .collect()
}
