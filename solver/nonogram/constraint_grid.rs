use super::common::{Axis, Color, ColorSet, Line};
use itertools::Itertools;
use std::fmt::{self, Display};
use Axis::*;

/// Colors each cell may still take, as seen from both of its lines.
#[derive(Clone, Debug)]
pub struct PossibilityGrid {
    nrows: usize,
    ncols: usize,
    cells: Vec<ColorSet>,
}

impl PossibilityGrid {
    fn new(nrows: usize, ncols: usize) -> Self {
        Self { nrows, ncols, cells: vec![ColorSet::default(); nrows * ncols] }
    }

    pub fn get(&self, coords: (usize, usize)) -> &ColorSet {
        let (row_idx, col_idx) = coords;
        &self.cells[row_idx * self.ncols + col_idx]
    }

    fn get_mut(&mut self, coords: (usize, usize)) -> &mut ColorSet {
        let (row_idx, col_idx) = coords;
        &mut self.cells[row_idx * self.ncols + col_idx]
    }

    /// The color of a cell once exactly one remains.
    pub fn known(&self, coords: (usize, usize)) -> Option<Color> {
        let cell = self.get(coords);
        match cell.len() {
            1 => cell.iter().next().copied(),
            _ => None,
        }
    }

    fn intersect(&mut self, other: &Self) {
        for (mine, theirs) in self.cells.iter_mut().zip(other.cells.iter()) {
            mine.retain(|color| theirs.contains(color));
        }
    }

    fn allows(&self, axis: Axis, line_idx: usize, line: &[Color]) -> bool {
        line.iter().enumerate().all(|(idx, color)| {
            let coords = match axis {
                Row => (line_idx, idx),
                Col => (idx, line_idx),
            };
            self.get(coords).contains(color)
        })
    }

    /// Each row as a string, with `?` for cells that are not settled.
    pub fn to_lines(&self) -> Vec<String> {
        (0..self.nrows)
            .map(|r| (0..self.ncols).map(|c| self.known((r, c)).map_or('?', |color| color.0)).collect())
            .collect()
    }
}

impl Display for PossibilityGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.to_lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Row and column candidate sets, pruned against each other.
pub struct ConstraintGrid {
    rows: Vec<Vec<Line>>,
    cols: Vec<Vec<Line>>,
    fit_limit: Option<usize>,
    possibilities: PossibilityGrid,
}

impl ConstraintGrid {
    pub fn new(rows: Vec<Vec<Line>>, cols: Vec<Vec<Line>>, fit_limit: Option<usize>) -> Self {
        let possibilities = PossibilityGrid::new(rows.len(), cols.len());
        Self { rows, cols, fit_limit, possibilities }
    }

    pub fn rows(&self) -> &[Vec<Line>] {
        &self.rows
    }

    pub fn cols(&self) -> &[Vec<Line>] {
        &self.cols
    }

    /// Cell possibilities computed by the latest pass.
    pub fn possibilities(&self) -> &PossibilityGrid {
        &self.possibilities
    }

    pub fn candidate_total(&self) -> usize {
        self.rows.iter().chain(self.cols.iter()).map(Vec::len).sum()
    }

    fn evidence(&self, axis: Axis) -> PossibilityGrid {
        let mut grid = PossibilityGrid::new(self.rows.len(), self.cols.len());
        let sets = match axis {
            Row => &self.rows,
            Col => &self.cols,
        };
        for (line_idx, candidates) in sets.iter().enumerate() {
            for line in candidates {
                for (idx, &color) in line.iter().enumerate() {
                    let coords = match axis {
                        Row => (line_idx, idx),
                        Col => (idx, line_idx),
                    };
                    grid.get_mut(coords).insert(color);
                }
            }
        }
        grid
    }

    fn fit(&mut self, axis: Axis) -> bool {
        let sets = match axis {
            Row => &mut self.rows,
            Col => &mut self.cols,
        };
        let possibilities = &self.possibilities;
        let mut changed = false;
        for (line_idx, candidates) in sets.iter_mut().enumerate() {
            if self.fit_limit.is_some_and(|limit| candidates.len() > limit) {
                continue;
            }
            let before = candidates.len();
            candidates.retain(|line| possibilities.allows(axis, line_idx, line));
            changed |= candidates.len() != before;
        }
        changed
    }

    /// One cross-referencing pass; returns whether any candidate was discarded.
    pub fn propagate(&mut self) -> bool {
        let mut possibilities = self.evidence(Row);
        possibilities.intersect(&self.evidence(Col));
        self.possibilities = possibilities;

        let rows_changed = self.fit(Row);
        let cols_changed = self.fit(Col);
        log::trace!(
            "pass: {} candidates left, {} cells settled",
            self.candidate_total(),
            (0..self.rows.len())
                .cartesian_product(0..self.cols.len())
                .filter(|&coords| self.possibilities.known(coords).is_some())
                .count()
        );
        rows_changed || cols_changed
    }

    /// Propagates to a fixpoint; returns the number of passes that changed something.
    pub fn saturate(&mut self) -> usize {
        let mut iterations = 0;
        while self.propagate() {
            iterations += 1;
        }
        iterations
    }
}
