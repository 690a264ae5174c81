use super::common::{Color, Line};
use super::field::Field;

#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub struct SearchOutcome {
    pub solutions: usize,
    /// The search stopped at the cap; more solutions may exist.
    pub capped: bool,
}

/// Row-by-row backtracking over the remaining row candidates.
///
/// After a row is placed, every column must still have a candidate starting with the cells
/// placed so far, otherwise the row is rejected on the spot. Frames live on an explicit stack,
/// so grid height does not bound recursion depth.
pub struct SearchEngine<'a> {
    rows: &'a [Vec<Line>],
    cols: &'a [Vec<Line>],
    background: Color,
    max_solutions: usize,
}

impl<'a> SearchEngine<'a> {
    pub fn new(rows: &'a [Vec<Line>], cols: &'a [Vec<Line>], background: Color, max_solutions: usize) -> Self {
        Self { rows, cols, background, max_solutions }
    }

    fn is_consistent(&self, field: &Field, row_idx: usize) -> bool {
        self.cols.iter().enumerate().all(|(col_idx, candidates)| {
            let placed = &field.col(col_idx)[..=row_idx];
            candidates.iter().any(|col| col.starts_with(placed))
        })
    }

    /// Runs the search, handing every complete grid to `on_solution` in discovery order.
    pub fn run<F: FnMut(&Field)>(&self, mut on_solution: F) -> SearchOutcome {
        let mut outcome = SearchOutcome::default();
        if self.max_solutions == 0 {
            outcome.capped = true;
            return outcome;
        }
        if self.rows.is_empty() {
            return outcome;
        }

        let mut field = Field::new(self.rows.len(), self.cols.len(), self.background);
        // next candidate to try for every row placed so far
        let mut cursors: Vec<usize> = vec![0];
        while let Some(row_idx) = cursors.len().checked_sub(1) {
            let next = cursors[row_idx];
            let Some(row) = self.rows[row_idx].get(next) else {
                cursors.pop();
                continue;
            };
            cursors[row_idx] += 1;
            field.set_row(row_idx, row);
            if !self.is_consistent(&field, row_idx) {
                continue;
            }
            if row_idx + 1 < self.rows.len() {
                cursors.push(0);
                continue;
            }
            outcome.solutions += 1;
            on_solution(&field);
            if outcome.solutions >= self.max_solutions {
                outcome.capped = true;
                break;
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nonogram::common::str_to_line;

    const WHITE: Color = Color(' ');

    fn lines(ls: &[&str]) -> Vec<Line> {
        ls.iter().map(|l| str_to_line(l)).collect()
    }

    fn collect(engine: &SearchEngine) -> (SearchOutcome, Vec<String>) {
        let mut found = Vec::new();
        let outcome = engine.run(|fld| found.push(fld.to_string()));
        (outcome, found)
    }

    fn diagonal() -> (Vec<Vec<Line>>, Vec<Vec<Line>>) {
        let rows = vec![lines(&["a ", " a"]), lines(&["a ", " a"])];
        let cols = rows.clone();
        (rows, cols)
    }

    #[test]
    fn finds_all_in_candidate_order() {
        let (rows, cols) = diagonal();
        let engine = SearchEngine::new(&rows, &cols, WHITE, 10);
        let (outcome, found) = collect(&engine);
        assert_eq!(outcome, SearchOutcome { solutions: 2, capped: false });
        assert_eq!(found, vec!["a \n a\n", " a\na \n"]);
    }

    #[test]
    fn stops_at_cap() {
        let (rows, cols) = diagonal();
        let engine = SearchEngine::new(&rows, &cols, WHITE, 1);
        let (outcome, found) = collect(&engine);
        assert_eq!(outcome, SearchOutcome { solutions: 1, capped: true });
        assert_eq!(found, vec!["a \n a\n"]);
    }

    #[test]
    fn zero_cap_searches_nothing() {
        let (rows, cols) = diagonal();
        let engine = SearchEngine::new(&rows, &cols, WHITE, 0);
        let (outcome, found) = collect(&engine);
        assert_eq!(outcome, SearchOutcome { solutions: 0, capped: true });
        assert!(found.is_empty());
    }

    #[test]
    fn empty_candidate_set_has_no_solution() {
        let rows = vec![lines(&["a "]), Vec::new()];
        let cols = vec![lines(&["a "]), lines(&["  "])];
        let engine = SearchEngine::new(&rows, &cols, WHITE, 10);
        assert_eq!(collect(&engine).0, SearchOutcome { solutions: 0, capped: false });
    }

    #[test]
    fn rejects_rows_no_column_accepts() {
        let rows = vec![lines(&["ab", "ba"]), lines(&["ab", "ba"])];
        let cols = vec![lines(&["ab"]), lines(&["ba"])];
        let engine = SearchEngine::new(&rows, &cols, WHITE, 10);
        let (outcome, found) = collect(&engine);
        assert_eq!(outcome.solutions, 1);
        assert_eq!(found, vec!["ab\nba\n"]);
    }

    #[test]
    fn tall_grid_does_not_recurse() {
        let height = 5_000;
        let rows = vec![lines(&["a"]); height];
        let cols = vec![vec![vec![Color('a'); height]]];
        let engine = SearchEngine::new(&rows, &cols, WHITE, 10);
        assert_eq!(engine.run(|_| ()).solutions, 1);
    }
}
