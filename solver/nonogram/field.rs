use super::common::{line_to_str, Color, Line};
use std::fmt::Display;

/// A full coloring, kept both row-wise and column-wise.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Field {
    rows: Vec<Line>,
    cols: Vec<Line>,
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows.iter() {
            writeln!(f, "{}", line_to_str(row))?;
        }
        Ok(())
    }
}

impl Field {
    pub fn new(nrows: usize, ncols: usize, fill: Color) -> Self {
        Self {
            rows: (0..nrows).map(|_| vec![fill; ncols]).collect(),
            cols: (0..ncols).map(|_| vec![fill; nrows]).collect(),
        }
    }

    pub fn rows(&self) -> &[Line] {
        &self.rows
    }

    pub fn col(&self, idx: usize) -> &[Color] {
        &self.cols[idx]
    }

    pub fn set_row(&mut self, row_idx: usize, row: &[Color]) {
        self.rows[row_idx].copy_from_slice(row);
        for (col, &val) in self.cols.iter_mut().zip(row) {
            col[row_idx] = val;
        }
    }
}
