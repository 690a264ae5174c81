use super::common::{str_to_line, Color, Line};
use super::xpm;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("xpm record {record}: {reason}")]
    Xpm { record: usize, reason: String },

    #[error("puzzle has no cells")]
    Empty,

    #[error("row {row} is {found} cells wide, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },
}

/// A complete image whose row and column keys make up the puzzle.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Puzzle {
    background: Color,
    rows: Vec<Line>,
}

#[derive(serde::Deserialize)]
struct PuzzleDescription {
    background: Color,
    rows: Vec<String>,
}

impl Puzzle {
    pub fn new(background: Color, rows: Vec<Line>) -> Result<Self, PuzzleError> {
        let ncols = rows.first().map_or(0, Vec::len);
        if ncols == 0 {
            return Err(PuzzleError::Empty);
        }
        if let Some((row, line)) = rows.iter().enumerate().find(|(_, line)| line.len() != ncols) {
            return Err(PuzzleError::Ragged { row, expected: ncols, found: line.len() });
        }
        Ok(Self { background, rows })
    }

    pub fn from_json_reader<R: io::Read>(rdr: R) -> Result<Self, PuzzleError> {
        let descr: PuzzleDescription = serde_json::from_reader(rdr)?;
        Self::new(descr.background, descr.rows.iter().map(|r| str_to_line(r)).collect())
    }

    /// Loads `.json` files as JSON descriptions and anything else as XPM.
    pub fn load(path: &Path) -> Result<Self, PuzzleError> {
        let rdr = BufReader::new(File::open(path)?);
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_reader(rdr),
            _ => xpm::read(rdr),
        }
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn ncols(&self) -> usize {
        self.rows[0].len()
    }

    pub fn row(&self, idx: usize) -> &[Color] {
        &self.rows[idx]
    }

    pub fn col(&self, idx: usize) -> Line {
        self.rows.iter().map(|row| row[idx]).collect()
    }
}
