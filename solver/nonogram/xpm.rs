//! Reader for XPM pixel maps.
//!
//! Only the quoted strings of the file matter: the header `"w h ncolors cpp"`, one record per
//! color, then one record per pixel row. White (`#ffffff`) becomes the background color.

use super::common::{str_to_line, Color};
use super::puzzle::{Puzzle, PuzzleError};
use ahash::AHashSet;
use std::io::{self, BufRead};

const DEFAULT_BACKGROUND: Color = Color(' ');

fn records<R: BufRead>(rdr: R) -> io::Result<Vec<String>> {
    let mut result = Vec::new();
    for line in rdr.lines() {
        let line = line?;
        let Some(start) = line.find('"') else { continue };
        let rest = &line[start + 1..];
        if let Some(end) = rest.find('"') {
            result.push(rest[..end].to_string());
        }
    }
    Ok(result)
}

fn xpm_error(record: usize, reason: impl Into<String>) -> PuzzleError {
    PuzzleError::Xpm { record, reason: reason.into() }
}

fn parse_header(header: &str) -> Result<[usize; 4], PuzzleError> {
    let values: Vec<usize> = header
        .split_whitespace()
        .take(4)
        .map(|v| v.parse().map_err(|_| xpm_error(1, format!("bad number {v:?}"))))
        .collect::<Result<_, _>>()?;
    values.try_into().map_err(|_| xpm_error(1, "expected width, height, colors and chars per pixel"))
}

fn is_white(value: &str) -> bool {
    value.eq_ignore_ascii_case("#ffffff") || value.eq_ignore_ascii_case("white")
}

pub fn read<R: BufRead>(rdr: R) -> Result<Puzzle, PuzzleError> {
    let records = records(rdr)?;
    let header = records.first().ok_or_else(|| xpm_error(1, "missing header"))?;
    let [ncols, nrows, ncolors, cpp] = parse_header(header)?;
    if cpp != 1 {
        return Err(xpm_error(1, format!("{cpp} chars per pixel is not supported")));
    }

    let mut palette: AHashSet<char> = AHashSet::default();
    let mut background = DEFAULT_BACKGROUND;
    for idx in 1..=ncolors {
        let record = records.get(idx).ok_or_else(|| xpm_error(idx + 1, "missing color"))?;
        let mut chars = record.chars();
        let color = chars.next().ok_or_else(|| xpm_error(idx + 1, "empty color"))?;
        let fields: Vec<&str> = chars.as_str().split_whitespace().collect();
        let value = match fields.iter().position(|&f| f == "c") {
            Some(pos) => fields.get(pos + 1),
            None => fields.last(),
        }
        .ok_or_else(|| xpm_error(idx + 1, "color has no value"))?;
        if is_white(value) {
            background = Color(color);
        }
        palette.insert(color);
    }
    log::debug!("xpm: {ncols}x{nrows}, {ncolors} colors, background {background:?}");

    let mut rows = Vec::with_capacity(nrows);
    for row_idx in 0..nrows {
        let idx = 1 + ncolors + row_idx;
        let record = records.get(idx).ok_or_else(|| xpm_error(idx + 1, "missing pixel row"))?;
        let row = str_to_line(record);
        if row.len() != ncols {
            return Err(xpm_error(idx + 1, format!("expected {ncols} pixels, found {}", row.len())));
        }
        if let Some(Color(c)) = row.iter().find(|c| !palette.contains(&c.0)) {
            return Err(xpm_error(idx + 1, format!("undeclared color {c:?}")));
        }
        rows.push(row);
    }
    Puzzle::new(background, rows)
}
