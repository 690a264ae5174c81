use super::common::{Axis, Line};
use super::key::Key;
use super::SolveError;

#[cfg(test)]
mod tests;

/// Iterates over every line of a given length that satisfies a key.
///
/// Each line is a distribution of the spare background cells over the key's gaps. Lines come
/// out with the leftmost gap taking as many spare cells as possible first, so the order matches
/// a depth-first enumeration that tries the widest first gap before narrower ones.
pub struct LineEnumerator<'a> {
    key: &'a Key,
    len: usize,
    extras: Option<Vec<usize>>,
}

impl<'a> LineEnumerator<'a> {
    pub fn new(key: &'a Key, len: usize) -> Option<Self> {
        let spare = len.checked_sub(key.min_len())?;
        let gaps = key.gaps();
        let extras = match gaps {
            0 if spare > 0 => return None,
            0 => Vec::new(),
            _ => {
                let mut extras = vec![0; gaps];
                extras[0] = spare;
                extras
            }
        };
        Some(Self { key, len, extras: Some(extras) })
    }

    /// Moves `extras` to the next distribution, or returns false after the last one.
    fn advance(extras: &mut [usize]) -> bool {
        let Some(last) = extras.len().checked_sub(1) else {
            return false;
        };
        let Some(idx) = extras[..last].iter().rposition(|&x| x > 0) else {
            return false;
        };
        let tail: usize = extras[idx + 1..].iter().sum();
        extras[idx] -= 1;
        extras[idx + 1] = tail + 1;
        extras[idx + 2..].iter_mut().for_each(|x| *x = 0);
        true
    }
}

impl Iterator for LineEnumerator<'_> {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        let extras = self.extras.as_mut()?;
        let line = self.key.realize(extras, self.len);
        if !Self::advance(extras) {
            self.extras = None;
        }
        Some(line)
    }
}

/// Builds the initial candidate set of one line.
pub fn candidates(key: &Key, len: usize, axis: Axis, index: usize) -> Result<Vec<Line>, SolveError> {
    let enumerator = LineEnumerator::new(key, len).ok_or(SolveError::KeyDoesNotFit {
        axis,
        index,
        min_len: key.min_len(),
        len,
    })?;
    Ok(enumerator.collect())
}
