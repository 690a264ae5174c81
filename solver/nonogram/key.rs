use super::common::{Color, Line};
use std::fmt::{self, Display};
use Segment::*;

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum Segment {
    /// Exactly one cell of the color.
    Fixed(Color),
    /// A run of background cells at least `min` wide.
    Gap(usize),
}

/// Structure of one line: its colored cells in order, and the background gaps between them.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Key {
    background: Color,
    segments: Vec<Segment>,
}

impl Key {
    /// Derives the key of a fully colored line.
    ///
    /// The line is framed with background, a gap is inserted between touching blocks of
    /// different colors, every background run is collapsed into a gap, and finally a mandatory
    /// background cell is put back into every gap that separates two blocks of the same color.
    pub fn from_line(line: &[Color], background: Color) -> Self {
        if line.iter().all(|&c| c == background) {
            return Self { background, segments: vec![Gap(0)] };
        }

        let mut segments: Vec<Segment> = Vec::with_capacity(line.len() * 2 + 2);
        segments.push(Fixed(background));
        for &color in line {
            if let Some(&Fixed(prev)) = segments.last() {
                if prev != background && color != background && prev != color {
                    segments.push(Gap(0));
                }
            }
            segments.push(Fixed(color));
        }
        segments.push(Fixed(background));

        segments.dedup_by(|cur, prev| *cur == Fixed(background) && *prev == Fixed(background));
        for seg in segments.iter_mut() {
            if *seg == Fixed(background) {
                *seg = Gap(0);
            }
        }

        let mut idx = segments.len() - 2;
        while idx > 0 {
            if segments[idx] == Gap(0) && segments[idx - 1] == segments[idx + 1] {
                segments[idx] = Gap(1);
            }
            idx -= 1;
        }

        Self { background, segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of cells the key occupies when every gap takes its minimum width.
    pub fn min_len(&self) -> usize {
        self.segments()
            .iter()
            .map(|seg| match *seg {
                Fixed(_) => 1,
                Gap(min) => min,
            })
            .sum()
    }

    pub fn gaps(&self) -> usize {
        self.segments().iter().filter(|seg| matches!(seg, Gap(_))).count()
    }

    /// Writes the key as a line, giving each gap `min + extras[i]` background cells.
    pub(super) fn realize(&self, extras: &[usize], len: usize) -> Line {
        let mut line = Vec::with_capacity(len);
        let mut extras = extras.iter();
        for seg in self.segments.iter() {
            match *seg {
                Fixed(color) => line.push(color),
                Gap(min) => {
                    let width = min + extras.next().copied().unwrap_or(0);
                    line.extend(std::iter::repeat(self.background).take(width));
                }
            }
        }
        line
    }
}

/// Renders gaps as `*`, preceded by a background cell when they are mandatory.
impl Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for seg in self.segments.iter() {
            match *seg {
                Fixed(color) => write!(f, "{color}")?,
                Gap(min) => {
                    for _ in 0..min {
                        write!(f, "{}", self.background)?;
                    }
                    write!(f, "*")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nonogram::common::str_to_line;
    use rstest::rstest;

    const WHITE: Color = Color(' ');

    fn key(line: &str) -> Key {
        Key::from_line(&str_to_line(line), WHITE)
    }

    #[rstest]
    #[case("    ", "*")]
    #[case("a", "*a*")]
    #[case(" aa ", "*aa*")]
    #[case("ab", "*a*b*")]
    #[case("a a", "*a *a*")]
    #[case("a   a", "*a *a*")]
    #[case("a b", "*a*b*")]
    #[case("aab  bba", "*aa*b *bb*a*")]
    #[case("a a a", "*a *a *a*")]
    #[case("a aba", "*a *a*b*a*")]
    #[case("#..#", "*#*..*#*")]
    fn derives_key(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(key(line).to_string(), expected);
    }

    #[test]
    fn all_background_is_single_free_gap() {
        let k = key("     ");
        assert_eq!(k.segments(), &[Gap(0)]);
        assert_eq!(k.min_len(), 0);
        assert_eq!(k.gaps(), 1);
    }

    #[test]
    fn same_color_blocks_need_a_separator() {
        let k = key("a  a");
        assert_eq!(k.segments(), &[Gap(0), Fixed(Color('a')), Gap(1), Fixed(Color('a')), Gap(0)]);
        assert_eq!(k.min_len(), 3);
    }

    #[test]
    fn different_color_blocks_may_touch() {
        let k = key(" ab ");
        assert_eq!(k.segments(), &[Gap(0), Fixed(Color('a')), Gap(0), Fixed(Color('b')), Gap(0)]);
        assert_eq!(k.min_len(), 2);
    }

    #[test]
    fn realize_respects_minimums() {
        let k = key("a a");
        assert_eq!(k.realize(&[0, 0, 0], 3), str_to_line("a a"));
        assert_eq!(k.realize(&[1, 1, 0], 5), str_to_line(" a  a"));
    }
}
