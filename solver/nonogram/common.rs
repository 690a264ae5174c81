use ahash::AHasher;
use std::collections::HashSet;
use std::fmt::{self, Display};
use std::hash::BuildHasherDefault;

pub type ABuildHasher = BuildHasherDefault<AHasher>;

/// One pixel color, identified by the character the puzzle file uses for it.
#[derive(Hash, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Debug, serde::Deserialize)]
#[serde(transparent)]
pub struct Color(pub char);

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub type Line = Vec<Color>;

pub type ColorSet = HashSet<Color, ABuildHasher>;

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum Axis {
    Row,
    Col,
}

impl Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Col => write!(f, "column"),
        }
    }
}

pub fn line_to_str(line: &[Color]) -> String {
    line.iter().map(|c| c.0).collect()
}

pub fn str_to_line(s: &str) -> Line {
    s.chars().map(Color).collect()
}
