use super::*;
use crate::nonogram::common::{line_to_str, str_to_line, Color};
use rstest::rstest;

const WHITE: Color = Color(' ');

fn key(line: &str) -> Key {
    Key::from_line(&str_to_line(line), WHITE)
}

fn enumerate(line: &str, len: usize) -> Vec<String> {
    LineEnumerator::new(&key(line), len)
        .expect("key fits")
        .map(|l| line_to_str(&l))
        .collect()
}

/// Compositions of `spare` into `gaps` parts.
fn candidate_count(key: &Key, len: usize) -> usize {
    let spare = len - key.min_len();
    let (n, k) = (spare + key.gaps() - 1, key.gaps() - 1);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

#[test]
fn single_gap_takes_everything() {
    assert_eq!(enumerate("   ", 3), vec!["   "]);
    assert_eq!(enumerate("  ", 5), vec!["     "]);
}

#[test]
fn no_spare_cells() {
    assert_eq!(enumerate("a a", 3), vec!["a a"]);
    assert_eq!(enumerate("ab", 2), vec!["ab"]);
}

#[test]
fn widest_first_gap_comes_first() {
    assert_eq!(enumerate("a", 3), vec!["  a", " a ", "a  "]);
    assert_eq!(
        enumerate("ab", 4),
        vec!["  ab", " a b", " ab ", "a  b", "a b ", "ab  "]
    );
}

#[test]
fn mandatory_separator_is_kept() {
    assert_eq!(enumerate("a a", 4), vec![" a a", "a  a", "a a "]);
}

#[test]
fn key_too_long_does_not_fit() {
    assert!(LineEnumerator::new(&key("a a"), 2).is_none());
    assert!(matches!(
        candidates(&key("a a"), 2, Axis::Row, 7),
        Err(SolveError::KeyDoesNotFit { index: 7, min_len: 3, len: 2, .. })
    ));
}

#[rstest]
#[case("a", 1)]
#[case("a", 6)]
#[case("ab", 7)]
#[case("a a", 8)]
#[case("abc", 9)]
#[case("a b a", 10)]
fn count_matches_compositions(#[case] line: &str, #[case] len: usize) {
    let k = key(line);
    let lines: Vec<Line> = LineEnumerator::new(&k, len).unwrap().collect();
    assert_eq!(lines.len(), candidate_count(&k, len));
    assert!(lines.iter().all(|l| l.len() == len));
    assert!(lines.iter().all(|l| Key::from_line(l, WHITE) == k));
    let mut unique = lines.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), lines.len());
}

#[rstest]
#[case("    ")]
#[case("a  b")]
#[case(" aa  a ")]
#[case("ab  ba a")]
#[case("x x x  y")]
fn source_line_is_a_candidate(#[case] line: &str) {
    let source = str_to_line(line);
    let k = Key::from_line(&source, WHITE);
    let lines = candidates(&k, source.len(), Axis::Col, 0).unwrap();
    assert!(lines.contains(&source));
}
