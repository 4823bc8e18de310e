//! Classify a recall result against the stored patterns.
//!
//! Failing to recover the queried pattern is an outcome, not an error.

use crate::pattern::Pattern;
use std::fmt;

/// How a recalled pattern relates to the training set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecallOutcome {
    /// Recovered pattern equals the queried one.
    ExactMatch,
    /// Recovered pattern equals a different stored pattern.
    AlternateMatch { index: usize },
    /// Spurious state: equal to no stored pattern.
    ///
    /// `closest` / `distance` name the nearest stored pattern by Hamming
    /// distance; both are `None`/`0` when no stored pattern has the same
    /// length as the recovered one.
    NoMatch {
        closest: Option<usize>,
        distance: usize,
    },
}

impl RecallOutcome {
    pub fn is_exact(&self) -> bool {
        matches!(self, RecallOutcome::ExactMatch)
    }
}

impl fmt::Display for RecallOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecallOutcome::ExactMatch => {
                write!(f, "recovered pattern matches the original pattern")
            }
            RecallOutcome::AlternateMatch { index } => write!(
                f,
                "recovered pattern matches another stored pattern (index {})",
                index
            ),
            RecallOutcome::NoMatch {
                closest: Some(index),
                distance,
            } => write!(
                f,
                "recovered pattern does not match any stored pattern (closest: index {}, {} positions apart)",
                index, distance
            ),
            RecallOutcome::NoMatch { closest: None, .. } => {
                write!(f, "recovered pattern does not match any stored pattern")
            }
        }
    }
}

/// Compare `recovered` with the queried `original` and the whole training set.
pub fn classify(recovered: &Pattern, original: &Pattern, all_patterns: &[Pattern]) -> RecallOutcome {
    if recovered == original {
        return RecallOutcome::ExactMatch;
    }
    if let Some(index) = all_patterns.iter().position(|p| p == recovered) {
        return RecallOutcome::AlternateMatch { index };
    }
    match nearest(recovered, all_patterns) {
        Some((index, distance)) => RecallOutcome::NoMatch {
            closest: Some(index),
            distance,
        },
        None => RecallOutcome::NoMatch {
            closest: None,
            distance: 0,
        },
    }
}

/// Index and Hamming distance of the stored pattern closest to `query`.
///
/// Candidates of a different length are skipped. Ties resolve to the
/// lowest index.
pub fn nearest(query: &Pattern, candidates: &[Pattern]) -> Option<(usize, usize)> {
    candidates
        .iter()
        .enumerate()
        .filter(|(_, c)| c.dimensions() == query.dimensions())
        .map(|(i, c)| (i, query.hamming_distance(c)))
        .min_by_key(|&(i, d)| (d, i))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(data: &[i8]) -> Pattern {
        Pattern::from_data(data.to_vec()).unwrap()
    }

    #[test]
    fn test_exact() {
        let a = p(&[1, -1, 1, -1]);
        let all = vec![a.clone(), p(&[1, 1, 1, 1])];
        assert_eq!(classify(&a, &a, &all), RecallOutcome::ExactMatch);
        assert!(classify(&a, &a, &all).is_exact());
    }

    #[test]
    fn test_alternate() {
        let a = p(&[1, -1, 1, -1]);
        let b = p(&[1, 1, 1, 1]);
        let all = vec![a.clone(), b.clone()];
        let outcome = classify(&b, &a, &all);
        assert_eq!(outcome, RecallOutcome::AlternateMatch { index: 1 });
        assert!(outcome.to_string().contains("index 1"));
    }

    #[test]
    fn test_nearest() {
        let stored = vec![p(&[1, 1, 1, 1]), p(&[-1, -1, 1, 1]), p(&[-1, -1, -1, -1])];
        assert_eq!(nearest(&p(&[-1, 1, 1, 1]), &stored), Some((0, 1)));

        // Equidistant from all three: lowest index wins.
        assert_eq!(nearest(&p(&[-1, 1, -1, 1]), &stored), Some((0, 2)));

        assert_eq!(nearest(&p(&[1, 1]), &stored), None);
        assert_eq!(nearest(&p(&[1, 1]), &[]), None);
    }

    #[test]
    fn test_no_match_skips_other_lengths() {
        let recovered = p(&[1, 1, -1, -1]);
        let original = p(&[-1, -1, -1, -1]);
        let all = vec![original.clone(), p(&[1, 1])];

        assert_eq!(
            classify(&recovered, &original, &all),
            RecallOutcome::NoMatch {
                closest: Some(0),
                distance: 2
            }
        );
    }

    #[test]
    fn test_no_match() {
        let a = p(&[1, -1, 1, -1]);
        let b = p(&[1, 1, 1, 1]);
        let spurious = p(&[-1, -1, 1, -1]);
        let outcome = classify(&spurious, &a, &[a.clone(), b]);
        assert_eq!(
            outcome,
            RecallOutcome::NoMatch {
                closest: Some(0),
                distance: 1
            }
        );
        assert!(!outcome.is_exact());

        let outcome = classify(&spurious, &a, &[]);
        assert_eq!(
            outcome,
            RecallOutcome::NoMatch {
                closest: None,
                distance: 0
            }
        );
    }
}
