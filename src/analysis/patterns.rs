//! Sliding-window pattern extraction and pattern-to-follower probability tables
//!
//! A pattern is a short fixed-length run of outcomes extracted from one of the
//! geometric walks. The tables record, for each observed pattern, the outcomes
//! that historically followed it within the same sequence. Windows at the very
//! end of a sequence have no follower and are discarded rather than padded.

use std::collections::HashMap;

use crate::spatial::grid::Outcome;

/// Observed followers for each fixed-length pattern in a sequence
pub type PatternTable = HashMap<Vec<Outcome>, Vec<Outcome>>;

/// Follower distribution for a single pattern key
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternOdds {
    /// Probability that [`Outcome::A`] followed the pattern
    pub a_prob: f64,
    /// Probability that [`Outcome::B`] followed the pattern
    pub b_prob: f64,
    /// Number of observed followers backing the probabilities
    pub count: usize,
}

/// Slide a fixed-length window over a sequence, recording each window's follower
///
/// The input must already be filtered to non-empty outcomes. Sequences shorter
/// than `length + 1` produce an empty table since no window has a follower.
pub fn extract_subpatterns(sequence: &[Outcome], length: usize) -> PatternTable {
    let mut table = PatternTable::new();
    if length == 0 {
        return table;
    }

    for start in 0..sequence.len().saturating_sub(length) {
        let Some(window) = sequence.get(start..start + length) else {
            continue;
        };
        let Some(follower) = sequence.get(start + length) else {
            continue;
        };
        table.entry(window.to_vec()).or_default().push(*follower);
    }

    table
}

/// Normalize follower lists into per-pattern probability entries
///
/// Patterns with zero recorded followers are omitted, so every entry satisfies
/// `a_prob + b_prob == 1` and `count > 0`.
pub fn pattern_probabilities(table: &PatternTable) -> HashMap<Vec<Outcome>, PatternOdds> {
    let mut probabilities = HashMap::new();

    for (pattern, followers) in table {
        let count = followers.len();
        if count == 0 {
            continue;
        }

        let a = followers
            .iter()
            .filter(|outcome| **outcome == Outcome::A)
            .count();
        let b = count - a;

        probabilities.insert(
            pattern.clone(),
            PatternOdds {
                a_prob: a as f64 / count as f64,
                b_prob: b as f64 / count as f64,
                count,
            },
        );
    }

    probabilities
}

/// Count how often a two-outcome pattern was followed by each outcome
///
/// This is the "pattern continuation" query: scanning the whole sequence for
/// earlier occurrences of `pattern` and tallying what came next. Returns
/// `(a_count, b_count)`.
pub fn continuation_counts(sequence: &[Outcome], pattern: (Outcome, Outcome)) -> (usize, usize) {
    let mut a = 0;
    let mut b = 0;

    for start in 0..sequence.len().saturating_sub(2) {
        let window = (
            sequence.get(start).copied(),
            sequence.get(start + 1).copied(),
            sequence.get(start + 2).copied(),
        );
        if let (Some(first), Some(second), Some(follower)) = window {
            if (first, second) == pattern {
                match follower {
                    Outcome::A => a += 1,
                    Outcome::B => b += 1,
                }
            }
        }
    }

    (a, b)
}
