// src/core/common/functions.rs

//! Arg-extremum helpers over ordered score mappings.
//!
//! Scores are taken in iteration order. When several keys share the extreme
//! score, the first one encountered wins, so results only depend on the
//! order the caller supplies.

use crate::core::common::OxiknnError;

/// Returns the key with the largest score.
///
/// # Errors
///
/// Returns `OxiknnError::InvalidInput` if `scores` is empty.
pub fn argmax<K, I>(scores: I) -> Result<K, OxiknnError>
where
    I: IntoIterator<Item = (K, f64)>,
{
    select(scores, |candidate, best| candidate > best)
        .ok_or_else(|| OxiknnError::invalid_input("argmax of an empty mapping is undefined"))
}

/// Returns the key with the smallest score.
///
/// # Errors
///
/// Returns `OxiknnError::InvalidInput` if `scores` is empty.
pub fn argmin<K, I>(scores: I) -> Result<K, OxiknnError>
where
    I: IntoIterator<Item = (K, f64)>,
{
    select(scores, |candidate, best| candidate < best)
        .ok_or_else(|| OxiknnError::invalid_input("argmin of an empty mapping is undefined"))
}

// Replaces the current best only on a strict improvement.
fn select<K, I, F>(scores: I, improves: F) -> Option<K>
where
    I: IntoIterator<Item = (K, f64)>,
    F: Fn(f64, f64) -> bool,
{
    scores
        .into_iter()
        .fold(None, |best: Option<(K, f64)>, (key, score)| match best {
            Some((_, best_score)) if !improves(score, best_score) => best,
            _ => Some((key, score)),
        })
        .map(|(key, _)| key)
}
