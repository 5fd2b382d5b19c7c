//! Boundary checks for caller-supplied hull indices.
//!
//! The validation core assumes its preconditions hold; callers run
//! `check_hull_indices` first and report a `UsageError` instead of invoking it.

use std::fmt;

/// Malformed input detected before the core runs.
#[derive(Debug, Clone, PartialEq)]
pub enum UsageError {
    /// More hull indices than points.
    TooManyHullIndices { hull: usize, points: usize },
    /// `hull_indices[position] = index` is not `< points`.
    IndexOutOfRange {
        position: usize,
        index: usize,
        points: usize,
    },
    /// The same point index was listed twice.
    DuplicateIndex { index: usize },
    /// Sign tolerance must be finite and non-negative.
    InvalidTolerance { eps: f64 },
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageError::TooManyHullIndices { hull, points } => write!(
                f,
                "hull size {hull} exceeds point count {points} (need C <= N)"
            ),
            UsageError::IndexOutOfRange {
                position,
                index,
                points,
            } => write!(
                f,
                "hull index #{position} = {index} is out of range (need 0 <= index < {points})"
            ),
            UsageError::DuplicateIndex { index } => {
                write!(f, "hull index {index} is listed more than once")
            }
            UsageError::InvalidTolerance { eps } => {
                write!(f, "tolerance {eps} must be finite and >= 0")
            }
        }
    }
}

impl std::error::Error for UsageError {}

/// Verify the preconditions of `validate`: `C <= N`, every index `< N`, and
/// no index repeated.
pub fn check_hull_indices(points: usize, hull_indices: &[usize]) -> Result<(), UsageError> {
    if hull_indices.len() > points {
        return Err(UsageError::TooManyHullIndices {
            hull: hull_indices.len(),
            points,
        });
    }
    if let Some((position, &index)) = hull_indices
        .iter()
        .enumerate()
        .find(|(_, &index)| index >= points)
    {
        return Err(UsageError::IndexOutOfRange {
            position,
            index,
            points,
        });
    }
    let mut sorted = hull_indices.to_vec();
    sorted.sort_unstable();
    if let Some(w) = sorted.windows(2).find(|w| w[0] == w[1]) {
        return Err(UsageError::DuplicateIndex { index: w[0] });
    }
    Ok(())
}
