//! Pure index and progress arithmetic.
//!
//! This module is the only place where index normalization and the
//! progress/index mapping are defined. Every function is total: degenerate
//! inputs (empty or single-slide decks, NaN progress, negative indices)
//! normalize instead of panicking.

use crate::state::Direction;

/// Guards [`index_from_progress`] against float roundoff when progress sits
/// exactly on a slide boundary, keeping the progress/index round trip exact.
const PROGRESS_EPSILON: f64 = 1e-9;

/// Euclidean modulo into `[0, count)`. Works for negative indices.
pub fn wrap_index(index: i64, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    index.rem_euclid(count as i64) as usize
}

/// Clamp into `[0, count - 1]`.
pub fn clamp_index(index: i64, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    index.clamp(0, count as i64 - 1) as usize
}

/// Clamp progress into `[0, 100]`. NaN normalizes to 0.
pub fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 100.0)
}

/// Derive the slide index a progress value falls on.
///
/// `floor(progress / 100 * (count - 1))` per the drag-carousel mapping.
pub fn index_from_progress(progress: f64, count: usize) -> usize {
    if count <= 1 {
        return 0;
    }
    let position = clamp_progress(progress) / 100.0 * (count as f64 - 1.0);
    clamp_index((position + PROGRESS_EPSILON).floor() as i64, count)
}

/// The progress value a slide index collapses to. A single-slide deck is 0.
pub fn progress_from_index(index: usize, count: usize) -> f64 {
    if count <= 1 {
        return 0.0;
    }
    index.min(count - 1) as f64 / (count as f64 - 1.0) * 100.0
}

/// Shortest circular path from `from` to `to`.
///
/// Ties (including `from == to`) resolve to [`Direction::Next`].
pub fn infer_direction(from: usize, to: usize, count: usize) -> Direction {
    if count == 0 {
        return Direction::Next;
    }
    let count = count as i64;
    let forward = (to as i64 - from as i64).rem_euclid(count);
    let backward = (from as i64 - to as i64).rem_euclid(count);
    if forward <= backward {
        Direction::Next
    } else {
        Direction::Prev
    }
}
