//! Next/previous index selection
//!
//! Shuffle never reorders the queue. With shuffle on, every advance picks a
//! uniformly random index; repeats of the current song are allowed.
//! With shuffle off, navigation is sequential with a random jump at the
//! boundaries.

use rand::Rng;

/// Direction of a manual skip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Skip forward
    Forward,
    /// Skip back
    Backward,
}

/// Pick the index to move to
///
/// Returns `None` only for an empty queue.
///
/// # Arguments
/// * `current` - Current position, if any
/// * `len` - Queue length
/// * `direction` - Skip direction
/// * `shuffle` - Whether shuffle is on
/// * `rng` - Randomness source
pub fn advance_index<R: Rng + ?Sized>(
    current: Option<usize>,
    len: usize,
    direction: Direction,
    shuffle: bool,
    rng: &mut R,
) -> Option<usize> {
    if len == 0 {
        return None;
    }

    if shuffle {
        return Some(random_index(len, rng));
    }

    let index = match (direction, current) {
        (_, None) => 0,
        (Direction::Forward, Some(i)) if i + 1 < len => i + 1,
        (Direction::Backward, Some(i)) if i > 0 && i < len => i - 1,
        // At the boundary: jump anywhere
        _ => random_index(len, rng),
    };

    Some(index)
}

/// Uniformly random index into a non-empty queue
fn random_index<R: Rng + ?Sized>(len: usize, rng: &mut R) -> usize {
    rng.gen_range(0..len)
}
