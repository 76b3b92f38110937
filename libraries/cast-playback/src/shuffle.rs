//! Random position selection for shuffle mode

use rand::Rng;

/// Pick a uniformly random index in `[0, len)`.
///
/// Shuffle navigation picks positions instead of reordering the queue, and
/// the current position is not excluded from the draw.
///
/// # Panics
///
/// Panics if `len` is zero; callers check for an empty queue first.
pub(crate) fn random_index(len: usize) -> usize {
    rand::thread_rng().gen_range(0..len)
}
