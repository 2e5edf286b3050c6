//! Data-parallel helpers for field evaluation and frame sampling
//!
//! [`WaveSolver::evaluate_par`](crate::WaveSolver::evaluate_par) splits a
//! position grid across threads with [`parallel_map`], and
//! [`FrameSampler::sample_all`](crate::FrameSampler::sample_all) hands frame
//! indices out with [`parallel_map_indexed`]. With the default `native`
//! feature the work runs on rayon's global pool; without it both helpers
//! are plain loops with identical output.
//!
//! Output order always follows input order, so `result[i]` belongs to
//! `positions[i]` (or frame `i`) no matter how the work was scheduled.

/// Whether sampling is spread over threads in this build
#[inline]
pub fn is_parallel_available() -> bool {
    cfg!(feature = "native")
}

/// Apply `f` to every sample position, one output per position
#[cfg(feature = "native")]
pub fn parallel_map<T, U, F>(positions: &[T], f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    use rayon::prelude::*;
    positions.par_iter().map(f).collect()
}

#[cfg(not(feature = "native"))]
pub fn parallel_map<T, U, F>(positions: &[T], f: F) -> Vec<U>
where
    F: Fn(&T) -> U,
{
    positions.iter().map(f).collect()
}

/// Build `count` items from their indices `0..count`
///
/// Used for frames, where item `n` is the snapshot at `t = n dt`.
#[cfg(feature = "native")]
pub fn parallel_map_indexed<U, F>(count: usize, f: F) -> Vec<U>
where
    U: Send,
    F: Fn(usize) -> U + Sync + Send,
{
    use rayon::prelude::*;
    (0..count).into_par_iter().map(f).collect()
}

#[cfg(not(feature = "native"))]
pub fn parallel_map_indexed<U, F>(count: usize, f: F) -> Vec<U>
where
    F: Fn(usize) -> U,
{
    (0..count).map(f).collect()
}
