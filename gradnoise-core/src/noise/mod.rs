//! Gradient noise evaluation.
//!
//! - [`noise_hash`] - folds an integer lattice corner into a gradient index
//! - [`GradientSource`] - maps that index to a unit vector ([`TableGradients`], [`FibonacciGradients`])
//! - [`NoiseVector`] - the 3-component arithmetic the kernel is written against
//! - [`kernel`] - single-octave and multi-octave evaluation
//!
//! [`evaluate_noise`] and [`evaluate_noise_octaves`] are the raw-slice entry
//! points; [`crate::NoiseTables`] wraps the same kernel around validated tables.

mod gradient;
mod hash;
pub mod kernel;
mod vector;

use glam::Vec3;

pub use gradient::{FibonacciGradients, GradientSource, TableGradients};
pub use hash::noise_hash;
pub use vector::NoiseVector;

/// Evaluates a single octave of gradient noise at `(x, y, z)`.
///
/// `permutation_table` holds three per-axis permutations of
/// `[0, permutation_axis_len)` back to back, and `gradient_table` holds
/// `permutation_axis_len` packed unit vectors. `permutation_axis_len` must be a
/// power of two. None of this is checked in release builds; malformed tables
/// produce garbage or an out-of-bounds panic.
#[inline]
#[must_use]
pub fn evaluate_noise(
    x: f32,
    y: f32,
    z: f32,
    permutation_table: &[u32],
    permutation_axis_len: u32,
    gradient_table: &[f32],
) -> f32 {
    kernel::sample::<Vec3, _>(
        x,
        y,
        z,
        permutation_table,
        permutation_axis_len,
        &TableGradients::new(gradient_table),
    )
}

/// Sums `octave_count` octaves of [`evaluate_noise`].
///
/// The first octave has amplitude `0.5` at the input frequency; each following
/// octave halves the amplitude and doubles the frequency. Zero octaves yield `0`.
#[inline]
#[must_use]
pub fn evaluate_noise_octaves(
    x: f32,
    y: f32,
    z: f32,
    permutation_table: &[u32],
    permutation_axis_len: u32,
    gradient_table: &[f32],
    octave_count: u32,
) -> f32 {
    kernel::sample_octaves::<Vec3, _>(
        x,
        y,
        z,
        permutation_table,
        permutation_axis_len,
        &TableGradients::new(gradient_table),
        octave_count,
    )
}
