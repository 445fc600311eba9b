//! Permutation and gradient tables consumed by the noise kernel.
//!
//! Tables are built once, validated once, and are immutable afterwards. A
//! [`NoiseTables`] is `Send + Sync`, so it can be shared by reference (or behind
//! an `Arc`) with any number of threads evaluating noise concurrently.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::noise::kernel;
use crate::noise::{FibonacciGradients, GradientSource, TableGradients};

/// Lattice period used when none is requested.
pub const DEFAULT_AXIS_LEN: u32 = 256;

/// An error produced while validating noise tables.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The per-axis length is zero or not a power of two.
    #[error("axis length {0} is not a power of two")]
    AxisLenNotPowerOfTwo(u32),
    /// The permutation table does not hold three axis segments.
    #[error("permutation table has {actual} entries, expected {expected}")]
    PermutationLength {
        /// `3 * axis_len`
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },
    /// The gradient table does not hold `axis_len` packed vectors.
    #[error("gradient table has {actual} components, expected {expected}")]
    GradientLength {
        /// `3 * axis_len`
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },
    /// An axis segment is not a permutation of `[0, axis_len)`.
    #[error("axis {axis} segment is not a permutation (offending value {value})")]
    NotAPermutation {
        /// Axis index, `0..3`.
        axis: usize,
        /// The out-of-range or repeated value.
        value: u32,
    },
    /// A gradient component is NaN or infinite.
    #[error("gradient {index} has a non-finite component")]
    NonFiniteGradient {
        /// Index of the gradient vector.
        index: usize,
    },
}

/// Three concatenated per-axis permutations of `[0, axis_len)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationTable {
    entries: Box<[u32]>,
    axis_len: u32,
}

impl PermutationTable {
    /// Validates and wraps `entries`.
    pub fn new(entries: Vec<u32>, axis_len: u32) -> Result<Self, TableError> {
        if !axis_len.is_power_of_two() {
            return Err(TableError::AxisLenNotPowerOfTwo(axis_len));
        }
        let n = axis_len as usize;
        if entries.len() != 3 * n {
            return Err(TableError::PermutationLength {
                expected: 3 * n,
                actual: entries.len(),
            });
        }

        let mut seen = vec![false; n];
        for (axis, segment) in entries.chunks_exact(n).enumerate() {
            seen.fill(false);
            for &value in segment {
                match seen.get_mut(value as usize) {
                    Some(slot) if !*slot => *slot = true,
                    _ => return Err(TableError::NotAPermutation { axis, value }),
                }
            }
        }

        Ok(Self {
            entries: entries.into_boxed_slice(),
            axis_len,
        })
    }

    /// Per-axis length `N`.
    #[must_use]
    pub const fn axis_len(&self) -> u32 {
        self.axis_len
    }

    /// All `3 * N` entries, x segment first.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.entries
    }
}

/// `N` packed `[x, y, z]` gradient vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientTable {
    components: Box<[f32]>,
}

impl GradientTable {
    /// Validates and wraps `components` for an `axis_len`-entry lattice.
    ///
    /// Unit length is a construction policy and is not checked here.
    pub fn new(components: Vec<f32>, axis_len: u32) -> Result<Self, TableError> {
        let expected = 3 * axis_len as usize;
        if components.len() != expected {
            return Err(TableError::GradientLength {
                expected,
                actual: components.len(),
            });
        }
        if let Some(index) = components.iter().position(|c| !c.is_finite()) {
            return Err(TableError::NonFiniteGradient { index: index / 3 });
        }
        Ok(Self {
            components: components.into_boxed_slice(),
        })
    }

    /// Gradient `index` as a vector.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Vec3> {
        let start = index.checked_mul(3)?;
        let triple = self.components.get(start..start.checked_add(3)?)?;
        Some(Vec3::from_slice(triple))
    }

    /// Number of gradient vectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len() / 3
    }

    /// Whether the table holds no gradients.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// The packed components, `3 * N` floats.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.components
    }
}

/// A validated permutation/gradient table pair.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseTables {
    permutation: PermutationTable,
    gradients: GradientTable,
}

impl NoiseTables {
    /// Starts a seeded builder.
    #[must_use]
    pub const fn builder() -> NoiseTablesBuilder {
        NoiseTablesBuilder::new()
    }

    /// Validates caller-supplied tables.
    pub fn from_parts(
        permutation: Vec<u32>,
        axis_len: u32,
        gradients: Vec<f32>,
    ) -> Result<Self, TableError> {
        let permutation = PermutationTable::new(permutation, axis_len)?;
        let gradients = GradientTable::new(gradients, axis_len)?;
        Ok(Self {
            permutation,
            gradients,
        })
    }

    /// Identity permutations on every axis and `+X` for every gradient.
    ///
    /// Useful as a hand-checkable reference: the field only varies along `x`.
    pub fn identity(axis_len: u32) -> Result<Self, TableError> {
        let permutation = (0..3).flat_map(|_| 0..axis_len).collect();
        let gradients = (0..axis_len).flat_map(|_| Vec3::X.to_array()).collect();
        Self::from_parts(permutation, axis_len, gradients)
    }

    /// The permutation table.
    #[must_use]
    pub const fn permutation(&self) -> &PermutationTable {
        &self.permutation
    }

    /// The gradient table.
    #[must_use]
    pub const fn gradients(&self) -> &GradientTable {
        &self.gradients
    }

    /// Per-axis length `N`.
    #[must_use]
    pub const fn axis_len(&self) -> u32 {
        self.permutation.axis_len
    }

    /// Gradient source reading from this pair's gradient table.
    #[must_use]
    pub fn table_gradients(&self) -> TableGradients<'_> {
        TableGradients::new(self.gradients.as_slice())
    }

    /// Analytic gradient source with the same period as this pair.
    #[must_use]
    pub const fn fibonacci(&self) -> FibonacciGradients {
        FibonacciGradients::new(self.axis_len())
    }

    /// Single-octave noise using the gradient table.
    #[must_use]
    pub fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
        self.sample_with(x, y, z, &self.table_gradients())
    }

    /// Multi-octave noise using the gradient table.
    #[must_use]
    pub fn sample_octaves(&self, x: f32, y: f32, z: f32, octave_count: u32) -> f32 {
        self.sample_octaves_with(x, y, z, &self.table_gradients(), octave_count)
    }

    /// Single-octave noise with an explicit gradient source.
    #[must_use]
    pub fn sample_with<G: GradientSource>(&self, x: f32, y: f32, z: f32, gradients: &G) -> f32 {
        kernel::sample::<Vec3, G>(
            x,
            y,
            z,
            self.permutation.as_slice(),
            self.axis_len(),
            gradients,
        )
    }

    /// Multi-octave noise with an explicit gradient source.
    #[must_use]
    pub fn sample_octaves_with<G: GradientSource>(
        &self,
        x: f32,
        y: f32,
        z: f32,
        gradients: &G,
        octave_count: u32,
    ) -> f32 {
        kernel::sample_octaves::<Vec3, G>(
            x,
            y,
            z,
            self.permutation.as_slice(),
            self.axis_len(),
            gradients,
            octave_count,
        )
    }
}

/// Builds [`NoiseTables`] from a seed.
///
/// Each axis gets an independent shuffle of `[0, N)`. Gradients are uniform
/// points on the unit sphere (elevation from `acos(2u - 1)`, azimuth from `2πv`).
/// The same seed and axis length always produce the same tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoiseTablesBuilder {
    seed: u64,
    axis_len: u32,
}

impl Default for NoiseTablesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseTablesBuilder {
    /// Seed `0`, axis length [`DEFAULT_AXIS_LEN`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            seed: 0,
            axis_len: DEFAULT_AXIS_LEN,
        }
    }

    /// Sets the RNG seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the per-axis length; must be a power of two.
    #[must_use]
    pub const fn axis_len(mut self, axis_len: u32) -> Self {
        self.axis_len = axis_len;
        self
    }

    /// Generates and validates the tables.
    pub fn build(self) -> Result<NoiseTables, TableError> {
        if !self.axis_len.is_power_of_two() {
            return Err(TableError::AxisLenNotPowerOfTwo(self.axis_len));
        }
        let n = self.axis_len;
        let mut rng = StdRng::seed_from_u64(self.seed);

        let mut permutation: Vec<u32> = Vec::with_capacity(3 * n as usize);
        for _ in 0..3 {
            let start = permutation.len();
            permutation.extend(0..n);
            permutation[start..].shuffle(&mut rng);
        }

        let mut gradients = Vec::with_capacity(3 * n as usize);
        for _ in 0..n {
            let elevation = (2.0 * rng.random::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
            let azimuth = TAU * rng.random::<f32>();
            let (sin_el, cos_el) = elevation.sin_cos();
            let (sin_az, cos_az) = azimuth.sin_cos();
            gradients.extend([cos_az * sin_el, sin_az * sin_el, cos_el]);
        }

        tracing::debug!(seed = self.seed, axis_len = n, "built noise tables");
        NoiseTables::from_parts(permutation, n, gradients)
    }
}
