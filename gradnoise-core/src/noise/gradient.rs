use std::f32::consts::PI;

use super::NoiseVector;

/// Maps a lattice hash to a gradient vector.
///
/// Implementations are selected statically: the kernel is generic over the
/// source, so choosing one never introduces a branch per sample.
pub trait GradientSource {
    /// Returns the gradient for `hash`, which is always in `[0, N)`.
    fn gradient<V: NoiseVector>(&self, hash: u32) -> V;
}

/// Gradients read from a precomputed table of packed `[x, y, z]` triples.
#[derive(Debug, Clone, Copy)]
pub struct TableGradients<'a> {
    components: &'a [f32],
}

impl<'a> TableGradients<'a> {
    /// Wraps a packed gradient table of `3 * N` floats.
    #[must_use]
    pub const fn new(components: &'a [f32]) -> Self {
        Self { components }
    }
}

impl GradientSource for TableGradients<'_> {
    #[inline]
    fn gradient<V: NoiseVector>(&self, hash: u32) -> V {
        let base = hash as usize * 3;
        debug_assert!(base + 2 < self.components.len());
        V::new(
            self.components[base],
            self.components[base + 1],
            self.components[base + 2],
        )
    }
}

/// Gradients derived on the fly from a Fibonacci sphere of `N` points.
///
/// Trades three transcendental calls per corner for not having to store the
/// gradient table. Point `h` sits at height `1 - 2(h + 0.5) / N` and is rotated
/// by `h` golden angles around the `y` axis, which spreads the `N` directions
/// nearly uniformly over the unit sphere.
#[derive(Debug, Clone, Copy)]
pub struct FibonacciGradients {
    axis_len: u32,
}

impl FibonacciGradients {
    /// `pi * (3 - sqrt(5))`
    const GOLDEN_ANGLE: f32 = PI * (3.0 - 2.236_068);

    /// Creates the analytic source for an `axis_len`-entry lattice.
    #[must_use]
    pub const fn new(axis_len: u32) -> Self {
        Self { axis_len }
    }
}

impl GradientSource for FibonacciGradients {
    #[inline]
    fn gradient<V: NoiseVector>(&self, hash: u32) -> V {
        let y = 1.0 - 2.0 * (hash as f32 + 0.5) / self.axis_len as f32;
        let radius = (1.0 - y * y).max(0.0).sqrt();
        let (sin, cos) = (hash as f32 * Self::GOLDEN_ANGLE).sin_cos();
        V::new(radius * cos, y, radius * sin)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn table_reads_packed_triples() {
        let table = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0];
        let source = TableGradients::new(&table);
        assert_eq!(source.gradient::<Vec3>(0), Vec3::X);
        assert_eq!(source.gradient::<Vec3>(1), Vec3::Y);
        assert_eq!(source.gradient::<[f32; 3]>(2), [0.0, 0.0, -1.0]);
    }

    #[test]
    fn fibonacci_gradients_are_unit_length() {
        for axis_len in [2, 16, 256, 4096] {
            let source = FibonacciGradients::new(axis_len);
            for hash in 0..axis_len {
                let g: Vec3 = source.gradient(hash);
                assert!(
                    (g.length() - 1.0).abs() < 1e-5,
                    "gradient {hash}/{axis_len} has length {}",
                    g.length()
                );
            }
        }
    }

    #[test]
    fn fibonacci_gradients_are_distinct() {
        let source = FibonacciGradients::new(64);
        let gradients: Vec<Vec3> = (0..64).map(|h| source.gradient(h)).collect();
        for (i, a) in gradients.iter().enumerate() {
            for b in &gradients[i + 1..] {
                assert!(a.distance(*b) > 1e-3);
            }
        }
    }
}
