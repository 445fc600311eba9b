//! Perlin-style gradient noise kernel.
//!
//! Both functions are generic over the vector representation and the gradient
//! source; [`super::evaluate_noise`] and [`super::evaluate_noise_octaves`] pin
//! them to [`glam::Vec3`] and a gradient table.

use super::{GradientSource, NoiseVector, noise_hash};
use crate::math::{lerp, split_cell};

/// Samples one octave of noise at `(x, y, z)`.
///
/// The point is split into its lattice cell and the fractional offset `f`
/// inside it. Each of the eight cell corners contributes the dot product of its
/// gradient with the vector from that corner to the point, and the
/// contributions are blended with quintic weights along x, then y, then z.
///
/// The result is continuous with continuous first and second derivatives, and
/// is exactly `0` at every lattice point.
#[must_use]
pub fn sample<V, G>(
    x: f32,
    y: f32,
    z: f32,
    permutation_table: &[u32],
    permutation_axis_len: u32,
    gradients: &G,
) -> f32
where
    V: NoiseVector,
    G: GradientSource,
{
    let (ix, fx) = split_cell(x);
    let (iy, fy) = split_cell(y);
    let (iz, fz) = split_cell(z);

    let f = V::new(fx, fy, fz);
    let f2 = f.mul(f);
    let alpha = f2.mul(f).mul(
        V::splat(6.0)
            .mul(f2)
            .sub(V::splat(15.0).mul(f))
            .add(V::splat(10.0)),
    );

    let corner = |dx: i32, dy: i32, dz: i32| -> f32 {
        let hash = noise_hash(
            ix.wrapping_add(dx),
            iy.wrapping_add(dy),
            iz.wrapping_add(dz),
            permutation_table,
            permutation_axis_len,
        );
        let gradient: V = gradients.gradient(hash);
        gradient.dot(f.sub(V::new(dx as f32, dy as f32, dz as f32)))
    };

    let p000 = corner(0, 0, 0);
    let p001 = corner(0, 0, 1);
    let p010 = corner(0, 1, 0);
    let p011 = corner(0, 1, 1);
    let p100 = corner(1, 0, 0);
    let p101 = corner(1, 0, 1);
    let p110 = corner(1, 1, 0);
    let p111 = corner(1, 1, 1);

    let x00 = lerp(p000, p100, alpha.x());
    let x01 = lerp(p001, p101, alpha.x());
    let x10 = lerp(p010, p110, alpha.x());
    let x11 = lerp(p011, p111, alpha.x());
    let y0 = lerp(x00, x10, alpha.y());
    let y1 = lerp(x01, x11, alpha.y());
    lerp(y0, y1, alpha.z())
}

/// Sums `octave_count` octaves of [`sample`].
///
/// Octave `i` is sampled at `2^i` times the input frequency with amplitude
/// `0.5^(i + 1)`. Octaves are accumulated in ascending order so the result is
/// reproducible bit for bit.
///
/// Summation stops once `2^i` overflows `f32` (from octave 128 on). Those
/// octaves have amplitude below `2^-128` and cannot be sampled at a finite
/// coordinate.
#[must_use]
pub fn sample_octaves<V, G>(
    x: f32,
    y: f32,
    z: f32,
    permutation_table: &[u32],
    permutation_axis_len: u32,
    gradients: &G,
    octave_count: u32,
) -> f32
where
    V: NoiseVector,
    G: GradientSource,
{
    let mut sum = 0.0;
    let mut amplitude = 0.5;
    let mut scale: f32 = 1.0;
    for _ in 0..octave_count {
        if scale.is_infinite() {
            break;
        }
        sum += amplitude
            * sample::<V, G>(
                x * scale,
                y * scale,
                z * scale,
                permutation_table,
                permutation_axis_len,
                gradients,
            );
        amplitude *= 0.5;
        scale *= 2.0;
    }
    sum
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::noise::{FibonacciGradients, TableGradients};

    fn smootherstep(t: f32) -> f32 {
        t * t * t * (6.0 * t * t - 15.0 * t + 10.0)
    }

    fn identity_tables(axis_len: u32) -> (Vec<u32>, Vec<f32>) {
        let permutation = (0..3).flat_map(|_| 0..axis_len).collect();
        let gradients = (0..axis_len).flat_map(|_| [1.0, 0.0, 0.0]).collect();
        (permutation, gradients)
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn lattice_points_are_zero() {
        let (permutation, gradients) = identity_tables(16);
        let table = TableGradients::new(&gradients);
        let fibonacci = FibonacciGradients::new(16);
        for (x, y, z) in [(0, 0, 0), (3, -7, 12), (-1, -1, -1), (100, 5, -33)] {
            let (x, y, z) = (x as f32, y as f32, z as f32);
            assert_eq!(sample::<Vec3, _>(x, y, z, &permutation, 16, &table), 0.0);
            assert_eq!(
                sample::<[f32; 3], _>(x, y, z, &permutation, 16, &fibonacci),
                0.0
            );
        }
    }

    #[test]
    fn constant_x_gradient_reduces_to_one_dimensional_ramp() {
        // With every gradient equal to +X each corner contributes `f.x - dx`,
        // so the blend collapses to `f.x - smootherstep(f.x)`.
        let (permutation, gradients) = identity_tables(256);
        let table = TableGradients::new(&gradients);
        for (x, y, z) in [(0.25, 0.5, 0.75), (1.8, -0.3, 4.1), (-2.6, 9.9, 0.01)] {
            let fx = x - f32::floor(x);
            let expected = fx - smootherstep(fx);
            let actual = sample::<Vec3, _>(x, y, z, &permutation, 256, &table);
            assert!(
                (actual - expected).abs() < 1e-6,
                "({x}, {y}, {z}): expected {expected}, got {actual}"
            );
        }
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn zero_octaves_is_zero() {
        let (permutation, gradients) = identity_tables(16);
        let table = TableGradients::new(&gradients);
        assert_eq!(
            sample_octaves::<Vec3, _>(0.3, 0.2, 0.1, &permutation, 16, &table, 0),
            0.0
        );
    }
}
