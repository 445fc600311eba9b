//! Scalar helpers shared by the noise kernel.

/// Splits `value` into its integer lattice cell and the offset inside it.
///
/// The offset is computed in float as `value - value.floor()`, so it stays in
/// `[0, 1]` however large `value` is. The cell wraps modulo `2^32` once it
/// leaves the `i32` range, which keeps its residue modulo any power-of-two
/// table length. Infinite values map to cell `0` with offset `0`; NaN
/// propagates through the offset.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn split_cell(value: f32) -> (i32, f32) {
    if value.is_infinite() {
        return (0, 0.0);
    }
    let cell = value.floor();
    ((cell as i64) as i32, value - cell)
}

/// Linear interpolation written as `a * (1 - t) + b * t`.
///
/// This form returns exactly `a` at `t == 0` and exactly `b` at `t == 1`.
#[inline]
#[must_use]
pub const fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn split_cell_rounds_towards_negative_infinity() {
        assert_eq!(split_cell(1.5), (1, 0.5));
        assert_eq!(split_cell(-0.25), (-1, 0.75));
        assert_eq!(split_cell(-1.0), (-1, 0.0));
        assert_eq!(split_cell(0.0), (0, 0.0));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn split_cell_wraps_past_i32_range() {
        // 3e9 is exactly representable; the cell wraps to 3e9 - 2^32.
        assert_eq!(split_cell(3.0e9), (-1_294_967_296, 0.0));
        assert_eq!(split_cell(-3.0e9), (1_294_967_296, 0.0));
        // 3e9 = 11_718_750 * 256, so the masked residue is still 0.
        assert_eq!(split_cell(3.0e9).0 & 255, 0);
        assert_eq!(split_cell(f32::INFINITY), (0, 0.0));
        assert_eq!(split_cell(f32::NEG_INFINITY), (0, 0.0));
        assert!(split_cell(f32::NAN).1.is_nan());
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn lerp_hits_endpoints_exactly() {
        assert_eq!(lerp(0.3, -0.7, 0.0), 0.3);
        assert_eq!(lerp(0.3, -0.7, 1.0), -0.7);
    }
}
