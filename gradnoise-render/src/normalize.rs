//! Maps a float field onto the full 8-bit range.

/// Smallest and largest value of a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRange {
    /// Smallest value.
    pub min: f32,
    /// Largest value.
    pub max: f32,
}

impl FieldRange {
    /// Scans `values`; `None` when empty.
    #[must_use]
    pub fn of(values: &[f32]) -> Option<Self> {
        let (&first, rest) = values.split_first()?;
        Some(rest.iter().fold(
            Self {
                min: first,
                max: first,
            },
            |range, &v| Self {
                min: range.min.min(v),
                max: range.max.max(v),
            },
        ))
    }

    /// `max - min`
    #[must_use]
    pub fn span(&self) -> f32 {
        self.max - self.min
    }
}

/// Rescales `values` so the minimum maps to `0` and the maximum to `255`.
///
/// A flat field (including a single sample) maps to all zeros.
#[must_use]
pub fn normalize_to_u8(values: &[f32]) -> Vec<u8> {
    let Some(range) = FieldRange::of(values) else {
        return Vec::new();
    };
    let scale = if range.max > range.min {
        255.0 / range.span()
    } else {
        0.0
    };
    values
        .iter()
        .map(|&v| ((v - range.min) * scale) as u8)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_has_no_range() {
        assert_eq!(FieldRange::of(&[]), None);
        assert!(normalize_to_u8(&[]).is_empty());
    }

    #[test]
    fn extremes_map_to_full_byte_range() {
        let pixels = normalize_to_u8(&[-0.5, 0.0, 0.25, 0.5]);
        assert_eq!(pixels, vec![0, 127, 191, 255]);
    }

    #[test]
    fn flat_field_is_black() {
        assert_eq!(normalize_to_u8(&[0.3; 5]), vec![0; 5]);
    }

    #[test]
    fn range_tracks_min_and_max() {
        let range = FieldRange::of(&[0.1, -0.4, 0.7, 0.2]).expect("non-empty");
        assert_eq!(
            range,
            FieldRange {
                min: -0.4,
                max: 0.7
            }
        );
        assert!((range.span() - 1.1).abs() < 1e-6);
    }
}
