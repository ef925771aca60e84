const MIN_FONT_SIZE: f64 = 13.0;
const MAX_FONT_SIZE: f64 = 24.0;
const MIN_OPACITY: f64 = 0.45;
const MAX_OPACITY: f64 = 0.9;
const MIN_FONT_WEIGHT: f64 = 400.0;
const MAX_FONT_WEIGHT: f64 = 600.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelStyle {
    /// Pixels.
    pub font_size: f64,
    pub opacity: f64,
    pub font_weight: u16,
}

/// Linear interpolation from the faintest (weight 1) to the boldest (weight 5) label.
pub fn weight_to_style(weight: u8) -> LabelStyle {
    debug_assert!((1..=5).contains(&weight), "weight {weight} outside 1..=5");
    let t = (f64::from(weight) - 1.0) / 4.0;
    LabelStyle {
        font_size: MIN_FONT_SIZE + (MAX_FONT_SIZE - MIN_FONT_SIZE) * t,
        opacity: MIN_OPACITY + (MAX_OPACITY - MIN_OPACITY) * t,
        font_weight: (MIN_FONT_WEIGHT + (MAX_FONT_WEIGHT - MIN_FONT_WEIGHT) * t).round() as u16,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(
            weight_to_style(1),
            LabelStyle {
                font_size: 13.0,
                opacity: 0.45,
                font_weight: 400
            }
        );
        assert_eq!(
            weight_to_style(5),
            LabelStyle {
                font_size: 24.0,
                opacity: 0.9,
                font_weight: 600
            }
        );
    }

    #[test]
    fn test_midpoints() {
        let mid = weight_to_style(3);
        assert_eq!(mid.font_size, 18.5);
        assert!((mid.opacity - 0.675).abs() < 1e-12);
        assert_eq!(mid.font_weight, 500);
        assert_eq!(weight_to_style(2).font_weight, 450);
        assert_eq!(weight_to_style(4).font_weight, 550);
    }

    #[test]
    fn test_monotonic_in_weight() {
        for w in 1..5 {
            let (a, b) = (weight_to_style(w), weight_to_style(w + 1));
            assert!(a.font_size < b.font_size);
            assert!(a.opacity < b.opacity);
            assert!(a.font_weight < b.font_weight);
        }
    }
}
