pub const LAMP_SIZE: f64 = 52.0;
/// Gap between the anchor's top edge and the bottom of the shade.
pub const LAMP_SPACING: f64 = 40.0;
pub const SHADE_RATIO: f64 = 0.6;

/// Page rectangle the lamp hangs above, in px.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnchorRect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LampPosition {
    /// Top of the shade.
    pub top: f64,
    /// Horizontal center of the cord and shade.
    pub left: f64,
    pub cord_height: f64,
}

impl LampPosition {
    pub fn above(anchor: AnchorRect) -> Self {
        let bottom = anchor.top - LAMP_SPACING;
        let top = bottom - LAMP_SIZE * SHADE_RATIO;
        Self {
            top,
            left: anchor.left + anchor.width / 2.0,
            cord_height: top.max(0.0),
        }
    }

    pub fn shade_height(&self) -> f64 {
        LAMP_SIZE * SHADE_RATIO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hangs_above_anchor() {
        let lamp = LampPosition::above(AnchorRect {
            top: 400.0,
            left: 10.0,
            width: 40.0,
        });
        assert!((lamp.top - 328.8).abs() < 1e-9);
        assert_eq!(lamp.left, 30.0);
        assert_eq!(lamp.cord_height, lamp.top);
    }

    #[test]
    fn test_cord_never_negative() {
        let lamp = LampPosition::above(AnchorRect {
            top: 20.0,
            left: 0.0,
            width: 0.0,
        });
        assert!(lamp.top < 0.0);
        assert_eq!(lamp.cord_height, 0.0);
    }
}
