use thiserror::Error;

/// Rectangular placement band, in percent of the containing area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zone {
    pub left: f64,
    pub width: f64,
    /// Minimum horizontal inset from the band edges.
    pub padding: f64,
    /// Labels are never placed above this line.
    pub safe_top: f64,
    pub height_limit: f64,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ZoneError {
    #[error("zone coordinates must be finite")]
    NotFinite,
    #[error("padding {padding} leaves no room in a band {width} wide")]
    PaddingTooWide { padding: f64, width: f64 },
    #[error("safe top {safe_top} is not above height limit {height_limit}")]
    EmptyVerticalBand { safe_top: f64, height_limit: f64 },
}

impl Zone {
    pub fn new(
        left: f64,
        width: f64,
        padding: f64,
        safe_top: f64,
        height_limit: f64,
    ) -> Result<Self, ZoneError> {
        let zone = Self {
            left,
            width,
            padding,
            safe_top,
            height_limit,
        };
        zone.validate()?;
        Ok(zone)
    }

    pub fn validate(&self) -> Result<(), ZoneError> {
        let fields = [
            self.left,
            self.width,
            self.padding,
            self.safe_top,
            self.height_limit,
        ];
        if fields.iter().any(|v| !v.is_finite()) {
            return Err(ZoneError::NotFinite);
        }
        if self.padding >= self.width / 2.0 {
            return Err(ZoneError::PaddingTooWide {
                padding: self.padding,
                width: self.width,
            });
        }
        if self.safe_top >= self.height_limit {
            return Err(ZoneError::EmptyVerticalBand {
                safe_top: self.safe_top,
                height_limit: self.height_limit,
            });
        }
        Ok(())
    }

    pub fn x_min(&self) -> f64 {
        self.left + self.padding
    }

    pub fn x_max(&self) -> f64 {
        self.left + self.width - self.padding
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        (self.x_min()..=self.x_max()).contains(&x) && (self.safe_top..=self.height_limit).contains(&y)
    }
}

/// Axis-aligned ellipse in zone coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub cx: f64,
    pub cy: f64,
    pub rx: f64,
    pub ry: f64,
}

impl Ellipse {
    /// Squared normalized distance from the center; 1.0 is the boundary.
    pub fn norm_sq(&self, x: f64, y: f64) -> f64 {
        let nx = (x - self.cx) / self.rx;
        let ny = (y - self.cy) / self.ry;
        nx * nx + ny * ny
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_zone() {
        let zone = Zone::new(0.0, 100.0, 3.0, 14.0, 94.0).unwrap();
        assert_eq!(zone.x_min(), 3.0);
        assert_eq!(zone.x_max(), 97.0);
        assert!(zone.contains(3.0, 14.0));
        assert!(zone.contains(97.0, 94.0));
        assert!(!zone.contains(2.9, 50.0));
        assert!(!zone.contains(50.0, 94.1));
    }

    #[test]
    fn test_malformed_zones_are_rejected() {
        assert_eq!(
            Zone::new(0.0, 10.0, 5.0, 14.0, 94.0),
            Err(ZoneError::PaddingTooWide {
                padding: 5.0,
                width: 10.0
            })
        );
        assert_eq!(
            Zone::new(0.0, 100.0, 3.0, 94.0, 94.0),
            Err(ZoneError::EmptyVerticalBand {
                safe_top: 94.0,
                height_limit: 94.0
            })
        );
        assert_eq!(
            Zone::new(f64::NAN, 100.0, 3.0, 14.0, 94.0),
            Err(ZoneError::NotFinite)
        );
    }

    #[test]
    fn test_ellipse_norm() {
        let face = Ellipse {
            cx: 45.0,
            cy: 60.0,
            rx: 14.0,
            ry: 18.0,
        };
        assert_eq!(face.norm_sq(45.0, 60.0), 0.0);
        assert_eq!(face.norm_sq(59.0, 60.0), 1.0);
        assert_eq!(face.norm_sq(45.0, 42.0), 1.0);
        assert!(face.norm_sq(60.0, 60.0) > 1.0);
    }
}
