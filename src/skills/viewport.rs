use super::zone::Zone;

pub const TABLET_MIN_WIDTH: f64 = 768.0;
pub const DESKTOP_MIN_WIDTH: f64 = 1024.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceClass {
    /// Width that cannot be measured (server render, NaN) counts as desktop.
    pub fn from_width(width: f64) -> Self {
        if width.is_nan() || width >= DESKTOP_MIN_WIDTH {
            Self::Desktop
        } else if width >= TABLET_MIN_WIDTH {
            Self::Tablet
        } else {
            Self::Mobile
        }
    }
}

/// Everything the placement generator needs to know about the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportConfig {
    pub class: DeviceClass,
    pub count: usize,
    pub zone: Zone,
}

impl ViewportConfig {
    pub fn for_width(width: f64) -> Self {
        Self::for_class(DeviceClass::from_width(width))
    }

    pub fn for_class(class: DeviceClass) -> Self {
        let (count, padding, safe_top, height_limit) = match class {
            DeviceClass::Mobile => (20, 4.0, 18.0, 92.0),
            DeviceClass::Tablet => (30, 3.5, 16.0, 93.0),
            DeviceClass::Desktop => (42, 3.0, 14.0, 94.0),
        };
        Self {
            class,
            count,
            zone: Zone {
                left: 0.0,
                width: 100.0,
                padding,
                safe_top,
                height_limit,
            },
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.class == DeviceClass::Mobile
    }
}
