//! Floating skill labels for the hero banner.
//!
//! The viewport width picks a device class, which fixes how many labels to draw
//! and where they may go. [`generate_positions`] then lays the labels out with a
//! seeded generator so the same viewport always produces the same picture: it
//! keeps labels off the portrait in the middle of the banner and away from each
//! other, and gives up gracefully (accepting an overlap) when the zone is full.

mod catalog;
mod placement;
mod rng;
mod style;
mod viewport;
mod zone;

pub use catalog::{sorted_by_weight, Skill, SKILLS};
pub use placement::{
    generate_positions, static_subset, Placement, PlacementConfig, PositionedLabel, MAX_ATTEMPTS,
    PLACEMENT_SEED, REDUCED_MOTION_LIMIT,
};
pub use rng::Lcg;
pub use style::{weight_to_style, LabelStyle};
pub use viewport::{DeviceClass, ViewportConfig, DESKTOP_MIN_WIDTH, TABLET_MIN_WIDTH};
pub use zone::{Ellipse, Zone, ZoneError};
