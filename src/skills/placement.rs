use std::f64::consts::TAU;

use serde::Serialize;

use super::catalog::{sorted_by_weight, Skill, SKILLS};
use super::rng::Lcg;
use super::zone::{Ellipse, Zone};

pub const PLACEMENT_SEED: u32 = 42;
pub const MAX_ATTEMPTS: usize = 420;
/// Number of labels shown, without animation, when the user prefers reduced motion.
pub const REDUCED_MOTION_LIMIT: usize = 10;

/// Candidates with a normalized face distance up to this are rejected, a little
/// beyond the ellipse itself.
const FACE_SLACK: f64 = 1.05;
/// A draw above this switches the attempt to a uniform candidate over the zone.
const UNIFORM_THRESHOLD: f64 = 0.8;
const MAX_CLEARANCE: f64 = 13.0;
const MAX_NAME_CLEARANCE: f64 = 4.0;
const NAME_CLEARANCE_PER_CHAR: f64 = 0.14;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedLabel {
    pub name: String,
    pub weight: u8,
    /// Percent of the container width.
    pub x: f64,
    /// Percent of the container height.
    pub y: f64,
    /// Seconds.
    pub animation_duration: f64,
    /// Seconds.
    pub delay: f64,
}

/// How a label ended up where it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Outside the face and clear of every earlier label.
    Clean,
    /// Attempts ran out; the last candidate was kept regardless.
    Overlapping,
}

/// Immutable inputs of the generator besides the viewport.
#[derive(Debug, Clone, Copy)]
pub struct PlacementConfig<'a> {
    pub catalog: &'a [Skill],
    pub seed: u32,
    pub max_attempts: usize,
}

impl Default for PlacementConfig<'static> {
    fn default() -> Self {
        Self {
            catalog: SKILLS,
            seed: PLACEMENT_SEED,
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

struct Geometry {
    face: Ellipse,
    bias: Ellipse,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Geometry {
    fn new(zone: &Zone, is_mobile: bool) -> Self {
        let (face_x, bias_x, center_y) = if is_mobile {
            (0.42, 0.42, 58.0)
        } else {
            (0.45, 0.44, 60.0)
        };
        let (face_rx, face_ry) = if is_mobile { (12.0, 16.0) } else { (14.0, 18.0) };
        let (bias_rx, bias_ry) = if is_mobile { (0.6, 0.56) } else { (0.55, 0.5) };
        Self {
            face: Ellipse {
                cx: zone.left + zone.width * face_x,
                cy: center_y,
                rx: face_rx,
                ry: face_ry,
            },
            bias: Ellipse {
                cx: zone.left + zone.width * bias_x,
                cy: center_y,
                rx: zone.width * bias_rx,
                ry: zone.width * bias_ry,
            },
            x_min: zone.x_min(),
            x_max: zone.x_max(),
            y_min: zone.safe_top,
            y_max: zone.height_limit,
        }
    }

    fn clamp(&self, x: f64, y: f64) -> (f64, f64) {
        (clamp(x, self.x_min, self.x_max), clamp(y, self.y_min, self.y_max))
    }

    fn in_face(&self, (x, y): (f64, f64)) -> bool {
        self.face.norm_sq(x, y) <= FACE_SLACK
    }

    fn sample(&self, rng: &mut Lcg) -> (f64, f64) {
        let angle = rng.next_f64() * TAU;
        // sqrt keeps the samples uniform over the disk instead of piling up at its center
        let radius = rng.next_f64().sqrt();
        let biased_x = self.bias.cx + angle.cos() * self.bias.rx * radius;
        let biased_y = self.bias.cy + angle.sin() * self.bias.ry * radius;

        if rng.next_f64() > UNIFORM_THRESHOLD {
            let x = self.x_min + rng.next_f64() * (self.x_max - self.x_min);
            let y = self.y_min + rng.next_f64() * (self.y_max - self.y_min);
            self.clamp(x, y)
        } else {
            self.clamp(biased_x, biased_y)
        }
    }
}

// Mirrors min(max(v, lo), hi): never panics, unlike f64::clamp with lo > hi.
fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Distance another label must keep from a label of this skill.
fn clearance(skill: &Skill) -> f64 {
    let base = match skill.weight {
        4.. => 10.0,
        3 => 9.0,
        _ => 8.0,
    };
    let name_factor =
        (skill.name.chars().count() as f64 * NAME_CLEARANCE_PER_CHAR).min(MAX_NAME_CLEARANCE);
    (base + name_factor).min(MAX_CLEARANCE)
}

impl PlacementConfig<'_> {
    pub fn generate(&self, count: usize, is_mobile: bool, zone: &Zone) -> Vec<PositionedLabel> {
        self.generate_tagged(count, is_mobile, zone)
            .into_iter()
            .map(|(label, _)| label)
            .collect()
    }

    /// Like [`generate`](Self::generate), but reports whether each label found a
    /// clean spot or fell back to an overlapping one.
    pub fn generate_tagged(
        &self,
        count: usize,
        is_mobile: bool,
        zone: &Zone,
    ) -> Vec<(PositionedLabel, Placement)> {
        debug_assert!(zone.validate().is_ok(), "malformed zone {zone:?}");
        if count > 0 && self.catalog.is_empty() {
            log::warn!("asked to place {count} labels from an empty catalog");
            return Vec::new();
        }

        let mut rng = Lcg::new(self.seed);
        let geometry = Geometry::new(zone, is_mobile);
        let sorted = sorted_by_weight(self.catalog);
        let mut placed: Vec<(PositionedLabel, Placement)> = Vec::with_capacity(count);

        for i in 0..count {
            let skill = &sorted[i % sorted.len()];
            let threshold = clearance(skill);

            let mut point = geometry.clamp(geometry.bias.cx, geometry.bias.cy);
            let mut outcome = Placement::Overlapping;
            for _ in 0..self.max_attempts {
                point = geometry.sample(&mut rng);
                if geometry.in_face(point) {
                    continue;
                }
                let clear = placed
                    .iter()
                    .all(|(other, _)| (point.0 - other.x).hypot(point.1 - other.y) >= threshold);
                if clear {
                    outcome = Placement::Clean;
                    break;
                }
            }

            let animation_duration = 5.0 + rng.next_f64() * 2.2;
            let delay = rng.next_f64() * 1.4;
            placed.push((
                PositionedLabel {
                    name: skill.name.to_string(),
                    weight: skill.weight,
                    x: point.0,
                    y: point.1,
                    animation_duration,
                    delay,
                },
                outcome,
            ));
        }

        let overlapping = placed
            .iter()
            .filter(|(_, p)| *p == Placement::Overlapping)
            .count();
        log::debug!(
            "placed {count} skill labels (mobile: {is_mobile}, overlapping: {overlapping})"
        );
        placed
    }
}

/// Places `count` labels from the built-in catalog. Identical inputs always give
/// identical output.
pub fn generate_positions(count: usize, is_mobile: bool, zone: &Zone) -> Vec<PositionedLabel> {
    PlacementConfig::default().generate(count, is_mobile, zone)
}

/// Labels shown in the static, reduced-motion rendering.
pub fn static_subset(labels: &[PositionedLabel]) -> &[PositionedLabel] {
    &labels[..labels.len().min(REDUCED_MOTION_LIMIT)]
}
