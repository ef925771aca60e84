use std::collections::VecDeque;

use crate::skills::Lcg;

pub const ROAD_WIDTH: f64 = 30.0;
pub const ROAD_RADIUS: f64 = 12.0;
pub const ROAD_PADDING: f64 = 14.0;
pub const CAR_HEIGHT: f64 = 28.0;
pub const MAX_PUFFS: usize = 6;
/// Milliseconds.
pub const PUFF_LIFETIME: f64 = 900.0;

const SMOOTHING: f64 = 0.15;
const LINE_SPEED: f64 = 0.5;
const PUFF_VELOCITY: f64 = 0.5;
const PUFF_SPREAD: f64 = 12.0;
const PUFF_RISE: f64 = 0.04;
const PUFF_SEED: u32 = 1337;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Puff {
    pub id: u64,
    /// Horizontal offset from the road's center, px.
    pub x: f64,
    /// Timestamp in ms.
    pub created: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PuffStyle {
    pub top: f64,
    pub opacity: f64,
    pub scale: f64,
}

impl Puff {
    pub fn age(&self, now: f64) -> f64 {
        now - self.created
    }

    pub fn is_alive(&self, now: f64) -> bool {
        self.age(now) < PUFF_LIFETIME
    }

    pub fn style(&self, now: f64, car_y: f64) -> PuffStyle {
        let age = self.age(now);
        let remaining = 1.0 - age / PUFF_LIFETIME;
        PuffStyle {
            top: car_y + CAR_HEIGHT / 2.0 + age * PUFF_RISE,
            opacity: 0.35 * remaining,
            scale: 0.7 + 0.4 * remaining,
        }
    }
}

/// A little car that drives down a vertical road as the page scrolls, easing
/// toward the scroll position and puffing smoke while it moves.
#[derive(Debug, Clone)]
pub struct RoadCar {
    target: f64,
    progress: f64,
    velocity: f64,
    smooth_velocity: f64,
    last_scroll_y: f64,
    line_offset: f64,
    puffs: VecDeque<Puff>,
    next_puff: u64,
    rng: Lcg,
}

impl Default for RoadCar {
    fn default() -> Self {
        Self {
            target: 0.0,
            progress: 0.0,
            velocity: 0.0,
            smooth_velocity: 0.0,
            last_scroll_y: 0.0,
            line_offset: 0.0,
            puffs: VecDeque::with_capacity(MAX_PUFFS + 1),
            next_puff: 0,
            rng: Lcg::new(PUFF_SEED),
        }
    }
}

impl RoadCar {
    /// Records a scroll event. `max_scroll` is the document height minus the
    /// viewport height.
    pub fn on_scroll(&mut self, scroll_y: f64, max_scroll: f64) {
        let raw = if max_scroll > 0.0 {
            scroll_y / max_scroll
        } else {
            0.0
        };
        self.target = raw.clamp(0.0, 1.0);
        self.velocity = scroll_y - self.last_scroll_y;
        self.last_scroll_y = scroll_y;
    }

    /// Advances one animation frame at time `now` (ms).
    pub fn tick(&mut self, now: f64, reduced_motion: bool) {
        self.progress += (self.target - self.progress) * SMOOTHING;
        self.smooth_velocity += (self.velocity - self.smooth_velocity) * SMOOTHING;
        if reduced_motion {
            return;
        }

        self.line_offset += self.smooth_velocity * LINE_SPEED;
        if self.smooth_velocity.abs() > PUFF_VELOCITY {
            self.puffs.retain(|p| p.is_alive(now));
            self.puffs.push_back(Puff {
                id: self.next_puff,
                x: -PUFF_SPREAD / 2.0 + self.rng.next_f64() * PUFF_SPREAD,
                created: now,
            });
            self.next_puff += 1;
            while self.puffs.len() > MAX_PUFFS {
                self.puffs.pop_front();
            }
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn line_offset(&self) -> f64 {
        self.line_offset
    }

    /// Vertical position of the car inside a road `container_height` px tall.
    pub fn car_y(&self, container_height: f64) -> f64 {
        let usable = (container_height - CAR_HEIGHT - ROAD_PADDING * 2.0).max(0.0);
        ROAD_PADDING + usable * self.progress
    }

    pub fn visible_puffs(&self, now: f64) -> impl Iterator<Item = &Puff> {
        self.puffs.iter().filter(move |p| p.is_alive(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_eases_toward_target() {
        let mut car = RoadCar::default();
        car.on_scroll(500.0, 1000.0);
        car.tick(0.0, false);
        assert!((car.progress() - 0.075).abs() < 1e-12);
        for i in 1..200 {
            car.tick(f64::from(i) * 16.0, false);
        }
        assert!((car.progress() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_target_is_clamped() {
        let mut car = RoadCar::default();
        car.on_scroll(5000.0, 1000.0);
        for _ in 0..200 {
            car.tick(0.0, true);
        }
        assert!(car.progress() <= 1.0 && car.progress() > 0.99);

        let mut flat = RoadCar::default();
        flat.on_scroll(300.0, 0.0);
        flat.tick(0.0, true);
        assert_eq!(flat.progress(), 0.0);
    }

    #[test]
    fn test_car_y() {
        let mut car = RoadCar::default();
        assert_eq!(car.car_y(600.0), ROAD_PADDING);
        car.on_scroll(1000.0, 1000.0);
        for _ in 0..500 {
            car.tick(0.0, true);
        }
        assert!((car.car_y(600.0) - (14.0 + 544.0)).abs() < 1e-6);
        // a road shorter than the car keeps it at the top
        assert_eq!(car.car_y(20.0), ROAD_PADDING);
    }

    #[test]
    fn test_puffs_spawn_while_moving() {
        let mut car = RoadCar::default();
        car.on_scroll(400.0, 2000.0);
        car.tick(0.0, false);
        // smoothed velocity 60 is well above the threshold
        assert_eq!(car.visible_puffs(0.0).count(), 1);
        assert!(car.line_offset() > 0.0);
        for i in 1..20 {
            car.tick(f64::from(i), false);
        }
        assert_eq!(car.visible_puffs(20.0).count(), MAX_PUFFS);
        for puff in car.visible_puffs(20.0) {
            assert!((-6.0..6.0).contains(&puff.x));
        }
        assert_eq!(car.visible_puffs(20.0 + PUFF_LIFETIME).count(), 0);
    }

    #[test]
    fn test_reduced_motion_freezes_decoration() {
        let mut car = RoadCar::default();
        car.on_scroll(400.0, 2000.0);
        car.tick(0.0, true);
        assert_eq!(car.line_offset(), 0.0);
        assert_eq!(car.visible_puffs(0.0).count(), 0);
        assert!(car.progress() > 0.0);
    }

    #[test]
    fn test_puff_fades_with_age() {
        let puff = Puff {
            id: 0,
            x: 0.0,
            created: 100.0,
        };
        let fresh = puff.style(100.0, 50.0);
        assert_eq!(fresh.top, 64.0);
        assert!((fresh.opacity - 0.35).abs() < 1e-12);
        assert!((fresh.scale - 1.1).abs() < 1e-12);
        let old = puff.style(100.0 + PUFF_LIFETIME / 2.0, 50.0);
        assert!(old.opacity < fresh.opacity);
        assert!(old.scale < fresh.scale);
        assert!(old.top > fresh.top);
    }
}
