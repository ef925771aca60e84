//! State behind the decorative animations. Components own a value from here and
//! drive it from timers, scroll events and animation frames.

pub mod lamp;
pub mod road;
pub mod typewriter;

pub use lamp::{AnchorRect, LampPosition};
pub use road::{Puff, PuffStyle, RoadCar};
pub use typewriter::Typewriter;
