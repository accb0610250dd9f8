//! Paged carousel state with an animation lock.

mod controller;
mod types;

pub use controller::CarouselController;
pub use types::{CarouselPhase, Direction};
