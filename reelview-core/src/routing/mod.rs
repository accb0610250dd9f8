//! Client-side routes and an in-memory history stack.

mod navigator;
mod route;

pub use navigator::Navigator;
pub use route::{Route, Section};
