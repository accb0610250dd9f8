pub mod path;
pub mod sizes;

pub use path::*;
pub use sizes::*;
