pub mod balloon;
pub mod color;

pub use balloon::{Balloon, NORTH, SOUTH};
pub use color::{BalloonColor, UnknownColor};
