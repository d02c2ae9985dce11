//! The humanoid figure: measurements, construction and the channel-driven pose.

pub mod pose;
pub mod proportions;
pub mod skeleton;

pub use proportions::Proportions;
pub use skeleton::{Arm, Finger, Skeleton};
