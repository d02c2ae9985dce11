//! Cosmetic face features drawn with custom geometry instead of capsules.

pub mod eye;
pub mod mouth;

pub use eye::Eye;
pub use mouth::Mouth;
