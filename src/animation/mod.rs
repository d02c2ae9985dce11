pub mod animator;
pub mod channels;
