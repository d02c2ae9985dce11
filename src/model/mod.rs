pub mod point;
pub mod shape;
pub mod store;
