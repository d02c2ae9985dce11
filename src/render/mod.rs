pub mod capsule;
pub mod cpu;
pub mod graphics;
pub mod record;
