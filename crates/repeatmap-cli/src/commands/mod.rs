pub mod describe;
pub mod style;
pub mod tables;
