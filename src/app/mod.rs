pub mod calculators;
pub mod render;
pub mod session;
