// Domain layer: ratio models, presets and ports. No dependencies beyond std/serde.

pub mod model;
pub mod ports;
pub mod presets;
