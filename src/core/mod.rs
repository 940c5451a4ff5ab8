pub mod engine;
pub mod resolver;

pub use crate::domain::model::{RatioSpec, Report, ResolutionResult};
pub use crate::domain::ports::{Calculator, PresetSource};
pub use crate::utils::error::Result;
