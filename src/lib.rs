pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::calculators::{
    BreadCalculator, BreadInput, RiceCalculator, RiceInput, StarterCalculator, StarterInput,
};
pub use app::session::{FormSession, Selection};
pub use config::PresetCatalog;
pub use crate::core::{engine::CalcEngine, resolver::RatioResolver};
pub use domain::model::{OverPourPolicy, RatioSpec, Report, ResolutionResult, TopOff};
pub use utils::error::{CalcError, Result};
