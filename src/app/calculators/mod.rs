pub mod bread;
pub mod rice;
pub mod starter;

pub use bread::{BreadCalculator, BreadInput};
pub use rice::{RiceCalculator, RiceInput};
pub use starter::{StarterCalculator, StarterInput};
