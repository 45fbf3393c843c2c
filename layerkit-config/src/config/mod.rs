// Configuration loading and validation

pub mod loader;
pub mod validation;

pub use loader::*;
pub use validation::*;
