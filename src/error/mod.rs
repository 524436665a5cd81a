/// Centralized error handling for claudernetes
pub mod generate;

pub use generate::{GenerateError, GenerateResult};
