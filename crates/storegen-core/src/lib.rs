pub mod catalog;
pub mod config;
pub mod error;
pub mod generate;
pub mod load;
pub mod model;
pub mod output;

// Re-export key types for convenience
pub use error::{Result, StoreGenError};
pub use generate::{generate_dataset, Dataset, GenerateParams};
