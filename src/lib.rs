pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{ApiConfig, CliConfig};
pub use core::{RetryPolicy, ValidationClient};
pub use utils::error::{Result, ValidateError};
