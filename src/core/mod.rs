pub mod client;
pub mod input;
pub mod precheck;
pub mod runner;
pub mod writer;

pub use crate::domain::model::{PrecheckSummary, RunStats, ValidationOutcome, ValidationResult};
pub use crate::utils::error::Result;
pub use client::{RetryPolicy, ValidationClient};
pub use input::InputSource;
pub use writer::ResultWriter;
