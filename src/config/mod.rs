pub mod api;

pub use api::ApiConfig;

use crate::utils::error::{Result, ValidateError};
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "recip-validate")]
#[command(
    about = "Validate recipients with SparkPost. Checks a single email address, or reads \
             from the specified input file (or stdin). Results go to the specified output \
             file or stdout, so the tool can act as a filter."
)]
#[command(group(ArgGroup::new("input").args(["infile", "email"])))]
pub struct CliConfig {
    /// File to read email recipients from, in CSV format ('-' for stdin)
    #[arg(short, long)]
    pub infile: Option<PathBuf>,

    /// Email address to validate. May carry multiple addresses, comma-separated, no spaces
    #[arg(short, long)]
    pub email: Option<String>,

    /// File to write validation results to, in CSV format (defaults to stdout)
    #[arg(short, long)]
    pub outfile: Option<PathBuf>,

    /// Skip the pre-check of input file email syntax
    #[arg(long)]
    pub skip_precheck: bool,

    /// Number of validation requests kept in flight at once
    #[arg(long, default_value = "5")]
    pub concurrent_requests: usize,

    /// Seconds to wait before retrying a failed request
    #[arg(long, default_value = "10")]
    pub snooze: u64,

    /// Give up on an address after this many attempts (default: retry forever)
    #[arg(long)]
    pub max_attempts: Option<u32>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl CliConfig {
    pub fn validate(&self) -> Result<()> {
        if self.concurrent_requests < 1 {
            return Err(ValidateError::config(
                "concurrent_requests must be at least 1",
            ));
        }
        if self.max_attempts == Some(0) {
            return Err(ValidateError::config("max_attempts must be at least 1"));
        }
        if let Some(email) = &self.email {
            if email.trim().is_empty() {
                return Err(ValidateError::config("--email given but empty"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig::parse_from(["recip-validate"])
    }

    #[test]
    fn default_config_is_valid() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn rejects_zero_concurrency() {
        let mut config = base_config();
        config.concurrent_requests = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_max_attempts() {
        let mut config = base_config();
        config.max_attempts = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_empty_inline_email() {
        let mut config = base_config();
        config.email = Some("  ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn infile_and_email_are_mutually_exclusive() {
        let parsed = CliConfig::try_parse_from([
            "recip-validate",
            "--infile",
            "list.csv",
            "--email",
            "a@example.com",
        ]);
        assert!(parsed.is_err());
    }
}
