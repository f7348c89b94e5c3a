use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

const DEFAULT_ENDPOINT: &str = "http://data.sfgov.org/resource/bbb8-hzi6.json";
const DEFAULT_USER_AGENT: &str = concat!("food-truck-finder/", env!("CARGO_PKG_VERSION"));

/// The defaults reproduce a plain no-argument run against the SF dataset.
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "food-truck-finder")]
#[command(about = "Find SF food trucks that are open right now")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub api_endpoint: String,

    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    #[arg(long, default_value = "10")]
    pub page_size: usize,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn page_size(&self) -> usize {
        self.page_size
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_non_empty_string("user_agent", &self.user_agent)?;
        validate_positive_number("page_size", self.page_size, 1)?;
        Ok(())
    }
}
