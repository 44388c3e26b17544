use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "snf-locator")]
#[command(about = "Resolve and persist the storefront delivery location by pincode")]
pub struct CliConfig {
    /// 6-digit pincode to resolve into a delivery location
    pub pincode: Option<String>,

    #[arg(long, default_value = "http://localhost:8080/api/v1")]
    pub lookup_endpoint: String,

    #[arg(long, default_value = "./.snf-locator")]
    pub storage_path: String,

    #[arg(long, help = "Load lookup/storage settings from a TOML file")]
    pub config: Option<String>,

    #[arg(long, help = "Clear the current delivery location and exit")]
    pub clear: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn lookup_endpoint(&self) -> &str {
        &self.lookup_endpoint
    }

    fn storage_path(&self) -> &str {
        &self.storage_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("lookup_endpoint", &self.lookup_endpoint)?;
        validate_non_empty_string("storage_path", &self.storage_path)?;
        Ok(())
    }
}
