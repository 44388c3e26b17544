pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{FileStore, TomlConfig};
pub use core::{lookup::HttpAreaLookup, resolver::DeliveryLocationService};
pub use domain::model::{DeliveryLocation, Depot, ServiceArea};
pub use utils::error::{LocatorError, Result};
