pub mod lookup;
pub mod resolver;

pub use crate::domain::model::{DeliveryLocation, Depot, ServiceArea};
pub use crate::domain::ports::{AreaLookup, ConfigProvider, LocationStore};
pub use crate::utils::error::Result;
