use crate::domain::model::ServiceArea;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Durable key-value slot holding the persisted delivery location. A single
/// key holds a single value; writes fully replace the prior value.
pub trait LocationStore: Send + Sync {
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>>> + Send;
    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn remove(&self, key: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn lookup_endpoint(&self) -> &str;
    fn storage_path(&self) -> &str;
}

/// Returns the service areas covering a pincode, in server order. Ordering
/// matters: the resolver picks the first area carrying a depot.
#[async_trait]
pub trait AreaLookup: Send + Sync {
    async fn areas_by_pincode(&self, pincode: &str) -> Result<Vec<ServiceArea>>;
}
