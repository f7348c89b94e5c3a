use crate::domain::model::Vendor;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn user_agent(&self) -> &str;
    fn page_size(&self) -> usize;
}

/// Where vendor records come from. The engine only sees this seam.
#[async_trait]
pub trait VendorSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Vendor>>;
}
