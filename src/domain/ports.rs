use crate::domain::model::{LoadSummary, RawPayload};
use crate::utils::error::Result;
use async_trait::async_trait;
use polars::prelude::DataFrame;
use std::path::Path;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &Path,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Issues one GET. Non-2xx statuses are returned, not raised; only
/// transport failures are errors.
pub trait Fetcher: Send + Sync {
    fn fetch(&self, url: &str) -> impl std::future::Future<Output = Result<RawPayload>> + Send;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<DataFrame>>;
    async fn transform(&self, frames: Vec<DataFrame>) -> Result<DataFrame>;
    async fn load(&self, frame: DataFrame) -> Result<LoadSummary>;
}
