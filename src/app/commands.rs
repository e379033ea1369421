use crate::adapters::http::HttpFetcher;
use crate::adapters::storage::LocalStorage;
use crate::app::datasets::Dataset;
use crate::app::pipelines::YearRangePipeline;
use crate::config::settings::Settings;
use crate::core::etl::EtlEngine;
use crate::core::throttle::RateLimit;
use crate::core::{Fetcher, LoadSummary, Storage, YearRange};
use crate::utils::error::Result;
use std::path::PathBuf;

/// One download command: which dataset, which seasons, where to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub dataset: Dataset,
    pub years: YearRange,
    pub output_path: Option<PathBuf>,
}

impl DownloadRequest {
    pub fn new(dataset: Dataset, years: YearRange) -> Self {
        Self {
            dataset,
            years,
            output_path: None,
        }
    }

    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(output_path.into());
        self
    }

    /// 未指定輸出路徑時使用 `{raw_data_dir}/{dataset 檔名}`
    pub fn resolve_output_path(&self, settings: &Settings) -> PathBuf {
        self.output_path.clone().unwrap_or_else(|| {
            settings
                .raw_data_dir()
                .join(self.dataset.default_file_name())
        })
    }
}

/// Runs a download against the real provider over HTTP and writes to disk.
pub async fn download(request: &DownloadRequest, settings: &Settings) -> Result<LoadSummary> {
    let fetcher = HttpFetcher::new(settings.timeout())?;
    run_download(request, settings, LocalStorage, fetcher).await
}

pub async fn run_download<S: Storage, F: Fetcher>(
    request: &DownloadRequest,
    settings: &Settings,
    storage: S,
    fetcher: F,
) -> Result<LoadSummary> {
    let output_path = request.resolve_output_path(settings);
    let pipeline = YearRangePipeline::new(
        request.dataset,
        request.years,
        request.dataset.base_url(settings),
        output_path,
        storage,
        fetcher,
    )
    .with_rate_limit(RateLimit::new(settings.request_delay()));

    EtlEngine::new(pipeline).run().await
}
