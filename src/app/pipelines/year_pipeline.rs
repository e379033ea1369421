use crate::app::datasets::Dataset;
use crate::core::codec::{read_payload, write_csv};
use crate::core::concat::{concat_diagonal, with_year};
use crate::core::throttle::RateLimit;
use crate::core::{Fetcher, LoadSummary, Pipeline, Storage, YearOutcome, YearRange};
use crate::domain::model::{AbsentReason, ParseErrorPolicy};
use crate::utils::error::{EtlError, Result};
use polars::prelude::DataFrame;
use std::path::PathBuf;

/// Downloads one dataset year by year, combines the years and writes a CSV.
pub struct YearRangePipeline<S: Storage, F: Fetcher> {
    pub(crate) dataset: Dataset,
    pub(crate) years: YearRange,
    pub(crate) base_url: String,
    pub(crate) output_path: PathBuf,
    pub(crate) storage: S,
    pub(crate) fetcher: F,
    pub(crate) rate_limit: RateLimit,
}

impl<S: Storage, F: Fetcher> YearRangePipeline<S, F> {
    pub fn new(
        dataset: Dataset,
        years: YearRange,
        base_url: impl Into<String>,
        output_path: impl Into<PathBuf>,
        storage: S,
        fetcher: F,
    ) -> Self {
        Self {
            dataset,
            years,
            base_url: base_url.into(),
            output_path: output_path.into(),
            storage,
            fetcher,
            rate_limit: RateLimit::default(),
        }
    }

    pub fn with_rate_limit(mut self, rate_limit: RateLimit) -> Self {
        self.rate_limit = rate_limit;
        self
    }

    /// Fetches and decodes a single year. Never fails: every outcome,
    /// including decode errors, is returned for the caller to judge.
    pub async fn fetch_year(&self, year: u32) -> YearOutcome {
        let url = self.dataset.url(&self.base_url, year);
        tracing::debug!("Making request to: {}", url);

        let payload = match self.fetcher.fetch(&url).await {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!("Error downloading {}: {}", year, e);
                return YearOutcome::Absent(AbsentReason::Transport(e.to_string()));
            }
        };

        if payload.status != 200 {
            tracing::warn!("Failed to download {}: HTTP {}", year, payload.status);
            return YearOutcome::Absent(AbsentReason::HttpStatus(payload.status));
        }

        match read_payload(self.dataset.payload_format(), &payload.body)
            .and_then(|frame| with_year(frame, year))
        {
            Ok(frame) => YearOutcome::Success(frame),
            Err(e) => YearOutcome::ParseError(e),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, F: Fetcher> Pipeline for YearRangePipeline<S, F> {
    async fn extract(&self) -> Result<Vec<DataFrame>> {
        let label = self.dataset.label();
        let total = self.years.len();
        tracing::info!(
            "Downloading {} data ({}-{})...",
            label,
            self.years.start,
            self.years.end
        );

        let mut frames = Vec::new();
        for (idx, year) in self.years.years().enumerate() {
            tracing::info!("[{}/{}] {} data {}", idx + 1, total, label, year);

            let outcome = self.fetch_year(year).await;
            // 不論結果如何都先等待，避免對來源主機請求過快
            self.rate_limit.pause().await;

            match outcome {
                YearOutcome::Success(frame) => {
                    tracing::debug!("Downloaded {}: {} rows", year, frame.height());
                    frames.push(frame);
                }
                YearOutcome::Absent(_) => {}
                YearOutcome::ParseError(e) => match self.dataset.parse_error_policy() {
                    ParseErrorPolicy::Fatal => {
                        tracing::error!("Failed to parse {} data for {}: {}", label, year, e);
                        return Err(e);
                    }
                    ParseErrorPolicy::Skip => {
                        tracing::warn!("Downloaded {} but failed to parse: {}", year, e);
                    }
                },
            }
        }

        if frames.is_empty() {
            tracing::error!("No {} data downloaded", label);
            return Err(EtlError::NoData {
                dataset: label.to_string(),
            });
        }

        Ok(frames)
    }

    async fn transform(&self, frames: Vec<DataFrame>) -> Result<DataFrame> {
        let combined = concat_diagonal(frames, self.dataset.concat_policy())?;
        tracing::info!(
            "✅ Combined {} data: {:?}",
            self.dataset.label(),
            combined.shape()
        );
        Ok(combined)
    }

    async fn load(&self, mut frame: DataFrame) -> Result<LoadSummary> {
        let data = write_csv(&mut frame)?;
        tracing::debug!("Writing {} bytes to {}", data.len(), self.output_path.display());
        self.storage.write_file(&self.output_path, &data).await?;

        let (rows, columns) = frame.shape();
        tracing::info!(
            "✅ Saved {} data: ({}, {}) → {}",
            self.dataset.label(),
            rows,
            columns,
            self.output_path.display()
        );

        Ok(LoadSummary {
            path: self.output_path.clone(),
            rows,
            columns,
        })
    }
}
