use crate::core::Pipeline;
use crate::domain::model::LoadSummary;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<LoadSummary> {
        // Extract
        let frames = self.pipeline.extract().await?;
        tracing::debug!("Extracted {} yearly frames", frames.len());

        // Transform
        let combined = self.pipeline.transform(frames).await?;
        tracing::debug!("Combined frame shape: {:?}", combined.shape());

        // Load
        let summary = self.pipeline.load(combined).await?;
        tracing::debug!("Output saved to: {}", summary.path.display());

        Ok(summary)
    }
}
