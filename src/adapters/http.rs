use crate::core::Fetcher;
use crate::domain::model::RawPayload;
use crate::utils::error::Result;
use reqwest::{Client, StatusCode};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<RawPayload> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("Response status for {}: {}", url, status);

        // 只有 200 才讀取內容
        if status != StatusCode::OK {
            return Ok(RawPayload {
                status: status.as_u16(),
                body: Vec::new(),
            });
        }

        let body = response.bytes().await?;
        Ok(RawPayload {
            status: status.as_u16(),
            body: body.to_vec(),
        })
    }
}
