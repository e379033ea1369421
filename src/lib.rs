pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{Cli, Command, DownloadArgs};
pub use config::Settings;

pub use adapters::{http::HttpFetcher, storage::LocalStorage};
pub use app::commands::{download, run_download, DownloadRequest};
pub use app::datasets::Dataset;
pub use app::pipelines::YearRangePipeline;
pub use crate::core::{concat::ConcatPolicy, etl::EtlEngine, throttle::RateLimit};
pub use domain::model::{LoadSummary, YearOutcome, YearRange};
pub use utils::error::{EtlError, Result};
