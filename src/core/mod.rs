pub mod codec;
pub mod concat;
pub mod etl;
pub mod throttle;

pub use crate::domain::model::{LoadSummary, YearOutcome, YearRange};
pub use crate::domain::ports::{Fetcher, Pipeline, Storage};
pub use crate::utils::error::Result;
