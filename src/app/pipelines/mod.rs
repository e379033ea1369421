pub mod year_pipeline;

pub use year_pipeline::YearRangePipeline;
