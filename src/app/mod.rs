// Application layer: datasets, pipelines and the command handlers wiring them.

pub mod commands;
pub mod datasets;
pub mod pipelines;
