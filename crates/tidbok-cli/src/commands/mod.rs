pub mod config;
pub mod metrics;
pub mod report;
pub mod task;
pub mod timer;
