pub mod config;
pub mod models;
pub mod runner;

pub use config::BenchmarkConfig;
pub use models::{BenchmarkReport, BenchmarkResult};
pub use runner::run_benchmarks;
