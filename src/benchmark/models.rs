use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::benchmark::config::BenchmarkConfig;

/// Timing of one workload on one implementation
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkResult {
    pub workload: String,
    pub implementation: String,
    pub elements: usize,
    pub execution_time_ms: f64,
    /// Checksum of the workload output, equal across implementations
    pub checksum: u64,
}

/// Full report of a benchmark run
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    pub config: BenchmarkConfig,
    pub results: Vec<BenchmarkResult>,
    pub generated_at: DateTime<Utc>,
}

impl BenchmarkReport {
    pub fn new(config: BenchmarkConfig) -> Self {
        Self {
            config,
            results: Vec::new(),
            generated_at: Utc::now(),
        }
    }

    /// Returns true if every implementation of a workload produced the same checksum
    pub fn checksums_agree(&self) -> bool {
        self.results.iter().all(|result| {
            self.results
                .iter()
                .filter(|other| other.workload == result.workload)
                .all(|other| other.checksum == result.checksum)
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
