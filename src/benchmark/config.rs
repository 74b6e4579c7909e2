use std::str::FromStr;

use serde::Serialize;

use crate::{Error, Result};

/// Configuration for a benchmark run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkConfig {
    /// Number of random elements fed to each workload
    pub size: usize,
    /// Number of elements kept by the top-K workload
    pub k: usize,
    /// Seed for the input generator
    pub seed: u64,
    /// Print the report as JSON instead of a table
    #[serde(skip)]
    pub json: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            size: 200_000,
            k: 100,
            seed: 42,
            json: false,
        }
    }
}

impl BenchmarkConfig {
    /// Parses `[SIZE] [K] [--json] [--seed N]`, falling back to defaults
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        let mut positional = 0;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "--json" => config.json = true,
                "--seed" => {
                    let value = args.next().ok_or_else(|| {
                        Error::InvalidArgument("--seed needs a value".to_string())
                    })?;
                    config.seed = parse_number("seed", value.as_ref())?;
                }
                other => {
                    match positional {
                        0 => config.size = parse_number("size", other)?,
                        1 => config.k = parse_number("k", other)?,
                        _ => {
                            return Err(Error::InvalidArgument(format!(
                                "unexpected argument: {}",
                                other
                            )))
                        }
                    }
                    positional += 1;
                }
            }
        }

        if config.k == 0 {
            return Err(Error::ZeroCapacity);
        }
        Ok(config)
    }

    /// Set the number of input elements
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the top-K bound
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Set the input seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enable or disable JSON output
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }
}

fn parse_number<N: FromStr>(name: &str, value: &str) -> Result<N> {
    value.parse().map_err(|_| {
        Error::InvalidArgument(format!(
            "{} must be a non-negative integer, got {:?}",
            name, value
        ))
    })
}
