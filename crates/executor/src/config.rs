use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use super::error::Error;
use fw_bench_core::WeightRange;

#[derive(Debug, Deserialize, Clone)]
pub struct BenchmarkConfig {
    pub sizes: Vec<usize>,
    pub densities: Vec<f64>,
    pub iterations: usize,
    pub progress_interval: usize,
}

impl BenchmarkConfig {
    /// Number of records a full sweep produces.
    pub fn total_runs(&self) -> usize {
        self.sizes.len() * self.densities.len() * self.iterations
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeneratorConfig {
    pub min_weight: i64,
    pub max_weight: i64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    pub fn weight_range(&self) -> Result<WeightRange, Error> {
        Ok(WeightRange::new(self.min_weight, self.max_weight)?)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub file_prefix: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExecutorConfig {
    pub buffer_size: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub benchmark: BenchmarkConfig,
    pub generator: GeneratorConfig,
    pub output: OutputConfig,
    pub executor: ExecutorConfig,
}

impl Config {
    /// Rejects settings the sweep cannot run with.
    pub fn validate(&self) -> Result<(), Error> {
        let bench = &self.benchmark;

        if bench.sizes.is_empty() || bench.densities.is_empty() {
            return Err(Error::ConfigLoadError(
                "benchmark.sizes and benchmark.densities must not be empty".to_string(),
            ));
        }
        if let Some(size) = bench.sizes.iter().find(|&&n| n == 0) {
            return Err(Error::ConfigLoadError(format!(
                "benchmark.sizes contains an invalid vertex count: {}",
                size
            )));
        }
        if let Some(density) = bench
            .densities
            .iter()
            .find(|d| !(0.0..=1.0).contains(*d))
        {
            return Err(Error::ConfigLoadError(format!(
                "benchmark.densities contains a value outside [0, 1]: {}",
                density
            )));
        }
        if bench.iterations == 0 || bench.progress_interval == 0 {
            return Err(Error::ConfigLoadError(
                "benchmark.iterations and benchmark.progress_interval must be at least 1"
                    .to_string(),
            ));
        }
        if self.executor.buffer_size == 0 {
            return Err(Error::ConfigLoadError(
                "executor.buffer_size must be at least 1".to_string(),
            ));
        }

        self.generator.weight_range()?;
        Ok(())
    }
}

/// Loads configuration from a file and environment variables.
///
/// Environment keys use `__` between sections and fields, e.g.
/// `EXECUTOR_BENCHMARK__ITERATIONS=5` or `EXECUTOR_GENERATOR__SEED=42`.
pub fn load_config() -> Result<Config, Error> {
    let base_path = env::current_dir().map_err(|e| {
        Error::ConfigLoadError(format!("Failed to determine current directory: {}", e))
    })?;

    let config_file_path: PathBuf = base_path
        .join("crates")
        .join("executor")
        .join("Config.toml");

    if !config_file_path.exists() {
        return Err(Error::ConfigLoadError(format!(
            "Configuration file not found at calculated path: {}",
            config_file_path.display()
        )));
    }

    let s = ConfigLoader::builder()
        .add_source(File::from(config_file_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix("EXECUTOR")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__"),
        )
        .build()
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?;

    let app_config: Config = s
        .try_deserialize()
        .map_err(|e| Error::ConfigLoadError(format!("Failed to deserialize config: {}", e)))?;

    app_config.validate()?;

    Ok(app_config)
}
