use serde::Serialize;
use tokio::sync::mpsc::Sender;

use super::error::Error;

/// A trait defining the contract for any source that produces benchmark
/// records and streams them into the writer.
///
/// The trait bounds (`Send`, `Sync`, `'static`) are required so the
/// implementation can be moved onto the multi-threaded Tokio runtime.
#[async_trait::async_trait]
pub trait RecordStreamer: Send + Sync + 'static {
    async fn run_stream(self, sender: Sender<BenchmarkRecord>) -> Result<(), Error>;
}

/// One timed Floyd-Warshall run. Field names map onto the CSV header
/// `Size,Density,Iteration,Time_ns`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BenchmarkRecord {
    #[serde(rename = "Size")]
    pub size: usize,

    #[serde(rename = "Density")]
    pub density: f64,

    /// 1-based index within the (size, density) cell.
    #[serde(rename = "Iteration")]
    pub iteration: usize,

    #[serde(rename = "Time_ns")]
    pub time_ns: u64,
}

/// What the executor was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum RunMode {
    /// Run the whole size × density × iteration grid and write a CSV file.
    Sweep,
    /// Generate a single graph and print it.
    SingleGraph {
        vertices: usize,
        density: f64,
        solve: bool,
    },
    /// Ask on stdin.
    Interactive,
}
