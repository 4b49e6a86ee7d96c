use chrono::{DateTime, Local};
use csv::{Writer as CsvWriter, WriterBuilder};
use log::info;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc::Receiver;

use super::config::OutputConfig;
use super::error::Error;
use super::types::BenchmarkRecord;

/// Column header of every results file.
pub const RESULTS_HEADER: [&str; 4] = ["Size", "Density", "Iteration", "Time_ns"];

/// Builds `<directory>/<prefix>_<YYYY-MM-DD_HH-MM-SS>.csv`.
pub fn output_path(output: &OutputConfig, now: DateTime<Local>) -> PathBuf {
    let file_name = format!(
        "{}_{}.csv",
        output.file_prefix,
        now.format("%Y-%m-%d_%H-%M-%S")
    );
    output.directory.join(file_name)
}

/// Channel consumer that appends benchmark records to a CSV sink.
pub struct ResultWriter<W: Write> {
    csv: CsvWriter<W>,
    receiver: Receiver<BenchmarkRecord>,
    total_runs: usize,
    progress_interval: usize,
}

impl ResultWriter<File> {
    /// Creates the results file at `path` and writes the header.
    pub fn create(
        path: &Path,
        receiver: Receiver<BenchmarkRecord>,
        total_runs: usize,
        progress_interval: usize,
    ) -> Result<Self, Error> {
        let file = File::create(path)?;
        info!("Created file: {}", path.display());
        Self::from_writer(file, receiver, total_runs, progress_interval)
    }
}

impl<W> ResultWriter<W>
where
    W: Write + Send + 'static,
{
    pub fn from_writer(
        sink: W,
        receiver: Receiver<BenchmarkRecord>,
        total_runs: usize,
        progress_interval: usize,
    ) -> Result<Self, Error> {
        // Header is written up front so even an empty run leaves a valid file.
        let mut csv = WriterBuilder::new().has_headers(false).from_writer(sink);
        csv.write_record(RESULTS_HEADER)?;

        Ok(Self {
            csv,
            receiver,
            total_runs,
            progress_interval: progress_interval.max(1),
        })
    }

    /// Consumes records until every producer has hung up.
    ///
    /// Logs progress every `progress_interval` records and returns the number
    /// of rows written. Blocks the calling thread; must not run on an async
    /// worker (see [`ResultWriter::spawn_task`]).
    pub fn process_records(mut self) -> Result<usize, Error> {
        info!("Writer ready.");
        let mut written = 0usize;

        while let Some(record) = self.receiver.blocking_recv() {
            self.csv.serialize(record)?;
            written += 1;

            if written % self.progress_interval == 0 {
                info!(
                    "Progress: {} out of {} tests completed",
                    written, self.total_runs
                );
            }
        }

        self.csv.flush()?;
        info!("Receiver closed, {} records written.", written);
        Ok(written)
    }

    /// Spawns the writer onto Tokio's blocking pool, keeping file I/O off the
    /// async workers.
    pub fn spawn_task(self) -> tokio::task::JoinHandle<Result<usize, Error>> {
        tokio::task::spawn_blocking(move || self.process_records())
    }
}
