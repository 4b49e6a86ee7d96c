use chrono::Local;
use log::{info, warn};
use std::path::PathBuf;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::config::Config;
use super::display::{render_matrix, render_verdict};
use super::error::Error;
use super::producer::Producer;
use super::sweep::SweepStreamer;
use super::types::BenchmarkRecord;
use super::writer::{ResultWriter, output_path};
use fw_bench_core::{FloydWarshallSolver, RandomGraphGenerator};

fn flatten<T>(joined: Result<Result<T, Error>, tokio::task::JoinError>) -> Result<T, Error> {
    joined.map_err(|e| Error::TaskJoinFailed(e.to_string()))?
}

/// Runs the full benchmark sweep and returns the path of the results file.
pub async fn run_sweep(config: &Config) -> Result<PathBuf, Error> {
    let path = output_path(&config.output, Local::now());
    let generator = RandomGraphGenerator::new(config.generator.weight_range()?);
    let total_runs = config.benchmark.total_runs();

    if generator.weight_range().allows_negative() {
        let range = generator.weight_range();
        info!(
            "Weights drawn from [{}, {}]; negative cycles are possible.",
            range.min(),
            range.max()
        );
    }

    let (sender, receiver) = mpsc::channel::<BenchmarkRecord>(config.executor.buffer_size);

    let writer = ResultWriter::create(
        &path,
        receiver,
        total_runs,
        config.benchmark.progress_interval,
    )?;

    let streamer = SweepStreamer::new(
        config.benchmark.clone(),
        generator,
        config.generator.seed,
        FloydWarshallSolver,
    );

    info!("Starting sweep of {} runs...", total_runs);
    let producer_handle: JoinHandle<Result<(), Error>> = Producer::new(streamer).spawn(sender);
    let writer_handle = writer.spawn_task();

    let (produced, written) = tokio::join!(producer_handle, writer_handle);

    // A failed writer drops its receiver, which surfaces in the producer as a
    // send failure. Report the writer's error first.
    let written = flatten(written)?;
    flatten(produced)?;

    if written != total_runs {
        warn!("Expected {} records but wrote {}.", total_runs, written);
    }

    info!("Sweep finished: {} records in {}", written, path.display());
    Ok(path)
}

/// Generates one graph and renders it, optionally followed by its shortest paths.
pub fn single_graph_report(
    config: &Config,
    vertices: usize,
    density: f64,
    solve: bool,
) -> Result<String, Error> {
    let generator = RandomGraphGenerator::new(config.generator.weight_range()?);
    let graph = generator.generate(vertices, density)?;

    let mut report = render_matrix(&graph.to_distance_matrix());

    if solve {
        let result = FloydWarshallSolver.solve_graph(&graph);
        report.push_str("\n\nShortest paths:\n");
        report.push_str(&render_matrix(&result.distances));
        report.push('\n');
        report.push_str(&render_verdict(&result));
    }

    Ok(report)
}
