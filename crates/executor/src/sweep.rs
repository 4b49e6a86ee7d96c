use async_trait::async_trait;
use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use std::time::Instant;
use tokio::sync::mpsc::Sender;

use super::config::BenchmarkConfig;
use super::error::Error;
use super::types::{BenchmarkRecord, RecordStreamer};
use fw_bench_core::{RandomGraphGenerator, ShortestPathSolver};

/// Walks the size × density × iteration grid and times one solver run per cell.
///
/// Runs are strictly sequential: every (generate, solve) pair finishes before
/// the next graph is drawn. The whole grid runs on a single blocking thread and
/// each record is handed to the writer as soon as it is measured.
pub struct SweepStreamer<S> {
    benchmark: BenchmarkConfig,
    generator: RandomGraphGenerator,
    seed: Option<u64>,
    solver: S,
}

impl<S> SweepStreamer<S>
where
    S: ShortestPathSolver + Send + Sync + 'static,
{
    pub fn new(
        benchmark: BenchmarkConfig,
        generator: RandomGraphGenerator,
        seed: Option<u64>,
        solver: S,
    ) -> Self {
        SweepStreamer {
            benchmark,
            generator,
            seed,
            solver,
        }
    }

    /// Generates one graph and times the solver on it.
    ///
    /// Only the solver call is inside the timed region; graph generation and the
    /// conversion to a distance matrix are not.
    pub fn measure_once<R>(
        &self,
        size: usize,
        density: f64,
        iteration: usize,
        rng: &mut R,
    ) -> Result<BenchmarkRecord, Error>
    where
        R: Rng + ?Sized,
    {
        let graph = self.generator.generate_with(size, density, rng)?;
        let matrix = graph.to_distance_matrix();

        let start_time = Instant::now();
        let result = self.solver.all_pairs_shortest_paths(&matrix);
        let elapsed = start_time.elapsed();

        black_box(&result);

        if result.has_negative_cycle {
            debug!(
                "size={} density={} iteration={}: negative cycle detected",
                size, density, iteration
            );
        }

        Ok(BenchmarkRecord {
            size,
            density,
            iteration,
            time_ns: u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX),
        })
    }

    /// Runs the full grid, pushing records with `blocking_send`.
    ///
    /// Must be called from a blocking thread, never from inside the async runtime.
    fn run_blocking(&self, sender: &Sender<BenchmarkRecord>) -> Result<(), Error> {
        let mut rng: SmallRng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        for &size in &self.benchmark.sizes {
            for &density in &self.benchmark.densities {
                for iteration in 1..=self.benchmark.iterations {
                    let record = self.measure_once(size, density, iteration, &mut rng)?;

                    if sender.blocking_send(record).is_err() {
                        return Err(Error::ChannelSendFailed);
                    }
                }
            }
        }

        Ok(())
    }
}

#[async_trait]
impl<S> RecordStreamer for SweepStreamer<S>
where
    S: ShortestPathSolver + Send + Sync + 'static,
{
    async fn run_stream(self, sender: Sender<BenchmarkRecord>) -> Result<(), Error> {
        tokio::task::spawn_blocking(move || self.run_blocking(&sender))
            .await
            .map_err(|e| Error::TaskJoinFailed(e.to_string()))?
    }
}
