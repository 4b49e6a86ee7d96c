use std::hint::black_box;
use std::time::Instant;

use fw_bench_core::{FloydWarshallSolver, ShortestPathSolver};
use perf_bench::*;

fn main() {
    let matrix = generate_benchmark_graph().to_distance_matrix();

    let start_time = Instant::now();

    // One contiguous row-major buffer; row `via` stays hot in cache.
    let result = FloydWarshallSolver.all_pairs_shortest_paths(&matrix);

    let elapsed_time = start_time.elapsed();

    let final_checksum = black_box(checksum(result.distances.as_slice()));

    println!("--- Flat Benchmark Results ({} Vertices) ---", NUM_VERTICES);
    println!("Checksum: {:.10}", final_checksum);
    println!("Elapsed Time: {:?}", elapsed_time);
}
