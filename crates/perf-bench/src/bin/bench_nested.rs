use std::hint::black_box;
use std::time::Instant;

use perf_bench::*;

fn main() {
    let mut nested = to_nested(&generate_benchmark_graph().to_distance_matrix());

    let start_time = Instant::now();

    // Each row is a separate allocation, so every access goes through a pointer.
    floyd_warshall_nested(&mut nested);

    let elapsed_time = start_time.elapsed();

    let final_checksum = black_box(checksum(nested.iter().flatten()));

    println!("--- Nested Benchmark Results ({} Vertices) ---", NUM_VERTICES);
    println!("Checksum: {:.10}", final_checksum);
    println!("Elapsed Time: {:?}", elapsed_time);
}
