use super::graph::DistanceMatrix;
use super::solver::ShortestPaths;

/// Trait for all-pairs shortest-path solvers.
pub trait ShortestPathSolver {
    /// Computes the cheapest path cost for every ordered vertex pair of `matrix`.
    ///
    /// The input is left untouched; the result is a new owned matrix together
    /// with the negative-cycle verdict.
    fn all_pairs_shortest_paths(&self, matrix: &DistanceMatrix) -> ShortestPaths;
}
