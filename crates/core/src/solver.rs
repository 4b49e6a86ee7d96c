use super::graph::{DistanceMatrix, Graph};
use super::traits::ShortestPathSolver;
use common::{error::Error, numeric_kernel::relax, types::Weight};

/// Result of an all-pairs shortest-path run.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    pub distances: DistanceMatrix,
    pub has_negative_cycle: bool,
}

impl ShortestPaths {
    /// Cheapest known cost `from -> to`, `+inf` if unreachable.
    pub fn distance(&self, from: usize, to: usize) -> Weight {
        self.distances.get(from, to)
    }

    /// Vertices that can return to themselves at a net negative cost.
    ///
    /// Empty exactly when `has_negative_cycle` is false.
    pub fn negative_cycle_vertices(&self) -> Vec<usize> {
        self.distances
            .diagonal()
            .enumerate()
            .filter(|&(_, d)| d < 0.0)
            .map(|(v, _)| v)
            .collect()
    }
}

/// Solver implementing the Floyd-Warshall all-pairs shortest-path algorithm
/// with negative cycle detection.
pub struct FloydWarshallSolver;

impl FloydWarshallSolver {
    /// Runs the solver on nested rows.
    ///
    /// # Errors
    /// Returns `Error::NonSquareMatrix` if the rows do not form a square matrix.
    pub fn solve_rows(&self, rows: &[Vec<Weight>]) -> Result<ShortestPaths, Error> {
        let matrix = DistanceMatrix::from_rows(rows)?;
        Ok(self.all_pairs_shortest_paths(&matrix))
    }

    /// Runs the solver on a graph's adjacency matrix.
    pub fn solve_graph(&self, graph: &Graph) -> ShortestPaths {
        self.all_pairs_shortest_paths(&graph.to_distance_matrix())
    }

    /// Relaxes `distances` in place, using every vertex in turn as intermediate.
    ///
    /// The intermediate vertex must be the outermost loop: when vertex `via` is
    /// considered, every path through `0..via` has already been folded in.
    ///
    /// Updates are visible immediately: once `(from, via)` itself is lowered
    /// (only possible on a negative cycle), later targets in the same row use
    /// the new value.
    fn relax_all(distances: &mut DistanceMatrix) {
        let n = distances.size();

        for via in 0..n {
            for from in 0..n {
                // An unreachable first leg stays unreachable for the whole row.
                if !distances.get(from, via).is_finite() {
                    continue;
                }

                for to in 0..n {
                    let current = distances.get(from, to);
                    let relaxed =
                        relax(current, distances.get(from, via), distances.get(via, to));
                    if relaxed < current {
                        distances.set(from, to, relaxed);
                    }
                }
            }
        }
    }

    /// A negative diagonal entry means the vertex lies on a negative cycle.
    fn has_negative_cycle(distances: &DistanceMatrix) -> bool {
        distances.diagonal().any(|d| d < 0.0)
    }
}

impl ShortestPathSolver for FloydWarshallSolver {
    /// Computes all-pairs shortest paths (Floyd-Warshall, O(N³)).
    ///
    /// # Returns
    /// - `distances`: a fresh matrix; entry `(i, j)` is the cheapest cost from
    ///   `i` to `j`, or `+inf` if `j` is unreachable from `i`.
    /// - `has_negative_cycle`: true if any vertex reaches itself at a negative
    ///   cost. The matrix is still returned in that case, but entries touching
    ///   the cycle are not meaningful shortest paths.
    fn all_pairs_shortest_paths(&self, matrix: &DistanceMatrix) -> ShortestPaths {
        let mut distances = matrix.clone();
        Self::relax_all(&mut distances);
        let has_negative_cycle = Self::has_negative_cycle(&distances);

        ShortestPaths {
            distances,
            has_negative_cycle,
        }
    }
}

#[cfg(test)]
mod floyd_warshall_tests {
    use super::*;
    use common::types::{Edge, UNREACHABLE};

    const INF: f64 = UNREACHABLE;

    fn solve(num_vertices: usize, edges: &[Edge]) -> ShortestPaths {
        let graph = Graph::from_edges(num_vertices, edges).unwrap();
        FloydWarshallSolver.solve_graph(&graph)
    }

    #[test]
    fn three_vertex_cycle() {
        let result = solve(3, &[(0, 1, 1.0), (1, 2, 2.0), (2, 0, 3.0)]);

        assert_eq!(result.distance(0, 2), 3.0);
        assert_eq!(result.distance(1, 0), 5.0);
        assert_eq!(result.distance(2, 1), 4.0);
        assert_eq!(result.distances.diagonal().collect::<Vec<_>>(), vec![0.0; 3]);
        assert!(!result.has_negative_cycle);
    }

    #[test]
    fn two_vertex_negative_cycle() {
        let result = solve(2, &[(0, 1, -5.0), (1, 0, -5.0)]);

        // Vertex 1 is relaxed through itself after its diagonal already went
        // negative, so it goes around the cycle twice.
        assert_eq!(result.distance(0, 0), -10.0);
        assert_eq!(result.distance(1, 1), -20.0);
        assert_eq!(result.distance(0, 1), -15.0);
        assert_eq!(result.distance(1, 0), -15.0);
        assert!(result.has_negative_cycle);
        assert_eq!(result.negative_cycle_vertices(), vec![0, 1]);
    }

    #[test]
    fn self_relaxation_uses_updated_first_leg() {
        // Through vertex 1: D[0][1] drops from -1 to -4 at target 1, so target 2
        // becomes -4 + 1 rather than -1 + 1.
        let rows = vec![
            vec![0.0, -1.0, INF],
            vec![-2.0, 0.0, 1.0],
            vec![INF, INF, 0.0],
        ];

        let result = FloydWarshallSolver.solve_rows(&rows).unwrap();

        assert!(result.has_negative_cycle);
        assert_eq!(result.distance(0, 1), -4.0);
        assert_eq!(result.distance(0, 2), -3.0);
    }

    #[test]
    fn graph_without_edges_is_unchanged() {
        let graph = Graph::empty(4).unwrap();
        let input = graph.to_distance_matrix();

        let result = FloydWarshallSolver.all_pairs_shortest_paths(&input);

        assert_eq!(result.distances, input);
        assert!(!result.has_negative_cycle);
        assert!(result.negative_cycle_vertices().is_empty());
    }

    #[test]
    fn input_matrix_is_not_mutated() {
        let rows = vec![
            vec![0.0, 1.0, INF],
            vec![INF, 0.0, 1.0],
            vec![INF, INF, 0.0],
        ];
        let input = DistanceMatrix::from_rows(&rows).unwrap();
        let snapshot = input.clone();

        let result = FloydWarshallSolver.all_pairs_shortest_paths(&input);

        assert_eq!(input, snapshot);
        assert_eq!(result.distance(0, 2), 2.0);
    }

    #[test]
    fn unreachable_pairs_stay_infinite() {
        // 0 -> 1 only; nothing reaches 0 and 2 is isolated.
        let result = solve(3, &[(0, 1, -3.0)]);

        assert_eq!(result.distance(0, 1), -3.0);
        assert_eq!(result.distance(1, 0), INF);
        assert_eq!(result.distance(0, 2), INF);
        assert_eq!(result.distance(2, 0), INF);
        assert!(!result.has_negative_cycle);
    }

    #[test]
    fn zero_weight_edges_are_real_edges() {
        let result = solve(3, &[(0, 1, 0.0), (1, 2, 0.0)]);

        assert_eq!(result.distance(0, 2), 0.0);
        assert_eq!(result.distance(2, 0), INF);
    }

    #[test]
    fn prefers_longer_but_cheaper_path() {
        let result = solve(4, &[(0, 3, 10.0), (0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)]);

        assert_eq!(result.distance(0, 3), 3.0);
    }

    #[test]
    fn negative_edges_without_cycle() {
        let result = solve(3, &[(0, 1, 4.0), (0, 2, 5.0), (2, 1, -3.0)]);

        assert_eq!(result.distance(0, 1), 2.0);
        assert!(!result.has_negative_cycle);
    }

    #[test]
    fn negative_cycle_marks_every_vertex_on_it() {
        // Cycle 1 -> 2 -> 3 -> 1 costs -1; vertex 0 only feeds into it.
        let result = solve(
            4,
            &[(0, 1, 2.0), (1, 2, 1.0), (2, 3, 1.0), (3, 1, -3.0)],
        );

        assert!(result.has_negative_cycle);
        let on_cycle = result.negative_cycle_vertices();
        assert_eq!(on_cycle, vec![1, 2, 3]);
        assert_eq!(result.distance(0, 0), 0.0);
    }

    #[test]
    fn single_vertex() {
        let result = solve(1, &[]);

        assert_eq!(result.distance(0, 0), 0.0);
        assert!(!result.has_negative_cycle);
    }

    #[test]
    fn solve_rows_rejects_non_square_matrix() {
        let rows = vec![vec![0.0, 1.0, 2.0], vec![0.0, 0.0, 1.0]];

        assert_eq!(
            FloydWarshallSolver.solve_rows(&rows),
            Err(Error::NonSquareMatrix {
                row: 0,
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn solve_rows_matches_solve_graph() {
        let edges = [(0, 1, 7.0), (1, 2, -2.0), (2, 0, 4.0), (0, 2, 9.0)];
        let graph = Graph::from_edges(3, &edges).unwrap();

        let from_rows = FloydWarshallSolver
            .solve_rows(&graph.to_distance_matrix().to_rows())
            .unwrap();

        assert_eq!(from_rows, FloydWarshallSolver.solve_graph(&graph));
    }

    #[test]
    fn empty_rows_produce_empty_result() {
        let result = FloydWarshallSolver.solve_rows(&[]).unwrap();

        assert_eq!(result.distances.size(), 0);
        assert!(!result.has_negative_cycle);
    }
}
