use common::error::Error;
use common::types::{Edge, SELF_LOOP, UNREACHABLE, Weight};

/// Dense directed graph stored as an N×N adjacency matrix.
///
/// Entries are kept as `Option<Weight>`: `None` means "no edge", which keeps an
/// absent edge distinct from a zero-weight edge. The diagonal is always
/// `Some(0.0)`. The translation to `+inf` only happens at the numeric boundary
/// ([`Graph::to_distance_matrix`]).
///
/// A `Graph` is populated once by its constructor or the generator and is
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    num_vertices: usize,
    adjacency: Vec<Option<Weight>>,
}

impl Graph {
    /// Creates a graph with `num_vertices` vertices, zero-cost self-loops and no
    /// other edges.
    ///
    /// # Errors
    /// Returns `Error::InvalidVertexCount` if `num_vertices` is zero.
    pub fn empty(num_vertices: usize) -> Result<Self, Error> {
        if num_vertices == 0 {
            return Err(Error::InvalidVertexCount(num_vertices));
        }

        let mut adjacency = vec![None; num_vertices * num_vertices];
        for v in 0..num_vertices {
            adjacency[v * num_vertices + v] = Some(SELF_LOOP);
        }

        Ok(Self {
            num_vertices,
            adjacency,
        })
    }

    /// Builds a graph from an explicit edge list `(from, to, weight)`.
    ///
    /// Later edges overwrite earlier ones for the same ordered pair. Self-loops
    /// in the list are ignored since the diagonal is fixed at zero.
    ///
    /// # Errors
    /// Returns `Error::InvalidVertexCount` if `num_vertices` is zero,
    /// `Error::VertexOutOfBounds` if an edge endpoint is not a vertex of the graph,
    /// or `Error::InvalidWeight` for a non-finite weight.
    pub fn from_edges(num_vertices: usize, edges: &[Edge]) -> Result<Self, Error> {
        let mut graph = Self::empty(num_vertices)?;

        for &(from, to, weight) in edges {
            if let Some(&v) = [from, to].iter().find(|&&v| v >= num_vertices) {
                return Err(Error::VertexOutOfBounds(v));
            }
            if !weight.is_finite() {
                return Err(Error::InvalidWeight(weight));
            }
            if from != to {
                graph.set_edge(from, to, weight);
            }
        }

        Ok(graph)
    }

    /// Stores the weight of the directed edge `from -> to`.
    ///
    /// Only used while the graph is being populated.
    pub(crate) fn set_edge(&mut self, from: usize, to: usize, weight: Weight) {
        debug_assert!(from != to, "diagonal entries are fixed at zero");
        self.adjacency[from * self.num_vertices + to] = Some(weight);
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Weight of the direct edge `from -> to`, or `None` if there is no edge.
    pub fn edge(&self, from: usize, to: usize) -> Option<Weight> {
        self.adjacency[from * self.num_vertices + to]
    }

    /// Number of directed edges, excluding the implicit self-loops.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Iterates over every real edge `(from, to, weight)` in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let n = self.num_vertices;
        self.adjacency
            .iter()
            .enumerate()
            .filter_map(move |(idx, entry)| {
                let (from, to) = (idx / n, idx % n);
                match entry {
                    Some(w) if from != to => Some((from, to, *w)),
                    _ => None,
                }
            })
    }

    /// Converts the adjacency matrix into the numeric form used for relaxation.
    pub fn to_distance_matrix(&self) -> DistanceMatrix {
        DistanceMatrix {
            size: self.num_vertices,
            values: self
                .adjacency
                .iter()
                .map(|entry| entry.unwrap_or(UNREACHABLE))
                .collect(),
        }
    }
}

/// Square, row-major matrix of path costs where `+inf` marks an unreachable pair.
///
/// Storage is one contiguous `Vec<f64>`; entry `(i, j)` lives at `i * size + j`.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    size: usize,
    values: Vec<Weight>,
}

impl DistanceMatrix {
    /// Builds a matrix from nested rows.
    ///
    /// # Errors
    /// Returns `Error::NonSquareMatrix` for the first row whose length differs
    /// from the number of rows, or `Error::InvalidWeight` for a NaN or `-inf`
    /// entry. `+inf` is accepted as "unreachable".
    pub fn from_rows(rows: &[Vec<Weight>]) -> Result<Self, Error> {
        let size = rows.len();
        let mut values = Vec::with_capacity(size * size);

        for (row, entries) in rows.iter().enumerate() {
            if entries.len() != size {
                return Err(Error::NonSquareMatrix {
                    row,
                    expected: size,
                    found: entries.len(),
                });
            }
            if let Some(&bad) = entries
                .iter()
                .find(|w| !(w.is_finite() || **w == UNREACHABLE))
            {
                return Err(Error::InvalidWeight(bad));
            }
            values.extend_from_slice(entries);
        }

        Ok(Self { size, values })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Weight {
        self.values[row * self.size + col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: Weight) {
        self.values[row * self.size + col] = value;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Weight]> {
        // `chunks_exact(0)` panics, an empty matrix simply has no rows.
        self.values.chunks_exact(self.size.max(1))
    }

    /// Flat row-major view of all entries.
    pub fn as_slice(&self) -> &[Weight] {
        &self.values
    }

    /// Copies the matrix into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<Weight>> {
        self.rows().map(<[Weight]>::to_vec).collect()
    }

    /// Entries on the main diagonal, in vertex order.
    pub fn diagonal(&self) -> impl Iterator<Item = Weight> + '_ {
        (0..self.size).map(move |v| self.get(v, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph_has_zero_diagonal_and_no_edges() {
        let graph = Graph::empty(3).unwrap();

        assert_eq!(graph.num_vertices(), 3);
        assert_eq!(graph.edge_count(), 0);
        for i in 0..3 {
            for j in 0..3 {
                if i == j {
                    assert_eq!(graph.edge(i, j), Some(0.0));
                } else {
                    assert_eq!(graph.edge(i, j), None);
                }
            }
        }
    }

    #[test]
    fn zero_vertices_is_rejected() {
        assert_eq!(Graph::empty(0), Err(Error::InvalidVertexCount(0)));
    }

    #[test]
    fn zero_weight_edge_is_distinct_from_no_edge() {
        let graph = Graph::from_edges(2, &[(0, 1, 0.0)]).unwrap();

        assert_eq!(graph.edge(0, 1), Some(0.0));
        assert_eq!(graph.edge(1, 0), None);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn from_edges_ignores_self_loops_and_keeps_latest() {
        let graph = Graph::from_edges(2, &[(0, 0, 7.0), (0, 1, 3.0), (0, 1, -2.0)]).unwrap();

        assert_eq!(graph.edge(0, 0), Some(0.0));
        assert_eq!(graph.edge(0, 1), Some(-2.0));
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 1, -2.0)]);
    }

    #[test]
    fn from_edges_rejects_out_of_range_endpoint() {
        assert_eq!(
            Graph::from_edges(2, &[(0, 2, 1.0)]),
            Err(Error::VertexOutOfBounds(2))
        );
    }

    #[test]
    fn from_edges_rejects_non_finite_weights() {
        assert_eq!(
            Graph::from_edges(2, &[(0, 1, f64::INFINITY)]),
            Err(Error::InvalidWeight(f64::INFINITY))
        );
        assert!(matches!(
            Graph::from_edges(2, &[(1, 0, f64::NAN)]),
            Err(Error::InvalidWeight(w)) if w.is_nan()
        ));
    }

    #[test]
    fn distance_matrix_maps_missing_edges_to_infinity() {
        let graph = Graph::from_edges(2, &[(1, 0, 4.0)]).unwrap();
        let matrix = graph.to_distance_matrix();

        assert_eq!(matrix.size(), 2);
        assert_eq!(matrix.as_slice(), &[0.0, f64::INFINITY, 4.0, 0.0]);
        assert_eq!(matrix.rows().nth(1), Some(&[4.0, 0.0][..]));
        assert_eq!(matrix.diagonal().collect::<Vec<_>>(), vec![0.0, 0.0]);
    }

    #[test]
    fn from_rows_round_trips_through_to_rows() {
        let rows = vec![vec![0.0, 1.0], vec![f64::INFINITY, 0.0]];
        let matrix = DistanceMatrix::from_rows(&rows).unwrap();

        assert_eq!(matrix.get(0, 1), 1.0);
        assert_eq!(matrix.to_rows(), rows);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let rows = vec![vec![0.0, 1.0], vec![0.0]];

        assert_eq!(
            DistanceMatrix::from_rows(&rows),
            Err(Error::NonSquareMatrix {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn from_rows_rejects_nan_and_negative_infinity() {
        let with_nan = vec![vec![0.0, f64::NAN], vec![1.0, 0.0]];
        assert!(matches!(
            DistanceMatrix::from_rows(&with_nan),
            Err(Error::InvalidWeight(w)) if w.is_nan()
        ));

        let with_neg_inf = vec![vec![0.0, f64::NEG_INFINITY], vec![1.0, 0.0]];
        assert_eq!(
            DistanceMatrix::from_rows(&with_neg_inf),
            Err(Error::InvalidWeight(f64::NEG_INFINITY))
        );
    }

    #[test]
    fn from_rows_accepts_empty_matrix() {
        let matrix = DistanceMatrix::from_rows(&[]).unwrap();
        assert_eq!(matrix.size(), 0);
        assert_eq!(matrix.rows().count(), 0);
    }
}
